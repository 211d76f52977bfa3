/*! Defines relational algebra [expressions] and the traits that walk them.

[expressions]: ./enum.Expression.html
*/
mod dependency;
mod difference;
mod intersect;
mod join;
mod project;
mod relation;
mod select;
mod union;

use crate::{Error, Relation};
use std::{borrow::Cow, fmt};

pub(crate) use dependency::expression_dependencies;
pub use dependency::DependencyVisitor;
pub use difference::Difference;
pub use intersect::Intersect;
pub use join::Join;
pub use project::Project;
pub use relation::RelationRef;
pub use select::Select;
pub use union::Union;

/// Is a relational algebra expression over the relations of a database.
///
/// An expression displays as query text that [`parse`] reads back into the same
/// expression, except when an operand of a binary operator is not a relation name:
/// such operands are written in parentheses, which the query syntax does not accept.
///
/// [`parse`]: ../fn.parse.html
#[derive(Clone, PartialEq, Debug)]
pub enum Expression {
    Relation(RelationRef),
    Select(Select),
    Project(Project),
    Join(Join),
    Union(Union),
    Intersect(Intersect),
    Difference(Difference),
}

impl Expression {
    /// Wraps the receiver in a `Box`.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Visits the receiver by a [`Visitor`].
    ///
    /// [`Visitor`]: ./trait.Visitor.html
    pub fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        match self {
            Expression::Relation(r) => visitor.visit_relation(r),
            Expression::Select(s) => visitor.visit_select(s),
            Expression::Project(p) => visitor.visit_project(p),
            Expression::Join(j) => visitor.visit_join(j),
            Expression::Union(u) => visitor.visit_union(u),
            Expression::Intersect(i) => visitor.visit_intersect(i),
            Expression::Difference(d) => visitor.visit_difference(d),
        }
    }

    /// Visits the receiver by a [`Collector`] and returns the relation it evaluates to.
    ///
    /// [`Collector`]: ./trait.Collector.html
    pub fn collect<'a, C>(&self, collector: &C) -> Result<Cow<'a, Relation>, Error>
    where
        C: Collector<'a>,
    {
        match self {
            Expression::Relation(r) => collector.collect_relation(r),
            Expression::Select(s) => collector.collect_select(s),
            Expression::Project(p) => collector.collect_project(p),
            Expression::Join(j) => collector.collect_join(j),
            Expression::Union(u) => collector.collect_union(u),
            Expression::Intersect(i) => collector.collect_intersect(i),
            Expression::Difference(d) => collector.collect_difference(d),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Relation(r) => write!(f, "{}", r),
            Expression::Select(s) => write!(f, "{}", s),
            Expression::Project(p) => write!(f, "{}", p),
            Expression::Join(j) => write!(f, "{}", j),
            Expression::Union(u) => write!(f, "{}", u),
            Expression::Intersect(i) => write!(f, "{}", i),
            Expression::Difference(d) => write!(f, "{}", d),
        }
    }
}

/// Writes an operand of a binary expression: relation names as they are, anything
/// else in parentheses.
fn fmt_operand(expression: &Expression, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expression {
        Expression::Relation(r) => write!(f, "{}", r),
        _ => write!(f, "({})", expression),
    }
}

/// Is the trait of objects that visit the nodes of an expression. The default
/// implementations walk down to the subexpressions of every node.
pub trait Visitor: Sized {
    fn visit_relation(&mut self, relation: &RelationRef) {
        walk_relation(self, relation)
    }

    fn visit_select(&mut self, select: &Select) {
        walk_select(self, select)
    }

    fn visit_project(&mut self, project: &Project) {
        walk_project(self, project)
    }

    fn visit_join(&mut self, join: &Join) {
        walk_join(self, join)
    }

    fn visit_union(&mut self, union: &Union) {
        walk_union(self, union)
    }

    fn visit_intersect(&mut self, intersect: &Intersect) {
        walk_intersect(self, intersect)
    }

    fn visit_difference(&mut self, difference: &Difference) {
        walk_difference(self, difference)
    }
}

pub fn walk_relation<V>(_: &mut V, _: &RelationRef)
where
    V: Visitor,
{
    // nothing to do
}

pub fn walk_select<V>(visitor: &mut V, select: &Select)
where
    V: Visitor,
{
    select.expression().visit(visitor);
}

pub fn walk_project<V>(visitor: &mut V, project: &Project)
where
    V: Visitor,
{
    project.expression().visit(visitor);
}

pub fn walk_join<V>(visitor: &mut V, join: &Join)
where
    V: Visitor,
{
    join.left().visit(visitor);
    join.right().visit(visitor);
}

pub fn walk_union<V>(visitor: &mut V, union: &Union)
where
    V: Visitor,
{
    union.left().visit(visitor);
    union.right().visit(visitor);
}

pub fn walk_intersect<V>(visitor: &mut V, intersect: &Intersect)
where
    V: Visitor,
{
    intersect.left().visit(visitor);
    intersect.right().visit(visitor);
}

pub fn walk_difference<V>(visitor: &mut V, difference: &Difference)
where
    V: Visitor,
{
    difference.left().visit(visitor);
    difference.right().visit(visitor);
}

/// Is the trait of objects that compute the relation an expression evaluates to,
/// one node at a time. Relations borrowed from a database for the lifetime `'a`
/// are returned without being copied.
pub trait Collector<'a> {
    fn collect_relation(&self, relation: &RelationRef) -> Result<Cow<'a, Relation>, Error>;

    fn collect_select(&self, select: &Select) -> Result<Cow<'a, Relation>, Error>;

    fn collect_project(&self, project: &Project) -> Result<Cow<'a, Relation>, Error>;

    fn collect_join(&self, join: &Join) -> Result<Cow<'a, Relation>, Error>;

    fn collect_union(&self, union: &Union) -> Result<Cow<'a, Relation>, Error>;

    fn collect_intersect(&self, intersect: &Intersect) -> Result<Cow<'a, Relation>, Error>;

    fn collect_difference(&self, difference: &Difference) -> Result<Cow<'a, Relation>, Error>;
}
