use crate::expression::{Expression, RelationRef, Visitor};

/// Implements the [`Visitor`] to collect the names of the relations to which the
/// visited expression refers, in the order they first appear.
///
/// [`Visitor`]: ./trait.Visitor.html
#[derive(Default)]
pub struct DependencyVisitor {
    relations: Vec<String>,
}

impl DependencyVisitor {
    /// Creates a new [`DependencyVisitor`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the receiver and returns the relation dependencies.
    pub fn into_dependencies(self) -> Vec<String> {
        self.relations
    }
}

impl Visitor for DependencyVisitor {
    fn visit_relation(&mut self, relation: &RelationRef) {
        if !self.relations.iter().any(|r| r == relation.name()) {
            self.relations.push(relation.name().to_string());
        }
    }
}

/// Returns the names of the relations that show up in `expression`.
pub(crate) fn expression_dependencies(expression: &Expression) -> Vec<String> {
    let mut deps = DependencyVisitor::new();
    expression.visit(&mut deps);

    deps.into_dependencies()
}
