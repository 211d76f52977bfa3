use super::Database;
use crate::{
    algebra,
    expression::{Collector, Difference, Intersect, Join, Project, RelationRef, Select, Union},
    Error, Relation,
};
use std::borrow::Cow;

/// Is a [`Collector`] that evaluates expressions against the relations of a
/// [`Database`]. Stored relations are borrowed; every operator node produces a new
/// relation.
///
/// [`Collector`]: ../expression/trait.Collector.html
/// [`Database`]: ../struct.Database.html
pub(crate) struct Evaluator<'d>(pub &'d Database);

impl<'d> Collector<'d> for Evaluator<'d> {
    fn collect_relation(&self, relation: &RelationRef) -> Result<Cow<'d, Relation>, Error> {
        self.0.lookup(relation.name()).map(Cow::Borrowed)
    }

    fn collect_select(&self, select: &Select) -> Result<Cow<'d, Relation>, Error> {
        let relation = select.expression().collect(self)?;
        algebra::select(&relation, select.condition()).map(Cow::Owned)
    }

    fn collect_project(&self, project: &Project) -> Result<Cow<'d, Relation>, Error> {
        let relation = project.expression().collect(self)?;
        algebra::project(&relation, project.attributes()).map(Cow::Owned)
    }

    fn collect_join(&self, join: &Join) -> Result<Cow<'d, Relation>, Error> {
        let left = join.left().collect(self)?;
        let right = join.right().collect(self)?;
        algebra::join(&left, &right).map(Cow::Owned)
    }

    fn collect_union(&self, union: &Union) -> Result<Cow<'d, Relation>, Error> {
        let left = union.left().collect(self)?;
        let right = union.right().collect(self)?;
        algebra::union(&left, &right).map(Cow::Owned)
    }

    fn collect_intersect(&self, intersect: &Intersect) -> Result<Cow<'d, Relation>, Error> {
        let left = intersect.left().collect(self)?;
        let right = intersect.right().collect(self)?;
        algebra::intersect(&left, &right).map(Cow::Owned)
    }

    fn collect_difference(&self, difference: &Difference) -> Result<Cow<'d, Relation>, Error> {
        let left = difference.left().collect(self)?;
        let right = difference.right().collect(self)?;
        algebra::difference(&left, &right).map(Cow::Owned)
    }
}
