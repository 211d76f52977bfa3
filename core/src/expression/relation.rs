use super::Expression;
use std::fmt;

/// Refers to a relation of the database by name.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RelationRef {
    name: String,
}

impl RelationRef {
    /// Creates a reference to the relation named `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Returns the name of the relation.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<RelationRef> for Expression {
    fn from(relation: RelationRef) -> Self {
        Expression::Relation(relation)
    }
}

impl fmt::Display for RelationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
