use super::Expression;
use std::fmt;

/// Evaluates to the tuples of `expression` restricted to `attributes`, in the order
/// the attributes are given.
#[derive(Clone, PartialEq, Debug)]
pub struct Project {
    attributes: Vec<String>,
    expression: Box<Expression>,
}

impl Project {
    /// Creates a new instance of `Project` for `π_attributes(expression)`.
    pub fn new(attributes: Vec<String>, expression: impl Into<Expression>) -> Self {
        Self {
            attributes,
            expression: expression.into().boxed(),
        }
    }

    /// Returns the projected attribute names.
    #[inline(always)]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Returns a reference to the underlying expression.
    #[inline(always)]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl From<Project> for Expression {
    fn from(project: Project) -> Self {
        Expression::Project(project)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "project {} ({})",
            self.attributes.join(", "),
            self.expression
        )
    }
}
