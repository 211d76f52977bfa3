use super::Expression;
use crate::Condition;
use std::fmt;

/// Evaluates to the tuples of `expression` that satisfy `condition`.
#[derive(Clone, PartialEq, Debug)]
pub struct Select {
    condition: Condition,
    expression: Box<Expression>,
}

impl Select {
    /// Creates a new instance of `Select` for `σ_condition(expression)`.
    pub fn new(condition: Condition, expression: impl Into<Expression>) -> Self {
        Self {
            condition,
            expression: expression.into().boxed(),
        }
    }

    /// Returns the condition of the receiver.
    #[inline(always)]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Returns a reference to the underlying expression.
    #[inline(always)]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl From<Select> for Expression {
    fn from(select: Select) -> Self {
        Expression::Select(select)
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "select {} ({})", self.condition, self.expression)
    }
}
