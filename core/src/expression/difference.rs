use super::{fmt_operand, Expression};
use std::fmt;

/// Evaluates to all tuples that are in `left` but not in `right`.
#[derive(Clone, PartialEq, Debug)]
pub struct Difference {
    left: Box<Expression>,
    right: Box<Expression>,
}

impl Difference {
    /// Creates a new instance of `Difference` for `left - right`.
    pub fn new(left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        Self {
            left: left.into().boxed(),
            right: right.into().boxed(),
        }
    }

    /// Returns a reference to the expression on left.
    #[inline(always)]
    pub fn left(&self) -> &Expression {
        &self.left
    }

    /// Returns a reference to the expression on right.
    #[inline(always)]
    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl From<Difference> for Expression {
    fn from(difference: Difference) -> Self {
        Expression::Difference(difference)
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("difference ")?;
        fmt_operand(&self.left, f)?;
        f.write_str(" ")?;
        fmt_operand(&self.right, f)
    }
}
