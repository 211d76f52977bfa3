use super::{fmt_operand, Expression};
use std::fmt;

/// Evaluates to all tuples that are in both `left` and `right`.
#[derive(Clone, PartialEq, Debug)]
pub struct Intersect {
    left: Box<Expression>,
    right: Box<Expression>,
}

impl Intersect {
    /// Creates a new instance of `Intersect` for `left ∩ right`.
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

impl From<Intersect> for Expression {
    fn from(intersect: Intersect) -> Self {
        Expression::Intersect(intersect)
    }
}

impl fmt::Display for Intersect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("intersect ")?;
        fmt_operand(&self.left, f)?;
        f.write_str(" ")?;
        fmt_operand(&self.right, f)
    }
}
