use super::{fmt_operand, Expression};
use std::fmt;

/// Evaluates to the natural join of `left` and `right` on their common attributes.
#[derive(Clone, PartialEq, Debug)]
pub struct Join {
    left: Box<Expression>,
    right: Box<Expression>,
}

impl Join {
    /// Creates a new instance of `Join` for `left ⋈ right`.
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

impl From<Join> for Expression {
    fn from(join: Join) -> Self {
        Expression::Join(join)
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("join ")?;
        fmt_operand(&self.left, f)?;
        f.write_str(" ")?;
        fmt_operand(&self.right, f)
    }
}
