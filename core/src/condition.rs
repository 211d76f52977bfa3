use crate::{schema::is_identifier_char, Error, Operator, Schema, Tuple, Value};
use std::fmt;

/// Is a selection predicate of the form `attribute operator literal`.
///
/// A condition is applied by [`algebra::select`], which resolves its attribute in the
/// schema of the filtered relation; binding it to a schema by hand is not possible:
/// ```compile_fail
/// use relq_core::{Condition, Schema};
///
/// let schema = Schema::new(vec!["a", "b"]).unwrap();
/// let predicate = Condition::parse("b = 1").unwrap().bind(&schema);
/// ```
///
/// [`algebra::select`]: ./algebra/fn.select.html
#[derive(Clone, PartialEq, Debug)]
pub struct Condition {
    attribute: String,
    operator: Operator,
    literal: Value,
}

impl Condition {
    /// Creates a new condition comparing `attribute` with `literal` under `operator`.
    pub fn new(attribute: &str, operator: Operator, literal: Value) -> Self {
        Self {
            attribute: attribute.to_string(),
            operator,
            literal,
        }
    }

    /// Parses a condition from `text`. The attribute is a word of letters, digits and
    /// underscores; whitespace around the operator is optional and the rest of the
    /// text is the literal. Returns `None` if `text` is not a condition.
    ///
    /// **Example**:
    /// ```rust
    /// use relq_core::{Condition, Operator, Value};
    ///
    /// let condition = Condition::parse("Age >= 30").unwrap();
    /// assert_eq!("Age", condition.attribute());
    /// assert_eq!(Operator::GreaterOrEqual, condition.operator());
    /// assert_eq!(&Value::parse("30"), condition.literal());
    ///
    /// assert!(Condition::parse("Age 30").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let end = text
            .find(|c: char| !is_identifier_char(c))
            .unwrap_or(text.len());
        let (attribute, rest) = text.split_at(end);
        if attribute.is_empty() {
            return None;
        }

        let (operator, literal) = Operator::parse_prefix(rest.trim_start())?;
        let literal = literal.trim();
        if literal.is_empty() {
            return None;
        }

        Some(Self::new(attribute, operator, Value::parse(literal)))
    }

    /// Returns the attribute on the left of the receiver.
    #[inline(always)]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Returns the comparison operator of the receiver.
    #[inline(always)]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the literal on the right of the receiver.
    #[inline(always)]
    pub fn literal(&self) -> &Value {
        &self.literal
    }

    /// Resolves the attribute of the receiver in `schema`. The returned predicate can
    /// be applied to any tuple of `schema`.
    pub(crate) fn bind(&self, schema: &Schema) -> Result<Predicate<'_>, Error> {
        let position = schema.require(&self.attribute)?;
        Ok(Predicate {
            condition: self,
            position,
        })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.attribute, self.operator)?;
        match &self.literal {
            Value::Text(text) if needs_quotes(text) => {
                let quote = if text.contains('"') { '\'' } else { '"' };
                write!(f, "{}{}{}", quote, text, quote)
            }
            Value::Text(text) => f.write_str(text),
            Value::Number(number) => f.write_str(number.literal()),
        }
    }
}

/// Returns true if `text` would not read back as the same text literal unquoted.
fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || Value::parse(text).is_number()
        || text
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '"' | '\''))
}

/// Is a [`Condition`] whose attribute is resolved to a position in a schema. Tuples
/// given to [`test`] must belong to that schema.
///
/// [`Condition`]: ./struct.Condition.html
/// [`test`]: #method.test
#[derive(Clone, Copy, Debug)]
pub(crate) struct Predicate<'c> {
    condition: &'c Condition,
    position: usize,
}

impl Predicate<'_> {
    /// Returns true if `tuple` satisfies the condition.
    pub(crate) fn test(&self, tuple: &Tuple) -> Result<bool, Error> {
        tuple[self.position].compare(&self.condition.literal, self.condition.operator)
    }
}
