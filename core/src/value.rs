/*! Implements [`Value`], the unit of data stored in tuples, and the comparison
[`Operator`]s that selection conditions apply to values.

[`Value`]: ./enum.Value.html
[`Operator`]: ./enum.Operator.html
*/
use crate::Error;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// Is a numeric value, held exactly as a signed decimal of any length. A number keeps
/// the literal it was parsed from so it renders exactly as it was written.
#[derive(Clone, Debug)]
pub struct Number {
    negative: bool,
    /// Is the integer part without leading zeros.
    whole: String,
    /// Is the fractional part without trailing zeros.
    fraction: String,
    literal: String,
}

impl Number {
    /// Parses an optionally signed integer or decimal literal, such as `42`, `-7`,
    /// `3.14`, `.5` or `2.`. Returns `None` for anything else, including exponents.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !digits(whole) || !digits(fraction) || whole.len() + fraction.len() == 0 {
            return None;
        }

        let whole = whole.trim_start_matches('0');
        let fraction = fraction.trim_end_matches('0');
        Some(Self {
            negative: negative && !(whole.is_empty() && fraction.is_empty()),
            whole: whole.to_string(),
            fraction: fraction.to_string(),
            literal: text.to_string(),
        })
    }

    /// Returns the literal the receiver was parsed from.
    #[inline(always)]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Returns true if the receiver is below zero.
    #[inline(always)]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.whole
            .len()
            .cmp(&other.whole.len())
            .then_with(|| self.whole.cmp(&other.whole))
            .then_with(|| self.fraction.cmp(&other.fraction))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

// Equal numbers have the same normalized parts, whatever their literals.
impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.whole.hash(state);
        self.fraction.hash(state);
    }
}

/// Is a relational value: either text or a number.
///
/// Two values are equal only if they have the same variant and the same content;
/// numbers compare by exact numeric value, so `30` and `30.0` are equal while
/// `9007199254740993` and `9007199254740992` are not.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Value {
    Text(String),
    Number(Number),
}

impl Value {
    /// Parses `text` into a value. Parsing never fails: text wrapped in a pair of
    /// matching quotes (`"` or `'`) is text with the quotes stripped, text that looks
    /// like an integer or a decimal number is a number, anything else is text.
    ///
    /// **Example**:
    /// ```rust
    /// use relq_core::Value;
    ///
    /// assert!(matches!(Value::parse("32"), Value::Number(_)));
    /// assert!(matches!(Value::parse("-1.5"), Value::Number(_)));
    /// assert_eq!(Value::Text("John".into()), Value::parse("John"));
    /// assert_eq!(Value::Text("32".into()), Value::parse("\"32\""));
    /// ```
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Some(unquoted) = unquote(text) {
            return Value::Text(unquoted.to_string());
        }
        match Number::parse(text) {
            Some(number) => Value::Number(number),
            None => Value::Text(text.to_string()),
        }
    }

    /// Returns true if the receiver is a number.
    #[inline(always)]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Applies `operator` to the receiver (on left) and `other` (on right).
    ///
    /// `=` and `!=` accept any two values. The ordering operators require both values
    /// to be numbers and fail with [`Error::TypeMismatch`] otherwise.
    ///
    /// [`Error::TypeMismatch`]: ../enum.Error.html#variant.TypeMismatch
    pub fn compare(&self, other: &Value, operator: Operator) -> Result<bool, Error> {
        match operator {
            Operator::Equal => Ok(self == other),
            Operator::NotEqual => Ok(self != other),
            _ => match (self, other) {
                (Value::Number(left), Value::Number(right)) => {
                    Ok(operator.holds(left.cmp(right)))
                }
                _ => Err(Error::TypeMismatch {
                    operator,
                    left: self.to_string(),
                    right: other.to_string(),
                }),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "\"{}\"", text),
            Value::Number(number) => write!(f, "{}", number.literal),
        }
    }
}

fn unquote(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && (first == '"' || first == '\'') => {
            Some(&text[1..text.len() - 1])
        }
        _ => None,
    }
}

/// Is a comparison operator of a selection condition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
}

impl Operator {
    // Longer symbols come first so `<=` is not read as `<`.
    const SYMBOLS: [(&'static str, Operator); 7] = [
        ("<=", Operator::LessOrEqual),
        (">=", Operator::GreaterOrEqual),
        ("!=", Operator::NotEqual),
        ("==", Operator::Equal),
        ("=", Operator::Equal),
        ("<", Operator::Less),
        (">", Operator::Greater),
    ];

    /// Returns the symbol of the receiver.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessOrEqual => "<=",
            Operator::GreaterOrEqual => ">=",
        }
    }

    /// Reads an operator at the start of `text` and returns it with the rest of `text`.
    pub(crate) fn parse_prefix(text: &str) -> Option<(Self, &str)> {
        Self::SYMBOLS.iter().find_map(|(symbol, operator)| {
            text.strip_prefix(symbol).map(|rest| (*operator, rest))
        })
    }

    /// Returns true if the receiver accepts two operands related by `ordering`.
    fn holds(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::Less => ordering == Ordering::Less,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::LessOrEqual => ordering != Ordering::Greater,
            Operator::GreaterOrEqual => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_parse() {
        {
            assert!(Value::parse("32").is_number());
            assert!(Value::parse("-32").is_number());
            assert!(Value::parse("+3.25").is_number());
            assert!(Value::parse(".5").is_number());
            assert!(Value::parse("2.").is_number());
            assert!(Value::parse("  7 ").is_number());
        }
        {
            assert_eq!(text("John"), Value::parse("John"));
            assert_eq!(text("E1"), Value::parse("E1"));
            assert_eq!(text("1e5"), Value::parse("1e5"));
            assert_eq!(text("."), Value::parse("."));
            assert_eq!(text("-"), Value::parse("-"));
            assert_eq!(text("1.2.3"), Value::parse("1.2.3"));
            assert_eq!(text("inf"), Value::parse("inf"));
            assert_eq!(text(""), Value::parse(""));
        }
        {
            assert_eq!(text("John Smith"), Value::parse("\"John Smith\""));
            assert_eq!(text("Bob"), Value::parse("'Bob'"));
            assert_eq!(text("32"), Value::parse("\"32\""));
            assert_eq!(text("\"half"), Value::parse("\"half"));
            assert_eq!(text("\""), Value::parse("\""));
            assert_eq!(text(""), Value::parse("\"\""));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!("32", Value::parse("32").to_string());
        assert_eq!("3.50", Value::parse("3.50").to_string());
        assert_eq!("\"John\"", Value::parse("John").to_string());
        assert_eq!("\"John\"", Value::parse("\"John\"").to_string());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Value::parse("30"), Value::parse("30.0"));
        assert_eq!(Value::parse("0"), Value::parse("-0"));
        assert_ne!(Value::parse("30"), Value::parse("\"30\""));
        assert_ne!(text("a"), text("A"));

        use std::collections::HashSet;
        let set: HashSet<Value> = vec!["1", "1.0", "-0.0", "0"]
            .into_iter()
            .map(Value::parse)
            .collect();
        assert_eq!(2, set.len());
    }

    #[test]
    fn test_number_exact() {
        {
            let above = Value::parse("9007199254740993");
            let below = Value::parse("9007199254740992");
            assert_ne!(above, below);
            assert_eq!(Ok(true), above.compare(&below, Operator::Greater));
            assert_eq!(Ok(false), below.compare(&above, Operator::GreaterOrEqual));
        }
        {
            let huge = Value::parse("123456789012345678901234567890");
            assert_ne!(huge, Value::parse("123456789012345678901234567891"));
            assert_eq!(huge, Value::parse("+000123456789012345678901234567890.000"));
        }
        {
            let ordered: Vec<Value> = vec![
                "-10", "-2.5", "-2", "-0.75", "0", ".5", "0.55", "2", "10",
            ]
            .into_iter()
            .map(Value::parse)
            .collect();
            for pair in ordered.windows(2) {
                assert_eq!(Ok(true), pair[0].compare(&pair[1], Operator::Less), "{:?}", pair);
                assert_eq!(Ok(false), pair[1].compare(&pair[0], Operator::LessOrEqual));
            }
        }
        {
            let number = Number::parse("-0.0").unwrap();
            assert!(!number.is_negative());
            assert_eq!("-0.0", number.literal());
            assert!(Number::parse("-0.1").unwrap().is_negative());
            assert!(Number::parse("1e5").is_none());
            assert!(Number::parse("+").is_none());
        }
    }

    #[test]
    fn test_compare() {
        let ten = Value::parse("10");
        let five = Value::parse("5");
        {
            assert_eq!(Ok(true), ten.compare(&five, Operator::Greater));
            assert_eq!(Ok(false), ten.compare(&five, Operator::Less));
            assert_eq!(Ok(true), ten.compare(&ten, Operator::LessOrEqual));
            assert_eq!(Ok(true), ten.compare(&ten, Operator::GreaterOrEqual));
            assert_eq!(Ok(false), five.compare(&ten, Operator::GreaterOrEqual));
            assert_eq!(Ok(true), five.compare(&ten, Operator::NotEqual));
        }
        {
            assert_eq!(Ok(true), text("a").compare(&text("a"), Operator::Equal));
            assert_eq!(Ok(false), text("10").compare(&ten, Operator::Equal));
            assert_eq!(Ok(true), text("10").compare(&ten, Operator::NotEqual));
        }
        {
            assert_eq!(
                Err(Error::TypeMismatch {
                    operator: Operator::Less,
                    left: "\"a\"".to_string(),
                    right: "10".to_string(),
                }),
                text("a").compare(&ten, Operator::Less)
            );
            assert!(text("a").compare(&text("b"), Operator::Less).is_err());
            assert!(ten.compare(&text("b"), Operator::GreaterOrEqual).is_err());
        }
    }

    #[test]
    fn test_operator_parse_prefix() {
        assert_eq!(Some((Operator::LessOrEqual, " 3")), Operator::parse_prefix("<= 3"));
        assert_eq!(Some((Operator::Less, " 3")), Operator::parse_prefix("< 3"));
        assert_eq!(Some((Operator::Equal, "3")), Operator::parse_prefix("==3"));
        assert_eq!(Some((Operator::Equal, "3")), Operator::parse_prefix("=3"));
        assert_eq!(Some((Operator::NotEqual, "x")), Operator::parse_prefix("!=x"));
        assert_eq!(None, Operator::parse_prefix("~ 3"));
        assert_eq!(None, Operator::parse_prefix("! 3"));
    }
}
