use crate::{
    expression::{Difference, Expression, Intersect, Join, Project, RelationRef, Select, Union},
    schema::is_identifier,
    Condition, Error,
};

/// Parses a query line into an [`Expression`].
///
/// A query has one of the following shapes, where the operand of `select` and
/// `project` is either a relation name or another query in parentheses:
///
/// | Shape        | Pattern                                            |
/// |--------------|----------------------------------------------------|
/// | select       | `select <attr> <op> <literal> (<operand>)`         |
/// | project      | `project <attr>[, <attr>...] (<operand>)`          |
/// | join         | `join <relation1> <relation2>`                     |
/// | union        | `union <relation1> <relation2>`                    |
/// | intersect    | `intersect <relation1> <relation2>` (or `intersection`) |
/// | difference   | `difference <relation1> <relation2>`               |
///
/// Fails with [`Error::UnparsableQuery`] if `query` has none of these shapes.
///
/// **Example**:
/// ```rust
/// use relq_core::parse;
///
/// let query = parse("project Name (select Age > 30 (Employees))").unwrap();
/// assert_eq!("project Name (select Age > 30 (Employees))", query.to_string());
///
/// assert!(parse("drop Employees").is_err());
/// ```
///
/// [`Expression`]: ./expression/enum.Expression.html
/// [`Error::UnparsableQuery`]: ./enum.Error.html#variant.UnparsableQuery
pub fn parse(query: &str) -> Result<Expression, Error> {
    let query = query.trim();
    parse_expression(query).ok_or_else(|| Error::UnparsableQuery {
        query: query.to_string(),
    })
}

fn parse_expression(text: &str) -> Option<Expression> {
    let (keyword, rest) = text.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    match keyword {
        "select" => {
            let (condition, operand) = split_operand(rest)?;
            Some(Select::new(Condition::parse(condition)?, operand).into())
        }
        "project" => {
            let (attributes, operand) = split_operand(rest)?;
            Some(Project::new(parse_attributes(attributes)?, operand).into())
        }
        "join" => {
            let (left, right) = parse_operands(rest)?;
            Some(Join::new(left, right).into())
        }
        "union" => {
            let (left, right) = parse_operands(rest)?;
            Some(Union::new(left, right).into())
        }
        "intersect" | "intersection" => {
            let (left, right) = parse_operands(rest)?;
            Some(Intersect::new(left, right).into())
        }
        "difference" => {
            let (left, right) = parse_operands(rest)?;
            Some(Difference::new(left, right).into())
        }
        _ => None,
    }
}

/// Splits `text` of the form `arguments (operand)` at the parenthesis that matches the
/// trailing one. Parentheses inside double-quoted literals are ignored.
fn split_operand(text: &str) -> Option<(&str, Expression)> {
    let body = text.strip_suffix(')')?;
    let mut depth = 0usize;
    // only double quotes are tracked, so a bare `O'Brien` does not open a literal; a
    // single-quoted literal holding a parenthesis splits at the wrong place
    let mut quoted = false;
    for (index, c) in body.char_indices().rev() {
        match (quoted, c) {
            (_, '"') => quoted = !quoted,
            (true, _) => {}
            (false, ')') => depth += 1,
            (false, '(') if depth == 0 => {
                let operand = body[index + 1..].trim();
                let operand = if is_identifier(operand) {
                    RelationRef::new(operand).into()
                } else {
                    parse_expression(operand)?
                };
                return Some((body[..index].trim(), operand));
            }
            (false, '(') => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Parses a comma-separated list of attribute names.
fn parse_attributes(text: &str) -> Option<Vec<String>> {
    text.split(',')
        .map(str::trim)
        .map(|a| is_identifier(a).then(|| a.to_string()))
        .collect()
}

/// Parses exactly two relation names separated by whitespace.
fn parse_operands(text: &str) -> Option<(RelationRef, RelationRef)> {
    let mut words = text.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(left), Some(right), None) if is_identifier(left) && is_identifier(right) => {
            Some((RelationRef::new(left), RelationRef::new(right)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Operator, Value};

    fn relation(name: &str) -> Expression {
        RelationRef::new(name).into()
    }

    #[test]
    fn test_parse_select() {
        {
            assert_eq!(
                Ok(Expression::from(Select::new(
                    Condition::new("Age", Operator::Greater, Value::parse("30")),
                    relation("Employees")
                ))),
                parse("select Age > 30 (Employees)")
            );
        }
        {
            assert_eq!(
                Ok(Expression::from(Select::new(
                    Condition::new("Name", Operator::Equal, Value::parse("\"Ann (Jr)\"")),
                    relation("Employees")
                ))),
                parse("  select Name = \"Ann (Jr)\" ( Employees )  ")
            );
        }
        {
            assert_eq!(
                Ok(Expression::from(Select::new(
                    Condition::new("Age", Operator::LessOrEqual, Value::parse("30")),
                    relation("Employees")
                ))),
                parse("select Age<=30(Employees)")
            );
        }
    }

    #[test]
    fn test_parse_project() {
        {
            assert_eq!(
                Ok(Expression::from(Project::new(
                    vec!["Name".to_string()],
                    relation("Employees")
                ))),
                parse("project Name (Employees)")
            );
        }
        {
            assert_eq!(
                Ok(Expression::from(Project::new(
                    vec!["Name".to_string(), "Age".to_string()],
                    relation("Employees")
                ))),
                parse("project Name,Age (Employees)")
            );
        }
    }

    #[test]
    fn test_parse_nested() {
        {
            let expected: Expression = Project::new(
                vec!["Name".to_string()],
                Select::new(
                    Condition::new("Name", Operator::Equal, Value::parse("O'Brien")),
                    relation("Employees"),
                ),
            )
            .into();
            assert_eq!(
                Ok(expected),
                parse("project Name (select Name = O'Brien (Employees))")
            );
        }
        {
            let expected: Expression = Project::new(
                vec!["Name".to_string()],
                Select::new(
                    Condition::new("Age", Operator::Greater, Value::parse("30")),
                    Join::new(RelationRef::new("Employees"), RelationRef::new("Departments")),
                ),
            )
            .into();
            assert_eq!(
                Ok(expected),
                parse("project Name (select Age > 30 (join Employees Departments))")
            );
        }
    }

    #[test]
    fn test_parse_binary() {
        let (r, s) = (relation("R"), relation("S"));
        assert_eq!(
            Ok(Expression::from(Join::new(r.clone(), s.clone()))),
            parse("join R S")
        );
        assert_eq!(
            Ok(Expression::from(Union::new(r.clone(), s.clone()))),
            parse("union R  S")
        );
        assert_eq!(
            Ok(Expression::from(Intersect::new(r.clone(), s.clone()))),
            parse("intersect R S")
        );
        assert_eq!(
            Ok(Expression::from(Intersect::new(r.clone(), s.clone()))),
            parse("intersection R S")
        );
        assert_eq!(
            Ok(Expression::from(Difference::new(s.clone(), r.clone()))),
            parse("difference S R")
        );
    }

    #[test]
    fn test_parse_errors() {
        for query in &[
            "",
            "select",
            "select Age > 30",
            "select Age > 30 Employees",
            "select Age > 30 ()",
            "select Age ~ 30 (Employees)",
            "select (Employees)",
            "project (Employees)",
            "project Name, (Employees)",
            "project Name Age (Employees)",
            "project Name (Employees",
            "project Name (select Age (Employees))",
            "join R",
            "join R S T",
            "union R, S",
            "difference R (S)",
            "Select Age > 30 (Employees)",
            "rename R S",
        ] {
            assert_eq!(
                Err(Error::UnparsableQuery {
                    query: query.trim().to_string()
                }),
                parse(query),
                "query: {}",
                query
            );
        }
    }
}
