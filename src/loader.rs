/*! Reads the input text: relation definition blocks and query lines.

A relation block names the relation and its attributes on its first line and lists
one tuple per line until the closing brace:

```text
Employees (EID, Name, Age) = {
  E1, John, 32
  # comment lines and blank lines are skipped
  E2, Alice, 28
}
```

Outside relation blocks, lines starting with `Query:` or with an operation keyword
are queries. Every other line is ignored.
*/
use anyhow::{bail, Context, Result};
use relq_core::{Database, Value};
use tracing::{debug, info};

const KEYWORDS: [&str; 7] = [
    "select",
    "project",
    "join",
    "union",
    "intersect",
    "intersection",
    "difference",
];

const QUERY_PREFIX: &str = "Query:";

/// Is a relation as it is written in the input, before it is checked and stored.
#[derive(Clone, PartialEq, Debug)]
pub struct RelationDef {
    pub name: String,
    pub attributes: Vec<String>,
    pub tuples: Vec<Vec<Value>>,
    /// Is the 1-based line on which the block starts.
    pub line: usize,
}

/// Is the content of an input file.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Input {
    pub relations: Vec<RelationDef>,
    pub queries: Vec<String>,
}

/// Splits `text` into relation definitions and queries, both in the order they appear.
/// Fails if a relation block is never closed.
pub fn parse(text: &str) -> Result<Input> {
    let mut input = Input::default();
    let mut open: Option<RelationDef> = None;

    for (i, line) in text.lines().enumerate() {
        let number = i + 1;
        let line = line.trim();

        if let Some(mut relation) = open.take() {
            match line.split_once('}') {
                Some((last, _)) => {
                    push_tuple(&mut relation, last);
                    input.relations.push(relation);
                }
                None => {
                    push_tuple(&mut relation, line);
                    open = Some(relation);
                }
            }
        } else if let Some((name, attributes, body)) = parse_header(line) {
            let mut relation = RelationDef {
                name: name.to_string(),
                attributes,
                tuples: Vec::new(),
                line: number,
            };
            match body.split_once('}') {
                Some((last, _)) => {
                    push_tuple(&mut relation, last);
                    input.relations.push(relation);
                }
                None => {
                    push_tuple(&mut relation, body);
                    open = Some(relation);
                }
            }
        } else if let Some(query) = line.strip_prefix(QUERY_PREFIX) {
            let query = query.trim();
            if !query.is_empty() {
                input.queries.push(query.to_string());
            }
        } else if is_query(line) {
            input.queries.push(line.to_string());
        } else if !line.is_empty() && !line.starts_with('#') {
            debug!(line = number, text = line, "ignored input line");
        }
    }

    if let Some(relation) = open {
        bail!(
            "relation `{}` opened on line {} is never closed",
            relation.name,
            relation.line
        );
    }
    Ok(input)
}

/// Defines the relations of `input` in a new database, in order.
pub fn load(input: &Input) -> Result<Database> {
    let mut database = Database::new();
    for relation in &input.relations {
        database
            .define(
                &relation.name,
                &relation.attributes,
                relation.tuples.iter().cloned(),
            )
            .with_context(|| {
                format!(
                    "invalid relation `{}` defined on line {}",
                    relation.name, relation.line
                )
            })?;
    }
    info!(
        relations = database.relation_names().len(),
        queries = input.queries.len(),
        "loaded input"
    );
    Ok(database)
}

/// Parses a block header `Name (a, b) = {`, returning the name, the attributes and
/// whatever follows the opening brace.
fn parse_header(line: &str) -> Option<(&str, Vec<String>, &str)> {
    let (head, body) = line.split_once('{')?;
    let head = head.trim_end().strip_suffix('=')?.trim_end();
    let (name, attributes) = head.strip_suffix(')')?.split_once('(')?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }

    let attributes: Vec<String> = attributes
        .split(',')
        .map(|a| a.trim().to_string())
        .collect();
    if attributes.iter().any(String::is_empty) {
        return None;
    }
    Some((name, attributes, body))
}

fn push_tuple(relation: &mut RelationDef, line: &str) {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return;
    }
    relation
        .tuples
        .push(line.split(',').map(|v| Value::parse(v.trim())).collect());
}

fn is_query(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .map_or(false, |word| KEYWORDS.contains(&word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<Value> {
        values.iter().map(|v| Value::parse(v)).collect()
    }

    #[test]
    fn test_parse() {
        let text = r#"
# employees of the company
Employees (EID, Name, Age) = {
  E1, John, 32
  # on leave
  "E2", "Alice", 28

}

Empty (a) = {}
One (a, b) = { 1, 2 }

Query: select Age > 30 (Employees)
project Name (Employees)
intersection Employees Empty
Query:
Projects are listed elsewhere
"#;
        let input = parse(text).unwrap();
        assert_eq!(
            vec![
                RelationDef {
                    name: "Employees".to_string(),
                    attributes: vec!["EID".to_string(), "Name".to_string(), "Age".to_string()],
                    tuples: vec![row(&["E1", "John", "32"]), row(&["E2", "Alice", "28"])],
                    line: 3,
                },
                RelationDef {
                    name: "Empty".to_string(),
                    attributes: vec!["a".to_string()],
                    tuples: vec![],
                    line: 10,
                },
                RelationDef {
                    name: "One".to_string(),
                    attributes: vec!["a".to_string(), "b".to_string()],
                    tuples: vec![row(&["1", "2"])],
                    line: 11,
                },
            ],
            input.relations
        );
        assert_eq!(
            vec![
                "select Age > 30 (Employees)",
                "project Name (Employees)",
                "intersection Employees Empty",
            ],
            input.queries
        );
    }

    #[test]
    fn test_parse_header() {
        {
            let (name, attributes, body) = parse_header("R ( a , b )={").unwrap();
            assert_eq!("R", name);
            assert_eq!(vec!["a".to_string(), "b".to_string()], attributes);
            assert_eq!("", body);
        }
        {
            assert!(parse_header("R () = {").is_none());
            assert!(parse_header("R (a, ) = {").is_none());
            assert!(parse_header("R (a) {").is_none());
            assert!(parse_header("(a) = {").is_none());
            assert!(parse_header("select a = 1 (R)").is_none());
        }
    }

    #[test]
    fn test_parse_unclosed() {
        let error = parse("R (a) = {\n  1\n  2\n").unwrap_err();
        assert_eq!(
            "relation `R` opened on line 1 is never closed",
            error.to_string()
        );
    }

    #[test]
    fn test_load() {
        {
            let input = parse("R (a) = {\n1\n1\n}\nR (b) = {\n2\n}\nS (c) = {}").unwrap();
            let database = load(&input).unwrap();
            assert_eq!(vec!["R", "S"], database.relation_names());
            assert_eq!(&["b".to_string()], database.lookup("R").unwrap().header());
        }
        {
            let input = parse("\n\nR (a, b) = {\n1, 2\n3\n}").unwrap();
            let error = load(&input).unwrap_err();
            assert_eq!(
                "invalid relation `R` defined on line 3",
                error.to_string()
            );
            assert_eq!(
                "tuple 2 of relation `R` has 1 values but the schema has 2 attributes",
                error.root_cause().to_string()
            );
        }
        {
            let input = parse("People (first-name, Age) = {\nAnn, 30\n}").unwrap();
            assert_eq!(
                vec!["first-name".to_string(), "Age".to_string()],
                input.relations[0].attributes
            );
            let error = load(&input).unwrap_err();
            assert_eq!(
                "invalid relation `People` defined on line 1",
                error.to_string()
            );
            assert_eq!(
                "`first-name` is not a valid attribute name",
                error.root_cause().to_string()
            );
        }
    }
}
