/*! Implements a minimal in-memory relational algebra engine.

Relations are defined once in a [`Database`] and are read-only afterwards. Queries
are parsed from text into an [`Expression`] tree, which the database evaluates into
a fresh [`Relation`] without touching the relations it reads.

**Example**:
```rust
use relq_core::{parse, Database, Value};

let mut db = Database::new();
db.define(
    "Employees",
    vec!["EID", "Name", "Age"],
    vec![
        vec![Value::parse("E1"), Value::parse("John"), Value::parse("32")],
        vec![Value::parse("E2"), Value::parse("Alice"), Value::parse("28")],
    ],
)
.unwrap();

let query = parse("select Age > 30 (Employees)").unwrap();
let result = db.evaluate(&query).unwrap();

assert_eq!(1, result.len());
assert_eq!("\"E1\", \"John\", 32", result.tuples()[0].to_string());
```
*/
pub mod algebra;
mod condition;
mod database;
mod driver;
pub mod expression;
mod parser;
mod relation;
mod schema;
mod value;

pub use condition::Condition;
pub use database::Database;
pub use driver::{execute, run, Outcome};
pub use expression::Expression;
pub use parser::parse;
pub use relation::{Relation, Tuple, Tuples};
pub use schema::Schema;
pub use value::{Number, Operator, Value};

use thiserror::Error;

/// Is the type of errors returned while defining relations, parsing queries or
/// evaluating them.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a query line matches none of the supported query shapes.
    #[error("cannot parse query `{query}`")]
    UnparsableQuery { query: String },

    /// Is returned when a query refers to a relation that is not in the database.
    #[error("relation `{name}` is not defined")]
    UnknownRelation { name: String },

    /// Is returned when an attribute is not part of the schema it is looked up in.
    #[error("attribute `{name}` is not in schema {schema}")]
    UnknownAttribute { name: String, schema: String },

    /// Is returned when an attribute name is not made of letters, digits and
    /// underscores, the only names a query can refer to.
    #[error("`{name}` is not a valid attribute name")]
    InvalidAttribute { name: String },

    /// Is returned when an attribute list names the same attribute more than once.
    #[error("attribute `{name}` appears more than once")]
    DuplicateAttribute { name: String },

    /// Is returned when a tuple of a relation does not have the arity of the
    /// relation's schema. `position` is 1-based.
    #[error("tuple {position} of relation `{relation}` has {found} values but the schema has {expected} attributes")]
    ArityMismatch {
        relation: String,
        position: usize,
        expected: usize,
        found: usize,
    },

    /// Is returned when the operands of a union, intersection or difference are not
    /// union-compatible.
    #[error("schemas {left} and {right} are not union-compatible")]
    SchemaMismatch { left: String, right: String },

    /// Is returned when the operands of a natural join share no attribute.
    #[error("schemas {left} and {right} have no common attributes to join on")]
    NoCommonAttributes { left: String, right: String },

    /// Is returned when an ordering comparison is applied to values that are not
    /// both numbers.
    #[error("cannot compare {left} {operator} {right}: ordering requires two numbers")]
    TypeMismatch {
        operator: Operator,
        left: String,
        right: String,
    },
}
