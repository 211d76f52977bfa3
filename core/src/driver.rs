use crate::{parse, Database, Error, Relation};
use tracing::{debug, warn};

/// Is the outcome of one query of a run: its 1-based position, its raw text and the
/// relation it evaluated to, or the error that stopped it.
#[derive(Clone, PartialEq, Debug)]
pub struct Outcome {
    index: usize,
    query: String,
    result: Result<Relation, Error>,
}

impl Outcome {
    /// Returns the 1-based position of the query in its run.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the text of the query as it was given.
    #[inline(always)]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the result of the query.
    #[inline(always)]
    pub fn result(&self) -> &Result<Relation, Error> {
        &self.result
    }

    /// Returns true if the query was answered.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Parses `query` and evaluates it against `database`.
pub fn execute(database: &Database, query: &str) -> Result<Relation, Error> {
    let expression = parse(query)?;
    database.evaluate(&expression)
}

/// Executes `queries` against `database` in order. A failing query records its error
/// in its own [`Outcome`] and does not stop the queries after it.
///
/// **Example**:
/// ```rust
/// use relq_core::{run, Database, Value};
///
/// let mut db = Database::new();
/// db.define("R", vec!["a"], vec![vec![Value::parse("1")]]).unwrap();
///
/// let outcomes = run(&db, vec!["project b (R)", "project a (R)"]);
/// assert!(!outcomes[0].is_ok());
/// assert!(outcomes[1].is_ok());
/// assert_eq!(2, outcomes[1].index());
/// ```
///
/// [`Outcome`]: ./struct.Outcome.html
pub fn run<I, S>(database: &Database, queries: I) -> Vec<Outcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    queries
        .into_iter()
        .enumerate()
        .map(|(i, query)| {
            let index = i + 1;
            let query = query.as_ref().trim();
            let result = execute(database, query);
            match &result {
                Ok(relation) => debug!(index, query, tuples = relation.len(), "evaluated query"),
                Err(error) => warn!(index, query, %error, "query failed"),
            }
            Outcome {
                index,
                query: query.to_string(),
                result,
            }
        })
        .collect()
}
