/*! Implements the [`Database`], the store of named relations that queries read.

[`Database`]: ./struct.Database.html
*/
mod evaluate;

use crate::{
    expression::{expression_dependencies, Expression},
    Error, Relation, Schema, Tuple, Tuples,
};
use evaluate::Evaluator;
use std::collections::HashMap;
use tracing::debug;

/// Stores relations by name.
///
/// A database is populated with [`define`] before any query runs. Evaluating
/// expressions only borrows the database, so relations cannot change while queries
/// are being answered.
///
/// [`define`]: #method.define
#[derive(Clone, Default, Debug)]
pub struct Database {
    relations: HashMap<String, Relation>,
}

impl Database {
    /// Creates a new empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a relation with the given name, attributes and tuples, replacing any
    /// relation already defined under `name`. Duplicate tuples collapse into one.
    ///
    /// Fails with [`Error::InvalidAttribute`] if an attribute name is not an identifier,
    /// with [`Error::DuplicateAttribute`] if `attributes` repeats a name and with
    /// [`Error::ArityMismatch`] if a tuple does not have one value per attribute.
    ///
    /// **Example**:
    /// ```rust
    /// use relq_core::{Database, Value};
    ///
    /// let mut db = Database::new();
    /// let r = db
    ///     .define(
    ///         "R",
    ///         vec!["a"],
    ///         vec![vec![Value::parse("1")], vec![Value::parse("1")]],
    ///     )
    ///     .unwrap();
    /// assert_eq!(1, r.len());
    ///
    /// assert!(db.define("S", vec!["a"], vec![Vec::<Value>::new()]).is_err());
    /// ```
    ///
    /// [`Error::InvalidAttribute`]: ./enum.Error.html#variant.InvalidAttribute
    /// [`Error::DuplicateAttribute`]: ./enum.Error.html#variant.DuplicateAttribute
    /// [`Error::ArityMismatch`]: ./enum.Error.html#variant.ArityMismatch
    pub fn define<A, S, I, T>(
        &mut self,
        name: &str,
        attributes: A,
        tuples: I,
    ) -> Result<&Relation, Error>
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<Tuple>,
    {
        let schema = Schema::new(attributes)?;
        let mut items = Vec::new();
        for (i, tuple) in tuples.into_iter().enumerate() {
            let tuple: Tuple = tuple.into();
            if tuple.len() != schema.arity() {
                return Err(Error::ArityMismatch {
                    relation: name.to_string(),
                    position: i + 1,
                    expected: schema.arity(),
                    found: tuple.len(),
                });
            }
            items.push(tuple);
        }

        let relation = Relation::new(schema, Tuples::from(items));
        debug!(
            relation = name,
            schema = %relation.schema(),
            tuples = relation.len(),
            "defined relation"
        );
        if self.relations.contains_key(name) {
            debug!(relation = name, "replaced existing relation");
        }

        self.relations.insert(name.to_string(), relation);
        self.lookup(name)
    }

    /// Returns the relation named `name` or fails with [`Error::UnknownRelation`].
    ///
    /// [`Error::UnknownRelation`]: ./enum.Error.html#variant.UnknownRelation
    pub fn lookup(&self, name: &str) -> Result<&Relation, Error> {
        self.relations
            .get(name)
            .ok_or_else(|| Error::UnknownRelation {
                name: name.to_string(),
            })
    }

    /// Returns true if a relation named `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }

    /// Returns the names of the relations in the receiver, sorted.
    pub fn relation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.relations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Evaluates `expression` and returns the resulting relation. Every relation that
    /// `expression` refers to must exist before any operator is applied; otherwise
    /// the first missing one is reported with [`Error::UnknownRelation`].
    ///
    /// [`Error::UnknownRelation`]: ./enum.Error.html#variant.UnknownRelation
    pub fn evaluate(&self, expression: &Expression) -> Result<Relation, Error> {
        for name in expression_dependencies(expression) {
            self.lookup(&name)?;
        }
        expression
            .collect(&Evaluator(self))
            .map(|relation| relation.into_owned())
    }
}
