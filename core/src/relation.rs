use crate::{Schema, Value};
use std::{collections::HashSet, fmt, ops::Deref};

/// Is an ordered sequence of values. Position `i` of a tuple holds the value of
/// attribute `i` of the schema of its relation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Tuple {
    values: Vec<Value>,
}

impl Tuple {
    /// Returns the values of the receiver.
    #[inline(always)]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the receiver and returns its values.
    #[inline(always)]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Returns a new tuple made of the receiver's values at `positions`, in order.
    pub(crate) fn pick(&self, positions: &[usize]) -> Tuple {
        positions.iter().map(|&p| self.values[p].clone()).collect()
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Deref for Tuple {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Is a wrapper around a vector of tuples. As an invariant, `Tuples` contains no
/// duplicates and keeps its tuples in the order they first appeared.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Tuples {
    /// Is the vector of tuples in this instance.
    items: Vec<Tuple>,
}

impl<I: IntoIterator<Item = Tuple>> From<I> for Tuples {
    fn from(iterator: I) -> Self {
        let mut seen = HashSet::new();
        let items = iterator
            .into_iter()
            .filter(|tuple| seen.insert(tuple.clone()))
            .collect();
        Tuples { items }
    }
}

impl Tuples {
    /// Returns an immutable reference to the tuples of the receiver.
    #[inline(always)]
    pub fn items(&self) -> &[Tuple] {
        &self.items
    }

    /// Consumes the receiver and returns the underlying vector of tuples.
    #[inline(always)]
    pub fn into_tuples(self) -> Vec<Tuple> {
        self.items
    }
}

impl Deref for Tuples {
    type Target = Vec<Tuple>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Is a relation: a schema with a set of tuples of the schema's arity.
///
/// Relations are never modified: algebra operations read their operands and return
/// new relations.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Relation {
    schema: Schema,
    tuples: Tuples,
}

impl Relation {
    /// Creates a relation from a schema and tuples that are known to have the
    /// schema's arity.
    pub(crate) fn new(schema: Schema, tuples: impl Into<Tuples>) -> Self {
        let tuples = tuples.into();
        debug_assert!(tuples.iter().all(|t| t.len() == schema.arity()));
        Self { schema, tuples }
    }

    /// Returns the schema of the receiver.
    #[inline(always)]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the attribute names of the receiver, in order.
    #[inline(always)]
    pub fn header(&self) -> &[String] {
        self.schema.attributes()
    }

    /// Returns the tuples of the receiver.
    #[inline(always)]
    pub fn tuples(&self) -> &Tuples {
        &self.tuples
    }

    /// Returns the number of tuples in the receiver.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Returns true if the receiver has no tuples.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Consumes the receiver and returns its schema and tuples.
    pub fn into_parts(self) -> (Schema, Tuples) {
        (self.schema, self.tuples)
    }
}
