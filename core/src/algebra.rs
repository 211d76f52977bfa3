/*! Implements the relational algebra operations over [`Relation`]s.

Every operation reads its operands and returns a new relation. Output tuples are
deduplicated and keep the order in which they are first produced: input order for
[`select`] and [`project`], left operand before right operand for [`union`], and
left-major order for [`join`].

[`Relation`]: ../struct.Relation.html
[`select`]: ./fn.select.html
[`project`]: ./fn.project.html
[`union`]: ./fn.union.html
[`join`]: ./fn.join.html
*/
use crate::{Condition, Error, Relation, Schema, Tuple};
use either::Either;
use std::collections::{HashMap, HashSet};

/// Returns the tuples of `relation` that satisfy `condition` (`σ_condition(relation)`).
pub fn select(relation: &Relation, condition: &Condition) -> Result<Relation, Error> {
    let predicate = condition.bind(relation.schema())?;
    let mut result = Vec::new();
    for tuple in relation.tuples().iter() {
        if predicate.test(tuple)? {
            result.push(tuple.clone());
        }
    }
    Ok(Relation::new(relation.schema().clone(), result))
}

/// Restricts the tuples of `relation` to `attributes` (`π_attributes(relation)`). The
/// output schema lists `attributes` in the given order.
pub fn project<S: AsRef<str>>(relation: &Relation, attributes: &[S]) -> Result<Relation, Error> {
    let positions = attributes
        .iter()
        .map(|a| relation.schema().require(a.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let schema = Schema::new(attributes.iter().map(|a| a.as_ref()))?;

    let tuples = relation.tuples().iter().map(|t| t.pick(&positions));
    Ok(Relation::new(schema, tuples))
}

/// Computes the natural join of `left` and `right` (`left ⋈ right`) on the attributes
/// they share. The output schema is the schema of `left` followed by the attributes
/// of `right` that `left` does not have. Fails with [`Error::NoCommonAttributes`] if
/// the operands share no attribute.
///
/// [`Error::NoCommonAttributes`]: ../enum.Error.html#variant.NoCommonAttributes
pub fn join(left: &Relation, right: &Relation) -> Result<Relation, Error> {
    let common = left.schema().common(right.schema());
    if common.is_empty() {
        return Err(Error::NoCommonAttributes {
            left: left.schema().to_string(),
            right: right.schema().to_string(),
        });
    }

    // every output column is read either from the left or from the right tuple
    let layout: Vec<Either<usize, usize>> = (0..left.schema().arity())
        .map(Either::Left)
        .chain(
            (0..right.schema().arity())
                .filter(|j| !common.iter().any(|(_, k)| k == j))
                .map(Either::Right),
        )
        .collect();

    let schema = Schema::new(layout.iter().map(|column| {
        column.either(|i| left.header()[i].as_str(), |j| right.header()[j].as_str())
    }))?;

    let mut index: HashMap<Vec<_>, Vec<&Tuple>> = HashMap::new();
    for tuple in right.tuples().iter() {
        let key: Vec<_> = common.iter().map(|&(_, j)| &tuple[j]).collect();
        index.entry(key).or_default().push(tuple);
    }

    let mut result: Vec<Tuple> = Vec::new();
    for l in left.tuples().iter() {
        let key: Vec<_> = common.iter().map(|&(i, _)| &l[i]).collect();
        if let Some(matches) = index.get(&key) {
            for r in matches {
                result.push(
                    layout
                        .iter()
                        .map(|&column| column.either(|i| &l[i], |j| &r[j]).clone())
                        .collect(),
                );
            }
        }
    }

    Ok(Relation::new(schema, result))
}

/// Returns the tuples of `left` followed by the tuples of `right` (`left ∪ right`).
/// The tuples of `right` are realigned to the attribute order of `left`.
pub fn union(left: &Relation, right: &Relation) -> Result<Relation, Error> {
    let alignment = left.schema().alignment(right.schema())?;
    let tuples = left
        .tuples()
        .iter()
        .cloned()
        .chain(right.tuples().iter().map(|t| t.pick(&alignment)));
    Ok(Relation::new(left.schema().clone(), tuples))
}

/// Returns the tuples of `left` that are also in `right` (`left ∩ right`).
pub fn intersect(left: &Relation, right: &Relation) -> Result<Relation, Error> {
    let right = aligned_set(left, right)?;
    let tuples = left.tuples().iter().filter(|t| right.contains(*t)).cloned();
    Ok(Relation::new(left.schema().clone(), tuples))
}

/// Returns the tuples of `left` that are not in `right` (`left - right`).
pub fn difference(left: &Relation, right: &Relation) -> Result<Relation, Error> {
    let right = aligned_set(left, right)?;
    let tuples = left.tuples().iter().filter(|t| !right.contains(*t)).cloned();
    Ok(Relation::new(left.schema().clone(), tuples))
}

/// Returns the tuples of `right` realigned to the attribute order of `left`.
fn aligned_set(left: &Relation, right: &Relation) -> Result<HashSet<Tuple>, Error> {
    let alignment = left.schema().alignment(right.schema())?;
    Ok(right.tuples().iter().map(|t| t.pick(&alignment)).collect())
}
