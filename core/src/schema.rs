use crate::Error;
use std::{collections::HashSet, fmt};

/// Is the ordered list of unique attribute names of a relation.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Schema {
    attributes: Vec<String>,
}

impl Schema {
    /// Creates a new schema over `attributes`. Fails with [`Error::InvalidAttribute`]
    /// if an attribute is not an identifier and with [`Error::DuplicateAttribute`] if
    /// an attribute appears more than once.
    ///
    /// [`Error::InvalidAttribute`]: ./enum.Error.html#variant.InvalidAttribute
    /// [`Error::DuplicateAttribute`]: ./enum.Error.html#variant.DuplicateAttribute
    pub fn new<I, S>(attributes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for attribute in &attributes {
            if !is_identifier(attribute) {
                return Err(Error::InvalidAttribute {
                    name: attribute.clone(),
                });
            }
            if !seen.insert(attribute.as_str()) {
                return Err(Error::DuplicateAttribute {
                    name: attribute.clone(),
                });
            }
        }
        Ok(Self { attributes })
    }

    /// Returns the attribute names of the receiver in order.
    #[inline(always)]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Returns the number of attributes of the receiver.
    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    /// Returns the position of `attribute` in the receiver.
    pub fn position(&self, attribute: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a == attribute)
    }

    /// Returns the position of `attribute` in the receiver or fails with
    /// [`Error::UnknownAttribute`].
    ///
    /// [`Error::UnknownAttribute`]: ./enum.Error.html#variant.UnknownAttribute
    pub fn require(&self, attribute: &str) -> Result<usize, Error> {
        self.position(attribute)
            .ok_or_else(|| Error::UnknownAttribute {
                name: attribute.to_string(),
                schema: self.to_string(),
            })
    }

    /// Returns true if the receiver and `other` have the same attribute names,
    /// regardless of their order.
    pub fn is_union_compatible(&self, other: &Schema) -> bool {
        self.arity() == other.arity() && self.attributes.iter().all(|a| other.position(a).is_some())
    }

    /// Returns, for every attribute of the receiver, its position in `other`. Reading a
    /// tuple of `other` at these positions realigns it to the receiver's attribute order.
    /// Fails with [`Error::SchemaMismatch`] if the schemas are not union-compatible.
    ///
    /// [`Error::SchemaMismatch`]: ./enum.Error.html#variant.SchemaMismatch
    pub fn alignment(&self, other: &Schema) -> Result<Vec<usize>, Error> {
        if !self.is_union_compatible(other) {
            return Err(Error::SchemaMismatch {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(self
            .attributes
            .iter()
            .filter_map(|a| other.position(a))
            .collect())
    }

    /// Returns the pairs of positions `(in receiver, in other)` of the attributes that
    /// the receiver shares with `other`, in the receiver's attribute order.
    pub fn common(&self, other: &Schema) -> Vec<(usize, usize)> {
        self.attributes
            .iter()
            .enumerate()
            .filter_map(|(i, a)| other.position(a).map(|j| (i, j)))
            .collect()
    }
}

/// Returns true if `text` is a non-empty run of letters, digits and underscores.
pub(crate) fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_identifier_char)
}

#[inline(always)]
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.attributes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        {
            let schema = Schema::new(vec!["a", "b"]).unwrap();
            assert_eq!(&["a".to_string(), "b".to_string()], schema.attributes());
            assert_eq!(2, schema.arity());
        }
        {
            assert_eq!(0, Schema::new(Vec::<String>::new()).unwrap().arity());
        }
        {
            assert_eq!(
                Err(Error::DuplicateAttribute {
                    name: "a".to_string()
                }),
                Schema::new(vec!["a", "b", "a"])
            );
        }
        {
            for name in &["first-name", "Dept Name", "", "a(b)", "x>1"] {
                assert_eq!(
                    Err(Error::InvalidAttribute {
                        name: name.to_string()
                    }),
                    Schema::new(vec!["a", *name])
                );
            }
            assert!(Schema::new(vec!["dept_id", "Name2", "Âge"]).is_ok());
        }
    }

    #[test]
    fn test_require() {
        let schema = Schema::new(vec!["EID", "Name"]).unwrap();
        assert_eq!(Ok(1), schema.require("Name"));
        assert_eq!(
            Err(Error::UnknownAttribute {
                name: "Age".to_string(),
                schema: "(EID, Name)".to_string(),
            }),
            schema.require("Age")
        );
    }

    #[test]
    fn test_alignment() {
        let abc = Schema::new(vec!["a", "b", "c"]).unwrap();
        {
            let cab = Schema::new(vec!["c", "a", "b"]).unwrap();
            assert!(abc.is_union_compatible(&cab));
            assert_eq!(Ok(vec![1, 2, 0]), abc.alignment(&cab));
            assert_eq!(Ok(vec![0, 1, 2]), abc.alignment(&abc));
        }
        {
            let ab = Schema::new(vec!["a", "b"]).unwrap();
            assert!(!abc.is_union_compatible(&ab));
            assert!(!ab.is_union_compatible(&abc));
            assert!(abc.alignment(&ab).is_err());
        }
        {
            let abd = Schema::new(vec!["a", "b", "d"]).unwrap();
            assert_eq!(
                Err(Error::SchemaMismatch {
                    left: "(a, b, c)".to_string(),
                    right: "(a, b, d)".to_string(),
                }),
                abc.alignment(&abd)
            );
        }
    }

    #[test]
    fn test_common() {
        let left = Schema::new(vec!["EID", "Name", "DID"]).unwrap();
        let right = Schema::new(vec!["DID", "DeptName", "EID"]).unwrap();
        assert_eq!(vec![(0, 2), (2, 0)], left.common(&right));
        assert_eq!(vec![(0, 2), (2, 0)], right.common(&left));
        assert!(left
            .common(&Schema::new(vec!["x"]).unwrap())
            .is_empty());
    }
}
