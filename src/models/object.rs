use crate::error::{Cardinality, ValidationError};
use crate::models::Attribute;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// One RPSL object (a registry record): an ordered list of attributes.
///
/// Attribute order is kept exactly as it appeared in the input and the same key may show up
/// more than once (e.g. several `mnt-by` or `descr` lines). The first attribute names the
/// object class.
///
/// All lookups are case-insensitive on the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpslObject {
    attributes: Vec<Attribute>,
}

impl RpslObject {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        RpslObject { attributes }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    /// Returns the object class, i.e. the name of the first attribute.
    pub fn class(&self) -> Option<&str> {
        self.attributes.first().map(Attribute::name)
    }

    /// Distinct attribute names, in order of first occurrence.
    pub fn keys(&self) -> Vec<&str> {
        self.attributes.iter().map(Attribute::name).unique().collect()
    }

    /// Number of attributes, duplicates included.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Value of the first attribute named `key`, if any.
    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.is(key))
            .map(Attribute::value)
    }

    /// Values of all attributes named `key`, in input order. Empty if there are none.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|attr| attr.is(key))
            .map(Attribute::value)
            .collect()
    }

    pub fn exists(&self, key: &str) -> bool {
        self.attributes.iter().any(|attr| attr.is(key))
    }

    fn count(&self, key: &str) -> usize {
        self.attributes.iter().filter(|attr| attr.is(key)).count()
    }

    /// Checks that the first attribute of the object is `class`.
    pub fn ensure_class(&self, class: &str) -> Result<(), ValidationError> {
        let first = self.class().ok_or(ValidationError::EmptyObject)?;
        if !first.eq_ignore_ascii_case(class) {
            return Err(ValidationError::WrongClass {
                expected: class.to_string(),
                found: first.to_string(),
            });
        }
        Ok(())
    }

    /// Checks that `key` is present at least once.
    pub fn ensure_at_least_one(&self, key: &str) -> Result<(), ValidationError> {
        if !self.exists(key) {
            return Err(ValidationError::Missing {
                key: key.to_ascii_lowercase(),
                cardinality: Cardinality::MandatoryMultiple,
            });
        }
        Ok(())
    }

    /// Checks that `key` is present at most once.
    pub fn ensure_at_most_one(&self, key: &str) -> Result<(), ValidationError> {
        if self.count(key) > 1 {
            return Err(ValidationError::Multiple {
                key: key.to_ascii_lowercase(),
                cardinality: Cardinality::OptionalSingle,
            });
        }
        Ok(())
    }

    /// Checks that `key` is present exactly once.
    pub fn ensure_one(&self, key: &str) -> Result<(), ValidationError> {
        match self.count(key) {
            1 => Ok(()),
            0 => Err(ValidationError::Missing {
                key: key.to_ascii_lowercase(),
                cardinality: Cardinality::MandatorySingle,
            }),
            _ => Err(ValidationError::Multiple {
                key: key.to_ascii_lowercase(),
                cardinality: Cardinality::MandatorySingle,
            }),
        }
    }
}

impl Display for RpslObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.attributes.iter().join("\n"))
    }
}

impl<'a> IntoIterator for &'a RpslObject {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl From<Vec<Attribute>> for RpslObject {
    fn from(attributes: Vec<Attribute>) -> Self {
        RpslObject::new(attributes)
    }
}
