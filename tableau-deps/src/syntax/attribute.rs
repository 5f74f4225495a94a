/*! Defines attributes, the names of the columns of a relational schema. */
use itertools::Itertools;
use std::fmt;

/// Represents an attribute (column name) of a relational schema.
///
/// **Note**: attributes are ordered lexicographically by their names. This order determines
/// the column positions of a chase table.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attr(pub String);

impl Attr {
    /// Returns the name of the attribute.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for Attr {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Attr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Returns the attributes of `attrs`, sorted and without duplicates.
pub(crate) fn normalize<I: IntoIterator<Item = Attr>>(attrs: I) -> Vec<Attr> {
    attrs.into_iter().sorted().dedup().collect()
}

/// Returns the sorted set union of the attributes in `first` and `second`.
pub fn union(first: &[Attr], second: &[Attr]) -> Vec<Attr> {
    normalize(first.iter().chain(second.iter()).cloned())
}

/// Returns the sorted set of attributes that are in both `first` and `second`.
pub fn intersection(first: &[Attr], second: &[Attr]) -> Vec<Attr> {
    normalize(first.iter().filter(|a| second.contains(a)).cloned())
}

/// Returns the sorted set of attributes in `first` that are not in `second`.
pub fn difference(first: &[Attr], second: &[Attr]) -> Vec<Attr> {
    normalize(first.iter().filter(|a| !second.contains(a)).cloned())
}
