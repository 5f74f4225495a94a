/*! Defines functional and multivalued dependencies. */
use super::{attribute::normalize, Attr};
use itertools::Itertools;
use std::fmt;

/// Is the trait of dependencies with a left (determining) side and a right (determined) side.
pub trait Dependency: Clone + PartialEq + fmt::Display {
    /// Returns the attributes on the left side of the dependency.
    fn lhs(&self) -> &[Attr];

    /// Returns the attributes on the right side of the dependency.
    fn rhs(&self) -> &[Attr];

    /// Returns the attributes that are mentioned on either side of the dependency.
    fn attributes(&self) -> Vec<&Attr> {
        self.lhs().iter().chain(self.rhs().iter()).unique().collect()
    }
}

/// Represents a functional dependency `X -> Y`: tuples that agree on the attributes of `X`
/// must agree on the attributes of `Y`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FD {
    lhs: Vec<Attr>,
    rhs: Vec<Attr>,
}

impl FD {
    /// Creates a new functional dependency. Both sides are sorted and duplicate attributes
    /// are dropped.
    pub fn new<L, R>(lhs: L, rhs: R) -> Self
    where
        L: IntoIterator<Item = Attr>,
        R: IntoIterator<Item = Attr>,
    {
        Self {
            lhs: normalize(lhs),
            rhs: normalize(rhs),
        }
    }
}

impl Dependency for FD {
    fn lhs(&self) -> &[Attr] {
        &self.lhs
    }

    fn rhs(&self) -> &[Attr] {
        &self.rhs
    }
}

impl fmt::Display for FD {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", sides(&self.lhs, "->", &self.rhs))
    }
}

impl fmt::Debug for FD {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a multivalued dependency `X ->> Y`: for any two tuples that agree on the
/// attributes of `X`, the tuple obtained by swapping their `Y` parts must also exist.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MVD {
    lhs: Vec<Attr>,
    rhs: Vec<Attr>,
}

impl MVD {
    /// Creates a new multivalued dependency. Both sides are sorted and duplicate attributes
    /// are dropped.
    pub fn new<L, R>(lhs: L, rhs: R) -> Self
    where
        L: IntoIterator<Item = Attr>,
        R: IntoIterator<Item = Attr>,
    {
        Self {
            lhs: normalize(lhs),
            rhs: normalize(rhs),
        }
    }
}

impl Dependency for MVD {
    fn lhs(&self) -> &[Attr] {
        &self.lhs
    }

    fn rhs(&self) -> &[Attr] {
        &self.rhs
    }
}

impl fmt::Display for MVD {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", sides(&self.lhs, "->>", &self.rhs))
    }
}

impl fmt::Debug for MVD {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

fn sides(lhs: &[Attr], arrow: &str, rhs: &[Attr]) -> String {
    let lhs = lhs.iter().join(", ");
    let rhs = rhs.iter().join(", ");
    if lhs.is_empty() {
        format!("{} {}", arrow, rhs)
    } else {
        format!("{} {} {}", lhs, arrow, rhs)
    }
}
