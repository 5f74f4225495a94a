//! Compiles dependencies into rules over the columns of a chase table.
use super::{Error, Schema};
use std::fmt;
use tableau_deps::syntax::{Dependency, FD, MVD};

/// Is a dependency whose attributes are resolved to the columns of a [`Schema`].
#[derive(Clone, PartialEq, Debug)]
pub struct Rule<D: Dependency> {
    dependency: D,
    lhs: Vec<usize>,
    rhs: Vec<usize>,
}

/// Is a compiled functional dependency.
pub type FdRule = Rule<FD>;

/// Is a compiled multivalued dependency.
pub type MvdRule = Rule<MVD>;

impl<D: Dependency> Rule<D> {
    /// Compiles `dependency` against `schema`. It fails with [`Error::SchemaMismatch`] if the
    /// dependency mentions an attribute that is not in `schema`.
    pub fn compile(dependency: &D, schema: &Schema) -> Result<Self, Error> {
        Ok(Self {
            dependency: dependency.clone(),
            lhs: schema.positions(dependency.lhs())?,
            rhs: schema.positions(dependency.rhs())?,
        })
    }

    /// Returns the dependency from which the rule was compiled.
    #[inline(always)]
    pub fn dependency(&self) -> &D {
        &self.dependency
    }

    /// Returns the columns of the left side of the dependency.
    #[inline(always)]
    pub fn lhs(&self) -> &[usize] {
        &self.lhs
    }

    /// Returns the columns of the right side of the dependency.
    #[inline(always)]
    pub fn rhs(&self) -> &[usize] {
        &self.rhs
    }
}

impl<D: Dependency> fmt::Display for Rule<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.dependency)
    }
}

/// Compiles every dependency in `dependencies`, preserving their order.
pub fn compile_all<D: Dependency>(
    dependencies: &[D],
    schema: &Schema,
) -> Result<Vec<Rule<D>>, Error> {
    dependencies
        .iter()
        .map(|d| Rule::compile(d, schema))
        .collect()
}
