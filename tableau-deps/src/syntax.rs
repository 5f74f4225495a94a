/*! Defines the syntax of relational schemas, functional dependencies, multivalued dependencies
and the queries that are asked about them. */

mod attribute;
mod dependency;
mod macros;
mod query;
mod relation;

pub use attribute::{difference, intersection, union, Attr};
pub use dependency::{Dependency, FD, MVD};
pub use query::{Query, Task};
pub use relation::{Fragment, Relation};
use thiserror::Error;

/// Is the type of errors arising from inconsistencies in the syntax of queries.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a query names a task that is not supported.
    #[error("unsupported task `{task}`")]
    UnsupportedTask { task: String },
}
