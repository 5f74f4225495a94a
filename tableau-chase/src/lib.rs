/*! Implements the chase over symbolic tables (tableaux) for deciding classical questions about
the dependencies of relational schemas: entailment of functional and multivalued dependencies,
lossless-join decompositions and minimal covers of functional dependencies. */
#[macro_use]
extern crate tracing;

pub mod chase;
#[cfg(test)]
mod test_prelude;
pub mod trace;
