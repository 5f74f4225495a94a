/*! Provides a set of tools for parsing and manipulating relational schemas together with their
functional and multivalued dependencies, and for loading dependency questions from input
documents. */
#[macro_use]
extern crate lalrpop_util;

pub mod document;
pub mod parser;
pub mod syntax;
#[cfg(test)]
mod test_prelude;
