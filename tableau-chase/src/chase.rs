//! Provides the building blocks of the chase over symbolic tables and entrypoints for running it.
//!
//! ## Background
//! The chase decides whether a dependency follows from a set of functional dependencies (FDs)
//! and multivalued dependencies (MVDs) by reasoning over a small *symbolic table*. Every cell of
//! the table holds either the [distinguished] value, standing for a value that is fully
//! determined, or a uniquely labeled [variable], standing for a value that is not (yet)
//! constrained. A row of the table is a symbolic tuple of the relation.
//!
//! The question being asked determines the initial table (see [`PreProcessor`]) and the
//! condition under which the question is answered positively (see [`Goal`]):
//!
//! * To decide whether `X -> Y` follows, the table starts with two rows that agree only on `X`.
//! The FD follows iff the rows are forced to agree on `Y`.
//!
//! * To decide whether `X ->> Y` follows, the table starts with two rows, one distinguished on
//! `X ∪ Y` and the other on `X` and the attributes outside of `Y`. The MVD follows iff a fully
//! distinguished row is forced into the table.
//!
//! * To decide whether a decomposition into fragments is lossless, the table starts with one row
//! per fragment, distinguished on the attributes of that fragment. The decomposition is lossless
//! iff a fully distinguished row is forced into the table.
//!
//! [distinguished]: table::Cell::Distinguished
//! [variable]: table::Cell::Variable
//!
//! ## The Chase
//! Starting with the initial table, a run of the chase consists of *rounds*. Every round applies
//! one [FD step][step::FdStep] followed by one [MVD step][step::MvdStep]:
//!
//! 1. The FD step scans the FDs in order and applies the first one that changes the table: rows
//! that agree on the left side of the FD are made to agree on its right side by overwriting their
//! cells with a representative value. Only the rows of each agreeing group are rewritten.
//!
//! 2. The MVD step applies every MVD: for any two rows that agree on the left side of an MVD, the
//! row obtained by swapping their right-side values is appended to the table unless it exists.
//!
//! The run stops with a positive answer as soon as the goal is satisfied and with a negative
//! answer once a round leaves the table unchanged. Because the chase only reuses the symbols of
//! the initial table, it always reaches a fixed point; nevertheless, a [`Bounder`] guards every
//! run against non-termination.
//!
//! Minimal covers are computed on top of repeated FD entailment checks (see [`cover`]).
pub mod bounder;
pub mod cover;
pub mod driver;
pub mod goal;
pub mod preprocessor;
pub mod rule;
pub mod schema;
pub mod step;
pub mod table;

pub use driver::{ChaseRun, Outcome};
pub use goal::Goal;
pub use schema::Schema;
pub use table::{Cell, Row, Table, Var};
use tableau_deps::syntax::{Attr, Query, Relation, Task};
use thiserror::Error;

/// Is the type of errors returned by the chase.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a dependency or a fragment mentions an attribute that is not in the
    /// schema of the relation.
    #[error("attribute `{attribute}` is not in the schema")]
    SchemaMismatch { attribute: Attr },

    /// Is returned when a task cannot be answered by a single run of the chase.
    #[error("unsupported task `{task}`")]
    UnsupportedTask { task: Task },

    /// Is returned when a run of the chase reaches its bound before reaching a fixed point.
    #[error("the chase did not converge after {rounds} rounds")]
    ChaseDidNotConverge { rounds: usize },

    /// Is returned when the simple lossless-join check is given other than two fragments.
    #[error("expecting exactly two fragments, found {found}")]
    FragmentCount { found: usize },
}

/// Is the trait of objects that turn a relation and a query into a seeded run of the chase:
/// the dependencies of the relation are compiled against its schema and the initial table and
/// goal are built for the query.
pub trait PreProcessor {
    /// Returns a [`ChaseRun`] for answering `query` about `relation`. It fails if any
    /// dependency or fragment refers to an attribute outside of the schema of `relation`.
    fn pre_process(&self, relation: &Relation, query: &Query) -> Result<ChaseRun, Error>;
}

/// Is the trait of rewrite steps that are applied to a table in a round of the chase.
pub trait Step {
    /// Applies the step to `table` and returns true if the table has changed.
    fn apply(&self, table: &mut Table) -> bool;
}

/// Bounder is the trait of algorithms for guarding runs of the chase against non-termination.
pub trait Bounder {
    /// Returns true if a run that has completed `round` rounds, arriving at `table`, must stop.
    fn bound(&self, round: usize, table: &Table) -> bool;
}

/// Given a [`pre_processor`][PreProcessor] and a [`bounder`][Bounder], answers `query` about
/// `relation` by a run of [the chase]. The `snapshot` closure consumes the table before every
/// round together with the round number.
///
/// [the chase]: self#the-chase
///
/// ```rust
/// use tableau_deps::{attrs, fd, syntax::{Query, Relation}};
/// use tableau_chase::chase::{decide, bounder::RoundLimit, preprocessor::Seeder};
///
/// let relation = Relation::new("R", attrs![A, B, C]).with_fds(vec![fd!(A -> B), fd!(B -> C)]);
/// let query = Query::FdEntailment(fd!(A -> C));
///
/// let mut rounds = Vec::new();
/// let outcome = decide(&Seeder, &relation, &query, &RoundLimit::default(), |round, _| {
///     rounds.push(round)
/// })
/// .unwrap();
///
/// assert!(outcome.answer());
/// assert_eq!(vec![0, 1], rounds);
/// ```
pub fn decide<P, B>(
    pre_processor: &P,
    relation: &Relation,
    query: &Query,
    bounder: &B,
    snapshot: impl FnMut(usize, &Table),
) -> Result<Outcome, Error>
where
    P: PreProcessor,
    B: Bounder,
{
    pre_processor
        .pre_process(relation, query)?
        .run(bounder, snapshot)
}
