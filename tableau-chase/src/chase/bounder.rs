//! Implements a set of bounders for guarding runs of the chase against non-termination.
use super::{Bounder, Table};

/// Is the number of rounds after which [`RoundLimit::default()`] stops a run.
pub const DEFAULT_ROUND_LIMIT: usize = 10_000;

/// Stops a run once it has completed a given number of rounds.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RoundLimit(usize);

impl From<usize> for RoundLimit {
    fn from(limit: usize) -> Self {
        Self(limit)
    }
}

impl Default for RoundLimit {
    fn default() -> Self {
        Self(DEFAULT_ROUND_LIMIT)
    }
}

impl Bounder for RoundLimit {
    fn bound(&self, round: usize, _: &Table) -> bool {
        round >= self.0
    }
}

/// Stops a run once its table has grown beyond a given number of rows.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TableSize(usize);

impl From<usize> for TableSize {
    fn from(size: usize) -> Self {
        Self(size)
    }
}

impl Bounder for TableSize {
    fn bound(&self, _: usize, table: &Table) -> bool {
        table.len() > self.0
    }
}
