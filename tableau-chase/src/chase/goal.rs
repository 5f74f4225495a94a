//! Implements the conditions under which a run of the chase answers its question positively.
use super::Table;

/// Is the condition that a run of the chase tries to force on its table.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Goal {
    /// Is satisfied when every row holds the distinguished value at every one of `columns`.
    /// An FD `X -> Y` is entailed when its seeded table reaches this goal for the columns of `Y`.
    Determined { columns: Vec<usize> },

    /// Is satisfied when some row of the table is distinguished in every column. It witnesses
    /// MVD entailment and lossless joins.
    UniversalRow,
}

impl Goal {
    /// Returns true if `table` satisfies the goal.
    pub fn is_satisfied(&self, table: &Table) -> bool {
        match self {
            Goal::Determined { columns } => table.rows().iter().all(|row| {
                columns
                    .iter()
                    .all(|&column| row.cells()[column].is_distinguished())
            }),
            Goal::UniversalRow => table.rows().iter().any(|row| row.is_universal()),
        }
    }
}
