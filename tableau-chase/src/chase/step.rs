//! Implements the FD and MVD rewrite steps that make up a round of the chase.
use super::{
    rule::{FdRule, MvdRule},
    Cell, Row, Step, Table,
};
use crate::trace::{FD, MVD};
use std::collections::{HashMap, HashSet};

/// Applies functional dependencies to a table. Only the first FD (in the given order) that
/// changes the table is applied; the remaining FDs are left to later rounds.
///
/// For the FD `X -> Y`, the rows of the table are partitioned by their values on `X`. Within
/// every partition and for every column of `Y`, the cells are set to the representative
/// value of the partition in that column: the distinguished value if any row holds it,
/// otherwise the most frequent value, preferring the value that appears first in row order.
/// Only the rows of the partition are overwritten; the same value elsewhere in the column is
/// left alone.
pub struct FdStep<'r> {
    rules: &'r [FdRule],
}

impl<'r> FdStep<'r> {
    pub fn new(rules: &'r [FdRule]) -> Self {
        Self { rules }
    }
}

impl Step for FdStep<'_> {
    fn apply(&self, table: &mut Table) -> bool {
        for rule in self.rules {
            if apply_fd(rule, table) {
                debug!(event = FD, dependency = %rule);
                return true;
            }
        }
        false
    }
}

/// Is the weight of a candidate representative in an equivalence class: the number of rows
/// holding the candidate, or infinite for the distinguished value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
enum Weight {
    Finite(usize),
    Infinite,
}

impl Weight {
    fn of(cell: &Cell) -> Self {
        match cell {
            Cell::Distinguished => Weight::Infinite,
            Cell::Variable(_) => Weight::Finite(1),
        }
    }

    fn increment(self) -> Self {
        match self {
            Weight::Finite(n) => Weight::Finite(n + 1),
            Weight::Infinite => Weight::Infinite,
        }
    }
}

fn apply_fd(rule: &FdRule, table: &mut Table) -> bool {
    let mut changed = false;
    for class in equivalence_classes(table, rule.lhs()) {
        for &column in rule.rhs() {
            let representative = match representative(table, &class, column) {
                Some(cell) => cell,
                None => continue,
            };
            if table.overwrite(&class, column, &representative) > 0 {
                changed = true;
            }
        }
    }
    changed
}

// Groups the indices of the rows of `table` by their values on `columns`. Classes are ordered
// by their first row and the lookup map is local to every call.
fn equivalence_classes(table: &Table, columns: &[usize]) -> Vec<Vec<usize>> {
    let mut index: HashMap<Vec<Cell>, usize> = HashMap::new();
    let mut classes: Vec<Vec<usize>> = Vec::new();
    for (i, row) in table.rows().iter().enumerate() {
        let class = *index.entry(row.project(columns)).or_insert_with(|| {
            classes.push(Vec::new());
            classes.len() - 1
        });
        classes[class].push(i);
    }
    classes
}

fn representative(table: &Table, class: &[usize], column: usize) -> Option<Cell> {
    let mut candidates: Vec<(&Cell, Weight)> = Vec::new();
    for &row in class {
        let cell = table.cell(row, column);
        match candidates.iter_mut().find(|(c, _)| *c == cell) {
            Some((_, weight)) => *weight = weight.increment(),
            None => candidates.push((cell, Weight::of(cell))),
        }
    }

    let mut best: Option<(&Cell, Weight)> = None;
    for (cell, weight) in candidates {
        if best.map_or(true, |(_, w)| weight > w) {
            best = Some((cell, weight));
        }
    }
    best.map(|(cell, _)| cell.clone())
}

/// Applies multivalued dependencies to a table. Unlike [`FdStep`], every MVD is applied and the
/// rows generated by all of them are appended to the table at once.
///
/// For the MVD `X ->> Y` and every pair of rows that agree on `X`, the row that takes its `Y`
/// values from one and its remaining values from the other is generated, unless the table
/// (or the rows generated so far) already contain it.
pub struct MvdStep<'r> {
    rules: &'r [MvdRule],
}

impl<'r> MvdStep<'r> {
    pub fn new(rules: &'r [MvdRule]) -> Self {
        Self { rules }
    }
}

impl Step for MvdStep<'_> {
    fn apply(&self, table: &mut Table) -> bool {
        let mut known: HashSet<Row> = table.rows().iter().cloned().collect();
        let mut staged = Vec::new();
        for rule in self.rules {
            for row in swaps(rule, table) {
                if !known.contains(&row) {
                    known.insert(row.clone());
                    staged.push(row);
                }
            }
        }

        if staged.is_empty() {
            return false;
        }
        debug!(event = MVD, rows = staged.len());
        table.extend(staged);
        true
    }
}

// Returns the candidate rows for `rule`, in row order, obtained by swapping the right side of
// every row with the right sides observed in its group.
fn swaps(rule: &MvdRule, table: &Table) -> Vec<Row> {
    let mut groups: HashMap<Vec<Cell>, Vec<Vec<Cell>>> = HashMap::new();
    for row in table.rows() {
        let values = groups
            .entry(row.project(rule.lhs()))
            .or_insert_with(Vec::new);
        let value = row.project(rule.rhs());
        if !values.contains(&value) {
            values.push(value);
        }
    }

    let mut candidates = Vec::new();
    for row in table.rows() {
        let own = row.project(rule.rhs());
        if let Some(values) = groups.get(&row.project(rule.lhs())) {
            values
                .iter()
                .filter(|&value| *value != own)
                .for_each(|value| candidates.push(row.replace(rule.rhs(), value)));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chase::rule::{compile_all, Rule},
        test_prelude::*,
    };
    use itertools::Itertools;
    use tableau_deps::{attrs, fd, mvd, syntax::FD as Fd};

    fn fd_rules(table: &Table, fds: &[Fd]) -> Vec<FdRule> {
        compile_all(fds, table.schema()).unwrap()
    }

    fn chase_fds(table: &mut Table, rules: &[FdRule]) -> usize {
        let step = FdStep::new(rules);
        let mut count = 0;
        while step.apply(table) {
            count += 1;
        }
        count
    }

    #[test]
    fn test_fd_distinguished_wins() {
        let mut t = table(&attrs![A, C], &[&["a", "c1"], &["a", "c1"], &["a", "a"]]);
        let rules = fd_rules(&t, &[fd!(A -> C)]);
        assert!(FdStep::new(&rules).apply(&mut t));
        assert_eq!(table(&attrs![A, C], &[&["a", "a"], &["a", "a"], &["a", "a"]]), t);
    }

    #[test]
    fn test_fd_most_frequent() {
        let mut t = table(&attrs![A, C], &[&["a", "c1"], &["a", "c2"], &["a", "c2"]]);
        let rules = fd_rules(&t, &[fd!(A -> C)]);
        assert!(FdStep::new(&rules).apply(&mut t));
        assert_eq!(
            table(&attrs![A, C], &[&["a", "c2"], &["a", "c2"], &["a", "c2"]]),
            t
        );
    }

    #[test]
    fn test_fd_tie_first_wins() {
        let mut t = table(&attrs![A, C], &[&["a1", "c2"], &["a1", "c1"], &["a2", "c3"]]);
        let rules = fd_rules(&t, &[fd!(A -> C)]);
        assert!(FdStep::new(&rules).apply(&mut t));
        assert_eq!(
            table(&attrs![A, C], &[&["a1", "c2"], &["a1", "c2"], &["a2", "c3"]]),
            t
        );
    }

    #[test]
    fn test_fd_first_change_only() {
        let mut t = table(&attrs![A, B, C], &[&["a", "a", "a"], &["a", "b1", "c1"]]);
        let rules = fd_rules(&t, &[fd!(B -> C), fd!(A -> B), fd!(A -> C)]);
        let step = FdStep::new(&rules);
        assert!(step.apply(&mut t));
        assert_eq!(
            table(&attrs![A, B, C], &[&["a", "a", "a"], &["a", "a", "c1"]]),
            t
        );
        assert!(step.apply(&mut t));
        assert_eq!(
            table(&attrs![A, B, C], &[&["a", "a", "a"], &["a", "a", "a"]]),
            t
        );
        assert!(!step.apply(&mut t));
    }

    #[test]
    fn test_fd_propagation() {
        let mut t = table(
            &attrs![A, B, C, D],
            &[
                &["a1", "b1", "c1", "d1"],
                &["a1", "b2", "c2", "d2"],
                &["a1", "b2", "c2", "d1"],
                &["a1", "b1", "c1", "d2"],
            ],
        );
        let rules = fd_rules(&t, &[fd!(D -> C)]);
        assert_eq!(1, chase_fds(&mut t, &rules));
        for (first, second) in t.rows().iter().tuple_combinations() {
            if first.cells()[3] == second.cells()[3] {
                assert_eq!(first.cells()[2], second.cells()[2]);
            }
        }
        assert_eq!(
            table(
                &attrs![A, B, C, D],
                &[
                    &["a1", "b1", "c1", "d1"],
                    &["a1", "b2", "c2", "d2"],
                    &["a1", "b2", "c1", "d1"],
                    &["a1", "b1", "c2", "d2"],
                ],
            ),
            t
        );
    }

    #[test]
    fn test_fd_cascade() {
        let mut t = table(
            &attrs![A, B, C, D, E],
            &[
                &["a", "b1", "c1", "a", "e1"],
                &["a", "a", "c2", "d2", "e2"],
                &["a3", "a", "c3", "d3", "a"],
                &["a4", "b4", "a", "a", "a"],
                &["a", "b5", "c5", "d5", "a"],
            ],
        );
        let rules = fd_rules(
            &t,
            &[
                fd!(A -> C),
                fd!(B -> C),
                fd!(C -> D),
                fd!(D, E -> C),
                fd!(C, E -> A),
            ],
        );
        assert_eq!(6, chase_fds(&mut t, &rules));
        assert_eq!(
            table(
                &attrs![A, B, C, D, E],
                &[
                    &["a", "b1", "a", "a", "e1"],
                    &["a", "a", "a", "a", "e2"],
                    &["a", "a", "a", "a", "a"],
                    &["a", "b4", "a", "a", "a"],
                    &["a", "b5", "a", "a", "a"],
                ],
            ),
            t
        );
    }

    #[test]
    fn test_fd_other_classes_untouched() {
        let mut t = table(
            &attrs![A, C],
            &[&["a1", "c1"], &["a1", "c2"], &["a2", "c2"], &["a2", "c3"]],
        );
        let rules = fd_rules(&t, &[fd!(A -> C)]);
        assert!(FdStep::new(&rules).apply(&mut t));
        assert_eq!(
            table(
                &attrs![A, C],
                &[&["a1", "c1"], &["a1", "c1"], &["a2", "c2"], &["a2", "c2"]],
            ),
            t
        );
        assert!(!FdStep::new(&rules).apply(&mut t));
    }

    #[test]
    fn test_fd_no_rules() {
        let mut t = table(&attrs![A, B], &[&["a", "a"], &["a", "b1"]]);
        assert!(!FdStep::new(&[]).apply(&mut t));
    }

    #[test]
    fn test_mvd_step() {
        let mut t = table(
            &attrs![A, B, C, D],
            &[&["a1", "b1", "c1", "d1"], &["a1", "b2", "c2", "d2"]],
        );
        let rules = compile_all(&[mvd!(A ->> B), mvd!(B ->> C)], t.schema()).unwrap();
        let step = MvdStep::new(&rules);
        assert!(step.apply(&mut t));
        assert_eq!(
            table(
                &attrs![A, B, C, D],
                &[
                    &["a1", "b1", "c1", "d1"],
                    &["a1", "b2", "c2", "d2"],
                    &["a1", "b2", "c1", "d1"],
                    &["a1", "b1", "c2", "d2"],
                ],
            ),
            t
        );

        while step.apply(&mut t) {}
        assert_eq!(8, t.len());
        assert_eq!(8, t.rows().iter().unique().count());
        assert!(!step.apply(&mut t));
    }

    #[test]
    fn test_mvd_shared_staging() {
        // both MVDs generate the same row; it is appended once
        let mut t = table(&attrs![A, B, C], &[&["a", "a", "c1"], &["a", "b2", "a"]]);
        let rules = vec![
            Rule::compile(&mvd!(A ->> B), t.schema()).unwrap(),
            Rule::compile(&mvd!(A ->> C), t.schema()).unwrap(),
        ];
        assert!(MvdStep::new(&rules).apply(&mut t));
        assert_eq!(
            table(
                &attrs![A, B, C],
                &[
                    &["a", "a", "c1"],
                    &["a", "b2", "a"],
                    &["a", "b2", "c1"],
                    &["a", "a", "a"],
                ],
            ),
            t
        );
    }

    #[test]
    fn test_mvd_no_group() {
        let mut t = table(&attrs![A, B, C], &[&["a", "a", "c1"], &["a1", "b2", "a"]]);
        let rules = compile_all(&[mvd!(A ->> B)], t.schema()).unwrap();
        assert!(!MvdStep::new(&rules).apply(&mut t));
        assert_eq!(2, t.len());
    }
}
