//! Implements the round-by-round driver of the chase.
use super::{
    rule::{FdRule, MvdRule},
    step::{FdStep, MvdStep},
    Bounder, Error, Goal, Step, Table,
};
use crate::trace::{ANSWER, BOUND, CHASE, ROUND};
use tracing::Level;

/// Is a seeded run of the chase: the compiled dependencies of a relation, the initial table and
/// the goal of the run. A `ChaseRun` is usually obtained from a
/// [`PreProcessor`](super::PreProcessor).
#[derive(Clone, PartialEq, Debug)]
pub struct ChaseRun {
    fd_rules: Vec<FdRule>,
    mvd_rules: Vec<MvdRule>,
    table: Table,
    goal: Goal,
}

impl ChaseRun {
    pub fn new(fd_rules: Vec<FdRule>, mvd_rules: Vec<MvdRule>, table: Table, goal: Goal) -> Self {
        Self {
            fd_rules,
            mvd_rules,
            table,
            goal,
        }
    }

    /// Returns the FD rules of the run in the order they are tried.
    pub fn fd_rules(&self) -> &[FdRule] {
        &self.fd_rules
    }

    pub fn mvd_rules(&self) -> &[MvdRule] {
        &self.mvd_rules
    }

    /// Returns the initial table of the run.
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Runs the chase to completion and returns its [`Outcome`].
    ///
    /// Before every round, the goal is checked and if it holds, the run stops with a positive
    /// answer. Otherwise, `bounder` is consulted, the table is handed to `snapshot` together
    /// with the round number, and the round applies one [`FdStep`] and one [`MvdStep`]. A round
    /// that changes nothing ends the run with a negative answer. If `bounder` stops the run
    /// first, the run fails with [`Error::ChaseDidNotConverge`].
    pub fn run<B: Bounder>(
        self,
        bounder: &B,
        mut snapshot: impl FnMut(usize, &Table),
    ) -> Result<Outcome, Error> {
        let ChaseRun {
            fd_rules,
            mvd_rules,
            mut table,
            goal,
        } = self;
        let span = span!(Level::TRACE, CHASE, rows = table.len());
        let _enter = span.enter();

        let fd_step = FdStep::new(&fd_rules);
        let mvd_step = MvdStep::new(&mvd_rules);
        let mut round = 0;
        let answer = loop {
            if goal.is_satisfied(&table) {
                break true;
            }
            if bounder.bound(round, &table) {
                info!(event = BOUND, round = round, rows = table.len());
                return Err(Error::ChaseDidNotConverge { rounds: round });
            }

            info!(event = ROUND, round = round, table = %table);
            snapshot(round, &table);

            let fd_changed = fd_step.apply(&mut table);
            let mvd_changed = mvd_step.apply(&mut table);
            round += 1;
            if !(fd_changed || mvd_changed) {
                break false;
            }
        };

        info!(event = ANSWER, answer = answer, rounds = round);
        Ok(Outcome {
            table,
            answer,
            rounds: round,
        })
    }
}

/// Is the result of a completed run of the chase.
#[derive(Clone, PartialEq, Debug)]
pub struct Outcome {
    table: Table,
    answer: bool,
    rounds: usize,
}

impl Outcome {
    /// Returns the final table of the run.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Returns true if the goal of the run was satisfied.
    pub fn answer(&self) -> bool {
        self.answer
    }

    /// Returns the number of rounds executed by the run.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn into_table(self) -> Table {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chase::{
            bounder::{RoundLimit, TableSize},
            preprocessor::Seeder,
            rule::compile_all,
            PreProcessor,
        },
        test_prelude::*,
    };
    use tableau_deps::{
        attrs, fd, mvd,
        syntax::{Fragment, Query, Relation},
    };

    fn seed(relation: &Relation, query: &Query) -> ChaseRun {
        Seeder.pre_process(relation, query).unwrap()
    }

    #[test]
    fn test_trivial_entailment() {
        let relation = Relation::new("R", attrs![A, B]).with_fds(vec![fd!(A -> B)]);
        let run = seed(&relation, &Query::FdEntailment(fd!(A -> B)));

        let mut rounds = Vec::new();
        let outcome = run
            .run(&RoundLimit::default(), |round, _| rounds.push(round))
            .unwrap();
        assert!(outcome.answer());
        assert_eq!(1, outcome.rounds());
        assert_eq!(vec![0], rounds);
        assert_eq!(table(&attrs![A, B], &[&["a", "a"], &["a", "a"]]), *outcome.table());
    }

    #[test]
    fn test_satisfied_by_seed() {
        let relation = Relation::new("R", attrs![A, B]);
        let run = seed(&relation, &Query::FdEntailment(fd!(A, B -> A)));

        let mut count = 0;
        let outcome = run
            .run(&RoundLimit::default(), |_, _| count += 1)
            .unwrap();
        assert!(outcome.answer());
        assert_eq!(0, outcome.rounds());
        assert_eq!(0, count);
    }

    #[test]
    fn test_negative_answer() {
        let relation = Relation::new("R", attrs![A, B, C]).with_fds(vec![fd!(A -> B)]);
        let run = seed(&relation, &Query::FdEntailment(fd!(A -> C)));

        let mut snapshots = Vec::new();
        let outcome = run
            .run(&RoundLimit::default(), |round, t| {
                snapshots.push((round, t.to_string()))
            })
            .unwrap();
        assert!(!outcome.answer());
        assert_eq!(2, outcome.rounds());
        assert_eq!(
            vec![
                (0, "A B  C\na a  a\na b1 c1".to_string()),
                (1, "A B C\na a a\na a c1".to_string()),
            ],
            snapshots
        );
    }

    #[test]
    fn test_mvd_entailment() {
        let relation = Relation::new("R", attrs![A, B, C, D]).with_mvds(vec![mvd!(A ->> B)]);
        {
            let run = seed(&relation, &Query::MvdEntailment(mvd!(A ->> C, D)));
            let outcome = run.run(&RoundLimit::default(), |_, _| {}).unwrap();
            assert!(outcome.answer());
        }
        {
            let run = seed(&relation, &Query::MvdEntailment(mvd!(B ->> C)));
            let outcome = run.run(&RoundLimit::default(), |_, _| {}).unwrap();
            assert!(!outcome.answer());
        }
    }

    #[test]
    fn test_deterministic() {
        let relation = Relation::new("R", attrs![A, B, C, D, E])
            .with_fds(vec![
                fd!(A -> C),
                fd!(B -> C),
                fd!(C -> D),
                fd!(D, E -> C),
                fd!(C, E -> A),
            ])
            .with_mvds(vec![mvd!(A ->> B)]);
        let query = Query::LosslessJoin(vec![
            Fragment::new("R1", attrs![A, D]),
            Fragment::new("R2", attrs![A, B]),
            Fragment::new("R3", attrs![B, E]),
            Fragment::new("R4", attrs![C, D, E]),
            Fragment::new("R5", attrs![A, E]),
        ]);

        let first = seed(&relation, &query)
            .run(&RoundLimit::default(), |_, _| {})
            .unwrap();
        let second = seed(&relation, &query)
            .run(&RoundLimit::default(), |_, _| {})
            .unwrap();
        assert!(first.answer());
        assert_eq!(first, second);
    }

    #[test]
    fn test_did_not_converge() {
        let relation = Relation::new("R", attrs![A, B]).with_fds(vec![fd!(A -> B)]);
        let run = seed(&relation, &Query::FdEntailment(fd!(A -> B)));
        assert_eq!(
            Err(Error::ChaseDidNotConverge { rounds: 0 }),
            run.run(&RoundLimit::from(0), |_, _| {})
        );
    }

    #[test]
    fn test_table_size_bound() {
        let t = table(
            &attrs![A, B, C],
            &[&["a", "b1", "c1"], &["a", "b2", "c2"], &["a", "b3", "c3"]],
        );
        let rules = compile_all(&[mvd!(A ->> B)], t.schema()).unwrap();
        let run = ChaseRun::new(vec![], rules, t, Goal::UniversalRow);
        assert_eq!(
            Err(Error::ChaseDidNotConverge { rounds: 1 }),
            run.run(&TableSize::from(3), |_, _| {})
        );
    }
}
