//! Computes minimal covers of functional dependencies on top of repeated entailment checks.
use super::{decide, preprocessor::Seeder, Bounder, Error};
use crate::trace::{KEPT, REDUNDANT};
use tableau_deps::syntax::{Query, Relation, FD};

/// Returns a minimal cover of the FDs of `relation`: starting from the first FD, every FD that
/// is entailed by the remaining dependencies of the relation is removed, and the FD that takes
/// its place is checked next. Every entailment check is a run of the chase, guarded by
/// `bounder`. The `consumer` closure receives the cover after every removal.
///
/// The MVDs of `relation` take part in every entailment check but are not reduced.
///
/// ```rust
/// use tableau_deps::{attrs, fd, syntax::Relation};
/// use tableau_chase::chase::{bounder::RoundLimit, cover::minimal_cover};
///
/// let relation = Relation::new("R", attrs![A, B, C])
///     .with_fds(vec![fd!(A -> B), fd!(B -> C), fd!(A -> C)]);
///
/// let cover = minimal_cover(&relation, &RoundLimit::default(), |_| {}).unwrap();
/// assert_eq!(vec![fd!(A -> B), fd!(B -> C)], cover);
/// ```
pub fn minimal_cover<B: Bounder>(
    relation: &Relation,
    bounder: &B,
    mut consumer: impl FnMut(&[FD]),
) -> Result<Vec<FD>, Error> {
    let mut cover = relation.clone();
    let mut position = 0;

    while position < cover.fds().len() {
        let fd = cover.fds()[position].clone();
        let rest = cover.without_fd(position);
        let query = Query::FdEntailment(fd.clone());

        if decide(&Seeder, &rest, &query, bounder, |_, _| {})?.answer() {
            info!(event = REDUNDANT, dependency = %fd);
            cover = rest;
            consumer(cover.fds());
        } else {
            info!(event = KEPT, dependency = %fd);
            position += 1;
        }
    }

    Ok(cover.fds().to_vec())
}
