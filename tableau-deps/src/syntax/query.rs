/*! Defines the questions (queries) that are asked about a relation. */
use super::{Error, Fragment, FD, MVD};
use itertools::Itertools;
use std::{fmt, str::FromStr};

/// Is the tag of a [`Query`], naming the kind of question being asked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Task {
    FdEntailment,
    MvdEntailment,
    LosslessJoin,
    MinimalCover,
}

impl FromStr for Task {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_ref() {
            "fd_entailment" => Ok(Task::FdEntailment),
            "mvd_entailment" => Ok(Task::MvdEntailment),
            "lossless_join" => Ok(Task::LosslessJoin),
            "minimal_cover" => Ok(Task::MinimalCover),
            _ => Err(Error::UnsupportedTask { task: s.into() }),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let tag = match self {
            Task::FdEntailment => "fd_entailment",
            Task::MvdEntailment => "mvd_entailment",
            Task::LosslessJoin => "lossless_join",
            Task::MinimalCover => "minimal_cover",
        };
        write!(f, "{}", tag)
    }
}

/// Is a question about the dependencies of a relation, carrying exactly the parameters of
/// its task.
#[derive(Clone, PartialEq, Debug)]
pub enum Query {
    /// Is the given functional dependency entailed by the dependencies of the relation?
    FdEntailment(FD),

    /// Is the given multivalued dependency entailed by the dependencies of the relation?
    MvdEntailment(MVD),

    /// Is the decomposition of the relation into the given fragments lossless?
    LosslessJoin(Vec<Fragment>),

    /// Which functional dependencies of the relation form a minimal cover?
    MinimalCover,
}

impl Query {
    /// Returns the task of the query.
    pub fn task(&self) -> Task {
        match self {
            Query::FdEntailment(_) => Task::FdEntailment,
            Query::MvdEntailment(_) => Task::MvdEntailment,
            Query::LosslessJoin(_) => Task::LosslessJoin,
            Query::MinimalCover => Task::MinimalCover,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Query::FdEntailment(fd) => write!(f, "{}: {}", self.task(), fd),
            Query::MvdEntailment(mvd) => write!(f, "{}: {}", self.task(), mvd),
            Query::LosslessJoin(fragments) => {
                write!(f, "{}: {}", self.task(), fragments.iter().join(" ⋈ "))
            }
            Query::MinimalCover => write!(f, "{}", self.task()),
        }
    }
}
