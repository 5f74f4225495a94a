//! Loads a [`Relation`] and a [`Query`] from an input document.
//!
//! Documents are JSON trees with a `table` node, describing the relation and its dependencies,
//! and a `dependency_check` node, describing the question being asked. Dependencies may be
//! written either as `lhs`/`rhs` objects or in their textual form (see [`parser`]).
//!
//! **Example**:
//! ```rust
//! use tableau_deps::{document::Document, syntax::Query};
//!
//! let document: Document = r#"{
//!     "table": {
//!         "name": "R",
//!         "attributes": ["A", "B", "C"],
//!         "functional_dependencies": [{"lhs": ["A"], "rhs": ["B"]}, "B -> C"]
//!     },
//!     "dependency_check": {
//!         "type": "fd_entailment",
//!         "functional_dependencies": ["A -> C"]
//!     }
//! }"#.parse().unwrap();
//!
//! assert_eq!(2, document.relation.fds().len());
//! assert_eq!("fd_entailment: A -> C", document.query.to_string());
//! ```
//!
//! [`parser`]: crate::parser
use crate::{
    parser,
    syntax::{self, Attr, Fragment, Query, Relation, Task, FD, MVD},
};
use serde_derive::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Is the type of errors returned when loading a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed document: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid dependency: {source}")]
    Parse {
        #[from]
        source: parser::Error,
    },

    #[error("{source}")]
    Syntax {
        #[from]
        source: syntax::Error,
    },

    #[error("malformed `{task}` query: {reason}")]
    MalformedQuery { task: Task, reason: String },
}

/// Is the content of an input document: the relation under test and the query about it.
#[derive(Clone, PartialEq, Debug)]
pub struct Document {
    pub relation: Relation,
    pub query: Query,
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let repr: DocumentRepr = serde_json::from_str(s)?;
        repr.into_document()
    }
}

#[derive(Deserialize)]
struct DocumentRepr {
    table: TableRepr,
    dependency_check: CheckRepr,
}

#[derive(Deserialize)]
struct TableRepr {
    #[serde(default)]
    name: String,
    attributes: Vec<String>,
    #[serde(default)]
    functional_dependencies: Vec<DependencyRepr>,
    #[serde(default)]
    multivalued_dependencies: Vec<DependencyRepr>,
}

#[derive(Deserialize)]
struct CheckRepr {
    #[serde(rename = "type")]
    task: String,
    #[serde(default)]
    functional_dependencies: Vec<DependencyRepr>,
    #[serde(default)]
    multivalued_dependencies: Vec<DependencyRepr>,
    #[serde(default)]
    tables: Vec<FragmentRepr>,
}

#[derive(Deserialize)]
struct FragmentRepr {
    #[serde(default)]
    name: String,
    attributes: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DependencyRepr {
    Text(String),
    Sides { lhs: Vec<String>, rhs: Vec<String> },
}

impl DependencyRepr {
    fn into_fd(self) -> Result<FD, Error> {
        match self {
            DependencyRepr::Text(text) => Ok(text.parse()?),
            DependencyRepr::Sides { lhs, rhs } => Ok(FD::new(attrs(lhs), attrs(rhs))),
        }
    }

    fn into_mvd(self) -> Result<MVD, Error> {
        match self {
            DependencyRepr::Text(text) => Ok(text.parse()?),
            DependencyRepr::Sides { lhs, rhs } => Ok(MVD::new(attrs(lhs), attrs(rhs))),
        }
    }
}

fn attrs(names: Vec<String>) -> Vec<Attr> {
    names.into_iter().map(Attr::from).collect()
}

impl DocumentRepr {
    fn into_document(self) -> Result<Document, Error> {
        let TableRepr {
            name,
            attributes,
            functional_dependencies,
            multivalued_dependencies,
        } = self.table;

        let fds = functional_dependencies
            .into_iter()
            .map(DependencyRepr::into_fd)
            .collect::<Result<Vec<_>, _>>()?;
        let mvds = multivalued_dependencies
            .into_iter()
            .map(DependencyRepr::into_mvd)
            .collect::<Result<Vec<_>, _>>()?;
        let relation = Relation::new(name, attrs(attributes))
            .with_fds(fds)
            .with_mvds(mvds);

        let query = self.dependency_check.into_query()?;
        Ok(Document { relation, query })
    }
}

impl CheckRepr {
    fn into_query(self) -> Result<Query, Error> {
        let task: Task = self.task.parse()?;
        let malformed = |reason: &str| Error::MalformedQuery {
            task,
            reason: reason.into(),
        };

        match task {
            Task::FdEntailment => {
                let mut fds = self.functional_dependencies;
                if fds.len() != 1 {
                    return Err(malformed("expecting exactly one functional dependency"));
                }
                Ok(Query::FdEntailment(fds.remove(0).into_fd()?))
            }
            Task::MvdEntailment => {
                let mut mvds = self.multivalued_dependencies;
                if mvds.len() != 1 {
                    return Err(malformed("expecting exactly one multivalued dependency"));
                }
                Ok(Query::MvdEntailment(mvds.remove(0).into_mvd()?))
            }
            Task::LosslessJoin => {
                if self.tables.is_empty() {
                    return Err(malformed("expecting at least one table"));
                }
                let fragments = self
                    .tables
                    .into_iter()
                    .map(|t| Fragment::new(t.name, attrs(t.attributes)))
                    .collect();
                Ok(Query::LosslessJoin(fragments))
            }
            Task::MinimalCover => Ok(Query::MinimalCover),
        }
    }
}
