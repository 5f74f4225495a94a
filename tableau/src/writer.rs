use crate::constants::INTERMEDIATE_SUFFIX;
use anyhow::Error;
use serde_derive::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tableau_chase::chase::{Outcome, Table};
use tableau_deps::syntax::{Attr, Dependency, FD};

#[derive(Serialize, PartialEq, Debug)]
struct TableDoc {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl From<&Table> for TableDoc {
    fn from(table: &Table) -> Self {
        Self {
            header: table
                .schema()
                .attributes()
                .iter()
                .map(|a| a.to_string())
                .collect(),
            rows: table
                .rows()
                .iter()
                .map(|r| r.cells().iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct SnapshotDoc {
    table: TableDoc,
    step_number: usize,
}

#[derive(Serialize)]
struct ResultDoc {
    table: TableDoc,
    answer: &'static str,
}

#[derive(Serialize)]
struct FdDoc {
    lhs: Vec<String>,
    rhs: Vec<String>,
}

#[derive(Serialize)]
struct CoverDoc {
    minimum_cover: Vec<FdDoc>,
}

/// Returns the path of the snapshot of `round`, next to `output`: `out.json` becomes
/// `out_intermediate_<round>.json`.
pub(crate) fn intermediate_path(output: &Path, round: usize) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match output.extension() {
        Some(ext) => format!(
            "{}{}{}.{}",
            stem,
            INTERMEDIATE_SUFFIX,
            round,
            ext.to_string_lossy()
        ),
        None => format!("{}{}{}", stem, INTERMEDIATE_SUFFIX, round),
    };
    output.with_file_name(name)
}

pub(crate) fn write_snapshot(output: &Path, round: usize, table: &Table) -> Result<(), Error> {
    let doc = SnapshotDoc {
        table: table.into(),
        step_number: round,
    };
    write_json(&intermediate_path(output, round), &doc)
}

pub(crate) fn write_result(output: &Path, outcome: &Outcome) -> Result<(), Error> {
    let doc = ResultDoc {
        table: outcome.table().into(),
        answer: if outcome.answer() { "yes" } else { "no" },
    };
    write_json(output, &doc)
}

pub(crate) fn write_cover(output: &Path, cover: &[FD]) -> Result<(), Error> {
    let doc = CoverDoc {
        minimum_cover: cover
            .iter()
            .map(|fd| FdDoc {
                lhs: names(fd.lhs()),
                rhs: names(fd.rhs()),
            })
            .collect(),
    };
    write_json(output, &doc)
}

fn names(attrs: &[Attr]) -> Vec<String> {
    attrs.iter().map(Attr::to_string).collect()
}

fn write_json<T: serde::Serialize>(path: &Path, doc: &T) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| Error::new(e).context("failed to serialize the output document"))?;
    fs::write(path, json).map_err(|e| {
        Error::new(e).context(format!("failed to write the output file `{}`", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableau_chase::chase::{bounder::RoundLimit, decide, preprocessor::Seeder};
    use tableau_deps::{
        attrs, fd,
        syntax::{Query, Relation},
    };

    #[test]
    fn test_intermediate_path() {
        assert_eq!(
            PathBuf::from("output_intermediate_0.json"),
            intermediate_path(Path::new("output.json"), 0)
        );
        assert_eq!(
            PathBuf::from("out/result_intermediate_12.json"),
            intermediate_path(Path::new("out/result.json"), 12)
        );
        assert_eq!(
            PathBuf::from("result_intermediate_3"),
            intermediate_path(Path::new("result"), 3)
        );
    }

    #[test]
    fn test_write_documents() {
        let relation = Relation::new("R", attrs![A, B, C]).with_fds(vec![fd!(A -> B)]);
        let query = Query::FdEntailment(fd!(A -> C));

        let dir = std::env::temp_dir().join(format!("tableau-writer-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let output = dir.join("output.json");

        let outcome = decide(&Seeder, &relation, &query, &RoundLimit::default(), |r, t| {
            write_snapshot(&output, r, t).unwrap()
        })
        .unwrap();
        write_result(&output, &outcome).unwrap();

        let read = |path: PathBuf| -> serde_json::Value {
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
        };
        assert_eq!(
            serde_json::json!({
                "table": {"header": ["A", "B", "C"], "rows": [["a", "a", "a"], ["a", "b1", "c1"]]},
                "step_number": 0
            }),
            read(intermediate_path(&output, 0))
        );
        assert_eq!(
            serde_json::json!({
                "table": {"header": ["A", "B", "C"], "rows": [["a", "a", "a"], ["a", "a", "c1"]]},
                "answer": "no"
            }),
            read(output.clone())
        );

        write_cover(&output, &[fd!(A -> B), fd!(B -> A, C)]).unwrap();
        assert_eq!(
            serde_json::json!({
                "minimum_cover": [
                    {"lhs": ["A"], "rhs": ["B"]},
                    {"lhs": ["B"], "rhs": ["A", "C"]}
                ]
            }),
            read(output.clone())
        );

        let _ = fs::remove_dir_all(&dir);
    }
}
