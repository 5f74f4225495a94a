//! Implements the pre-processors that seed the initial table of a run for a given query.
use super::{
    rule::{compile_all, FdRule, MvdRule, Rule},
    Cell, ChaseRun, Error, Goal, PreProcessor, Row, Schema, Table, Var,
};
use tableau_deps::syntax::{difference, intersection, Fragment, Query, Relation, FD, MVD};

/// Is the default pre-processor. It seeds the table of every entailment and lossless-join
/// query as follows:
///
/// * For an FD `X -> Y`, the table has a fully distinguished row and a row that is
/// distinguished on `X` only. The goal is [`Goal::Determined`] over the columns of `Y`.
///
/// * For an MVD `X ->> Y`, the table has a row distinguished on `X ∪ Y` and a row distinguished
/// on `X` and every attribute outside of `Y`. The goal is [`Goal::UniversalRow`].
///
/// * For a decomposition into fragments, the table has one row per fragment, distinguished on
/// the attributes of that fragment. The goal is [`Goal::UniversalRow`].
///
/// Cells that are not distinguished hold fresh variables. The variables of an FD table are
/// tagged `1`; otherwise, they are tagged by the (1-based) row that introduces them.
///
/// A minimal cover is not the answer of a single run (see [`cover`](super::cover)), so
/// `Seeder` fails on [`Query::MinimalCover`] with [`Error::UnsupportedTask`].
pub struct Seeder;

impl PreProcessor for Seeder {
    fn pre_process(&self, relation: &Relation, query: &Query) -> Result<ChaseRun, Error> {
        let schema = Schema::build(relation.attributes());
        let (fd_rules, mvd_rules) = compile_relation(relation, &schema)?;

        let (table, goal) = match query {
            Query::FdEntailment(fd) => seed_fd(fd, schema)?,
            Query::MvdEntailment(mvd) => seed_mvd(mvd, schema)?,
            Query::LosslessJoin(fragments) => seed_fragments(fragments, schema)?,
            Query::MinimalCover => {
                return Err(Error::UnsupportedTask { task: query.task() });
            }
        };

        Ok(ChaseRun::new(fd_rules, mvd_rules, table, goal))
    }
}

/// Is a pre-processor for lossless joins of exactly two fragments `F1` and `F2`. The question
/// is reduced to the entailment of the MVD `(F1 ∩ F2) ->> (F1 ∖ F2)`: the first row is
/// distinguished on both sides of the MVD (that is `F1`) and the second row on its left side and
/// `F2 ∖ F1`. The answers agree with those of [`Seeder`].
///
/// Lossless joins with any other number of fragments fail with [`Error::FragmentCount`]; every
/// other query is seeded by [`Seeder`].
pub struct SimpleSeeder;

impl PreProcessor for SimpleSeeder {
    fn pre_process(&self, relation: &Relation, query: &Query) -> Result<ChaseRun, Error> {
        let fragments = match query {
            Query::LosslessJoin(fragments) => fragments,
            _ => return Seeder.pre_process(relation, query),
        };
        let (first, second) = match fragments.as_slice() {
            [first, second] => (first, second),
            _ => {
                return Err(Error::FragmentCount {
                    found: fragments.len(),
                })
            }
        };

        let schema = Schema::build(relation.attributes());
        let (fd_rules, mvd_rules) = compile_relation(relation, &schema)?;

        let mvd = MVD::new(
            intersection(first.attributes(), second.attributes()),
            difference(first.attributes(), second.attributes()),
        );
        let rule = Rule::compile(&mvd, &schema)?;
        let rest = schema.positions(&difference(second.attributes(), first.attributes()))?;

        let mut table = Table::new(schema);
        let row = seeded_row(table.schema(), 1, |c| {
            rule.lhs().contains(&c) || rule.rhs().contains(&c)
        });
        table.push(row);
        let row = seeded_row(table.schema(), 2, |c| {
            rule.lhs().contains(&c) || rest.contains(&c)
        });
        table.push(row);

        Ok(ChaseRun::new(fd_rules, mvd_rules, table, Goal::UniversalRow))
    }
}

fn compile_relation(
    relation: &Relation,
    schema: &Schema,
) -> Result<(Vec<FdRule>, Vec<MvdRule>), Error> {
    Ok((
        compile_all(relation.fds(), schema)?,
        compile_all(relation.mvds(), schema)?,
    ))
}

fn seed_fd(fd: &FD, schema: Schema) -> Result<(Table, Goal), Error> {
    let rule = Rule::compile(fd, &schema)?;
    let mut table = Table::new(schema);
    let row = seeded_row(table.schema(), 0, |_| true);
    table.push(row);
    let row = seeded_row(table.schema(), 1, |c| rule.lhs().contains(&c));
    table.push(row);

    let goal = Goal::Determined {
        columns: rule.rhs().to_vec(),
    };
    Ok((table, goal))
}

fn seed_mvd(mvd: &MVD, schema: Schema) -> Result<(Table, Goal), Error> {
    let rule = Rule::compile(mvd, &schema)?;
    let mut table = Table::new(schema);
    let row = seeded_row(table.schema(), 1, |c| {
        rule.lhs().contains(&c) || rule.rhs().contains(&c)
    });
    table.push(row);
    let row = seeded_row(table.schema(), 2, |c| {
        rule.lhs().contains(&c) || !rule.rhs().contains(&c)
    });
    table.push(row);

    Ok((table, Goal::UniversalRow))
}

fn seed_fragments(fragments: &[Fragment], schema: Schema) -> Result<(Table, Goal), Error> {
    let columns = fragments
        .iter()
        .map(|fragment| schema.positions(fragment.attributes()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = Table::new(schema);
    for (i, columns) in columns.iter().enumerate() {
        let row = seeded_row(table.schema(), i as u32 + 1, |c| columns.contains(&c));
        table.push(row);
    }
    Ok((table, Goal::UniversalRow))
}

// Builds a row that is distinguished on the columns satisfying `distinguished` and holds
// variables tagged with `tag` elsewhere.
fn seeded_row(schema: &Schema, tag: u32, distinguished: impl Fn(usize) -> bool) -> Row {
    schema
        .attributes()
        .iter()
        .enumerate()
        .map(|(c, attr)| {
            if distinguished(c) {
                Cell::Distinguished
            } else {
                Var::new(attr.clone(), tag).into()
            }
        })
        .collect()
}
