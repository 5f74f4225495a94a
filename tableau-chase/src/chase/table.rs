//! Implements symbolic tables (tableaux), the data structure that the chase operates on.
use super::Schema;
use itertools::Itertools;
use std::{fmt, iter::FromIterator};
use tableau_deps::syntax::Attr;

/// Is a uniquely labeled placeholder for a value that is not (yet) determined. A variable is
/// labeled by the attribute of its column and a generation tag; two variables are equal only if
/// both their attributes and tags are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var {
    attr: Attr,
    tag: u32,
}

impl Var {
    pub fn new(attr: Attr, tag: u32) -> Self {
        Self { attr, tag }
    }

    #[inline(always)]
    pub fn attr(&self) -> &Attr {
        &self.attr
    }

    #[inline(always)]
    pub fn tag(&self) -> u32 {
        self.tag
    }
}

impl fmt::Display for Var {
    /// Variables of attributes named by uppercase letters only print in the customary form, the
    /// lowercased name followed by the tag (`b1` for `B` with tag 1). Any other name prints as is,
    /// separated from the tag by `#`, so that no two distinct variables print alike.
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let name = self.attr.name();
        if name.chars().all(|c| c.is_ascii_uppercase()) {
            write!(f, "{}{}", name.to_ascii_lowercase(), self.tag)
        } else {
            write!(f, "{}#{}", name, self.tag)
        }
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Is the content of a cell of a symbolic table.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    /// Is the single distinguished value, standing for a fully determined value. It is equal
    /// to itself in every column of the table.
    Distinguished,

    /// Is a variable, standing for a value that is not constrained.
    Variable(Var),
}

impl Cell {
    /// Returns true if the cell holds the distinguished value.
    #[inline(always)]
    pub fn is_distinguished(&self) -> bool {
        matches!(self, Cell::Distinguished)
    }
}

impl From<Var> for Cell {
    fn from(var: Var) -> Self {
        Cell::Variable(var)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Cell::Distinguished => write!(f, "a"),
            Cell::Variable(var) => write!(f, "{}", var),
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Is a symbolic tuple: a row of cells, one per column of the schema.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Row(Vec<Cell>);

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// Returns the cells of the row in column order.
    #[inline(always)]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the cells of the row at `columns`, in the order of `columns`.
    pub fn project(&self, columns: &[usize]) -> Vec<Cell> {
        columns.iter().map(|&c| self.0[c].clone()).collect()
    }

    /// Returns a copy of the row where the cells at `columns` are replaced by `values`.
    pub fn replace(&self, columns: &[usize], values: &[Cell]) -> Row {
        assert_eq!(columns.len(), values.len());

        let mut cells = self.0.clone();
        columns
            .iter()
            .zip(values.iter())
            .for_each(|(&c, v)| cells[c] = v.clone());
        Row(cells)
    }

    /// Returns true if every cell of the row is distinguished.
    pub fn is_universal(&self) -> bool {
        self.0.iter().all(Cell::is_distinguished)
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Row(iter.into_iter().collect())
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Is an ordered collection of rows over a fixed [`Schema`].
///
/// **Note**: rows are never removed from a table; the FD step rewrites cells in place and the
/// MVD step appends new rows at the end.
#[derive(Clone, PartialEq)]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table over `schema`.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[inline(always)]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell at `row` and `column`.
    #[inline(always)]
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        &self.rows[row].0[column]
    }

    /// Appends `row` to the table. The row must have one cell per column of the schema.
    pub fn push(&mut self, row: Row) {
        assert_eq!(self.schema.len(), row.len());
        self.rows.push(row);
    }

    /// Returns true if the table has a row equal to `row`.
    pub fn contains(&self, row: &Row) -> bool {
        self.rows.contains(row)
    }

    /// Sets the cell in `column` of every row in `rows` to `value` and returns the number of
    /// cells that changed. Rows outside of `rows` are left untouched.
    pub(crate) fn overwrite(&mut self, rows: &[usize], column: usize, value: &Cell) -> usize {
        let mut count = 0;
        for &row in rows {
            let cell = &mut self.rows[row].0[column];
            if *cell != *value {
                *cell = value.clone();
                count += 1;
            }
        }
        count
    }
}

impl Extend<Row> for Table {
    fn extend<I: IntoIterator<Item = Row>>(&mut self, iter: I) {
        iter.into_iter().for_each(|row| self.push(row));
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let header = self.schema.attributes().iter().map(Attr::to_string);
        let body = self
            .rows
            .iter()
            .map(|row| row.cells().iter().map(Cell::to_string).collect_vec())
            .collect_vec();
        let widths = header
            .clone()
            .enumerate()
            .map(|(c, h)| {
                body.iter()
                    .map(|r| r[c].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect_vec();

        let line = |cells: Vec<String>| {
            cells
                .iter()
                .zip(widths.iter())
                .map(|(s, w)| format!("{:<w$}", s, w = *w))
                .join(" ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![line(header.collect())];
        lines.extend(body.into_iter().map(line));
        write!(f, "{}", lines.join("\n"))
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.rows.iter().join(", "))
    }
}
