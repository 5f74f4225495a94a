use crate::chase::{Cell, Row, Schema, Table, Var};
use tableau_deps::syntax::Attr;

// Cells are written the way they are displayed: `a` is the distinguished value and a
// lowercase attribute name followed by a tag (e.g. `b1`) is a variable.
pub fn cell(s: &str) -> Cell {
    if s == "a" {
        return Cell::Distinguished;
    }
    let split = s
        .find(|c: char| c.is_ascii_digit())
        .expect("variable without a tag");
    let tag = s[split..].parse().expect("invalid variable tag");
    Var::new(Attr::from(s[..split].to_uppercase()), tag).into()
}

pub fn var(attr: &str, tag: u32) -> Cell {
    Var::new(Attr::from(attr), tag).into()
}

pub fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| cell(c)).collect()
}

pub fn table(attrs: &[Attr], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(Schema::build(attrs));
    rows.iter().for_each(|r| table.push(row(r)));
    table
}
