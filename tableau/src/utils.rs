use crate::{
    constants::*,
    terminal::{Style, Stylus},
};
use anyhow::Error;
use itertools::Itertools;
use std::{fs, path::Path};
use tableau_chase::chase::{Outcome, Table};
use tableau_deps::{document::Document, syntax::FD};

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new(color);
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_RELATION, Style::new().foreground(252));
        stylus.insert_style(STYLE_TABLE, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_POSITIVE,
            Style::new()
                .foreground(term::color::GREEN)
                .attribute(term::Attr::Bold),
        );
        stylus.insert_style(
            STYLE_NEGATIVE,
            Style::new()
                .foreground(term::color::BRIGHT_RED)
                .attribute(term::Attr::Bold),
        );
    }

    stylus
}

pub(crate) fn read_document(path: &Path) -> Result<Document, Error> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::new(e).context("failed to read the input file"))?;

    contents
        .parse()
        .map_err(|e| Error::new(e).context("failed to parse the input document"))
}

pub(crate) fn print_document(document: &Document, stylus: &Stylus) {
    stylus.set(STYLE_INFO);
    println!("Relation:");
    stylus.set(STYLE_RELATION);
    print!("{}", document.relation);
    println!();

    stylus.set(STYLE_INFO);
    println!("Query:");
    stylus.set(STYLE_RELATION);
    println!("{}", document.query);
    println!();
}

pub(crate) fn print_outcome(outcome: &Outcome, stylus: &Stylus) {
    print_table(outcome.table(), stylus);

    stylus.set(STYLE_INFO);
    print!("Answer: ");
    if outcome.answer() {
        stylus.set(STYLE_POSITIVE);
        print!("yes");
    } else {
        stylus.set(STYLE_NEGATIVE);
        print!("no");
    }
    stylus.set(STYLE_INFO);
    println!(" (after {} rounds)", outcome.rounds());
    println!();
}

pub(crate) fn print_cover(cover: &[FD], stylus: &Stylus) {
    stylus.set(STYLE_INFO);
    println!("Minimal cover:");
    stylus.set(STYLE_RELATION);
    if cover.is_empty() {
        println!("(empty)");
    } else {
        println!("{}", cover.iter().map(|fd| format!("  {}", fd)).join("\n"));
    }
    println!();
}

fn print_table(table: &Table, stylus: &Stylus) {
    stylus.set(STYLE_INFO);
    println!("Final table:");
    stylus.set(STYLE_TABLE);
    println!("{}", table);
    println!();
}
