//! Implements a parser for dependencies in their textual form.
//!
//! The module provides a parser by implementing [`FromStr`] for [`FD`] and [`MVD`]. The parser
//! is often used implicitly through the [`parse`] method.
//!
//! **Example**:
//! ```rust
//! use tableau_deps::syntax::{FD, MVD};
//!
//! let fd: FD = "B, A -> C".parse().unwrap();
//! assert_eq!("A, B -> C", fd.to_string());
//!
//! let mvd: MVD = "A ->> B, C".parse().unwrap();
//! assert_eq!("A ->> B, C", mvd.to_string());
//! ```
//!
//! [`FD`]: crate::syntax::FD
//! [`MVD`]: crate::syntax::MVD
//! [`FromStr`]: std::str::FromStr
//! [`parse`]: ::std::str#parse
use super::syntax::{FD, MVD};
use lalrpop_util::ParseError;
use std::{fmt, str::FromStr};
use thiserror::Error;

lalrpop_mod!(pub grammar); // synthesized by LALRPOP

#[derive(PartialEq, Debug)]
pub enum TokenType {
    Comma,
    Arrow,
    DoubleArrow,
    Ident,
    Unknown,
}

impl<S: AsRef<str>> From<S> for TokenType {
    fn from(s: S) -> Self {
        match s.as_ref() {
            "\",\"" => Self::Comma,
            "\"->\"" => Self::Arrow,
            "\"->>\"" => Self::DoubleArrow,
            s if s.starts_with("r#") => Self::Ident,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Comma => "`,`",
            Self::Arrow => "`->`",
            Self::DoubleArrow => "`->>`",
            Self::Ident => "`attribute name`",
            Self::Unknown => "`unknown token`",
        };
        write!(f, "{}", s)
    }
}

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found:?}` at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnrecognizedToken {
        position: Position,
        expected: Vec<TokenType>,
        found: String,
    },
    #[error("invalid token at line {}, column {}", (*.position).line, (*.position).column)]
    InvalidToken { position: Position },
    #[error("unexpected end of input at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnrecognizedEOF {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected token `{found:?}` at line {}, column {}", (*.position).line, (*.position).column)]
    ExtraToken { position: Position, found: String },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct Position {
    line: usize,
    column: usize,
}

// Stores source information to retrieve token positions in the source.
struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    fn position(&self, location: usize) -> Position {
        let line = self
            .lines
            .iter()
            .position(|l| location < *l)
            .unwrap_or_else(|| self.lines.len());
        let column = self.source[self.lines[line - 1]..location].chars().count() + 1;

        Position { line, column }
    }

    fn convert_error<T: ToString>(&self, error: ParseError<usize, T, Error>) -> Error {
        match error {
            ParseError::InvalidToken { location } => Error::InvalidToken {
                position: self.position(location),
            },
            ParseError::UnrecognizedEOF { location, expected } => Error::UnrecognizedEOF {
                position: self.position(location),
                expected: expected.into_iter().map(From::from).collect(),
            },
            ParseError::UnrecognizedToken { token, expected } => Error::UnrecognizedToken {
                position: self.position(token.0),
                expected: expected.into_iter().map(From::from).collect(),
                found: token.1.to_string(),
            },
            ParseError::ExtraToken { token } => Error::ExtraToken {
                position: self.position(token.0),
                found: token.1.to_string(),
            },
            ParseError::User { error } => error,
        }
    }
}

impl FromStr for FD {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        grammar::FdParser::new()
            .parse(s)
            .map_err(|e| info.convert_error(e))
    }
}

impl FromStr for MVD {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        grammar::MvdParser::new()
            .parse(s)
            .map_err(|e| info.convert_error(e))
    }
}
