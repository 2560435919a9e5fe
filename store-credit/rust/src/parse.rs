use std::{fmt, io::BufRead, str::FromStr};

use thiserror::Error;

use crate::store::{Item, Store};

/// The line of a case a [`ParseError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Credit,
    ItemCount,
    Values,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Credit => "credit",
            Field::ItemCount => "item count",
            Field::Values => "item values",
        };
        f.write_str(name)
    }
}

/// Malformed input. Any of these aborts the whole run.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("could not read number of cases")]
    MissingCaseCount,
    #[error("could not convert number of cases {0:?} to an integer")]
    InvalidCaseCount(String),
    #[error("case #{case}: missing {field} line")]
    MissingLine { case: usize, field: Field },
    #[error("case #{case}: {field} token {token:?} is not an integer")]
    InvalidNumber { case: usize, field: Field, token: String },
    #[error("case #{case}: expected {expected} item values, found {found}")]
    ItemCountMismatch { case: usize, expected: usize, found: usize },
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

type Result<T> = std::result::Result<T, ParseError>;

// Upper bound on up-front allocation, the declared case count is untrusted.
const MAX_PREALLOCATED_CASES: usize = 1024;

/// Reads the case count followed by that many three-line store blocks.
///
/// Lines after the last declared case are ignored.
pub fn parse_input<R: BufRead>(reader: R) -> Result<Vec<Store>> {
    let mut lines = LineReader::new(reader);

    let count = match lines.next_line()? {
        Some(line) => parse_number::<usize>(line).ok_or_else(|| ParseError::InvalidCaseCount(line.trim().to_owned()))?,
        None => return Err(ParseError::MissingCaseCount),
    };

    let mut stores = Vec::with_capacity(count.min(MAX_PREALLOCATED_CASES));
    for case in 1..=count {
        stores.push(parse_store(&mut lines, case)?);
    }

    Ok(stores)
}

fn parse_store<R: BufRead>(lines: &mut LineReader<R>, case: usize) -> Result<Store> {
    let credit = lines.required_number::<i64>(case, Field::Credit)?;
    let item_count = lines.required_number::<usize>(case, Field::ItemCount)?;

    let values = match lines.next_line()? {
        Some(line) => parse_values(line, case)?,
        // An empty store may omit its values line at the very end of the input.
        None if item_count == 0 => Vec::new(),
        None => {
            return Err(ParseError::MissingLine {
                case,
                field: Field::Values,
            })
        }
    };

    if values.len() != item_count {
        return Err(ParseError::ItemCountMismatch {
            case,
            expected: item_count,
            found: values.len(),
        });
    }

    let items = values
        .into_iter()
        .enumerate()
        .map(|(position, value)| Item::new(value, position))
        .collect();

    Ok(Store::new(credit, items))
}

fn parse_values(line: &str, case: usize) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                case,
                field: Field::Values,
                token: token.to_owned(),
            })
        })
        .collect()
}

#[inline]
fn parse_number<T: FromStr>(s: &str) -> Option<T> {
    s.trim().parse::<T>().ok()
}

struct LineReader<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::with_capacity(256),
        }
    }

    /// `None` once the input is exhausted.
    fn next_line(&mut self) -> Result<Option<&str>> {
        self.buffer.clear();
        let read = self.reader.read_line(&mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(&self.buffer))
    }

    fn required_number<T: FromStr>(&mut self, case: usize, field: Field) -> Result<T> {
        let Some(line) = self.next_line()? else {
            return Err(ParseError::MissingLine { case, field });
        };

        parse_number::<T>(line).ok_or_else(|| ParseError::InvalidNumber {
            case,
            field,
            token: line.trim().to_owned(),
        })
    }
}
