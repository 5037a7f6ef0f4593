//! Plain-text interval lists.
//!
//! One interval per line as `start finish weight`, separated by whitespace.
//! `#` starts a comment running to the end of the line; blank and
//! comment-only lines are skipped.

use thiserror::Error;

use crate::log_checks;
use crate::models::{IntervalError, WeightedInterval};

/// Errors that can occur while reading an interval list.
///
/// Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected 3 fields (start finish weight), found {found}")]
    WrongFieldCount { line: usize, found: usize },
    #[error("line {line}: {token:?} is not a number")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: {source}")]
    InvalidInterval { line: usize, source: IntervalError },
}

/// Parse a single line.
///
/// Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_line(
    line_number: usize,
    line: &str,
) -> Result<Option<WeightedInterval>, ParseError> {
    let content = match line.split_once('#') {
        Some((before, _comment)) => before,
        None => line,
    };

    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() != 3 {
        return Err(ParseError::WrongFieldCount {
            line: line_number,
            found: fields.len(),
        });
    }

    let parse_number = |token: &str| {
        token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
            line: line_number,
            token: token.to_string(),
        })
    };
    let start = parse_number(fields[0])?;
    let finish = parse_number(fields[1])?;
    let weight = parse_number(fields[2])?;

    WeightedInterval::new(start, finish, weight)
        .map(Some)
        .map_err(|source| ParseError::InvalidInterval {
            line: line_number,
            source,
        })
}

/// Parse every line of `text`, stopping at the first malformed line.
pub fn parse_intervals(text: &str, verbosity: u8) -> Result<Vec<WeightedInterval>, ParseError> {
    let mut intervals = Vec::new();

    for (index, line) in text.lines().enumerate() {
        match parse_line(index + 1, line)? {
            Some(weighted) => intervals.push(weighted),
            None => log_checks!(verbosity, "Skipping line {}: no fields", index + 1),
        }
    }

    Ok(intervals)
}

/// Render intervals in the same format `parse_intervals` reads.
pub fn format_intervals<'a, I>(intervals: I) -> String
where
    I: IntoIterator<Item = &'a WeightedInterval>,
{
    intervals
        .into_iter()
        .map(|weighted| format!("{weighted}\n"))
        .collect()
}
