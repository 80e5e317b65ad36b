//! Error types for sorting, stability verification, input parsing and configuration.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// A sort that could not run to completion. The input is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SortError {
    /// The two-way insertion sort could not obtain its `2n + 1` slot buffer.
    BufferAllocation {
        /// Number of elements being sorted.
        len: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortError::BufferAllocation { len } => write!(
                f,
                "could not allocate the auxiliary buffer of 2 * {len} + 1 slots"
            ),
        }
    }
}

impl Error for SortError {}

/// The sorted output is not a permutation of the original input.
///
/// Distinct from a "not stable" result, this means the sort lost or duplicated elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    LengthMismatch { original: usize, sorted: usize },
    /// A record of the original input does not appear in the sorted output.
    MissingRecord { position: usize },
    /// A record appears more than once in the sorted output.
    DuplicateRecord { position: usize },
}

impl Display for VerifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::LengthMismatch { original, sorted } => write!(
                f,
                "sorted output has {sorted} records, original input has {original}"
            ),
            VerifyError::MissingRecord { position } => write!(
                f,
                "record from input position {position} is missing in the sorted output"
            ),
            VerifyError::DuplicateRecord { position } => write!(
                f,
                "record from input position {position} appears more than once in the sorted output"
            ),
        }
    }
}

impl Error for VerifyError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No tab separating the date from the name.
    MissingField,
    /// Date is not `YYYY-MM-DD` or out of range.
    InvalidDate(String),
    /// Name does not consist of exactly three tokens.
    InvalidName(String),
}

/// A malformed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::MissingField => write!(f, "expected <date>\\t<name>"),
            ParseErrorKind::InvalidDate(date) => write!(f, "invalid date '{date}'"),
            ParseErrorKind::InvalidName(name) => {
                write!(f, "invalid name '{name}', expected 'Last First Middle'")
            }
        }
    }
}

impl Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: String, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value '{value}' for {key}")
            }
        }
    }
}

impl Error for ConfigError {}
