//! Error types for decoding and validating publication rows.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Row-level errors never abort a dataset pass; only [`DatasetError`] can stop a read.

use std::fmt;

/// Syntax faults in a bracketed list cell such as `['a', 'b']`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Cell does not start with `[`
    #[error("expected '[' at start of list")]
    MissingOpenBracket,

    /// Input ended before the closing `]`
    #[error("missing closing ']'")]
    MissingCloseBracket,

    /// A quoted item was never closed
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote
        offset: usize,
    },

    /// Something other than a quoted item, comma or bracket
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar {
        /// Offending character
        found: char,
        /// Byte offset of the character
        offset: usize,
    },

    /// A `\x`, `\u` or `\U` escape with bad hex digits or an invalid code point
    #[error("invalid escape sequence at offset {offset}")]
    InvalidEscape {
        /// Byte offset of the backslash
        offset: usize,
    },

    /// Non-whitespace content after the closing `]`
    #[error("trailing input after ']' at offset {offset}")]
    TrailingInput {
        /// Byte offset of the first trailing character
        offset: usize,
    },
}

/// Why a single cell could not be decoded.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Column is absent from the raw row
    #[error("column is missing")]
    MissingColumn,

    /// Bracketed list cell is malformed
    #[error("malformed list: {0}")]
    MalformedList(#[from] ListError),

    /// Cell is not a floating point number
    #[error("not a number: {0:?}")]
    InvalidFloat(String),

    /// Cell parsed to infinity
    #[error("non-finite number: {0:?}")]
    NonFiniteFloat(String),

    /// Cell is neither `True` nor `False`
    #[error("expected True or False, got {0:?}")]
    InvalidBool(String),
}

/// A raw cell that cannot be converted to its declared semantic type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("column '{column}': {kind}")]
pub struct DecodeError {
    /// Column holding the offending cell
    pub column: &'static str,
    /// What went wrong
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    /// Create a decode error for a column.
    #[must_use]
    pub const fn new(column: &'static str, kind: DecodeErrorKind) -> Self {
        Self { column, kind }
    }

    /// Create a missing column error.
    #[must_use]
    pub const fn missing(column: &'static str) -> Self {
        Self::new(column, DecodeErrorKind::MissingColumn)
    }
}

/// Business constraint that a decoded record breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Required field is empty
    Missing,
    /// `publication_id` lacks the `PB:` prefix
    MissingPrefix,
    /// `publication_id` has the prefix but not a digit-only suffix
    MalformedId,
    /// `url` is not an absolute URL with a host
    InvalidUrl,
    /// `url` uses a scheme outside the configured allow-list
    DisallowedScheme,
    /// `citations_count` is below zero
    NegativeCitations,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Missing => "required value is empty",
            Self::MissingPrefix => "missing 'PB:' prefix",
            Self::MalformedId => "expected digits after 'PB:'",
            Self::InvalidUrl => "not a valid absolute URL",
            Self::DisallowedScheme => "URL scheme not allowed",
            Self::NegativeCitations => "must not be negative",
        };
        f.write_str(text)
    }
}

/// One (field, violation-kind) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Violation {
    /// Field that failed the check
    pub field: &'static str,
    /// Kind of failure
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// A decoded record that violates one or more business constraints.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{} violation(s): {}", .violations.len(), join_violations(.violations))]
pub struct ValidationError {
    /// Every violation found, in check order
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Returns true if any violation concerns `field`.
    #[must_use]
    pub fn has(&self, field: &str, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.field == field && v.kind == kind)
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Everything that can reject a single row.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowError {
    /// CSV reader rejected the row (wrong field count, bad UTF-8)
    #[error("CSV error: {0}")]
    Csv(String),

    /// Cell could not be decoded
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Record breaks a business constraint
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Id was already seen earlier in the dataset
    #[error("duplicate publication_id {publication_id} (first seen in row {first_row})")]
    DuplicateId {
        /// The repeated id
        publication_id: String,
        /// Row index of the first occurrence
        first_row: usize,
    },
}

// `csv::Error` is neither `Clone` nor `PartialEq`, so only its message is kept.
impl From<csv::Error> for RowError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Header row does not carry the documented columns.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// Documented columns absent from the header
    #[error("missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    /// All columns present but not in documented order
    #[error("column {position} is '{found}', expected '{expected}'")]
    OutOfOrder {
        /// Zero-based header position
        position: usize,
        /// Documented column for that position
        expected: &'static str,
        /// Column actually found
        found: String,
    },
}

/// Errors that stop reading a dataset.
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// Underlying CSV reader or writer failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row is unusable
    #[error("header error: {0}")]
    Header(#[from] HeaderError),
}

/// Result type alias for cell and row decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type alias for dataset reads and writes.
pub type DatasetResult<T> = Result<T, DatasetError>;
