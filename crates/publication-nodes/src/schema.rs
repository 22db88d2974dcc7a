//! Static declaration of the `nodes.csv` columns.

use crate::error::HeaderError;

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Plain text, passed through unchanged.
    String,
    /// Floating point; empty or `nan` means absent.
    Float,
    /// Literal `True`/`False`.
    Boolean,
    /// Sequence of strings encoded in one cell as `['a', 'b']`.
    EncodedListOfString,
}

/// One documented column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header name.
    pub name: &'static str,
    /// Semantic type.
    pub ty: ColumnType,
    /// Whether an empty cell means "absent".
    pub nullable: bool,
}

const fn column(name: &'static str, ty: ColumnType, nullable: bool) -> Column {
    Column { name, ty, nullable }
}

pub const PUBLICATION_ID: &str = "publication_id";
pub const URL: &str = "url";
pub const TITLE: &str = "title";
pub const TYPE: &str = "type";
pub const AUTHORS: &str = "authors";
pub const YEAR: &str = "year";
pub const ABSTRACT: &str = "abstract";
pub const CITATIONS_COUNT: &str = "citations_count";
pub const TOPICS: &str = "topics";
pub const RAW: &str = "raw";

/// The ten columns in documented header order.
pub const COLUMNS: [Column; 10] = [
    column(PUBLICATION_ID, ColumnType::String, false),
    column(URL, ColumnType::String, false),
    column(TITLE, ColumnType::String, false),
    column(TYPE, ColumnType::String, false),
    column(AUTHORS, ColumnType::EncodedListOfString, false),
    column(YEAR, ColumnType::Float, true),
    column(ABSTRACT, ColumnType::String, true),
    column(CITATIONS_COUNT, ColumnType::Float, true),
    column(TOPICS, ColumnType::EncodedListOfString, false),
    column(RAW, ColumnType::Boolean, false),
];

/// Look up a column by header name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Column> {
    COLUMNS.iter().find(|c| c.name == name)
}

/// Documented position of a column.
#[must_use]
pub fn position(name: &str) -> Option<usize> {
    COLUMNS.iter().position(|c| c.name == name)
}

/// Header names in documented order.
pub fn header() -> impl Iterator<Item = &'static str> {
    COLUMNS.iter().map(|c| c.name)
}

/// Check a header row against the documented columns.
///
/// Every documented column must be present. With `strict_order` they must
/// also appear first and in documented order. Unknown columns are ignored.
pub fn check_header<S: AsRef<str>>(found: &[S], strict_order: bool) -> Result<(), HeaderError> {
    let missing: Vec<&'static str> = COLUMNS
        .iter()
        .map(|c| c.name)
        .filter(|name| !found.iter().any(|f| f.as_ref() == *name))
        .collect();

    if !missing.is_empty() {
        return Err(HeaderError::MissingColumns(missing));
    }

    for extra in found.iter().map(|f| f.as_ref()).filter(|f| lookup(f).is_none()) {
        tracing::warn!(column = %extra, "Ignoring unknown column");
    }

    if strict_order {
        for (position, (expected, found)) in header().zip(found.iter()).enumerate() {
            if expected != found.as_ref() {
                return Err(HeaderError::OutOfOrder {
                    position,
                    expected,
                    found: found.as_ref().to_string(),
                });
            }
        }
    }

    Ok(())
}
