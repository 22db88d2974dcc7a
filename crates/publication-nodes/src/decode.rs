//! Raw row to [`PublicationRecord`] decoding.

use crate::codec::{decode_bool, decode_float, decode_list};
use crate::error::{DecodeError, DecodeErrorKind, DecodeResult};
use crate::models::{PublicationRecord, RawRow};
use crate::schema;

/// Decode one raw row. The first failing column is reported.
pub fn decode_row(row: &RawRow) -> DecodeResult<PublicationRecord> {
    let record = PublicationRecord {
        publication_id: text(row, schema::PUBLICATION_ID)?,
        url: text(row, schema::URL)?,
        title: text(row, schema::TITLE)?,
        r#type: text(row, schema::TYPE)?,
        authors: list(row, schema::AUTHORS)?,
        year: float(row, schema::YEAR)?,
        r#abstract: nullable_text(row, schema::ABSTRACT)?,
        citations_count: float(row, schema::CITATIONS_COUNT)?,
        topics: list(row, schema::TOPICS)?,
        raw: boolean(row, schema::RAW)?,
    };

    tracing::debug!(publication_id = %record.publication_id, "Decoded row");
    Ok(record)
}

fn cell<'a>(row: &'a RawRow, column: &'static str) -> DecodeResult<&'a str> {
    row.get(column).ok_or_else(|| DecodeError::missing(column))
}

fn with_column<T>(column: &'static str, result: Result<T, DecodeErrorKind>) -> DecodeResult<T> {
    result.map_err(|kind| DecodeError::new(column, kind))
}

fn text(row: &RawRow, column: &'static str) -> DecodeResult<String> {
    cell(row, column).map(str::to_string)
}

fn nullable_text(row: &RawRow, column: &'static str) -> DecodeResult<Option<String>> {
    let value = cell(row, column)?;
    Ok((!value.is_empty()).then(|| value.to_string()))
}

fn list(row: &RawRow, column: &'static str) -> DecodeResult<Vec<String>> {
    with_column(column, decode_list(cell(row, column)?).map_err(DecodeErrorKind::from))
}

fn float(row: &RawRow, column: &'static str) -> DecodeResult<Option<f64>> {
    with_column(column, decode_float(cell(row, column)?))
}

fn boolean(row: &RawRow, column: &'static str) -> DecodeResult<bool> {
    with_column(column, decode_bool(cell(row, column)?))
}
