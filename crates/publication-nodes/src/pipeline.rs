//! Dataset pass: decode and validate every row, enforce id uniqueness.
//!
//! Row errors are collected, never raised; the caller decides whether to
//! skip, log or halt.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use crate::config::Config;
use crate::decode::decode_row;
use crate::error::RowError;
use crate::models::{PublicationRecord, RawRow};
use crate::validate::validate_record;

/// Result of processing one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutcome {
    /// Zero-based data row index.
    pub row: usize,
    /// Decoded and validated record, or why it was rejected.
    pub result: Result<PublicationRecord, RowError>,
}

impl RowOutcome {
    /// Check if the row produced a valid record.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

/// Decode and validate a single row.
pub fn process_row(row: &RawRow, config: &Config) -> Result<PublicationRecord, RowError> {
    let record = decode_row(row)?;
    validate_record(&record, config)?;
    Ok(record)
}

/// Anything the dataset pass can take as one row.
///
/// Implemented for plain [`RawRow`]s and for the items of
/// [`crate::csv_io::RowReader`], so reader errors keep their row index.
pub trait IntoRawRow {
    /// Unwrap the row, or report why it cannot be read.
    fn into_raw_row(self) -> Result<RawRow, RowError>;
}

impl IntoRawRow for RawRow {
    fn into_raw_row(self) -> Result<RawRow, RowError> {
        Ok(self)
    }
}

impl IntoRawRow for Result<RawRow, csv::Error> {
    fn into_raw_row(self) -> Result<RawRow, RowError> {
        self.map_err(RowError::from)
    }
}

/// Lazily process rows in order.
///
/// Rows are numbered by position in `rows`, unreadable ones included. With
/// `reject_duplicate_ids`, the second and later rows carrying an
/// already-accepted id fail with [`RowError::DuplicateId`].
pub fn process_rows<'c, I>(rows: I, config: &'c Config) -> ProcessRows<'c, I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoRawRow,
{
    ProcessRows { rows: rows.into_iter().enumerate(), config, seen: HashMap::new() }
}

/// Iterator returned by [`process_rows`].
pub struct ProcessRows<'c, I> {
    rows: std::iter::Enumerate<I>,
    config: &'c Config,
    seen: HashMap<String, usize>,
}

impl<I> Iterator for ProcessRows<'_, I>
where
    I: Iterator,
    I::Item: IntoRawRow,
{
    type Item = RowOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, item) = self.rows.next()?;

        let result = item.into_raw_row().and_then(|raw| process_row(&raw, self.config));
        let result = result.and_then(|record| {
            if !self.config.reject_duplicate_ids {
                return Ok(record);
            }
            match self.seen.entry(record.publication_id.clone()) {
                Entry::Occupied(first) => Err(RowError::DuplicateId {
                    publication_id: record.publication_id,
                    first_row: *first.get(),
                }),
                Entry::Vacant(slot) => {
                    slot.insert(row);
                    Ok(record)
                }
            }
        });

        if let Err(e) = &result {
            tracing::warn!(row, error = %e, "Row rejected");
        }

        Some(RowOutcome { row, result })
    }
}

/// Counts over a dataset pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetReport {
    pub total: usize,
    pub valid: usize,
    pub csv_errors: usize,
    pub decode_errors: usize,
    pub validation_errors: usize,
    pub duplicates: usize,
}

impl DatasetReport {
    /// Add one outcome to the counts.
    pub fn record(&mut self, outcome: &RowOutcome) {
        self.total += 1;
        match &outcome.result {
            Ok(_) => self.valid += 1,
            Err(RowError::Csv(_)) => self.csv_errors += 1,
            Err(RowError::Decode(_)) => self.decode_errors += 1,
            Err(RowError::Validation(_)) => self.validation_errors += 1,
            Err(RowError::DuplicateId { .. }) => self.duplicates += 1,
        }
    }

    /// Number of rejected rows.
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.total - self.valid
    }
}

impl fmt::Display for DatasetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows: {} valid, {} CSV errors, {} decode errors, {} validation errors, {} duplicates",
            self.total,
            self.valid,
            self.csv_errors,
            self.decode_errors,
            self.validation_errors,
            self.duplicates
        )
    }
}

/// Drain outcomes into a report.
pub fn summarize<I: IntoIterator<Item = RowOutcome>>(outcomes: I) -> DatasetReport {
    let report = outcomes.into_iter().fold(DatasetReport::default(), |mut report, outcome| {
        report.record(&outcome);
        report
    });
    tracing::info!(
        total = report.total,
        valid = report.valid,
        rejected = report.rejected(),
        "Dataset pass complete"
    );
    report
}

/// Split outcomes into valid records and rejected rows.
pub fn partition<I: IntoIterator<Item = RowOutcome>>(
    outcomes: I,
) -> (Vec<PublicationRecord>, Vec<(usize, RowError)>) {
    let mut valid = Vec::new();
    let mut rejected = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(record) => valid.push(record),
            Err(e) => rejected.push((outcome.row, e)),
        }
    }
    (valid, rejected)
}

/// Merge records sharing a `publication_id` into one record per id.
///
/// Output order follows first occurrence. Scalar fields come from the first
/// occurrence; `topics` and `authors` become order-preserving unions and
/// `raw` is true if any occurrence was raw.
pub fn consolidate_topics<I: IntoIterator<Item = PublicationRecord>>(
    records: I,
) -> Vec<PublicationRecord> {
    let mut merged: Vec<PublicationRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.entry(record.publication_id.clone()) {
            Entry::Occupied(slot) => {
                let target = &mut merged[*slot.get()];
                extend_unique(&mut target.topics, record.topics);
                extend_unique(&mut target.authors, record.authors);
                target.raw |= record.raw;
            }
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

fn extend_unique(into: &mut Vec<String>, from: Vec<String>) {
    for item in from {
        if !into.contains(&item) {
            into.push(item);
        }
    }
}
