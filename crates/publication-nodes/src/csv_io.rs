//! CSV adapter: header-checked row reading and record writing.
//!
//! Opening files is left to the caller; both sides work over any
//! `std::io::Read` / `std::io::Write`.

use std::io;

use crate::codec::{encode_bool, encode_float, encode_list};
use crate::config::Config;
use crate::error::{DatasetError, DatasetResult};
use crate::models::{PublicationRecord, RawRow};
use crate::schema;

/// Iterates raw rows of a `nodes.csv` stream in file order.
///
/// A malformed row (wrong field count, bad UTF-8) yields an error for that
/// row only; reading stops after an I/O error.
pub struct RowReader<R> {
    inner: csv::Reader<R>,
    headers: Vec<String>,
    record: csv::StringRecord,
    done: bool,
}

impl<R: io::Read> RowReader<R> {
    /// Read and check the header row.
    pub fn new(reader: R, config: &Config) -> DatasetResult<Self> {
        let mut inner = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers: Vec<String> = inner.headers()?.iter().map(str::to_string).collect();
        schema::check_header(&headers, config.strict_header_order)?;

        tracing::debug!(columns = headers.len(), "Header accepted");
        Ok(Self { inner, headers, record: csv::StringRecord::new(), done: false })
    }

    /// Header names as found in the file.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: io::Read> Iterator for RowReader<R> {
    type Item = Result<RawRow, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.inner.read_record(&mut self.record) {
            Ok(true) => Some(Ok(self
                .headers
                .iter()
                .map(String::as_str)
                .zip(self.record.iter())
                .collect())),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                if e.is_io_error() {
                    self.done = true;
                }
                Some(Err(e))
            }
        }
    }
}

/// Render a record as its ten cells in documented column order.
#[must_use]
pub fn encode_record(record: &PublicationRecord) -> [String; 10] {
    [
        record.publication_id.clone(),
        record.url.clone(),
        record.title.clone(),
        record.r#type.clone(),
        encode_list(&record.authors),
        encode_float(record.year),
        record.r#abstract.clone().unwrap_or_default(),
        encode_float(record.citations_count),
        encode_list(&record.topics),
        encode_bool(record.raw).to_string(),
    ]
}

/// Render a record as a raw row, the inverse of [`crate::decode_row`].
#[must_use]
pub fn to_raw_row(record: &PublicationRecord) -> RawRow {
    schema::header().zip(encode_record(record)).collect()
}

/// Writes records under the documented header.
pub struct RecordWriter<W: io::Write> {
    inner: csv::Writer<W>,
    written: usize,
}

impl<W: io::Write> RecordWriter<W> {
    /// Create a writer and emit the header row.
    pub fn new(writer: W) -> DatasetResult<Self> {
        let mut inner = csv::Writer::from_writer(writer);
        inner.write_record(schema::header())?;
        Ok(Self { inner, written: 0 })
    }

    /// Write one record.
    pub fn write(&mut self, record: &PublicationRecord) -> DatasetResult<()> {
        self.inner.write_record(encode_record(record))?;
        self.written += 1;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> DatasetResult<W> {
        self.inner.flush().map_err(csv::Error::from)?;
        tracing::debug!(rows = self.written, "Finished writing records");
        self.inner
            .into_inner()
            .map_err(|e| DatasetError::Csv(csv::Error::from(e.into_error())))
    }
}

/// Write a header and every record.
pub fn write_records<'a, W, I>(writer: W, records: I) -> DatasetResult<W>
where
    W: io::Write,
    I: IntoIterator<Item = &'a PublicationRecord>,
{
    let mut out = RecordWriter::new(writer)?;
    for record in records {
        out.write(record)?;
    }
    out.finish()
}
