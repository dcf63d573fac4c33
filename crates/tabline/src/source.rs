#![forbid(unsafe_code)]

//! Row sources for streamed tables.
//!
//! A [`RowSource`] hands out raw rows one at a time until it reports the end
//! of input. [`DelimitedSource`] parses delimited text with the `csv` crate;
//! [`IterSource`] adapts any iterator of string rows.

use std::convert::Infallible;
use std::io;

use csv::{ReaderBuilder, StringRecord};

/// Pull-style supplier of raw rows.
pub trait RowSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The next row, `Ok(None)` at the end of input.
    fn next_row(&mut self) -> Result<Option<Vec<String>>, Self::Error>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    type Error = S::Error;

    fn next_row(&mut self) -> Result<Option<Vec<String>>, Self::Error> {
        (**self).next_row()
    }
}

/// Rows parsed from delimited text.
///
/// Every record is a row; there is no header handling at this level and
/// records may have differing field counts (the table validates arity).
#[derive(Debug)]
pub struct DelimitedSource<R> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl<R: io::Read> DelimitedSource<R> {
    /// Comma-separated rows.
    pub fn new(reader: R) -> Self {
        Self::with_delimiter(reader, b',')
    }

    /// Rows separated by `delimiter`.
    pub fn with_delimiter(reader: R, delimiter: u8) -> Self {
        let mut builder = ReaderBuilder::new();
        builder.delimiter(delimiter);
        Self::from_builder(builder, reader)
    }

    /// Rows parsed with caller-chosen `csv` options. Header handling and
    /// field-count checks are always turned off.
    pub fn from_builder(mut builder: ReaderBuilder, reader: R) -> Self {
        builder.has_headers(false).flexible(true);
        Self {
            reader: builder.from_reader(reader),
            record: StringRecord::new(),
        }
    }
}

impl<R: io::Read> RowSource for DelimitedSource<R> {
    type Error = csv::Error;

    fn next_row(&mut self) -> Result<Option<Vec<String>>, Self::Error> {
        if self.reader.read_record(&mut self.record)? {
            Ok(Some(self.record.iter().map(str::to_owned).collect()))
        } else {
            Ok(None)
        }
    }
}

/// Rows from an iterator.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    rows: I,
}

impl<I> IterSource<I> {
    pub fn new(rows: I) -> Self {
        Self { rows }
    }
}

impl<I, C> RowSource for IterSource<I>
where
    I: Iterator<Item = C>,
    C: IntoIterator<Item: Into<String>>,
{
    type Error = Infallible;

    fn next_row(&mut self) -> Result<Option<Vec<String>>, Self::Error> {
        Ok(self
            .rows
            .next()
            .map(|cells| cells.into_iter().map(Into::into).collect()))
    }
}
