#![forbid(unsafe_code)]

//! Error taxonomy of table construction and rendering.

use std::fmt;
use std::io;

use tabline_render::{ArityMismatch, RenderError};

/// Everything that can make building or rendering a table fail.
///
/// None of these are retried. A failed render may already have written
/// bytes to the sink; [`TableError::SinkWrite`] reports how many.
#[derive(Debug)]
pub enum TableError {
    /// Header/body or row-to-row column counts disagree.
    ArityMismatch(ArityMismatch),
    /// The row source failed for a reason other than end of input.
    SourceRead {
        /// Index of the row that could not be read.
        row: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The output sink rejected a write.
    SinkWrite {
        /// Bytes the sink accepted before failing.
        bytes_written: u64,
        source: io::Error,
    },
    /// The renderer was driven out of order.
    Render(RenderError),
}

impl TableError {
    pub(crate) fn from_render(error: RenderError, bytes_written: u64) -> Self {
        match error {
            RenderError::Sink(source) => Self::SinkWrite {
                bytes_written,
                source,
            },
            other => Self::Render(other),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch(e) => write!(f, "column count mismatch: {e}"),
            Self::SourceRead { row, source } => {
                write!(f, "failed to read row {row} from source: {source}")
            }
            Self::SinkWrite {
                bytes_written,
                source,
            } => write!(
                f,
                "failed to write table after {bytes_written} bytes: {source}"
            ),
            Self::Render(e) => write!(f, "render error: {e}"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ArityMismatch(e) => Some(e),
            Self::SourceRead { source, .. } => Some(source.as_ref()),
            Self::SinkWrite { source, .. } => Some(source),
            Self::Render(e) => Some(e),
        }
    }
}

impl From<ArityMismatch> for TableError {
    fn from(e: ArityMismatch) -> Self {
        Self::ArityMismatch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn sink_render_error_becomes_sink_write() {
        let err = TableError::from_render(
            RenderError::Sink(io::Error::new(io::ErrorKind::BrokenPipe, "pipe")),
            12,
        );
        assert!(matches!(err, TableError::SinkWrite { bytes_written: 12, .. }));
        assert_eq!(err.to_string(), "failed to write table after 12 bytes: pipe");
        assert!(err.source().is_some());
    }

    #[test]
    fn latched_render_error_stays_a_render_error() {
        let err = TableError::from_render(RenderError::SinkLatched, 3);
        assert!(matches!(err, TableError::Render(RenderError::SinkLatched)));
    }

    #[test]
    fn arity_mismatch_message() {
        let err = TableError::from(ArityMismatch {
            row: 1,
            expected: 2,
            found: 1,
        });
        assert_eq!(
            err.to_string(),
            "column count mismatch: row 1 has 1 columns, expected 2"
        );
    }
}
