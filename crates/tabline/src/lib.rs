#![forbid(unsafe_code)]

//! Fixed-width, border-decorated plain text tables.
//!
//! Rows come either from memory ([`Table`]) or from a pull-style
//! [`RowSource`] such as delimited text ([`StreamingTable`]). The header and
//! the body are styled independently with a [`BorderStyle`] each.
//!
//! # Example
//! ```
//! use tabline::Table;
//!
//! let table = Table::new(
//!     true,
//!     [["Name:", "Count:"], ["Obi Wan Kenobi", "1"], ["Banana", "80"]],
//! )?;
//! assert_eq!(
//!     table.to_string(),
//!     "Name:          Count: \n======================\nObi Wan Kenobi 1      \nBanana         80     "
//! );
//! # Ok::<(), tabline::TableError>(())
//! ```
//!
//! Streaming from delimited text with fixed widths:
//! ```
//! use tabline::Table;
//!
//! let mut table = Table::from_reader("11,22\n33,44\n".as_bytes(), true, &[2, 2]);
//! let mut out = Vec::new();
//! table.write_to(&mut out)?;
//! assert_eq!(out, b"11 22 \n======\n33 44 ");
//! # Ok::<(), tabline::TableError>(())
//! ```

pub mod config;
pub mod error;
pub mod source;
pub mod stream;
pub mod table;

pub use config::{LayoutOptions, TableConfig};
pub use error::TableError;
pub use source::{DelimitedSource, IterSource, RowSource};
pub use stream::StreamingTable;
pub use table::Table;

pub use tabline_render::{
    ArityMismatch, BorderStyle, ColumnCapacity, RenderError, RenderPlan, RenderState, Renderer,
    Row, Rules, Section,
};
pub use tabline_text::WidthMode;
