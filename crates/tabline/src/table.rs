#![forbid(unsafe_code)]

//! In-memory tables.

use std::fmt;
use std::io::{self, Write};

use tabline_render::{BorderStyle, ColumnCapacity, RenderError, Renderer, Row, Rules};
use tracing::{debug, warn};

use crate::config::{LayoutOptions, TableConfig};
use crate::error::TableError;
use crate::source::DelimitedSource;
use crate::stream::StreamingTable;

/// A header plus body rows, with capacities computed from their content.
///
/// Rendering does not change the table; rendering twice produces identical
/// output.
#[derive(Debug, Clone, Default)]
pub struct Table {
    head: Option<Row>,
    body: Vec<Row>,
    config: TableConfig,
    capacity: ColumnCapacity,
}

impl Table {
    /// Build a table from rows; the first row is the header if `has_header`.
    pub fn new<R, C>(has_header: bool, rows: R) -> Result<Self, TableError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item: Into<String>>,
    {
        Self::with_layout(has_header, rows, LayoutOptions::default())
    }

    /// Like [`Table::new`] with explicit padding and width measure.
    pub fn with_layout<R, C>(
        has_header: bool,
        rows: R,
        layout: LayoutOptions,
    ) -> Result<Self, TableError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item: Into<String>>,
    {
        let mut rows = rows.into_iter().map(Row::new);
        let head = if has_header { rows.next() } else { None };
        Self::from_rows(head, rows.collect(), layout)
    }

    /// Build a table from a separate header (possibly empty) and body.
    pub fn with_header<H, B, C>(head: H, body: B) -> Result<Self, TableError>
    where
        H: IntoIterator<Item: Into<String>>,
        B: IntoIterator<Item = C>,
        C: IntoIterator<Item: Into<String>>,
    {
        Self::from_rows(
            Some(Row::new(head)),
            body.into_iter().map(Row::new).collect(),
            LayoutOptions::default(),
        )
    }

    fn from_rows(
        head: Option<Row>,
        body: Vec<Row>,
        layout: LayoutOptions,
    ) -> Result<Self, TableError> {
        let head = head.filter(|row| !row.is_empty());
        let capacity =
            ColumnCapacity::from_rows(head.as_ref(), &body, layout.padding, layout.width_mode)
                .inspect_err(|e| warn!(error = %e, "rejected table rows"))?;
        debug!(
            columns = capacity.len(),
            body_rows = body.len(),
            has_header = head.is_some(),
            "table built"
        );
        Ok(Self {
            head,
            body,
            config: TableConfig::default(),
            capacity,
        })
    }

    /// Read delimited rows from `reader` and render them as they arrive.
    ///
    /// `widths` are the content widths per column; cells are truncated to fit.
    pub fn from_reader<R: io::Read>(
        reader: R,
        has_header: bool,
        widths: &[isize],
    ) -> StreamingTable<DelimitedSource<R>> {
        StreamingTable::new(DelimitedSource::new(reader), has_header, widths)
    }

    /// Like [`Table::from_reader`] with a field `delimiter` other than `,`.
    pub fn from_reader_with_delimiter<R: io::Read>(
        reader: R,
        delimiter: u8,
        has_header: bool,
        widths: &[isize],
    ) -> StreamingTable<DelimitedSource<R>> {
        StreamingTable::new(
            DelimitedSource::with_delimiter(reader, delimiter),
            has_header,
            widths,
        )
    }

    #[must_use]
    pub fn head_style(mut self, style: BorderStyle) -> Self {
        self.config.head_style = style;
        self
    }

    #[must_use]
    pub fn body_style(mut self, style: BorderStyle) -> Self {
        self.config.body_style = style;
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: Rules) -> Self {
        self.config.rules = rules;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TableConfig {
        &mut self.config
    }

    pub fn head(&self) -> Option<&Row> {
        self.head.as_ref()
    }

    pub fn body(&self) -> &[Row] {
        &self.body
    }

    pub fn capacity(&self) -> &ColumnCapacity {
        &self.capacity
    }

    /// Render into `writer`, returning the number of bytes written.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<u64, TableError> {
        let _span = tracing::debug_span!(
            "table_render",
            columns = self.capacity.len(),
            body_rows = self.body.len()
        )
        .entered();

        let mut renderer = Renderer::new(writer, &self.capacity, self.config.plan());
        let result = self.drive(&mut renderer);
        let bytes_written = renderer.bytes_written();
        result
            .map(|()| bytes_written)
            .map_err(|e| TableError::from_render(e, bytes_written))
    }

    /// Render into a new string.
    pub fn render_to_string(&self) -> Result<String, TableError> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn drive<W: Write>(&self, renderer: &mut Renderer<'_, W>) -> Result<(), RenderError> {
        if let Some(head) = &self.head {
            renderer.render_header(head)?;
        }
        for row in &self.body {
            renderer.render_body_row(row)?;
        }
        renderer.finish()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_to_string().map_err(|_| fmt::Error)?)
    }
}
