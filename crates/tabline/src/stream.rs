#![forbid(unsafe_code)]

//! Tables rendered row by row from a [`RowSource`].

use std::io::Write;

use tabline_render::{BorderStyle, ColumnCapacity, RenderError, Renderer, Row, Rules};
use tracing::{debug, trace, warn};

use crate::config::{LayoutOptions, TableConfig};
use crate::error::TableError;
use crate::source::RowSource;

/// A table whose rows are pulled from a source while rendering.
///
/// Column widths cannot be learned from rows that have not been read yet,
/// so they are supplied up front. The source is consumed by rendering: a
/// second [`write_to`](Self::write_to) only sees rows that were not read
/// before.
#[derive(Debug)]
pub struct StreamingTable<S> {
    source: S,
    has_header: bool,
    config: TableConfig,
    capacity: ColumnCapacity,
    rows_read: usize,
}

impl<S: RowSource> StreamingTable<S> {
    /// `widths` are content widths per column; negative values count as 0.
    pub fn new(source: S, has_header: bool, widths: &[isize]) -> Self {
        Self::with_layout(source, has_header, widths, LayoutOptions::default())
    }

    pub fn with_layout(
        source: S,
        has_header: bool,
        widths: &[isize],
        layout: LayoutOptions,
    ) -> Self {
        let capacity = ColumnCapacity::from_widths(widths, layout.padding, layout.width_mode);
        debug!(
            columns = capacity.len(),
            has_header, "streaming table built"
        );
        Self {
            source,
            has_header,
            config: TableConfig::default(),
            capacity,
            rows_read: 0,
        }
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

    pub fn capacity(&self) -> &ColumnCapacity {
        &self.capacity
    }

    /// Rows pulled from the source so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Pull rows until the end of the source, rendering each one into
    /// `writer` as soon as it is read. Returns the number of bytes written.
    ///
    /// A read failure or a row of the wrong arity stops rendering; bytes
    /// already written stay in `writer`.
    pub fn write_to<W: Write>(&mut self, writer: W) -> Result<u64, TableError> {
        let _span = tracing::debug_span!("stream_render", columns = self.capacity.len()).entered();

        let mut renderer = Renderer::new(writer, &self.capacity, self.config.plan());
        loop {
            let index = self.rows_read;
            let cells = match self.source.next_row() {
                Ok(Some(cells)) => cells,
                Ok(None) => break,
                Err(e) => {
                    warn!(row = index, error = %e, "row source failed");
                    return Err(TableError::SourceRead {
                        row: index,
                        source: Box::new(e),
                    });
                }
            };
            self.rows_read += 1;

            let row = Row::new(cells);
            self.capacity.check_arity(index, &row).inspect_err(|e| {
                warn!(error = %e, "rejected streamed row");
            })?;
            trace!(row = index, "streamed row");

            let rendered = if index == 0 && self.has_header {
                renderer.render_header(&row)
            } else {
                renderer.render_body_row(&row)
            };
            Self::check(rendered, &renderer)?;
        }
        let finished = renderer.finish();
        Self::check(finished, &renderer)?;
        Ok(renderer.bytes_written())
    }

    fn check<W: Write>(
        result: Result<(), RenderError>,
        renderer: &Renderer<'_, W>,
    ) -> Result<(), TableError> {
        result.map_err(|e| TableError::from_render(e, renderer.bytes_written()))
    }
}
