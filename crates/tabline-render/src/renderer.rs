#![forbid(unsafe_code)]

//! Streaming text renderer.
//!
//! A [`Renderer`] writes one logical row at a time into a [`CountingSink`]:
//! an optional header, then body rows, then [`Renderer::finish`]. Lines are
//! joined by exactly one `\n`; nothing follows the last line. Rule lines and
//! separators follow the cross-section rule of
//! [`rule_edge_glyph`] / [`row_separator_glyph`].
//!
//! ```
//! use tabline_render::{ColumnCapacity, RenderPlan, Renderer, Row};
//! use tabline_text::WidthMode;
//!
//! let head = Row::new(["h1", "h2"]);
//! let body = [Row::new(["a1", "a2"])];
//! let capacity = ColumnCapacity::from_rows(Some(&head), &body, 1, WidthMode::Chars).unwrap();
//!
//! let mut renderer = Renderer::new(Vec::new(), &capacity, RenderPlan::default());
//! renderer.render_header(&head).unwrap();
//! renderer.render_body_row(&body[0]).unwrap();
//! renderer.finish().unwrap();
//! assert_eq!(renderer.bytes_written(), 20);
//! assert_eq!(renderer.into_inner(), b"h1 h2 \n======\na1 a2 ");
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::layout::{ColumnCapacity, Row};
use crate::plan::RenderPlan;
use crate::sink::CountingSink;
use crate::style::{Section, rule_edge_glyph, row_separator_glyph};

/// Progress of a render pass. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    NotStarted,
    Header,
    Body { rows: usize },
    Finished,
}

impl fmt::Display for RenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("not started"),
            Self::Header => f.write_str("header rendered"),
            Self::Body { rows } => write!(f, "{rows} body rows rendered"),
            Self::Finished => f.write_str("finished"),
        }
    }
}

/// Failure of a render operation.
#[derive(Debug)]
pub enum RenderError {
    /// The sink rejected a write during this operation.
    Sink(io::Error),
    /// The sink failed during an earlier operation; nothing was written.
    SinkLatched,
    /// The operation is not allowed in the current state.
    InvalidTransition {
        state: RenderState,
        op: &'static str,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sink(e) => write!(f, "output sink rejected a write: {e}"),
            Self::SinkLatched => f.write_str("output sink failed earlier in this render pass"),
            Self::InvalidTransition { state, op } => {
                write!(f, "cannot {op} when the render pass is {state}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sink(e) => Some(e),
            _ => None,
        }
    }
}

/// Writes decorated rows for one render pass.
#[derive(Debug)]
pub struct Renderer<'a, W> {
    sink: CountingSink<W>,
    capacity: &'a ColumnCapacity,
    plan: RenderPlan,
    state: RenderState,
    lines: usize,
    head_rule_below: bool,
}

impl<'a, W: Write> Renderer<'a, W> {
    pub fn new(writer: W, capacity: &'a ColumnCapacity, plan: RenderPlan) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            columns = capacity.len(),
            line_width = capacity.line_width(),
            head_top = plan.head_top,
            head_bottom = plan.head_bottom,
            body_top = plan.body_top,
            body_bottom = plan.body_bottom,
            "render pass started"
        );
        Self {
            sink: CountingSink::new(writer),
            capacity,
            plan,
            state: RenderState::NotStarted,
            lines: 0,
            head_rule_below: false,
        }
    }

    /// Render the header row with its rules. Only valid as the first call.
    pub fn render_header(&mut self, row: &Row) -> Result<(), RenderError> {
        if self.state != RenderState::NotStarted {
            return Err(self.invalid("render the header"));
        }
        self.state = RenderState::Header;

        if self.plan.head_top {
            self.rule(Section::Head);
        }
        self.cells(Section::Head, row);
        if self.plan.head_bottom {
            self.rule(Section::Head);
            self.head_rule_below = true;
        }
        self.status()
    }

    /// Render one body row, preceded by a rule when the plan asks for one.
    ///
    /// The first body row skips its rule when the header already drew one
    /// below itself.
    pub fn render_body_row(&mut self, row: &Row) -> Result<(), RenderError> {
        let rows = match self.state {
            RenderState::NotStarted | RenderState::Header => 0,
            RenderState::Body { rows } => rows,
            RenderState::Finished => return Err(self.invalid("render a body row")),
        };

        let rule_above = if rows == 0 {
            self.plan.body_top && !self.head_rule_below
        } else {
            self.plan.body_top
        };
        if rule_above {
            self.rule(Section::Body);
        }
        self.cells(Section::Body, row);
        self.state = RenderState::Body { rows: rows + 1 };
        self.status()
    }

    /// Draw the closing body rule (if planned and any body row exists) and
    /// flush the sink.
    pub fn finish(&mut self) -> Result<(), RenderError> {
        match self.state {
            RenderState::Finished => return Err(self.invalid("finish")),
            RenderState::Body { rows } if rows > 0 && self.plan.body_bottom => {
                self.rule(Section::Body);
            }
            _ => {}
        }
        self.state = RenderState::Finished;
        self.sink.flush();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            lines = self.lines,
            bytes = self.sink.bytes_written(),
            failed = self.sink.has_failed(),
            "render pass finished"
        );
        self.status()
    }

    #[inline]
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Bytes accepted by the sink so far, valid even after a failure.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.sink.bytes_written()
    }

    #[inline]
    pub fn has_failed(&self) -> bool {
        self.sink.has_failed()
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    fn invalid(&self, op: &'static str) -> RenderError {
        RenderError::InvalidTransition {
            state: self.state,
            op,
        }
    }

    fn status(&mut self) -> Result<(), RenderError> {
        if !self.sink.has_failed() {
            return Ok(());
        }
        match self.sink.take_error() {
            Some(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    bytes = self.sink.bytes_written(),
                    error = %e,
                    "output sink failed"
                );
                Err(RenderError::Sink(e))
            }
            None => Err(RenderError::SinkLatched),
        }
    }

    fn rule(&mut self, section: Section) {
        let style = self.plan.style(section);
        let edge = rule_edge_glyph(
            self.plan.vertical_lines(section),
            self.plan.vertical_lines(section.opposite()),
            style.edge,
            style.horizontal,
        );

        let mut line = String::new();
        line.extend(edge);
        for &width in self.capacity.widths() {
            line.extend(std::iter::repeat_n(style.horizontal, width));
            line.extend(edge);
        }
        self.emit_line(&line);
    }

    fn cells(&mut self, section: Section, row: &Row) {
        let separator = row_separator_glyph(
            self.plan.vertical_lines(section),
            self.plan.vertical_lines(section.opposite()),
            self.plan.style(section).vertical,
        );

        let mut line = String::new();
        line.extend(separator);
        for cell in self.capacity.fitted_cells(row) {
            line.push_str(&cell);
            line.extend(separator);
        }
        self.emit_line(&line);
    }

    fn emit_line(&mut self, line: &str) {
        if self.lines > 0 {
            self.sink.write_str("\n");
        }
        self.lines += 1;
        self.sink.write_str(line);

        #[cfg(feature = "tracing")]
        tracing::trace!(line = self.lines, bytes = line.len(), "line emitted");
    }
}
