#![forbid(unsafe_code)]

//! Rows and per-column capacities.
//!
//! A [`ColumnCapacity`] is the exact width every cell of a column is padded
//! or truncated to. It is computed once, either from the complete content of
//! a table ([`ColumnCapacity::from_rows`]) or from caller-supplied widths when
//! rows are streamed and cannot be scanned up front
//! ([`ColumnCapacity::from_widths`]).

use std::fmt;

use tabline_text::{WidthMode, display_width, fit_to_width, strip_line_breaks, truncate_to_max};

/// Trailing spaces added after every cell.
pub const DEFAULT_PADDING: usize = 1;

/// An ordered sequence of cells with line breaks stripped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Create a row, removing every `\n` and `\r` from its cells.
    pub fn new(cells: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            cells: cells
                .into_iter()
                .map(|cell| {
                    let cell: String = cell.into();
                    if cell.contains(['\n', '\r']) {
                        strip_line_breaks(&cell).into_owned()
                    } else {
                        cell
                    }
                })
                .collect(),
        }
    }

    /// The cells of this row.
    #[inline]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Number of cells.
    #[inline]
    pub fn arity(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self::new(cells)
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A row's column count disagrees with the table's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityMismatch {
    /// Index of the offending row, counting the header as row 0 when present.
    pub row: usize,
    /// Column count established by the header (or the first body row).
    pub expected: usize,
    /// Column count of the offending row.
    pub found: usize,
}

impl fmt::Display for ArityMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} has {} columns, expected {}",
            self.row, self.found, self.expected
        )
    }
}

impl std::error::Error for ArityMismatch {}

/// Per-column display capacity, including trailing padding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnCapacity {
    widths: Vec<usize>,
    padding: usize,
    mode: WidthMode,
}

impl ColumnCapacity {
    /// Derive capacities from the full table content.
    ///
    /// A `head` without cells counts as absent. Every row must have the
    /// header's arity (or the first body row's, when there is no header).
    /// Columns whose widest cell is empty still get a capacity of 1.
    pub fn from_rows(
        head: Option<&Row>,
        body: &[Row],
        padding: usize,
        mode: WidthMode,
    ) -> Result<Self, ArityMismatch> {
        let head = head.filter(|row| !row.is_empty());
        let Some(expected) = head.or(body.first()).map(Row::arity) else {
            return Ok(Self {
                widths: Vec::new(),
                padding,
                mode,
            });
        };

        let mut widths = vec![0; expected];
        for (index, row) in head.into_iter().chain(body).enumerate() {
            if row.arity() != expected {
                return Err(ArityMismatch {
                    row: index,
                    expected,
                    found: row.arity(),
                });
            }
            for (slot, cell) in widths.iter_mut().zip(row.cells()) {
                *slot = (*slot).max(display_width(cell, mode) + padding);
            }
        }
        for slot in &mut widths {
            *slot = (*slot).max(1);
        }

        Ok(Self {
            widths,
            padding,
            mode,
        })
    }

    /// Build capacities from explicit content widths.
    ///
    /// Negative widths are clamped to 0 before `padding` is added; a
    /// resulting 0 is raised to 1.
    pub fn from_widths(widths: &[isize], padding: usize, mode: WidthMode) -> Self {
        Self {
            widths: widths
                .iter()
                .map(|&width| (usize::try_from(width).unwrap_or(0) + padding).max(1))
                .collect(),
            padding,
            mode,
        }
    }

    /// Check that `row` has one cell per column.
    pub fn check_arity(&self, index: usize, row: &Row) -> Result<(), ArityMismatch> {
        if row.arity() == self.widths.len() {
            Ok(())
        } else {
            Err(ArityMismatch {
                row: index,
                expected: self.widths.len(),
                found: row.arity(),
            })
        }
    }

    #[inline]
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    #[inline]
    pub fn padding(&self) -> usize {
        self.padding
    }

    #[inline]
    pub fn mode(&self) -> WidthMode {
        self.mode
    }

    /// Number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Sum of all capacities (the fill width of a rule line without edges).
    pub fn line_width(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Cells of `row` fitted to their column: truncated to `capacity -
    /// padding`, followed by the padding, padded out to `capacity`.
    pub fn fitted_cells<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = String> + 'a {
        self.widths
            .iter()
            .zip(row.cells())
            .map(|(&capacity, cell)| self.fit_cell(cell, capacity))
    }

    fn fit_cell(&self, text: &str, capacity: usize) -> String {
        let room = isize::try_from(capacity.saturating_sub(self.padding)).unwrap_or(isize::MAX);
        let trimmed = truncate_to_max(text, room, self.mode);
        let mut cell = String::with_capacity(trimmed.len() + self.padding);
        cell.push_str(&trimmed);
        cell.extend(std::iter::repeat_n(' ', self.padding));
        fit_to_width(&cell, capacity, self.mode).into_owned()
    }
}
