#![forbid(unsafe_code)]

//! Layout and rendering engine for tabline.
//!
//! - [`Row`] / [`ColumnCapacity`] - cells and the per-column widths they are
//!   fitted to
//! - [`BorderStyle`] - glyphs and vertical-line switch of one section
//! - [`RenderPlan`] / [`Rules`] - which rule lines a pass draws
//! - [`Renderer`] - the streaming writer, over a byte-counting [`CountingSink`]

pub mod layout;
pub mod plan;
pub mod renderer;
pub mod sink;
pub mod style;

pub use layout::{ArityMismatch, ColumnCapacity, DEFAULT_PADDING, Row};
pub use plan::{RenderPlan, Rules};
pub use renderer::{RenderError, RenderState, Renderer};
pub use sink::CountingSink;
pub use style::{BLANK_GLYPH, BorderStyle, Section, row_separator_glyph, rule_edge_glyph};
