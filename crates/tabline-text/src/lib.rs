#![forbid(unsafe_code)]

//! Text primitives for tabline.
//!
//! - [`display_width`] - width of a cell's text under a [`WidthMode`]
//! - [`strip_line_breaks`] - remove embedded `\n` / `\r`
//! - [`fit_to_width`] - right-pad with spaces to an exact width
//! - [`truncate_to_max`] - cut to a maximum width, with an ellipsis marker
//!   when there is room for one
//!
//! # Example
//! ```
//! use tabline_text::{WidthMode, fit_to_width, truncate_to_max};
//!
//! let cut = truncate_to_max("Obi Wan Kenobi", 7, WidthMode::Chars);
//! assert_eq!(cut, "Obi ...");
//! assert_eq!(fit_to_width("Obi", 5, WidthMode::Chars), "Obi  ");
//! ```

pub mod cell;
pub mod width;

pub use cell::{ELLIPSIS, ELLIPSIS_THRESHOLD, fit_to_width, truncate_to_max};
pub use width::{WidthMode, display_width, strip_line_breaks, take_width};
