#![forbid(unsafe_code)]

//! Fitting a single cell's text to an exact column width.

use std::borrow::Cow;

use crate::width::{WidthMode, display_width, take_width};

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Widths at or below this are cut hard, without [`ELLIPSIS`].
pub const ELLIPSIS_THRESHOLD: usize = 3;

/// Right-pad `text` with spaces to exactly `width`.
///
/// Text that is already `width` wide (or wider) is returned unchanged.
#[must_use]
pub fn fit_to_width(text: &str, width: usize, mode: WidthMode) -> Cow<'_, str> {
    let current = display_width(text, mode);
    if current >= width {
        return Cow::Borrowed(text);
    }
    let missing = width - current;
    let mut out = String::with_capacity(text.len() + missing);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', missing));
    Cow::Owned(out)
}

/// Cut `text` down to at most `max` columns.
///
/// - `max <= 0` yields `""`.
/// - Text that fits is returned unchanged.
/// - `max <= 3` cuts hard to `max` columns.
/// - Otherwise the text is cut to `max - 3` columns and [`ELLIPSIS`] is
///   appended.
#[must_use]
pub fn truncate_to_max(text: &str, max: isize, mode: WidthMode) -> Cow<'_, str> {
    let Ok(max) = usize::try_from(max) else {
        return Cow::Borrowed("");
    };
    if display_width(text, mode) <= max {
        return Cow::Borrowed(text);
    }
    if max <= ELLIPSIS_THRESHOLD {
        return Cow::Borrowed(take_width(text, max, mode));
    }
    let kept = take_width(text, max - ELLIPSIS.len(), mode);
    let mut out = String::with_capacity(kept.len() + ELLIPSIS.len());
    out.push_str(kept);
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}
