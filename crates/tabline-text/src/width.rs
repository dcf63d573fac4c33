#![forbid(unsafe_code)]

//! Width accounting for cell text.
//!
//! Two measures are supported. [`WidthMode::Chars`] counts Unicode scalar
//! values, which is what the table layout uses by default and what makes the
//! output byte-for-byte predictable for any input. [`WidthMode::Cells`]
//! counts terminal cells per grapheme cluster, so wide East-Asian glyphs take
//! two columns and combining marks take none.
//!
//! # Example
//! ```
//! use tabline_text::{WidthMode, display_width, strip_line_breaks};
//!
//! assert_eq!(display_width("Grüße", WidthMode::Chars), 5);
//! assert_eq!(display_width("你好", WidthMode::Cells), 4);
//! assert_eq!(strip_line_breaks("a\r\nb"), "ab");
//! ```

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// How the width of a piece of text is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidthMode {
    /// One column per Unicode scalar value.
    #[default]
    Chars,
    /// Terminal cells per grapheme cluster.
    Cells,
}

/// Width of `text` under `mode`.
#[inline]
#[must_use]
pub fn display_width(text: &str, mode: WidthMode) -> usize {
    match mode {
        WidthMode::Chars => text.chars().count(),
        WidthMode::Cells => text.graphemes(true).map(|g| g.width()).sum(),
    }
}

/// Remove every `\n` and `\r` from `text`.
///
/// Borrows the input when there is nothing to strip.
#[must_use]
pub fn strip_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains(['\n', '\r']) {
        Cow::Owned(text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Longest prefix of `text` whose width is at most `max`.
///
/// Never splits a scalar value, and in [`WidthMode::Cells`] never splits a
/// grapheme cluster: a wide cluster that would straddle `max` is left out.
#[must_use]
pub fn take_width(text: &str, max: usize, mode: WidthMode) -> &str {
    match mode {
        WidthMode::Chars => match text.char_indices().nth(max) {
            Some((idx, _)) => &text[..idx],
            None => text,
        },
        WidthMode::Cells => {
            let mut width = 0;
            for (idx, grapheme) in text.grapheme_indices(true) {
                let grapheme_width = grapheme.width();
                if width + grapheme_width > max {
                    return &text[..idx];
                }
                width += grapheme_width;
            }
            text
        }
    }
}
