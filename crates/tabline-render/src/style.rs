#![forbid(unsafe_code)]

//! Border styles for the header and body sections.
//!
//! A [`BorderStyle`] holds three glyphs and a flag saying whether vertical
//! separators are drawn. The header and the body each own one, and the
//! glyph chosen at a border position depends on both sections' flags:
//! see [`rule_edge_glyph`] and [`row_separator_glyph`].

/// The glyph that stands for "nothing drawn here".
pub const BLANK_GLYPH: char = ' ';

/// Glyphs and vertical-line switch for one table section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderStyle {
    /// Where a rule line meets a vertical separator.
    pub edge: char,
    /// Fill glyph of rule lines.
    pub horizontal: char,
    /// Separator between cells.
    pub vertical: char,
    /// Whether vertical separators are drawn.
    pub vertical_lines: bool,
}

impl BorderStyle {
    /// ```text
    /// ======
    /// h1 h2
    /// ======
    ///
    /// #===#===#
    /// |h1 |h2 |
    /// #===#===#
    /// ```
    pub const SQUARE: Self = Self::new('#', '=', '|', false);

    /// ```text
    /// ======
    /// h1 h2
    /// ======
    ///
    /// =========
    /// |h1 |h2 |
    /// =========
    /// ```
    pub const BORING: Self = Self::new('=', '=', '|', false);

    /// ```text
    /// •••••••••
    /// |h1 |h2 |
    /// •••••••••
    ///
    /// ••••••
    /// h1 h2
    /// ••••••
    /// ```
    pub const DOT: Self = Self::new('•', '•', '|', true);

    /// ```text
    /// h1 h2
    ///
    /// |h1 |h2 |
    /// ```
    pub const EMPTY: Self = Self::new(BLANK_GLYPH, BLANK_GLYPH, '|', false);

    /// No rules and no separators, whatever the vertical-line flag says.
    pub const BLANK: Self = Self::new(BLANK_GLYPH, BLANK_GLYPH, BLANK_GLYPH, false);

    /// Create a style from its glyphs.
    #[must_use]
    pub const fn new(edge: char, horizontal: char, vertical: char, vertical_lines: bool) -> Self {
        Self {
            edge,
            horizontal,
            vertical,
            vertical_lines,
        }
    }

    /// Set the vertical-line switch.
    #[must_use]
    pub const fn with_vertical_lines(mut self, vertical_lines: bool) -> Self {
        self.vertical_lines = vertical_lines;
        self
    }

    /// All three glyphs are blank.
    #[inline]
    pub const fn is_fully_blank(&self) -> bool {
        self.edge == BLANK_GLYPH && self.horizontal == BLANK_GLYPH && self.vertical == BLANK_GLYPH
    }

    /// Edge and horizontal glyphs are blank; rule lines are never drawn.
    #[inline]
    pub const fn is_blank_horizontal(&self) -> bool {
        self.edge == BLANK_GLYPH && self.horizontal == BLANK_GLYPH
    }

    /// The vertical-line switch, overridden to `false` for a fully blank style.
    #[inline]
    pub const fn draws_vertical_lines(&self) -> bool {
        self.vertical_lines && !self.is_fully_blank()
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::SQUARE
    }
}

/// One of the two independently styled parts of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Head,
    Body,
}

impl Section {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Head => Self::Body,
            Self::Body => Self::Head,
        }
    }
}

/// Glyph at an edge position of a rule line.
///
/// The current section's edge when it draws vertical lines; its horizontal
/// glyph when only the opposite section does, so both sections stay
/// column-aligned; nothing when neither does.
#[inline]
#[must_use]
pub const fn rule_edge_glyph(
    current_vertical_lines: bool,
    opposite_vertical_lines: bool,
    edge: char,
    horizontal: char,
) -> Option<char> {
    if current_vertical_lines {
        Some(edge)
    } else if opposite_vertical_lines {
        Some(horizontal)
    } else {
        None
    }
}

/// Glyph at a separator position of a cell row.
///
/// The current section's vertical glyph when it draws vertical lines; a
/// space when only the opposite section does; nothing when neither does.
#[inline]
#[must_use]
pub const fn row_separator_glyph(
    current_vertical_lines: bool,
    opposite_vertical_lines: bool,
    vertical: char,
) -> Option<char> {
    if current_vertical_lines {
        Some(vertical)
    } else if opposite_vertical_lines {
        Some(BLANK_GLYPH)
    } else {
        None
    }
}
