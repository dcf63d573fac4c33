#![forbid(unsafe_code)]

//! Table configuration records and presets.

use tabline_render::{BorderStyle, DEFAULT_PADDING, RenderPlan, Rules};
use tabline_text::WidthMode;

/// Styles and rule switches. Freely changeable between construction and
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub head_style: BorderStyle,
    pub body_style: BorderStyle,
    pub rules: Rules,
}

impl TableConfig {
    /// `#`/`=` header drawn with a bottom rule only, undecorated body.
    ///
    /// ```text
    /// Name:          Count:
    /// ======================
    /// Obi Wan Kenobi 1
    /// ```
    pub const fn square() -> Self {
        Self::with_head(BorderStyle::SQUARE)
    }

    /// Like [`square`](Self::square) with `=` at the edges.
    pub const fn boring() -> Self {
        Self::with_head(BorderStyle::BORING)
    }

    /// `•` header with vertical lines.
    pub const fn dot() -> Self {
        Self::with_head(BorderStyle::DOT)
    }

    /// No rules anywhere.
    pub const fn empty() -> Self {
        Self::with_head(BorderStyle::EMPTY)
    }

    const fn with_head(head_style: BorderStyle) -> Self {
        Self {
            head_style,
            body_style: BorderStyle::EMPTY,
            rules: Rules::TOP.union(Rules::HEAD_ONLY_BOTTOM),
        }
    }

    #[must_use]
    pub const fn head_style(mut self, style: BorderStyle) -> Self {
        self.head_style = style;
        self
    }

    #[must_use]
    pub const fn body_style(mut self, style: BorderStyle) -> Self {
        self.body_style = style;
        self
    }

    #[must_use]
    pub const fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Resolve the rule lines for a render pass.
    pub fn plan(&self) -> RenderPlan {
        RenderPlan::new(self.head_style, self.body_style, self.rules)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::square()
    }
}

/// How column capacities are measured. Fixed at construction, because the
/// capacity is computed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutOptions {
    /// Trailing spaces after every cell.
    pub padding: usize,
    pub width_mode: WidthMode,
}

impl LayoutOptions {
    pub const fn new(padding: usize, width_mode: WidthMode) -> Self {
        Self {
            padding,
            width_mode,
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PADDING, WidthMode::Chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_default() {
        let config = TableConfig::default();
        assert_eq!(config, TableConfig::square());
        assert_eq!(config.head_style, BorderStyle::SQUARE);
        assert_eq!(config.body_style, BorderStyle::EMPTY);
        assert_eq!(config.rules, Rules::TOP | Rules::HEAD_ONLY_BOTTOM);
        assert_eq!(config.rules, Rules::default());
    }

    #[test]
    fn presets_differ_in_head_style() {
        assert_eq!(TableConfig::boring().head_style, BorderStyle::BORING);
        assert_eq!(TableConfig::dot().head_style, BorderStyle::DOT);
        assert_eq!(TableConfig::empty().head_style, BorderStyle::EMPTY);
    }

    #[test]
    fn empty_preset_plans_no_rules() {
        let plan = TableConfig::empty().plan();
        assert!(!plan.head_top && !plan.head_bottom && !plan.body_top && !plan.body_bottom);
    }

    #[test]
    fn builders_replace_fields() {
        let config = TableConfig::square()
            .body_style(BorderStyle::DOT)
            .rules(Rules::BOTTOM);
        assert_eq!(config.body_style, BorderStyle::DOT);
        assert_eq!(config.rules, Rules::BOTTOM);
        let plan = config.plan();
        assert!(plan.body_bottom);
        assert!(!plan.body_top);
    }

    #[test]
    fn default_layout() {
        let layout = LayoutOptions::default();
        assert_eq!(layout.padding, 1);
        assert_eq!(layout.width_mode, WidthMode::Chars);
    }
}
