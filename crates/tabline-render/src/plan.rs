#![forbid(unsafe_code)]

//! Which rule lines a render pass draws.

use bitflags::bitflags;

use crate::style::{BorderStyle, Section};

bitflags! {
    /// Table-wide rule switches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Rules: u8 {
        /// Rules above the header and between body rows.
        const TOP              = 0b001;
        /// A closing rule below the last body row.
        const BOTTOM           = 0b010;
        /// The header draws only its bottom rule, never one above it.
        const HEAD_ONLY_BOTTOM = 0b100;
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::TOP | Self::HEAD_ONLY_BOTTOM
    }
}

/// Styles plus the resolved rule lines of one render pass.
///
/// Built from styles and [`Rules`] by [`RenderPlan::new`]; the fields are
/// public so a renderer can also be driven by a hand-built plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPlan {
    pub head: BorderStyle,
    pub body: BorderStyle,
    pub head_top: bool,
    pub head_bottom: bool,
    pub body_top: bool,
    pub body_bottom: bool,
}

impl RenderPlan {
    /// Resolve rule lines. A section whose edge and horizontal glyphs are
    /// blank never draws a rule.
    pub fn new(head: BorderStyle, body: BorderStyle, rules: Rules) -> Self {
        let head_rules = !head.is_blank_horizontal();
        let body_rules = !body.is_blank_horizontal();
        Self {
            head,
            body,
            head_top: rules.contains(Rules::TOP)
                && head_rules
                && !rules.contains(Rules::HEAD_ONLY_BOTTOM),
            head_bottom: head_rules,
            body_top: rules.contains(Rules::TOP) && body_rules,
            body_bottom: rules.contains(Rules::BOTTOM) && body_rules,
        }
    }

    /// A plan that draws no rules at all.
    pub const fn bare(head: BorderStyle, body: BorderStyle) -> Self {
        Self {
            head,
            body,
            head_top: false,
            head_bottom: false,
            body_top: false,
            body_bottom: false,
        }
    }

    #[inline]
    pub const fn style(&self, section: Section) -> BorderStyle {
        match section {
            Section::Head => self.head,
            Section::Body => self.body,
        }
    }

    #[inline]
    pub const fn vertical_lines(&self, section: Section) -> bool {
        self.style(section).draws_vertical_lines()
    }
}

impl Default for RenderPlan {
    fn default() -> Self {
        Self::new(BorderStyle::SQUARE, BorderStyle::EMPTY, Rules::default())
    }
}
