//! End-to-end rendering scenarios for in-memory tables.
//!
//! Covers the default preset, custom head/body styles, the cross-section
//! glyph rule at table level, non-default rule switch combinations and
//! byte accounting.

use tabline::{BorderStyle, LayoutOptions, Rules, Table, TableError, WidthMode};

const DEFAULT_OUTPUT: &str = "Name:          Count: \n======================\nObi Wan Kenobi 1      \nBanana         80     \nHinz & Kunz    2      ";

fn star_wars() -> Table {
    Table::new(
        true,
        [
            ["Name:", "Count:"],
            ["Obi Wan Kenobi", "1"],
            ["Banana", "80"],
            ["Hinz & Kunz", "2"],
        ],
    )
    .unwrap()
}

fn kenobi() -> Table {
    Table::new(true, [["Name:", "Count:"], ["Kenobi", "1"]]).unwrap()
}

// ============================================================================
// Presets
// ============================================================================

#[test]
fn default_preset() {
    assert_eq!(star_wars().to_string(), DEFAULT_OUTPUT);
}

#[test]
fn default_preset_two_rows() {
    let table = Table::new(
        true,
        [["Name:", "Count:"], ["Obi Wan Kenobi", "1"], ["Hinz & Kunz", "2"]],
    )
    .unwrap();
    assert_eq!(
        table.to_string(),
        "Name:          Count: \n======================\nObi Wan Kenobi 1      \nHinz & Kunz    2      "
    );
}

#[test]
fn render_is_idempotent() {
    let table = star_wars();
    let first = table.render_to_string().unwrap();
    let second = table.render_to_string().unwrap();
    assert_eq!(first, second);

    let mut a = Vec::new();
    let mut b = Vec::new();
    table.write_to(&mut a).unwrap();
    table.write_to(&mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_styles_with_vertical_lines() {
    let table = Table::new(
        true,
        [["Name:", "Count:"], ["Obi Wan", "1"], ["Banana", "80"]],
    )
    .unwrap()
    .head_style(BorderStyle::EMPTY.with_vertical_lines(true))
    .body_style(BorderStyle::EMPTY.with_vertical_lines(true));
    assert_eq!(
        table.to_string(),
        "|Name:   |Count: |\n|Obi Wan |1      |\n|Banana  |80     |"
    );
}

#[test]
fn separate_head_and_body_styles() {
    let table = Table::new(true, [["Fruits:", "Count:"], ["Apple", "4"], ["Banana", "25"]])
        .unwrap()
        .head_style(BorderStyle::new('o', '=', '|', true))
        .body_style(BorderStyle::new('•', '–', '|', true))
        .rules(Rules::TOP | Rules::BOTTOM);
    assert_eq!(
        table.to_string(),
        "o========o=======o\n|Fruits: |Count: |\no========o=======o\n|Apple   |4      |\n•––––––––•–––––––•\n|Banana  |25     |\n•––––––––•–––––––•"
    );
}

#[test]
fn undecorated_head_over_decorated_body() {
    let table = Table::new(true, [["h1", "h2"], ["a1", "a2"], ["b1", "b2"]])
        .unwrap()
        .head_style(BorderStyle::new(' ', ' ', '|', false))
        .body_style(BorderStyle::new('#', '-', 'I', true))
        .rules(Rules::TOP | Rules::HEAD_ONLY_BOTTOM | Rules::BOTTOM);
    assert_eq!(
        table.to_string(),
        " h1  h2  \n#---#---#\nIa1 Ia2 I\n#---#---#\nIb1 Ib2 I\n#---#---#"
    );
}

#[test]
fn all_empty_cells_still_render() {
    let table = Table::new(true, [["", ""], ["", ""]]).unwrap();
    assert_eq!(table.capacity().widths(), [1, 1]);
    assert_eq!(table.to_string(), "  \n==\n  ");
}

#[test]
fn boring_and_dot_presets() {
    let rows = [["h1", "h2"], ["a1", "a2"]];
    let boring = Table::new(true, rows)
        .unwrap()
        .with_config(tabline::TableConfig::boring().rules(Rules::TOP));
    assert_eq!(boring.to_string(), "======\nh1 h2 \n======\na1 a2 ");

    let dot = Table::new(true, rows)
        .unwrap()
        .with_config(tabline::TableConfig::dot().rules(Rules::TOP));
    assert_eq!(
        dot.to_string(),
        "•••••••••\n|h1 |h2 |\n•••••••••\n a1  a2  "
    );
}

// ============================================================================
// Cross-section glyph rule
// ============================================================================

#[test]
fn framed_header_alone() {
    let table = Table::with_layout(true, [["h1 ", "h2 "]], LayoutOptions::new(0, WidthMode::Chars))
        .unwrap()
        .head_style(BorderStyle::new('+', '=', '|', true))
        .body_style(BorderStyle::new('+', '-', '|', false))
        .rules(Rules::TOP);
    assert_eq!(table.to_string(), "+===+===+\n|h1 |h2 |\n+===+===+");
}

#[test]
fn head_vertical_lines_only() {
    let table = kenobi()
        .head_style(BorderStyle::new('#', '=', '|', true))
        .body_style(BorderStyle::new('o', '-', '|', false))
        .rules(Rules::all());
    assert_eq!(
        table.to_string(),
        "|Name:  |Count: |\n#=======#=======#\n Kenobi  1       \n-----------------"
    );
}

#[test]
fn body_vertical_lines_only() {
    let table = kenobi()
        .head_style(BorderStyle::new('#', '=', '|', false))
        .body_style(BorderStyle::new('o', '-', '|', true))
        .rules(Rules::all());
    assert_eq!(
        table.to_string(),
        " Name:   Count:  \n=================\n|Kenobi |1      |\no-------o-------o"
    );
}

#[test]
fn no_vertical_lines_anywhere() {
    let table = kenobi()
        .head_style(BorderStyle::new('#', '=', '|', false))
        .body_style(BorderStyle::new('o', '-', '|', false))
        .rules(Rules::all());
    assert_eq!(
        table.to_string(),
        "Name:  Count: \n==============\nKenobi 1      \n--------------"
    );
}

// ============================================================================
// Rule switch combinations
// ============================================================================

#[test]
fn no_switches_keeps_header_bottom_rule() {
    let table = star_wars()
        .body_style(BorderStyle::SQUARE)
        .rules(Rules::empty());
    assert_eq!(table.to_string(), DEFAULT_OUTPUT);
}

#[test]
fn top_without_head_only_bottom_frames_header() {
    let table = kenobi().rules(Rules::TOP);
    assert_eq!(
        table.to_string(),
        "==============\nName:  Count: \n==============\nKenobi 1      "
    );
}

#[test]
fn body_rule_fills_in_for_undecorated_header() {
    let table = Table::new(true, [["h1", "h2"], ["a1", "a2"], ["b1", "b2"]])
        .unwrap()
        .head_style(BorderStyle::EMPTY)
        .body_style(BorderStyle::SQUARE)
        .rules(Rules::TOP | Rules::HEAD_ONLY_BOTTOM);
    assert_eq!(
        table.to_string(),
        "h1 h2 \n======\na1 a2 \n======\nb1 b2 "
    );
}

#[test]
fn header_bottom_rule_is_not_doubled() {
    let table = Table::new(true, [["h1", "h2"], ["a1", "a2"], ["b1", "b2"]])
        .unwrap()
        .body_style(BorderStyle::new('#', '-', '|', false))
        .rules(Rules::TOP | Rules::HEAD_ONLY_BOTTOM | Rules::BOTTOM);
    assert_eq!(
        table.to_string(),
        "h1 h2 \n======\na1 a2 \n------\nb1 b2 \n------"
    );
}

#[test]
fn headless_table_with_body_rules() {
    let table = Table::new(false, [["a1", "a2"], ["b1", "b2"]])
        .unwrap()
        .body_style(BorderStyle::SQUARE)
        .rules(Rules::TOP | Rules::BOTTOM);
    assert_eq!(
        table.to_string(),
        "======\na1 a2 \n======\nb1 b2 \n======"
    );
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn arity_mismatch_between_header_and_body() {
    let err = Table::new(true, [vec!["Name:", "Count:"], vec!["Obi Wan Kenobi"]]).unwrap_err();
    match err {
        TableError::ArityMismatch(e) => {
            assert_eq!((e.row, e.expected, e.found), (1, 2, 1));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn arity_mismatch_between_body_rows() {
    let err = Table::new(false, [vec!["a", "b"], vec!["c", "d", "e"]]).unwrap_err();
    assert!(matches!(err, TableError::ArityMismatch(_)));
}

#[test]
fn line_breaks_are_stripped_before_measuring() {
    let table = Table::new(true, [["Na\nme", "Co\r\nunt"], ["a", "b"]]).unwrap();
    assert_eq!(table.capacity().widths(), [5, 6]);
    assert_eq!(table.to_string(), "Name Count \n===========\na    b     ");
}

#[test]
fn padding_and_width_mode() {
    let table = Table::with_layout(
        true,
        [["名前", "n"], ["ab", "c"]],
        LayoutOptions::new(2, WidthMode::Cells),
    )
    .unwrap();
    assert_eq!(table.capacity().widths(), [6, 3]);
    assert_eq!(
        table.to_string(),
        "名前  n  \n=========\nab    c  "
    );
}

#[test]
fn byte_count_matches_output() {
    let table = Table::new(true, [["h1", "h2"], ["a1", "a2"], ["b1", "b2"]])
        .unwrap()
        .head_style(BorderStyle::new(' ', ' ', '|', false))
        .body_style(BorderStyle::new('#', '-', 'I', true))
        .rules(Rules::TOP | Rules::HEAD_ONLY_BOTTOM | Rules::BOTTOM);
    let mut out = Vec::new();
    let bytes = table.write_to(&mut out).unwrap();
    let expected = " h1  h2  \n#---#---#\nIa1 Ia2 I\n#---#---#\nIb1 Ib2 I\n#---#---#";
    assert_eq!(bytes, expected.len() as u64);
    assert_eq!(out.len() as u64, bytes);
}

#[test]
fn multibyte_glyphs_are_counted_in_bytes() {
    let table = Table::new(true, [["a"], ["b"]])
        .unwrap()
        .head_style(BorderStyle::DOT.with_vertical_lines(false));
    let mut out = Vec::new();
    let bytes = table.write_to(&mut out).unwrap();
    // "a " + "\n" + "••" (3 bytes each) + "\n" + "b "
    assert_eq!(bytes, 2 + 1 + 6 + 1 + 2);
    assert_eq!(String::from_utf8(out).unwrap(), "a \n••\nb ");
}
