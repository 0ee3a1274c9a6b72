//! Fixed-width text layout for the menu box.
//!
//! Pure functions, no state. Widths are terminal cells as measured by
//! `unicode-width`, so emoji labels line up with the box-drawing border.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Left edge of a box row: border glyph plus one cell of margin.
pub const ROW_LEFT: &str = "║ ";

/// Right edge of a box row.
pub const ROW_RIGHT: &str = " ║";

/// Terminal cells occupied by `text`.
pub fn cell_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Center `text` in exactly `width` cells, hard-truncating when it does not fit.
///
/// Text at least `width` cells wide is cut to its first `width` cells with no
/// ellipsis. Shorter text gets `floor(gap / 2)` spaces on the left and the
/// rest on the right.
pub fn center(text: &str, width: usize) -> String {
    let len = cell_width(text);
    if len >= width {
        return truncate(text, width);
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Keep the leading characters of `text` that fit in `width` cells.
///
/// Text is cut between clusters, never inside one, and the kept prefix is
/// measured as a whole so emoji presentation sequences count their real
/// width. A double-width glyph that would straddle the edge is dropped and
/// its remaining cell padded with a space, so the result is always `width`
/// cells when `text` is at least that wide.
pub fn truncate(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for cluster in clusters(text) {
        out.push_str(cluster);
        if cell_width(&out) > width {
            out.truncate(out.len() - cluster.len());
            break;
        }
    }
    let used = cell_width(&out);
    if used < width && cell_width(text) >= width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

/// Split `text` into base characters, each followed by its zero-width marks
/// (combining accents, variation selectors, joiners).
fn clusters(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        let zero_width = UnicodeWidthChar::width(ch).unwrap_or(0) == 0;
        if i > start && !zero_width {
            out.push(&text[start..i]);
            start = i;
        }
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

// ============================================================================
// BORDERS
// ============================================================================

fn rule(left: char, right: char, width: usize) -> String {
    let mut line = String::with_capacity(width * 3);
    line.push(left);
    line.push_str(&"═".repeat(width.saturating_sub(2)));
    line.push(right);
    line
}

/// `╔═══╗` spanning `width` cells.
pub fn top_border(width: usize) -> String {
    rule('╔', '╗', width)
}

/// `╠═══╣` between the title and the items.
pub fn separator(width: usize) -> String {
    rule('╠', '╣', width)
}

/// `╚═══╝` closing the box.
pub fn bottom_border(width: usize) -> String {
    rule('╚', '╝', width)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_text_is_cut_to_first_w_characters() {
        // width 20 box leaves 16 cells of content
        let line = center("► VeryLongPlayerName18", 16);
        assert_eq!(line, "► VeryLongPlayer");
        assert_eq!(cell_width(&line), 16);
    }

    #[test]
    fn text_exactly_w_is_returned_unchanged() {
        assert_eq!(center("abcd", 4), "abcd");
    }

    #[test]
    fn short_text_is_centered_with_floor_left_padding() {
        let line = center("abc", 10);
        assert_eq!(line, "   abc    ");
        assert_eq!(line.len(), 10);
    }

    #[test]
    fn centering_holds_for_every_shorter_length() {
        let w = 16;
        for len in 0..w {
            let text = "x".repeat(len);
            let line = center(&text, w);
            let left = (w - len) / 2;
            assert_eq!(line.chars().count(), w, "len {}", len);
            assert_eq!(&line[..left], " ".repeat(left));
            assert_eq!(&line[left..left + len], text);
            assert!(line[left + len..].chars().all(|c| c == ' '));
        }
    }

    #[test]
    fn truncation_holds_for_every_longer_length() {
        let w = 8;
        let source = "abcdefghijklmnopqrstuvwxyz";
        for len in w..source.len() {
            let text = &source[..len];
            assert_eq!(center(text, w), &source[..w]);
        }
    }

    #[test]
    fn empty_text_becomes_blank_row() {
        assert_eq!(center("", 5), "     ");
    }

    #[test]
    fn wide_glyph_counts_two_cells() {
        let line = center("🎲 Go", 9);
        assert_eq!(cell_width(&line), 9);
        assert!(line.contains("🎲 Go"));
    }

    #[test]
    fn wide_glyph_straddling_edge_is_replaced_by_space() {
        // "ab" fills 2 cells, the die would need cells 3-4 of a 3-cell budget
        let line = truncate("ab🎲cd", 3);
        assert_eq!(line, "ab ");
        assert_eq!(cell_width(&line), 3);
    }

    #[test]
    fn variation_selector_emoji_keeps_row_at_exact_width() {
        let line = center("► ⚙️  Settings", 6);
        assert_eq!(line, "► ⚙️  ");
        assert_eq!(cell_width(&line), 6);

        let line = center("⚙️abcdef", 4);
        assert_eq!(line, "⚙️ab");
        assert_eq!(cell_width(&line), 4);
    }

    #[test]
    fn variation_selector_emoji_straddling_edge_is_dropped_whole() {
        // the gear needs cells 2-3 of a 2-cell budget
        let line = truncate("a⚙️bcd", 2);
        assert_eq!(line, "a ");
        assert!(!line.contains('\u{fe0f}'));
    }

    #[test]
    fn clusters_keep_marks_with_their_base() {
        assert_eq!(clusters("⚙️ab"), ["⚙️", "a", "b"]);
        assert_eq!(clusters("e\u{301}x"), ["e\u{301}", "x"]);
        assert!(clusters("").is_empty());
    }

    #[test]
    fn truncate_keeps_short_text_unpadded() {
        assert_eq!(truncate("ab", 5), "ab");
    }

    #[test]
    fn borders_span_full_width() {
        for line in [top_border(20), separator(20), bottom_border(20)] {
            assert_eq!(cell_width(&line), 20);
        }
        assert_eq!(top_border(5), "╔═══╗");
        assert_eq!(separator(5), "╠═══╣");
        assert_eq!(bottom_border(5), "╚═══╝");
    }

    #[test]
    fn row_edges_plus_content_fill_width() {
        let width = 60;
        let row = format!("{}{}{}", ROW_LEFT, center("Main Menu", width - 4), ROW_RIGHT);
        assert_eq!(cell_width(&row), width);
    }
}
