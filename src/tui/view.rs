//! Pure rendering: map a `Menu` to styled lines.
//!
//! `frame_lines` is deterministic (state in, lines out) and carries the
//! whole layout contract. `render` is the thin effect that paints those
//! lines into a ratatui frame.

use ratatui::Frame;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::layout::{ROW_LEFT, ROW_RIGHT, bottom_border, center, separator, top_border};
use crate::types::Menu;

use super::theme;

// ============================================================================
// STATIC CONTENT
// ============================================================================

/// Application banner drawn above every menu.
pub const BANNER: [&str; 6] = [
    "██████╗ ███████╗██╗   ██╗    ██╗    ██╗ █████╗ ██████╗ ███████╗",
    "██╔══██╗██╔════╝██║   ██║    ██║    ██║██╔══██╗██╔══██╗██╔════╝",
    "██║  ██║█████╗  ██║   ██║    ██║ █╗ ██║███████║██████╔╝█████╗  ",
    "██║  ██║██╔══╝  ╚██╗ ██╔╝    ██║███╗██║██╔══██║██╔══██╗██╔══╝  ",
    "██████╔╝███████╗ ╚████╔╝     ╚███╔███╔╝██║  ██║██║  ██║███████╗",
    "╚═════╝ ╚══════╝  ╚═══╝       ╚══╝╚══╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝",
];

pub const SUBTITLE: &str = "🎮 Professional Game Collection 🎮";

pub const HELP: &str = "Use ↑/↓ arrows to navigate, Enter to select, 'q' to quit";

/// Marker in front of the selected label.
pub const CURSOR_PREFIX: &str = "► ";

/// Same width as the marker, for every other row.
pub const PLAIN_PREFIX: &str = "  ";

// ============================================================================
// PURE FRAME
// ============================================================================

/// Build the full frame for the current menu state.
///
/// Layout, top to bottom: banner, subtitle, top border, title row,
/// separator, one row per item, bottom border, help line.
pub fn frame_lines(menu: &Menu) -> Vec<Line<'static>> {
    let inner = menu.content_width();
    let mut lines = Vec::with_capacity(BANNER.len() + menu.items().len() + 10);

    lines.push(Line::from(""));
    for row in BANNER {
        lines.push(Line::from(Span::styled(row, theme::STYLE_BANNER)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        center(SUBTITLE, inner),
        theme::STYLE_SUBTITLE,
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        top_border(menu.width()),
        theme::STYLE_BORDER,
    )));
    lines.push(boxed_row(center(menu.title(), inner), theme::STYLE_TITLE));
    lines.push(Line::from(Span::styled(
        separator(menu.width()),
        theme::STYLE_BORDER,
    )));

    for (i, item) in menu.items().iter().enumerate() {
        let is_selected = i == menu.selected();
        let prefix = if is_selected { CURSOR_PREFIX } else { PLAIN_PREFIX };
        let text = center(&format!("{}{}", prefix, item.label), inner);
        let style = if is_selected {
            theme::STYLE_SELECTED
        } else {
            theme::STYLE_ITEM
        };
        lines.push(boxed_row(text, style));
    }

    lines.push(Line::from(Span::styled(
        bottom_border(menu.width()),
        theme::STYLE_BORDER,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(HELP, theme::STYLE_HELP)));

    lines
}

/// Wrap already-fitted content in the box's side borders.
fn boxed_row(content: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(ROW_LEFT, theme::STYLE_BORDER),
        Span::styled(content, style),
        Span::styled(ROW_RIGHT, theme::STYLE_BORDER),
    ])
}

/// Plain text of a line, styles dropped.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

// ============================================================================
// PAINT
// ============================================================================

/// Paint a prepared frame from the top-left corner.
///
/// Lines wider than the terminal are clipped, not wrapped, so the box keeps
/// its shape.
pub fn render(lines: &[Line<'static>], frame: &mut Frame) {
    let paragraph = Paragraph::new(lines.to_vec());
    frame.render_widget(paragraph, frame.area());
}

// ============================================================================
// TESTS
// ============================================================================
