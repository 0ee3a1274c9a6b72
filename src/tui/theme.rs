//! Menu style constants.
//!
//! Styles travel as ratatui attributes on each span rather than escape
//! codes inside the text, so the pure renderer stays target-agnostic.
//! The only required semantic is reverse video on the selected row.

use ratatui::style::{Color, Modifier, Style};

/// ASCII-art banner.
pub const STYLE_BANNER: Style = Style::new().add_modifier(Modifier::BOLD);

/// Tagline under the banner.
pub const STYLE_SUBTITLE: Style = Style::new();

/// Box-drawing border glyphs.
pub const STYLE_BORDER: Style = Style::new();

/// Menu title inside the box.
pub const STYLE_TITLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Unselected item row.
pub const STYLE_ITEM: Style = Style::new();

/// Selected item row, reverse video.
pub const STYLE_SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_style_is_reversed() {
        assert!(STYLE_SELECTED.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn item_style_is_plain() {
        assert_eq!(STYLE_ITEM, Style::new());
        assert!(!STYLE_ITEM.add_modifier.contains(Modifier::REVERSED));
    }
}
