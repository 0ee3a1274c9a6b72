//! Domain types for the selection menu.
//!
//! A `Menu` lives for exactly one `show` call: built by the caller, its
//! cursor mutated while the operator navigates, then discarded.

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Sentinel returned when the menu is cancelled or cannot run.
///
/// Callers must not use this text as an item value unless choosing that
/// item should mean the same thing as cancelling.
pub const EXIT: &str = "exit";

/// Box width used when the caller does not pick one.
pub const DEFAULT_WIDTH: usize = 60;

/// Narrowest box that still fits two border glyphs, two margins and one
/// cell of content.
pub const MIN_WIDTH: usize = 5;

// ============================================================================
// ERRORS
// ============================================================================

/// Invalid menu construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("display width {width} is below the minimum of {min}")]
    WidthTooSmall { width: usize, min: usize },
}

// ============================================================================
// ITEMS AND MENU
// ============================================================================

/// One selectable row: the text shown and the token handed back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub value: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        MenuItem {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A titled, ordered list of items plus the current selection.
///
/// Items are fixed after construction; only the selection moves.
/// Invariant: `selected < items.len()` whenever `items` is non-empty,
/// and `width >= MIN_WIDTH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
    selected: usize,
    width: usize,
}

impl Menu {
    /// Create a menu with the cursor on the first item and the default width.
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Menu {
            title: title.into(),
            items,
            selected: 0,
            width: DEFAULT_WIDTH,
        }
    }

    /// Override the box width.
    pub fn with_width(mut self, width: usize) -> Result<Self, MenuError> {
        if width < MIN_WIDTH {
            return Err(MenuError::WidthTooSmall {
                width,
                min: MIN_WIDTH,
            });
        }
        self.width = width;
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cells available for text inside the box: border and margin on each side.
    pub fn content_width(&self) -> usize {
        self.width - 4
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move the cursor. Out-of-range indices are ignored.
    pub(crate) fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Run this menu on the real terminal. See [`crate::tui::run::show`].
    pub fn show(&mut self) -> String {
        crate::tui::run::show(self)
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Why a `show` call ended without a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Operator pressed Escape, q, Q or Ctrl+C.
    Requested,
    /// No items to choose from; nothing was drawn.
    EmptyMenu,
    /// Raw keyboard mode could not be entered; nothing was drawn.
    AcquireFailed,
    /// The blocking key read failed mid-loop.
    ReadFailed,
    /// Writing a frame to the output failed.
    RenderFailed,
}

impl std::fmt::Display for CancelReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            CancelReason::Requested => "cancelled by operator",
            CancelReason::EmptyMenu => "menu has no items",
            CancelReason::AcquireFailed => "raw keyboard mode unavailable",
            CancelReason::ReadFailed => "key read failed",
            CancelReason::RenderFailed => "frame could not be drawn",
        };
        f.write_str(text)
    }
}

/// Terminal result of one `show` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Value of the item under the cursor when Enter was pressed.
    Selected(String),
    /// Every non-selection path, including failures.
    Cancelled(CancelReason),
}

impl Outcome {
    /// Collapse to the text contract: the selected value or [`EXIT`].
    pub fn into_value(self) -> String {
        match self {
            Outcome::Selected(value) => value,
            Outcome::Cancelled(_) => EXIT.to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<MenuItem> {
        vec![
            MenuItem::new("A", "a"),
            MenuItem::new("B", "b"),
            MenuItem::new("C", "c"),
        ]
    }

    #[test]
    fn new_menu_starts_at_first_item_with_default_width() {
        let menu = Menu::new("Main", abc());
        assert_eq!(menu.selected(), 0);
        assert_eq!(menu.width(), DEFAULT_WIDTH);
        assert_eq!(menu.content_width(), 56);
        assert_eq!(menu.title(), "Main");
        assert_eq!(menu.items().len(), 3);
    }

    #[test]
    fn width_below_minimum_is_rejected() {
        let err = Menu::new("t", abc()).with_width(4).unwrap_err();
        assert_eq!(err, MenuError::WidthTooSmall { width: 4, min: 5 });
        assert_eq!(err.to_string(), "display width 4 is below the minimum of 5");
    }

    #[test]
    fn minimum_width_leaves_one_content_cell() {
        let menu = Menu::new("t", abc()).with_width(MIN_WIDTH).unwrap();
        assert_eq!(menu.content_width(), 1);
    }

    #[test]
    fn set_selected_ignores_out_of_range() {
        let mut menu = Menu::new("t", abc());
        menu.set_selected(2);
        assert_eq!(menu.selected(), 2);
        menu.set_selected(3);
        assert_eq!(menu.selected(), 2);
    }

    #[test]
    fn cancelled_outcomes_collapse_to_exit() {
        for reason in [
            CancelReason::Requested,
            CancelReason::EmptyMenu,
            CancelReason::AcquireFailed,
            CancelReason::ReadFailed,
            CancelReason::RenderFailed,
        ] {
            let outcome = Outcome::Cancelled(reason);
            assert_eq!(outcome.into_value(), EXIT);
        }
    }

    #[test]
    fn selected_outcome_carries_value() {
        let outcome = Outcome::Selected("typing".into());
        assert_eq!(outcome.into_value(), "typing");
    }

    #[test]
    fn item_deserializes_from_json() {
        let item: MenuItem = serde_json::from_str(r#"{"label":"🧱 Tetris","value":"block-stacking"}"#).unwrap();
        assert_eq!(item, MenuItem::new("🧱 Tetris", "block-stacking"));
    }
}
