//! Menu state algebra: pure types, zero effects.
//!
//! The navigation state is just the cursor index into a fixed item list.
//! Keys arrive classified, get mapped to an `Action`, and the transition
//! function turns (cursor, action) into a `Transition` the controller obeys.

// ============================================================================
// KEYS
// ============================================================================

/// One classified key press, as delivered by a `KeySource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    /// A printable character.
    Char(char),
    /// Ctrl+C. Raw mode turns it into a key instead of a signal.
    Interrupt,
    /// Anything else: side arrows, function keys, paste, ...
    Other,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic menu action, decoupled from raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Cursor one row up, wrapping to the bottom.
    MoveUp,
    /// Cursor one row down, wrapping to the top.
    MoveDown,
    /// Return the value under the cursor.
    Select,
    /// Return the exit sentinel.
    Cancel,
    /// No state change; the frame is still redrawn.
    Ignore,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// `Stay` keeps the loop running at the given cursor; the other two end it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay(usize),
    Select(usize),
    Cancel,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_compare_by_cursor() {
        assert_eq!(Transition::Stay(3), Transition::Stay(3));
        assert_ne!(Transition::Stay(3), Transition::Select(3));
    }

    #[test]
    fn char_keys_compare_by_character() {
        assert_eq!(Key::Char('q'), Key::Char('q'));
        assert_ne!(Key::Char('q'), Key::Char('Q'));
    }
}
