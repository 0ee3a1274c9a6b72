//! Pure state transitions: (cursor, Action) → Transition.
//!
//! Fully testable without a terminal. The controller in `run` applies
//! whatever this returns.

use super::state::{Action, Key, Transition};

/// Map a classified key to the action it triggers.
///
/// Only arrows, Enter and the cancel keys do anything; every other key,
/// including unrecognized characters, is ignored.
pub fn action_for(key: Key) -> Action {
    match key {
        Key::ArrowUp => Action::MoveUp,
        Key::ArrowDown => Action::MoveDown,
        Key::Enter => Action::Select,
        Key::Escape | Key::Interrupt | Key::Char('q') | Key::Char('Q') => Action::Cancel,
        Key::Char(_) | Key::Other => Action::Ignore,
    }
}

/// Pure transition function over a cursor in `0..len`.
///
/// Callers must not pass `len == 0`; the controller short-circuits empty
/// menus before any key is read. Given one anyway, movement and selection
/// degrade to `Cancel` instead of dividing by zero.
pub fn update(cursor: usize, len: usize, action: Action) -> Transition {
    if len == 0 {
        return Transition::Cancel;
    }
    match action {
        Action::MoveUp => Transition::Stay(move_up(cursor, len)),
        Action::MoveDown => Transition::Stay(move_down(cursor, len)),
        Action::Select => Transition::Select(cursor),
        Action::Cancel => Transition::Cancel,
        Action::Ignore => Transition::Stay(cursor),
    }
}

/// `(cursor - 1 + len) mod len`.
pub fn move_up(cursor: usize, len: usize) -> usize {
    (cursor + len - 1) % len
}

/// `(cursor + 1) mod len`.
pub fn move_down(cursor: usize, len: usize) -> usize {
    (cursor + 1) % len
}

// ============================================================================
// TESTS
// ============================================================================
