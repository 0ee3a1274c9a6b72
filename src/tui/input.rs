//! Keyboard input: a scoped raw-mode session that yields classified keys.
//!
//! `InputDevice::acquire` enters raw mode and hands back a session; the
//! session restores the terminal when dropped, so release happens exactly
//! once on every exit path, including early returns and unwinding.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use super::state::Key;

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Pull-based key source. `next_key` blocks until one key is available.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Something that can be put into raw key-delivery mode.
///
/// The returned session owns the mode: dropping it must restore the
/// terminal.
pub trait InputDevice {
    type Session: KeySource;

    fn acquire(&mut self) -> io::Result<Self::Session>;
}

// ============================================================================
// KEY CLASSIFICATION
// ============================================================================

/// Classify a crossterm key event.
pub fn classify(key: KeyEvent) -> Key {
    // Ctrl+C arrives as a key in raw mode
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Key::Interrupt;
    }

    match key.code {
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Keep key presses (and auto-repeats); drop releases, mouse, resize, focus.
pub fn key_from_event(event: Event) -> Option<Key> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(classify(key)),
        _ => None,
    }
}

// ============================================================================
// REAL KEYBOARD
// ============================================================================

/// The process's controlling terminal.
#[derive(Debug, Default)]
pub struct Keyboard;

impl InputDevice for Keyboard {
    type Session = KeyboardSession;

    fn acquire(&mut self) -> io::Result<KeyboardSession> {
        enable_raw_mode()?;
        // From here on, any failure drops the session and undoes raw mode.
        let session = KeyboardSession { _private: () };
        io::stdout().execute(EnterAlternateScreen)?.execute(Hide)?;
        Ok(session)
    }
}

/// Live raw-mode session. Restores cursor, screen and line mode on drop.
#[derive(Debug)]
pub struct KeyboardSession {
    _private: (),
}

impl KeySource for KeyboardSession {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = key_from_event(event::read()?) {
                return Ok(key);
            }
        }
    }
}

impl Drop for KeyboardSession {
    fn drop(&mut self) {
        // Best-effort: nothing useful to do if the terminal is already gone
        let mut stdout = io::stdout();
        let _ = stdout.execute(Show);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

// ============================================================================
// TESTS
// ============================================================================
