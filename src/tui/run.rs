//! Menu controller: the render → read → transition loop.
//!
//! This is the only module that sequences effects. It wires the pure
//! layers (update, view) to an input device and an output sink. Both are
//! traits so the loop runs unchanged against a scripted keyboard and a
//! recording sink in tests.

use std::io::{self, Stdout};

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::text::Line;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{CancelReason, Menu, Outcome};

use super::input::{InputDevice, KeySource, Keyboard};
use super::state::Transition;
use super::update::{action_for, update};
use super::view::{frame_lines, render};

// ============================================================================
// OUTPUT SINK
// ============================================================================

/// Where finished frames go.
pub trait FrameSink {
    /// Replace whatever is on screen with `lines`.
    fn draw(&mut self, lines: &[Line<'static>]) -> io::Result<()>;
}

/// Sink backed by a ratatui terminal on stdout.
///
/// The terminal is opened on the first draw, after raw mode is already on.
#[derive(Default)]
pub struct TerminalSink {
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
}

impl FrameSink for TerminalSink {
    fn draw(&mut self, lines: &[Line<'static>]) -> io::Result<()> {
        if self.terminal.is_none() {
            let backend = CrosstermBackend::new(io::stdout());
            self.terminal = Some(Terminal::new(backend)?);
        }
        if let Some(terminal) = self.terminal.as_mut() {
            // Full repaint every time, even when nothing moved
            terminal.clear()?;
            terminal.draw(|frame| render(lines, frame))?;
        }
        Ok(())
    }
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Failure inside the loop, after the device was acquired.
#[derive(Debug, Error)]
enum LoopError {
    #[error("failed to draw menu frame: {0}")]
    Render(#[source] io::Error),
    #[error("failed to read key: {0}")]
    Read(#[source] io::Error),
}

impl LoopError {
    fn reason(&self) -> CancelReason {
        match self {
            LoopError::Render(_) => CancelReason::RenderFailed,
            LoopError::Read(_) => CancelReason::ReadFailed,
        }
    }
}

/// Run `menu` on the real terminal and return the chosen value or `"exit"`.
pub fn show(menu: &mut Menu) -> String {
    let mut sink = TerminalSink::default();
    show_with(menu, &mut Keyboard, &mut sink).into_value()
}

/// Run `menu` against an arbitrary device and sink.
///
/// Empty menus return immediately without touching either. Otherwise the
/// device is acquired once, every iteration draws the full frame before
/// blocking for one key, and the session is released before this returns,
/// whatever the exit path.
pub fn show_with<D, S>(menu: &mut Menu, device: &mut D, sink: &mut S) -> Outcome
where
    D: InputDevice,
    S: FrameSink,
{
    if menu.is_empty() {
        debug!(title = menu.title(), "menu has no items");
        return Outcome::Cancelled(CancelReason::EmptyMenu);
    }

    let mut session = match device.acquire() {
        Ok(session) => session,
        Err(e) => {
            warn!(title = menu.title(), error = %e, "could not enter raw keyboard mode");
            return Outcome::Cancelled(CancelReason::AcquireFailed);
        }
    };

    let result = drive(menu, &mut session, sink);

    // Release before logging so nothing is written into the raw screen.
    drop(session);

    match result {
        Ok(outcome) => {
            debug!(
                title = menu.title(),
                selected = menu.selected(),
                ?outcome,
                "menu finished"
            );
            outcome
        }
        Err(e) => {
            warn!(title = menu.title(), error = %e, "menu aborted");
            Outcome::Cancelled(e.reason())
        }
    }
}

/// The loop proper: draw, read, transition, until a terminal transition.
fn drive<K, S>(menu: &mut Menu, keys: &mut K, sink: &mut S) -> Result<Outcome, LoopError>
where
    K: KeySource,
    S: FrameSink,
{
    loop {
        sink.draw(&frame_lines(menu)).map_err(LoopError::Render)?;

        let key = keys.next_key().map_err(LoopError::Read)?;

        match update(menu.selected(), menu.items().len(), action_for(key)) {
            Transition::Stay(cursor) => menu.set_selected(cursor),
            Transition::Select(cursor) => {
                let outcome = match menu.items().get(cursor) {
                    Some(item) => Outcome::Selected(item.value.clone()),
                    None => Outcome::Cancelled(CancelReason::EmptyMenu),
                };
                return Ok(outcome);
            }
            Transition::Cancel => return Ok(Outcome::Cancelled(CancelReason::Requested)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
