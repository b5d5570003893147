//! Input dispatch for the game screen.
//!
//! Maps terminal events onto the simulation's single-verb input vocabulary
//! (flap), plus the out-of-game verbs (restart, quit). The handlers mutate
//! nothing but the session.

use crate::core::session::GameSession;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// What the main loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep the loop going.
    Continue,
    /// Player accepted the play-again prompt: build a brand-new session.
    Restart,
    /// Leave the game.
    Quit,
}

/// Key dispatch. The game-over prompt takes priority over gameplay keys.
pub fn handle_key(key: KeyEvent, session: &mut GameSession) -> InputResult {
    if session.is_over() {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => InputResult::Restart,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
                InputResult::Quit
            }
            _ => InputResult::Continue,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
            session.flap();
            InputResult::Continue
        }
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        _ => InputResult::Continue,
    }
}

/// Mouse dispatch: the left button flaps, mirroring the single mouse-button
/// control scheme this game is played with everywhere else.
pub fn handle_mouse(event: MouseEvent, session: &mut GameSession) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = event.kind {
        session.flap();
    }
    InputResult::Continue
}
