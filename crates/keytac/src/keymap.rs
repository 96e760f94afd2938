//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keytac_engine::{Direction, InputEvent};

/// Translates a key press into a game input.
///
/// Arrows move, Space or Enter places, and q, Q, Esc or Ctrl-C quit.
/// Everything else is [`InputEvent::Other`].
pub fn map_key(key: KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
        KeyCode::Up => InputEvent::Move(Direction::Up),
        KeyCode::Down => InputEvent::Move(Direction::Down),
        KeyCode::Left => InputEvent::Move(Direction::Left),
        KeyCode::Right => InputEvent::Move(Direction::Right),
        KeyCode::Char(' ') | KeyCode::Enter => InputEvent::Select,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
        _ => InputEvent::Other,
    }
}
