//! Input handling - convert key events to commands
//!
//! Arrow keys (or vi keys hjkl) walk. Single letters pick the action family;
//! the app then prompts for a direction or an inventory slot as needed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dg_core::action::Direction;

/// Top-level command chosen by a single keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Open,
    Close,
    PickUp,
    Drop,
    Use,
    Help,
    Quit,
}

/// Convert a key event to a command.
///
/// Returns `None` for keys with no binding; the app treats those as a wait.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit), // Ctrl+C: quit
            _ => None,
        };
    }

    if let Some(dir) = key_to_direction(key) {
        return Some(Command::Move(dir));
    }

    match key.code {
        KeyCode::Char('o') => Some(Command::Open),   // o : open
        KeyCode::Char('c') => Some(Command::Close),  // c : close
        KeyCode::Char('p') => Some(Command::PickUp), // p : pick up
        KeyCode::Char('d') => Some(Command::Drop),   // d : drop
        KeyCode::Char('u') => Some(Command::Use),    // u : use
        KeyCode::Char('?') => Some(Command::Help),   // ? : help
        KeyCode::Char('Q') => Some(Command::Quit),   // Q : quit
        _ => None,
    }
}

/// Read a direction from arrow keys or vi keys
pub fn key_to_direction(key: KeyEvent) -> Option<Direction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::North),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::South),
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::West),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::East),
        _ => None,
    }
}

/// Read an inventory slot number ('1' is the first item)
pub fn key_to_slot(key: KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize),
        _ => None,
    }
}
