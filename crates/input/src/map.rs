//! Key mapping from terminal events to cube actions.

use crate::types::{CubeAction, Face};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to cube actions.
pub fn handle_key_event(key: KeyEvent) -> Option<CubeAction> {
    // Shift+arrows turn the view.
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        match key.code {
            KeyCode::Up => return Some(CubeAction::LookUp),
            KeyCode::Down => return Some(CubeAction::LookDown),
            KeyCode::Left => return Some(CubeAction::LookLeft),
            KeyCode::Right => return Some(CubeAction::LookRight),
            _ => {}
        }
    }

    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(CubeAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(CubeAction::CursorDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(CubeAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(CubeAction::CursorRight)
        }

        // Twists
        KeyCode::Char('w') | KeyCode::Char('W') => Some(CubeAction::RotateUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(CubeAction::RotateDown),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(CubeAction::RotateLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(CubeAction::RotateRight),

        // Look at a face, in declaration order
        KeyCode::Char(c @ '1'..='6') => {
            let index = (c as u8 - b'1') as usize;
            Face::from_index(index).map(CubeAction::LookAt)
        }

        // Session
        KeyCode::Char('x') | KeyCode::Char('X') => Some(CubeAction::Scramble),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(CubeAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
