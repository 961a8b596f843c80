//! Actions for the homelab-pilot TUI
//!
//! Terminal events are reduced to actions before they reach the
//! controller, so only this module knows about concrete key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use homelab_pilot_core::Key;

/// Actions produced by terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A dashboard key
    Key(Key),
    Resize(u16, u16),
}

impl Action {
    /// Map a key press to an action, ignoring unbound keys
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        let mapped = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
            KeyCode::Char('q') => Key::Quit,
            KeyCode::Up | KeyCode::Char('k') => Key::Up,
            KeyCode::Down | KeyCode::Char('j') => Key::Down,
            KeyCode::Enter => Key::Select,
            KeyCode::Esc => Key::Escape,
            KeyCode::Char('r') => Key::Refresh,
            _ => return None,
        };
        Some(Action::Key(mapped))
    }
}
