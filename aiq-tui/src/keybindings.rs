//! Keybindings for the scorecard TUI.
//!
//! Vim-style navigation plus scorecard actions, resolved through a
//! mode-aware map: in notes-editing mode every key belongs to the editor,
//! so resolution yields nothing and the app routes input there instead.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use aiq_core::AiqLevel;

use crate::state::Mode;

/// Actions that can be triggered by key presses in normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Panel focus
    FocusNext,
    FocusPrev,

    // Question navigation
    NavigateUp,
    NavigateDown,

    // Relevance checkboxes
    MarkRelevant,
    MarkNonRelevant,

    // Level row
    OverrideLevel(AiqLevel),

    // Notes
    EditNotes,
}

/// Keybindings map for normal mode.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    normal: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    /// Resolve a key press to an action for the given mode.
    ///
    /// Editing mode consumes all keys in the editor, so nothing resolves.
    pub fn resolve(&self, key: KeyEvent, mode: Mode) -> Option<Action> {
        match mode {
            Mode::Normal => self.normal.get(&key).copied(),
            Mode::EditNotes => None,
        }
    }

    /// Add or replace a normal-mode binding.
    pub fn bind(&mut self, key: KeyEvent, action: Action) {
        self.normal.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut normal = HashMap::new();

        normal.insert(key('q'), Action::Quit);

        // Panel focus
        normal.insert(key_code(KeyCode::Tab), Action::FocusNext);
        normal.insert(key_code(KeyCode::BackTab), Action::FocusPrev);
        // Terminals report Shift-Tab as BackTab with the modifier attached.
        normal.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::FocusPrev,
        );

        // Question navigation, vim keys and arrows
        normal.insert(key('j'), Action::NavigateDown);
        normal.insert(key('k'), Action::NavigateUp);
        normal.insert(key_code(KeyCode::Down), Action::NavigateDown);
        normal.insert(key_code(KeyCode::Up), Action::NavigateUp);

        // Relevance checkboxes
        normal.insert(key('r'), Action::MarkRelevant);
        normal.insert(key('n'), Action::MarkNonRelevant);

        // Level row
        normal.insert(key('h'), Action::OverrideLevel(AiqLevel::High));
        normal.insert(key('m'), Action::OverrideLevel(AiqLevel::Medium));
        normal.insert(key('l'), Action::OverrideLevel(AiqLevel::Low));

        // Notes
        normal.insert(key('i'), Action::EditNotes);
        normal.insert(key('e'), Action::EditNotes);
        normal.insert(key_code(KeyCode::Enter), Action::EditNotes);

        Self { normal }
    }
}

/// Helper to create a KeyEvent from a character.
fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Helper to create a KeyEvent from a KeyCode.
fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
