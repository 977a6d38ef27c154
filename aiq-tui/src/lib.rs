//! Terminal UI for the AIQ assessment scorecard.
//!
//! A single-screen ratatui/crossterm interface: a question list with
//! relevance checkboxes, the derived AIQ level and competency chart, and a
//! free-text notes panel.

mod app;
mod error;
mod keybindings;
mod state;
mod terminal;
mod theme;
mod widgets;

pub use app::App;
pub use error::TuiError;
pub use keybindings::{Action, KeyBindings};
pub use state::{Focus, Mode, NotesEditor, UiState};
pub use terminal::{AiqTerminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::{Theme, aiq_default};
pub use widgets::{NotesWidget, QuestionListWidget, ResultWidget};
