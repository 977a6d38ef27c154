//! Widgets for the scorecard TUI.
//!
//! Each panel of the screen is a widget that converts the latest
//! coordinator state into a renderable ratatui element. Widgets keep only
//! display-local state (like the selected row); the scorecard truth is
//! handed to them at render time.

mod notes;
mod questions;
mod result;

pub use notes::NotesWidget;
pub use questions::QuestionListWidget;
pub use result::ResultWidget;
