//! Domain model for the AIQ assessment scorecard.
//!
//! This crate holds the authoritative scorecard state and every derivation
//! over it: relevance marks per question, the relevant-question count, the
//! classified AIQ level (with manual override), and the per-competency chart
//! profile. It contains no UI types; the TUI crate renders whatever state
//! this crate hands it.

mod assessment;
mod chart;
mod level;
mod questions;
mod relevance;

pub use assessment::Assessment;
pub use chart::{COMPETENCY_COUNT, ChartEntry, ChartProfile, Competency, competencies};
pub use level::{AiqLevel, LevelDisplay};
pub use questions::{QUESTION_COUNT, Question, QuestionId, question_bank};
pub use relevance::{Mark, Relevance, RelevanceBoard};
