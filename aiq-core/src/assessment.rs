//! The coordinating state owner for the scorecard.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::chart::ChartProfile;
use crate::level::{AiqLevel, LevelDisplay};
use crate::relevance::{Mark, RelevanceBoard};

/// Single source of truth for all scorecard state.
///
/// Owns the relevance board, the derived level display, the chart profile,
/// and the screener notes. Widgets hold no independent truth; every
/// mutation here is a synchronous, total function of the previous state and
/// one incoming event, and the derived pieces are recomputed before the
/// call returns.
#[derive(Debug)]
pub struct Assessment {
    board: RelevanceBoard,
    level: LevelDisplay,
    chart: ChartProfile,
    notes: String,
    rng: StdRng,
}

impl Assessment {
    /// A seeded assessment with entropy-backed chart variance.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// A seeded assessment with reproducible chart variance.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let board = RelevanceBoard::seeded();
        let count = board.relevant_count();
        let chart = ChartProfile::derive(count, &mut rng);
        Self {
            board,
            level: LevelDisplay::Derived(AiqLevel::classify(count)),
            chart,
            notes: String::new(),
            rng,
        }
    }

    /// Applies a relevance checkbox toggle and fans the recomputed state
    /// out: the count is recounted, the level display re-derived (wiping
    /// any override), and the chart profile regenerated.
    ///
    /// Unknown question ids leave every piece of state untouched.
    pub fn toggle_relevance(&mut self, question_id: &str, mark: Mark) {
        if self.board.toggle(question_id, mark).is_none() {
            return;
        }
        let count = self.board.relevant_count();
        self.level.rederive(count);
        self.chart = ChartProfile::derive(count, &mut self.rng);
        debug!(
            question = question_id,
            count,
            level = self.level.as_str(),
            "scorecard updated"
        );
    }

    /// Applies a manual level selection with toggle semantics; purely
    /// display-local and discarded by the next relevance change.
    pub fn override_level(&mut self, level: AiqLevel) {
        self.level.toggle_override(level);
        debug!(level = self.level.as_str(), "level display overridden");
    }

    /// Replaces the screener notes verbatim, no trimming or validation.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// The current screener notes.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// The authoritative relevance board.
    pub fn board(&self) -> &RelevanceBoard {
        &self.board
    }

    /// Live count of questions marked relevant.
    pub fn relevant_count(&self) -> usize {
        self.board.relevant_count()
    }

    /// What the level row currently displays.
    pub fn level(&self) -> LevelDisplay {
        self.level
    }

    /// The current chart profile.
    pub fn chart(&self) -> &ChartProfile {
        &self.chart
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}
