//! Per-competency chart profile derivation.
//!
//! Scores are cosmetic: they scale each category's fixed weight by how many
//! questions were marked relevant and add a bounded random jitter so the
//! chart reads organically. The randomness source is injected so callers
//! can pin it for reproducible output; nothing downstream may treat the
//! jittered values as exact.

use rand::Rng;

use crate::questions::QUESTION_COUNT;

/// Number of competency categories charted.
pub const COMPETENCY_COUNT: usize = 6;

/// A charted competency category with its maximum weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Competency {
    pub name: &'static str,
    /// Ceiling score for the category before jitter.
    pub weight: u16,
}

/// The fixed competency categories, in chart order.
pub fn competencies() -> &'static [Competency; COMPETENCY_COUNT] {
    &CATEGORIES
}

static CATEGORIES: [Competency; COMPETENCY_COUNT] = [
    Competency { name: "Curiosity & Initiative", weight: 70 },
    Competency { name: "AI Awareness", weight: 85 },
    Competency { name: "Experimentation", weight: 60 },
    Competency { name: "Practical Identification", weight: 75 },
    Competency { name: "Adaptability", weight: 90 },
    Competency { name: "Hands-on Application", weight: 50 },
];

/// One bar of the profile chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartEntry {
    pub category: &'static str,
    /// Integer score in 0..=100.
    pub score: u16,
}

/// The per-competency score set rendered as a bar chart.
///
/// Regenerated wholesale whenever the relevant count changes; entries are
/// never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartProfile {
    entries: [ChartEntry; COMPETENCY_COUNT],
}

impl ChartProfile {
    /// Derives a fresh profile for the given relevant-question count.
    ///
    /// Each weight is scaled by `0.2 + 0.8 * count/6`, jittered by a factor
    /// drawn uniformly from `[0.8, 1.2)`, rounded to the nearest integer,
    /// and clamped to 100. The clamp caps the one combination (weight 90 at
    /// full count and maximal jitter) that would otherwise leave the
    /// 0..=100 scale.
    pub fn derive<R: Rng>(relevant_count: usize, rng: &mut R) -> Self {
        let entries = std::array::from_fn(|i| {
            let competency = CATEGORIES[i];
            let jitter = rng.gen_range(0.8..1.2);
            let score = (base_score(competency.weight, relevant_count) * jitter).round();
            ChartEntry {
                category: competency.name,
                score: score.min(100.0) as u16,
            }
        });
        Self { entries }
    }

    /// The chart entries in fixed category order.
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }
}

/// The unjittered score for a category weight at the given count.
fn base_score(weight: u16, relevant_count: usize) -> f64 {
    let factor = relevant_count as f64 / QUESTION_COUNT as f64;
    f64::from(weight) * (0.2 + 0.8 * factor)
}
