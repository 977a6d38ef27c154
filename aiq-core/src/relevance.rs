//! Relevance marking for the question bank.
//!
//! Each question carries a three-state relevance judgment. The two marked
//! states are mutually exclusive by construction; `Unset` is reachable only
//! through seeding, never through toggling.

use tracing::{debug, warn};

use crate::questions::{QUESTION_COUNT, Question, question_bank};

/// A screener's relevance judgment for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relevance {
    Relevant,
    NonRelevant,
    #[default]
    Unset,
}

impl Relevance {
    /// True when the question counts toward the relevant total.
    pub fn is_relevant(self) -> bool {
        self == Relevance::Relevant
    }
}

/// The two checkbox columns a screener can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Relevant,
    NonRelevant,
}

impl Mark {
    /// The sibling column.
    pub fn opposite(self) -> Mark {
        match self {
            Mark::Relevant => Mark::NonRelevant,
            Mark::NonRelevant => Mark::Relevant,
        }
    }

    fn as_relevance(self) -> Relevance {
        match self {
            Mark::Relevant => Relevance::Relevant,
            Mark::NonRelevant => Relevance::NonRelevant,
        }
    }
}

/// Authoritative relevance state for the fixed question bank.
///
/// Entries are stored in bank order. All reads of the relevant count go
/// through [`RelevanceBoard::relevant_count`], which recounts the live
/// entries rather than caching a total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceBoard {
    entries: [Relevance; QUESTION_COUNT],
}

impl RelevanceBoard {
    /// The default demonstration state: odd-numbered questions relevant,
    /// even-numbered non-relevant.
    pub fn seeded() -> Self {
        let mut entries = [Relevance::Unset; QUESTION_COUNT];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = if i % 2 == 0 {
                Relevance::Relevant
            } else {
                Relevance::NonRelevant
            };
        }
        Self { entries }
    }

    /// A board with every question unmarked.
    pub fn unset() -> Self {
        Self {
            entries: [Relevance::Unset; QUESTION_COUNT],
        }
    }

    /// Applies a checkbox toggle for the named question.
    ///
    /// Selecting a column the question does not currently hold moves it
    /// there. Untoggling the column it does hold activates the sibling
    /// column instead; a marked question never returns to `Unset`.
    ///
    /// Unknown question ids are ignored. Returns the updated judgment, or
    /// `None` when nothing changed.
    pub fn toggle(&mut self, id: &str, mark: Mark) -> Option<Relevance> {
        let Some(index) = question_bank().iter().position(|q| q.id == id) else {
            warn!(question = id, "ignoring toggle for unknown question");
            return None;
        };

        let next = if self.entries[index] == mark.as_relevance() {
            mark.opposite().as_relevance()
        } else {
            mark.as_relevance()
        };
        self.entries[index] = next;
        debug!(question = id, judgment = ?next, "relevance toggled");
        Some(next)
    }

    /// The judgment for the named question, if it exists.
    pub fn get(&self, id: &str) -> Option<Relevance> {
        question_bank()
            .iter()
            .position(|q| q.id == id)
            .map(|index| self.entries[index])
    }

    /// Live count of questions marked relevant.
    pub fn relevant_count(&self) -> usize {
        self.entries.iter().filter(|r| r.is_relevant()).count()
    }

    /// Iterates the bank in display order, pairing each question with its
    /// current judgment.
    pub fn rows(&self) -> impl Iterator<Item = (&'static Question, Relevance)> + '_ {
        question_bank()
            .iter()
            .zip(self.entries.iter())
            .map(|(question, relevance)| (question, *relevance))
    }
}

impl Default for RelevanceBoard {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_board_alternates_relevant_and_non_relevant() {
        let board = RelevanceBoard::seeded();
        assert_eq!(board.get("q1"), Some(Relevance::Relevant));
        assert_eq!(board.get("q2"), Some(Relevance::NonRelevant));
        assert_eq!(board.get("q3"), Some(Relevance::Relevant));
        assert_eq!(board.get("q4"), Some(Relevance::NonRelevant));
        assert_eq!(board.get("q5"), Some(Relevance::Relevant));
        assert_eq!(board.get("q6"), Some(Relevance::NonRelevant));
    }

    #[test]
    fn seeded_board_counts_three_relevant() {
        assert_eq!(RelevanceBoard::seeded().relevant_count(), 3);
    }

    #[test]
    fn unset_board_counts_zero() {
        assert_eq!(RelevanceBoard::unset().relevant_count(), 0);
    }

    #[test]
    fn toggling_the_other_column_moves_the_judgment() {
        let mut board = RelevanceBoard::seeded();
        assert_eq!(
            board.toggle("q2", Mark::Relevant),
            Some(Relevance::Relevant)
        );
        assert_eq!(board.get("q2"), Some(Relevance::Relevant));
        assert_eq!(board.relevant_count(), 4);
    }

    #[test]
    fn untoggling_a_column_activates_the_sibling() {
        let mut board = RelevanceBoard::seeded();
        // q1 is already relevant; unchecking that column flips it to
        // non-relevant rather than clearing it.
        assert_eq!(
            board.toggle("q1", Mark::Relevant),
            Some(Relevance::NonRelevant)
        );
        assert_eq!(board.relevant_count(), 2);

        // And the mirror case from the non-relevant column.
        assert_eq!(
            board.toggle("q2", Mark::NonRelevant),
            Some(Relevance::Relevant)
        );
    }

    #[test]
    fn toggling_never_produces_unset() {
        let mut board = RelevanceBoard::seeded();
        for _ in 0..4 {
            for id in ["q1", "q2", "q3", "q4", "q5", "q6"] {
                board.toggle(id, Mark::Relevant);
                assert_ne!(board.get(id), Some(Relevance::Unset));
                board.toggle(id, Mark::NonRelevant);
                assert_ne!(board.get(id), Some(Relevance::Unset));
            }
        }
    }

    #[test]
    fn unset_question_takes_the_toggled_mark() {
        let mut board = RelevanceBoard::unset();
        assert_eq!(
            board.toggle("q3", Mark::NonRelevant),
            Some(Relevance::NonRelevant)
        );
        assert_eq!(board.relevant_count(), 0);
    }

    #[test]
    fn unknown_question_is_a_no_op() {
        let mut board = RelevanceBoard::seeded();
        let before = board.clone();
        assert_eq!(board.toggle("q99", Mark::Relevant), None);
        assert_eq!(board, before);
    }

    #[test]
    fn count_matches_direct_recount_after_arbitrary_toggles() {
        let mut board = RelevanceBoard::seeded();
        let sequence = [
            ("q1", Mark::NonRelevant),
            ("q4", Mark::Relevant),
            ("q4", Mark::Relevant),
            ("q6", Mark::Relevant),
            ("q2", Mark::NonRelevant),
        ];
        for (id, mark) in sequence {
            board.toggle(id, mark);
            let recount = board
                .rows()
                .filter(|(_, r)| *r == Relevance::Relevant)
                .count();
            assert_eq!(board.relevant_count(), recount);
        }
    }

    #[test]
    fn rows_pairs_every_question_with_its_judgment() {
        let board = RelevanceBoard::seeded();
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows.len(), QUESTION_COUNT);
        assert_eq!(rows[0].0.id, "q1");
        assert_eq!(rows[0].1, Relevance::Relevant);
        assert_eq!(rows[5].0.id, "q6");
        assert_eq!(rows[5].1, Relevance::NonRelevant);
    }
}
