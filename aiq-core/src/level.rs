//! AIQ level classification and the level display state.

/// Three-tier summary judgment of a candidate's AI aptitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiqLevel {
    High,
    Medium,
    Low,
}

impl AiqLevel {
    /// Derives the level from the relevant-question count.
    ///
    /// Thresholds: 5 or more relevant answers rate High, 3-4 Medium,
    /// fewer than 3 Low.
    pub fn classify(relevant_count: usize) -> Self {
        if relevant_count >= 5 {
            AiqLevel::High
        } else if relevant_count >= 3 {
            AiqLevel::Medium
        } else {
            AiqLevel::Low
        }
    }

    /// All levels in display order.
    pub fn all() -> [AiqLevel; 3] {
        [AiqLevel::High, AiqLevel::Medium, AiqLevel::Low]
    }

    /// Returns the display text for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            AiqLevel::High => "High",
            AiqLevel::Medium => "Medium",
            AiqLevel::Low => "Low",
        }
    }

    /// One-line profile summary shown under the level row.
    pub fn summary(&self) -> &'static str {
        match self {
            AiqLevel::High => {
                "Strong indication of AI-friendly talent. Demonstrates curiosity, awareness, and practical application ability."
            }
            AiqLevel::Medium => {
                "Moderate indication. Shows some key AI-friendly traits but may need development in certain areas."
            }
            AiqLevel::Low => {
                "Limited indication of current AI-friendly traits. Further exploration or development recommended."
            }
        }
    }
}

/// What the level row currently displays.
///
/// Keeps the derived value and a manual override as distinct states so the
/// interaction between the two stays explicit: any recount replaces the
/// whole display, wiping overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelDisplay {
    /// Auto-calculated from the relevant count.
    Derived(AiqLevel),
    /// Manually selected by the screener; display-local and transient.
    Overridden(AiqLevel),
    /// The screener unchecked the displayed level.
    Cleared,
}

impl LevelDisplay {
    /// The level currently shown, if any.
    pub fn level(&self) -> Option<AiqLevel> {
        match self {
            LevelDisplay::Derived(level) | LevelDisplay::Overridden(level) => Some(*level),
            LevelDisplay::Cleared => None,
        }
    }

    /// Replaces the display with the level derived from the count,
    /// discarding any override.
    pub fn rederive(&mut self, relevant_count: usize) {
        *self = LevelDisplay::Derived(AiqLevel::classify(relevant_count));
    }

    /// Applies a manual checkbox selection.
    ///
    /// Selecting the level already shown clears the display; selecting a
    /// different level replaces it.
    pub fn toggle_override(&mut self, level: AiqLevel) {
        *self = if self.level() == Some(level) {
            LevelDisplay::Cleared
        } else {
            LevelDisplay::Overridden(level)
        };
    }

    /// Returns the display text for the level row.
    pub fn as_str(&self) -> &'static str {
        match self.level() {
            Some(level) => level.as_str(),
            None => "Undetermined",
        }
    }

    /// The profile summary for the current display.
    pub fn summary(&self) -> &'static str {
        match self.level() {
            Some(level) => level.summary(),
            None => "AIQ Level not determined or overridden.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_low_below_three() {
        assert_eq!(AiqLevel::classify(0), AiqLevel::Low);
        assert_eq!(AiqLevel::classify(1), AiqLevel::Low);
        assert_eq!(AiqLevel::classify(2), AiqLevel::Low);
    }

    #[test]
    fn classify_is_medium_for_three_and_four() {
        assert_eq!(AiqLevel::classify(3), AiqLevel::Medium);
        assert_eq!(AiqLevel::classify(4), AiqLevel::Medium);
    }

    #[test]
    fn classify_is_high_from_five_up() {
        assert_eq!(AiqLevel::classify(5), AiqLevel::High);
        assert_eq!(AiqLevel::classify(6), AiqLevel::High);
    }

    #[test]
    fn overriding_a_different_level_replaces_the_display() {
        let mut display = LevelDisplay::Derived(AiqLevel::Medium);
        display.toggle_override(AiqLevel::High);
        assert_eq!(display, LevelDisplay::Overridden(AiqLevel::High));
    }

    #[test]
    fn overriding_the_displayed_level_clears_it() {
        let mut display = LevelDisplay::Derived(AiqLevel::Medium);
        display.toggle_override(AiqLevel::Medium);
        assert_eq!(display, LevelDisplay::Cleared);
        assert_eq!(display.as_str(), "Undetermined");
    }

    #[test]
    fn overriding_an_override_toggles_it_off() {
        let mut display = LevelDisplay::Derived(AiqLevel::Low);
        display.toggle_override(AiqLevel::High);
        display.toggle_override(AiqLevel::High);
        assert_eq!(display, LevelDisplay::Cleared);
    }

    #[test]
    fn overriding_from_cleared_selects_the_level() {
        let mut display = LevelDisplay::Cleared;
        display.toggle_override(AiqLevel::Low);
        assert_eq!(display, LevelDisplay::Overridden(AiqLevel::Low));
    }

    #[test]
    fn rederive_discards_any_override() {
        let mut display = LevelDisplay::Overridden(AiqLevel::High);
        display.rederive(2);
        assert_eq!(display, LevelDisplay::Derived(AiqLevel::Low));

        let mut cleared = LevelDisplay::Cleared;
        cleared.rederive(5);
        assert_eq!(cleared, LevelDisplay::Derived(AiqLevel::High));
    }

    #[test]
    fn summary_matches_the_displayed_level() {
        let display = LevelDisplay::Derived(AiqLevel::High);
        assert!(display.summary().contains("Strong indication"));
        assert!(LevelDisplay::Cleared.summary().contains("not determined"));
    }

    #[test]
    fn all_lists_levels_in_display_order() {
        assert_eq!(
            AiqLevel::all(),
            [AiqLevel::High, AiqLevel::Medium, AiqLevel::Low]
        );
    }
}
