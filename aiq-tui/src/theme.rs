//! Theme for the scorecard TUI.

use ratatui::style::{Color, Modifier, Style};

use aiq_core::AiqLevel;

/// Theme configuration for the TUI.
///
/// Named colors and styles for every rendered element, matching the
/// product's dark teal-and-green palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub checked: Color,

    // Level colors
    pub high: Color,
    pub medium: Color,
    pub low: Color,
    pub undetermined: Color,

    // Chart score bands
    pub band_high: Color,
    pub band_mid: Color,
    pub band_low: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,

    // Text styles
    pub bold: Style,
    pub dim: Style,
}

impl Theme {
    /// The color used for the given level's name and summary.
    pub fn level_color(&self, level: Option<AiqLevel>) -> Color {
        match level {
            Some(AiqLevel::High) => self.high,
            Some(AiqLevel::Medium) => self.medium,
            Some(AiqLevel::Low) => self.low,
            None => self.undetermined,
        }
    }

    /// The bar color for a chart score: above 75 high band, above 50 mid,
    /// otherwise low.
    pub fn band_color(&self, score: u16) -> Color {
        if score > 75 {
            self.band_high
        } else if score > 50 {
            self.band_mid
        } else {
            self.band_low
        }
    }
}

/// Creates the default scorecard theme.
///
/// Palette from the product design system: near-black surface (#1C1E29),
/// white primary text, green (#17D4AA) and teal (#1EC1CE) accents, and a
/// soft red (#F66D6D) for the low band.
pub fn aiq_default() -> Theme {
    let fg = Color::Rgb(255, 255, 255);
    let green = Color::Rgb(23, 212, 170); // #17D4AA
    let teal = Color::Rgb(30, 193, 206); // #1EC1CE
    let red = Color::Rgb(246, 109, 109); // #F66D6D
    let yellow = Color::Rgb(250, 204, 21);
    let muted = Color::Rgb(170, 170, 170); // #AAAAAA

    Theme {
        name: "aiq".into(),

        bg: Color::Rgb(28, 30, 41), // #1C1E29
        fg,
        muted,
        accent: teal,
        checked: green,

        high: green,
        medium: yellow,
        low: red,
        undetermined: muted,

        band_high: green,
        band_mid: teal,
        band_low: red,

        border: Color::Rgb(60, 63, 80),
        border_focused: teal,
        selection: Color::Rgb(44, 48, 66),

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(muted).add_modifier(Modifier::DIM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_correct_name() {
        assert_eq!(aiq_default().name, "aiq");
    }

    #[test]
    fn default_theme_uses_product_green_for_checked() {
        assert_eq!(aiq_default().checked, Color::Rgb(23, 212, 170));
    }

    #[test]
    fn level_colors_track_the_displayed_level() {
        let theme = aiq_default();
        assert_eq!(theme.level_color(Some(AiqLevel::High)), theme.high);
        assert_eq!(theme.level_color(Some(AiqLevel::Medium)), theme.medium);
        assert_eq!(theme.level_color(Some(AiqLevel::Low)), theme.low);
        assert_eq!(theme.level_color(None), theme.undetermined);
    }

    #[test]
    fn band_color_splits_at_75_and_50() {
        let theme = aiq_default();
        assert_eq!(theme.band_color(100), theme.band_high);
        assert_eq!(theme.band_color(76), theme.band_high);
        assert_eq!(theme.band_color(75), theme.band_mid);
        assert_eq!(theme.band_color(51), theme.band_mid);
        assert_eq!(theme.band_color(50), theme.band_low);
        assert_eq!(theme.band_color(0), theme.band_low);
    }

    #[test]
    fn theme_is_clone() {
        let theme = aiq_default();
        let cloned = theme.clone();
        assert_eq!(theme.name, cloned.name);
    }
}
