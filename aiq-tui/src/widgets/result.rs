//! AIQ level row, profile summary, and competency bar chart.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
};

use aiq_core::{AiqLevel, ChartProfile, LevelDisplay};

use crate::Theme;

/// Widget displaying the derived level and the competency chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultWidget;

impl ResultWidget {
    /// Renders the full panel: level checkboxes, summary, chart.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        display: LevelDisplay,
        profile: &ChartProfile,
        focused: bool,
        theme: &Theme,
    ) {
        let border = if focused {
            theme.border_focused
        } else {
            theme.border
        };
        let block = Block::default()
            .title(" AIQ Level & Summary ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(4),
            ])
            .split(inner);

        frame.render_widget(self.level_row(display, theme), chunks[0]);
        frame.render_widget(self.summary(display, theme), chunks[1]);
        frame.render_widget(self.chart(profile, theme), chunks[2]);
    }

    /// The level checkbox row with its auto-calculation caption.
    fn level_row(&self, display: LevelDisplay, theme: &Theme) -> Paragraph<'static> {
        let mut spans = vec![Span::styled(
            "AIQ Level:",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )];

        for level in AiqLevel::all() {
            let checked = display.level() == Some(level);
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                if checked { "[x]" } else { "[ ]" },
                Style::default().fg(if checked { theme.checked } else { theme.muted }),
            ));
            spans.push(Span::styled(
                format!(" {}", level.as_str()),
                Style::default().fg(if checked {
                    theme.level_color(Some(level))
                } else {
                    theme.fg
                }),
            ));
        }

        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "(Auto calculated based on inputs)",
            theme.dim,
        ));

        Paragraph::new(Line::from(spans))
    }

    /// The per-level profile summary copy.
    fn summary(&self, display: LevelDisplay, theme: &Theme) -> Paragraph<'static> {
        let lines = vec![
            Line::from(Span::styled(
                "Candidate's estimated AIQ profile based on responses:",
                Style::default().fg(theme.muted),
            )),
            Line::from(Span::styled(
                display.summary(),
                Style::default().fg(theme.level_color(display.level())),
            )),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }

    /// The competency bar chart, color-banded by score.
    fn chart(&self, profile: &ChartProfile, theme: &Theme) -> BarChart<'static> {
        let bars: Vec<Bar> = profile
            .entries()
            .iter()
            .map(|entry| {
                let color = theme.band_color(entry.score);
                Bar::default()
                    .value(u64::from(entry.score))
                    .label(Line::from(entry.category))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(theme.bg).bg(color))
            })
            .collect();

        BarChart::default()
            .bar_width(12)
            .bar_gap(1)
            .max(100)
            .data(BarGroup::default().bars(&bars))
    }
}
