//! Question list panel with relevance checkboxes.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use aiq_core::{QUESTION_COUNT, Question, QuestionId, Relevance, RelevanceBoard, question_bank};

use crate::Theme;

/// Widget displaying the six questions with their checkbox columns.
///
/// Owns only the selected-row index; judgments come from the board at
/// render time.
#[derive(Debug, Clone, Default)]
pub struct QuestionListWidget {
    pub selected: usize,
}

impl QuestionListWidget {
    /// Creates a widget with the first question selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves selection to the next question, wrapping at the end.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % QUESTION_COUNT;
    }

    /// Moves selection to the previous question, wrapping at the start.
    pub fn select_prev(&mut self) {
        if self.selected == 0 {
            self.selected = QUESTION_COUNT - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// The id of the currently selected question.
    pub fn selected_question(&self) -> QuestionId {
        question_bank()[self.selected].id
    }

    /// Converts the widget to a renderable List for the given board state.
    pub fn to_list(&self, board: &RelevanceBoard, focused: bool, theme: &Theme) -> List<'static> {
        let items: Vec<ListItem> = board
            .rows()
            .enumerate()
            .map(|(i, (question, relevance))| self.row_item(i, question, relevance, theme))
            .collect();

        let border = if focused {
            theme.border_focused
        } else {
            theme.border
        };
        let block = Block::default()
            .title(" Questions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        List::new(items).block(block)
    }

    fn row_item(
        &self,
        index: usize,
        question: &Question,
        relevance: Relevance,
        theme: &Theme,
    ) -> ListItem<'static> {
        let selected = index == self.selected;
        let row_style = if selected {
            Style::default().bg(theme.selection)
        } else {
            Style::default()
        };

        let bullet = if selected { "●" } else { " " };
        let prompt = Line::from(vec![
            Span::styled(format!("{bullet} "), Style::default().fg(theme.accent)),
            Span::styled(
                question.number,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(question.text, Style::default().fg(theme.fg)),
        ])
        .style(row_style);

        let relevant = relevance == Relevance::Relevant;
        let non_relevant = relevance == Relevance::NonRelevant;
        let mut marks = vec![
            Span::raw("      "),
            Span::styled(
                checkbox(relevant),
                Style::default().fg(if relevant { theme.checked } else { theme.muted }),
            ),
            Span::styled(" Relevant", Style::default().fg(theme.fg)),
            Span::raw("    "),
            Span::styled(
                checkbox(non_relevant),
                Style::default().fg(if non_relevant { theme.checked } else { theme.muted }),
            ),
            Span::styled(" Non-Relevant", Style::default().fg(theme.fg)),
        ];
        if !question.subtext.is_empty() {
            marks.push(Span::raw("    "));
            marks.push(Span::styled(question.subtext, theme.dim));
        }

        ListItem::new(vec![prompt, Line::from(marks).style(row_style)])
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
