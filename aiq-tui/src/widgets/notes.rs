//! Screener notes panel with an inline text editor.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::Theme;
use crate::state::NotesEditor;

const PLACEHOLDER: &str = "Enter qualitative feedback, observations, and comments here...";
const CAPTION: &str =
    " Provide detailed observations about the candidate's responses and overall AI aptitude. ";

/// Widget displaying the screener notes and, in editing mode, the cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotesWidget;

impl NotesWidget {
    /// Converts the widget to a renderable Paragraph over the editor state.
    pub fn to_paragraph(
        &self,
        editor: &NotesEditor,
        focused: bool,
        editing: bool,
        theme: &Theme,
    ) -> Paragraph<'static> {
        let border = if editing {
            theme.checked
        } else if focused {
            theme.border_focused
        } else {
            theme.border
        };
        let block = Block::default()
            .title(" Screener Notes / Comments ")
            .title_bottom(Line::from(Span::styled(CAPTION, theme.dim)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let lines = if editor.text().is_empty() && !editing {
            vec![Line::from(Span::styled(PLACEHOLDER, theme.dim))]
        } else if editing {
            lines_with_cursor(editor, theme)
        } else {
            editor
                .text()
                .split('\n')
                .map(|line| {
                    Line::from(Span::styled(
                        line.to_string(),
                        Style::default().fg(theme.fg),
                    ))
                })
                .collect()
        };

        Paragraph::new(lines).block(block).wrap(Wrap { trim: false })
    }
}

/// Splits the buffer into lines, marking the cursor position with a
/// reverse-video cell.
fn lines_with_cursor(editor: &NotesEditor, theme: &Theme) -> Vec<Line<'static>> {
    let text = editor.text();
    let cursor = editor.cursor();
    let body = Style::default().fg(theme.fg);
    let cursor_style = Style::default().fg(theme.bg).bg(theme.fg);

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut placed = false;

    for (idx, c) in text.char_indices() {
        if idx == cursor {
            if !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), body));
            }
            placed = true;
            if c == '\n' {
                spans.push(Span::styled(" ".to_string(), cursor_style));
                lines.push(Line::from(std::mem::take(&mut spans)));
            } else {
                spans.push(Span::styled(c.to_string(), cursor_style));
            }
            continue;
        }
        if c == '\n' {
            if !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), body));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            run.push(c);
        }
    }

    if !run.is_empty() {
        spans.push(Span::styled(run, body));
    }
    if !placed {
        // Cursor sits past the last character.
        spans.push(Span::styled(" ".to_string(), cursor_style));
    }
    lines.push(Line::from(spans));
    lines
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use crate::aiq_default;

    use super::*;

    fn rendered_content(editor: &NotesEditor, editing: bool) -> String {
        let theme = aiq_default();
        let widget = NotesWidget;
        let backend = TestBackend::new(100, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                f.render_widget(widget.to_paragraph(editor, true, editing, &theme), area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn empty_notes_show_the_placeholder() {
        let editor = NotesEditor::default();
        let content = rendered_content(&editor, false);
        assert!(content.contains("Enter qualitative feedback"));
    }

    #[test]
    fn typed_notes_replace_the_placeholder() {
        let mut editor = NotesEditor::default();
        for c in "Strong candidate".chars() {
            editor.insert(c);
        }
        let content = rendered_content(&editor, false);
        assert!(content.contains("Strong candidate"));
        assert!(!content.contains("Enter qualitative feedback"));
    }

    #[test]
    fn editing_mode_hides_the_placeholder() {
        let editor = NotesEditor::default();
        let content = rendered_content(&editor, true);
        assert!(!content.contains("Enter qualitative feedback"));
    }

    #[test]
    fn multiline_notes_render_on_separate_lines() {
        let mut editor = NotesEditor::default();
        for c in "first\nsecond".chars() {
            editor.insert(c);
        }
        let content = rendered_content(&editor, false);
        assert!(content.contains("first"));
        assert!(content.contains("second"));
    }

    #[test]
    fn renders_the_panel_title_and_caption() {
        let editor = NotesEditor::default();
        let content = rendered_content(&editor, false);
        assert!(content.contains("Screener Notes / Comments"));
        assert!(content.contains("Provide detailed observations"));
    }

    #[test]
    fn cursor_lines_split_the_buffer_at_the_cursor() {
        let mut editor = NotesEditor::default();
        for c in "abc".chars() {
            editor.insert(c);
        }
        editor.move_left();
        let theme = aiq_default();
        let lines = lines_with_cursor(&editor, &theme);
        assert_eq!(lines.len(), 1);
        // "ab" run, cursor cell on "c".
        let spans: Vec<String> = lines[0]
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(spans, vec!["ab".to_string(), "c".to_string()]);
    }

    #[test]
    fn cursor_at_end_appends_a_cell() {
        let mut editor = NotesEditor::default();
        editor.insert('a');
        let theme = aiq_default();
        let lines = lines_with_cursor(&editor, &theme);
        let spans: Vec<String> = lines[0]
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(spans, vec!["a".to_string(), " ".to_string()]);
    }
}
