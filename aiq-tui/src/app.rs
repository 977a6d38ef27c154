//! Main application struct and event loop for the scorecard TUI.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use aiq_core::{Assessment, Mark, QUESTION_COUNT};

use crate::error::TuiError;
use crate::keybindings::{Action, KeyBindings};
use crate::state::{Focus, Mode, UiState};
use crate::widgets::{NotesWidget, QuestionListWidget, ResultWidget};
use crate::{AiqTerminal, Theme, aiq_default, restore_terminal, setup_terminal};

/// Main TUI application.
///
/// Owns the coordinator ([`Assessment`]) as the single source of scorecard
/// truth, plus the display-local state the widgets need. Key events are
/// resolved to actions and applied one at a time, to completion, before
/// the next is read.
#[derive(Debug)]
pub struct App {
    pub assessment: Assessment,
    pub state: UiState,
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub questions: QuestionListWidget,
    pub result: ResultWidget,
    pub notes: NotesWidget,
    pub running: bool,
}

impl App {
    /// Creates a new App over a freshly seeded assessment.
    pub fn new() -> Self {
        Self::with_assessment(Assessment::new())
    }

    /// Creates a new App over the given assessment.
    pub fn with_assessment(assessment: Assessment) -> Self {
        Self {
            assessment,
            state: UiState::default(),
            keybindings: KeyBindings::default(),
            theme: aiq_default(),
            questions: QuestionListWidget::new(),
            result: ResultWidget,
            notes: NotesWidget,
            running: true,
        }
    }

    /// Handles a key event.
    ///
    /// Ctrl-C always quits. In editing mode keys feed the notes editor;
    /// otherwise they resolve through the keybindings.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if self.state.mode == Mode::EditNotes {
            self.handle_edit_key(key);
            return;
        }

        if let Some(action) = self.keybindings.resolve(key, self.state.mode) {
            self.execute_action(action);
        }
    }

    /// Executes a normal-mode action.
    ///
    /// Panel-specific actions apply only while their panel has focus, so
    /// the same key can mean different things per panel without surprise
    /// side effects.
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::FocusNext => self.state.focus = self.state.focus.next(),
            Action::FocusPrev => self.state.focus = self.state.focus.prev(),
            Action::NavigateDown => {
                if self.state.focus == Focus::Questions {
                    self.questions.select_next();
                }
            }
            Action::NavigateUp => {
                if self.state.focus == Focus::Questions {
                    self.questions.select_prev();
                }
            }
            Action::MarkRelevant => {
                if self.state.focus == Focus::Questions {
                    self.assessment
                        .toggle_relevance(self.questions.selected_question(), Mark::Relevant);
                }
            }
            Action::MarkNonRelevant => {
                if self.state.focus == Focus::Questions {
                    self.assessment
                        .toggle_relevance(self.questions.selected_question(), Mark::NonRelevant);
                }
            }
            Action::OverrideLevel(level) => {
                if self.state.focus == Focus::Result {
                    self.assessment.override_level(level);
                }
            }
            Action::EditNotes => {
                if self.state.focus == Focus::Notes {
                    self.state.mode = Mode::EditNotes;
                }
            }
        }
    }

    /// Feeds a key to the notes editor, pushing every content change to
    /// the coordinator immediately.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        let edited = match key.code {
            KeyCode::Esc => {
                self.state.mode = Mode::Normal;
                false
            }
            KeyCode::Char(c) => {
                self.state.editor.insert(c);
                true
            }
            KeyCode::Enter => {
                self.state.editor.insert('\n');
                true
            }
            KeyCode::Backspace => {
                self.state.editor.backspace();
                true
            }
            KeyCode::Delete => {
                self.state.editor.delete();
                true
            }
            KeyCode::Left => {
                self.state.editor.move_left();
                false
            }
            KeyCode::Right => {
                self.state.editor.move_right();
                false
            }
            KeyCode::Home => {
                self.state.editor.move_to_start();
                false
            }
            KeyCode::End => {
                self.state.editor.move_to_end();
                false
            }
            _ => false,
        };

        if edited {
            self.assessment.set_notes(self.state.editor.text());
        }
    }

    /// Renders the application to the terminal frame.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Length(14),
                Constraint::Min(10),
                Constraint::Length(7),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(self.header(), chunks[0]);
        frame.render_widget(
            self.questions.to_list(
                self.assessment.board(),
                self.state.focus == Focus::Questions,
                &self.theme,
            ),
            chunks[1],
        );
        self.result.render(
            frame,
            chunks[2],
            self.assessment.level(),
            self.assessment.chart(),
            self.state.focus == Focus::Result,
            &self.theme,
        );
        frame.render_widget(
            self.notes.to_paragraph(
                &self.state.editor,
                self.state.focus == Focus::Notes,
                self.state.mode == Mode::EditNotes,
                &self.theme,
            ),
            chunks[3],
        );
        frame.render_widget(self.hints(), chunks[4]);
    }

    /// Title bar with the live relevant count.
    fn header(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled(
                "AI Quotient (AIQ) Assessment",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!(
                    "Relevant: {}/{}",
                    self.assessment.relevant_count(),
                    QUESTION_COUNT
                ),
                Style::default().fg(self.theme.checked),
            ),
        ]);
        Paragraph::new(line)
    }

    /// Key hints for the current focus and mode.
    fn hints(&self) -> Paragraph<'static> {
        let hints = match (self.state.mode, self.state.focus) {
            (Mode::EditNotes, _) => "type to edit  Esc done",
            (Mode::Normal, Focus::Questions) => {
                "j/k select  r relevant  n non-relevant  Tab panel  q quit"
            }
            (Mode::Normal, Focus::Result) => "h/m/l override level  Tab panel  q quit",
            (Mode::Normal, Focus::Notes) => "e edit notes  Tab panel  q quit",
        };
        Paragraph::new(Line::from(Span::styled(hints, self.theme.dim)))
    }

    /// Runs the main event loop.
    ///
    /// Sets up the terminal, enters the render/input loop, and restores
    /// the terminal on exit.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = setup_terminal().map_err(TuiError::Setup)?;

        let result = self.event_loop(&mut terminal);

        // Always restore, even if the loop failed.
        restore_terminal(&mut terminal).map_err(TuiError::Setup)?;

        result.map_err(TuiError::Io)
    }

    /// The core event loop. Separated from `run` for testability.
    fn event_loop(&mut self, terminal: &mut AiqTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
