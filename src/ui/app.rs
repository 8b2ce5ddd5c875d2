//! Main TUI application state and logic

use crate::diagnostics::LineIndex;
use crate::pipeline::CompileReport;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::collections::BTreeSet;
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }
}

/// Report sections shown in the output pane, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTab {
    Diagnostics,
    Tokens,
    Tree,
    Symbols,
    Postfix,
    Python,
}

impl OutputTab {
    pub const ALL: [OutputTab; 6] = [
        OutputTab::Diagnostics,
        OutputTab::Tokens,
        OutputTab::Tree,
        OutputTab::Symbols,
        OutputTab::Postfix,
        OutputTab::Python,
    ];

    pub fn title(self) -> &'static str {
        match self {
            OutputTab::Diagnostics => "Diagnostics",
            OutputTab::Tokens => "Tokens",
            OutputTab::Tree => "AST",
            OutputTab::Symbols => "Symbols",
            OutputTab::Postfix => "Postfix",
            OutputTab::Python => "Python",
        }
    }

    fn index(self) -> usize {
        OutputTab::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        OutputTab::ALL[(self.index() + 1) % OutputTab::ALL.len()]
    }

    pub fn prev(self) -> Self {
        OutputTab::ALL[(self.index() + OutputTab::ALL.len() - 1) % OutputTab::ALL.len()]
    }
}

/// The main application state
pub struct App {
    /// Everything the compile produced
    pub report: CompileReport,

    /// The source code that was compiled
    pub source_code: String,

    /// 1-based lines that carry at least one diagnostic
    pub error_lines: BTreeSet<usize>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub tab: OutputTab,

    /// Per-pane scroll offsets; the output offset resets on tab change
    pub source_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app for a finished compile
    pub fn new(report: CompileReport, source_code: String) -> Self {
        let index = LineIndex::new(&source_code);
        let error_lines = report
            .error_locations()
            .into_iter()
            .map(|location| index.locate(location).line)
            .collect();

        let status_message = if report.succeeded() {
            "Compiled successfully".to_string()
        } else {
            format!("{} diagnostic(s)", report.diagnostics().len())
        };

        // Open on the first tab that has something useful to show
        let tab = if report.succeeded() {
            OutputTab::Python
        } else {
            OutputTab::Diagnostics
        };

        App {
            report,
            source_code,
            error_lines,
            focused_pane: FocusedPane::Output,
            tab,
            source_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Text of the selected tab
    pub fn tab_text(&self) -> String {
        match self.tab {
            OutputTab::Diagnostics => {
                if self.report.diagnostics().is_empty() {
                    "No errors.".to_string()
                } else {
                    self.report.diagnostics().join("\n\n")
                }
            }
            OutputTab::Tokens => self.report.token_listing(),
            OutputTab::Tree => self.report.tree.clone(),
            OutputTab::Symbols => self.report.symbol_listing(),
            OutputTab::Postfix => self.report.postfix.clone(),
            OutputTab::Python => self.report.python.clone(),
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            &self.error_lines,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        let titles: Vec<&str> = OutputTab::ALL.iter().map(|t| t.title()).collect();
        let text = self.tab_text();
        super::panes::render_output_pane(
            frame,
            columns[1],
            &titles,
            self.tab.index(),
            &text,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(frame, main_chunks[1], &self.status_message, &self.report);
    }

    fn select_tab(&mut self, tab: OutputTab) {
        self.tab = tab;
        self.output_scroll = 0;
        self.status_message = format!("Showing {}", tab.title());
    }

    fn scroll_focused(&mut self, delta: isize) {
        let offset = match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        };
        *offset = offset.saturating_add_signed(delta);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Right => self.select_tab(self.tab.next()),
            KeyCode::Left => self.select_tab(self.tab.prev()),
            // Number keys jump straight to a tab
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.select_tab(OutputTab::ALL[idx]);
            }
            KeyCode::Up => self.scroll_focused(-1),
            KeyCode::Down => self.scroll_focused(1),
            KeyCode::PageUp => self.scroll_focused(-10),
            KeyCode::PageDown => self.scroll_focused(10),
            KeyCode::Home => match self.focused_pane {
                FocusedPane::Source => self.source_scroll = 0,
                FocusedPane::Output => self.output_scroll = 0,
            },
            _ => {}
        }
    }
}
