//! Status bar: compile outcome on the left, keybindings on the right

use crate::pipeline::CompileReport;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEYBINDS: [(&str, &str); 5] = [
    ("←/→", "tab"),
    ("1-6", "jump"),
    ("↑/↓", "scroll"),
    ("⇥", "focus"),
    ("q", "quit"),
];

/// Badge text and colour summarising the compile
fn outcome_badge(report: &CompileReport) -> (String, Color) {
    match report.failed_stage {
        None => (" COMPILED ".to_string(), DEFAULT_THEME.ok),
        Some(stage) => (
            format!(" {} error(s) in {} ", report.diagnostics().len(), stage),
            DEFAULT_THEME.error,
        ),
    }
}

fn keybind_spans() -> Vec<Span<'static>> {
    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let mut spans = Vec::new();
    for (i, (key, action)) in KEYBINDS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", DEFAULT_THEME.bar(DEFAULT_THEME.muted)));
        }
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(
            format!(" {}", action),
            DEFAULT_THEME.bar(DEFAULT_THEME.text),
        ));
    }
    spans.push(Span::styled(" ", DEFAULT_THEME.bar(DEFAULT_THEME.text)));
    spans
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, report: &CompileReport) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let (badge, badge_bg) = outcome_badge(report);
    let outcome = Line::from(vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", message), DEFAULT_THEME.bar(DEFAULT_THEME.text)),
    ]);
    frame.render_widget(
        Paragraph::new(outcome).style(DEFAULT_THEME.bar(DEFAULT_THEME.text)),
        halves[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(keybind_spans()))
            .style(DEFAULT_THEME.bar(DEFAULT_THEME.text))
            .alignment(Alignment::Right),
        halves[1],
    );
}
