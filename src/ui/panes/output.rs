//! Report pane: one tab per compile artefact

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
    Frame,
};

/// Render the tab strip and the selected text below it
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    titles: &[&str],
    selected: usize,
    text: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let tabs = Tabs::new(titles.iter().map(|t| Line::from(*t)).collect::<Vec<_>>())
        .select(selected)
        .style(Style::default().fg(DEFAULT_THEME.muted))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.selected_tab)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("·");
    frame.render_widget(tabs, chunks[0]);

    let block = Block::default()
        .title(format!(" {} ", titles.get(selected).copied().unwrap_or("")))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    if text.trim().is_empty() {
        let paragraph = Paragraph::new("(nothing to show)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let total_lines = text.lines().count();
    let visible_height = chunks[1].height.saturating_sub(2).max(1) as usize;

    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let lines: Vec<Line> = text.lines().map(Line::from).collect();
    let scroll = u16::try_from(*scroll_offset).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.text))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, chunks[1]);
}
