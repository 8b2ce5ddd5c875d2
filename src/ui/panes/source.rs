//! Source code pane rendering with syntax highlighting
//!
//! Each line is highlighted with the real lexer (comments kept), so the
//! colours always agree with how the program was tokenised. Lines carrying a
//! diagnostic are flagged in the gutter.

use crate::config::LexerOptions;
use crate::parser::lexer::{Lexer, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::BTreeSet;

/// Highlight one source line; text between tokens (whitespace, invalid
/// characters) is kept unstyled.
fn highlight_source_code(line: &str) -> Vec<Span<'_>> {
    let (tokens, _) = Lexer::with_options(line, LexerOptions { keep_comments: true }).tokenize();
    let mut spans = Vec::new();
    let mut cursor = 0;

    for token in tokens.iter().filter(|t| t.kind != TokenKind::End) {
        let start = token.location.offset;
        let end = start + token.text.len();
        if start > cursor {
            spans.push(Span::raw(&line[cursor..start]));
        }
        spans.push(Span::styled(&line[start..end], DEFAULT_THEME.token(token.kind)));
        cursor = end;
    }

    if cursor < line.len() {
        spans.push(Span::raw(&line[cursor..]));
    }
    spans
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    error_lines: &BTreeSet<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border(is_focused));

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let (marker, num_style) = if error_lines.contains(&line_num) {
                (
                    "!",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.muted))
            };

            let mut spans = vec![Span::styled(format!("{}{:4} ", marker, line_num), num_style)];
            spans.extend(highlight_source_code(line));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_covers_whole_line() {
        let line = "se x > 1 entao { y = 2; } # fim";
        let spans = highlight_source_code(line);
        let rebuilt: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_highlight_keeps_invalid_characters() {
        let line = "x = 1 @ 2;";
        let spans = highlight_source_code(line);
        let rebuilt: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rebuilt, line);
    }
}
