//! Colour palette shared by every pane

use crate::parser::lexer::TokenKind;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub keyword: Color,
    pub literal: Color,
    pub name: Color,
    pub delimiter: Color,
    pub ok: Color,
    pub error: Color,
    pub selected_tab: Color,
    pub focus_border: Color,
    pub bar_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    text: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(108, 112, 134),
    keyword: Color::Rgb(203, 166, 247),
    literal: Color::Rgb(250, 179, 135),
    name: Color::Rgb(148, 226, 213),
    delimiter: Color::Rgb(137, 180, 250),
    ok: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    selected_tab: Color::Rgb(249, 226, 175),
    focus_border: Color::Rgb(249, 226, 175),
    bar_bg: Color::Rgb(49, 50, 68),
};

impl Theme {
    /// Border of a pane, bold while it has focus
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.focus_border)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Plain text on the status bar background
    pub fn bar(&self, fg: Color) -> Style {
        Style::default().bg(self.bar_bg).fg(fg)
    }

    /// Highlight style for one token kind
    pub fn token(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::If
            | TokenKind::Then
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::For
            | TokenKind::And
            | TokenKind::Or => Style::default()
                .fg(self.keyword)
                .add_modifier(Modifier::BOLD),
            TokenKind::True | TokenKind::False | TokenKind::Number => {
                Style::default().fg(self.literal)
            }
            TokenKind::Identifier => Style::default().fg(self.name),
            TokenKind::Comment => Style::default()
                .fg(self.muted)
                .add_modifier(Modifier::ITALIC),
            TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBracket
            | TokenKind::RBracket => Style::default().fg(self.delimiter),
            _ => Style::default().fg(self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_and_names_differ() {
        let keyword = DEFAULT_THEME.token(TokenKind::While);
        let name = DEFAULT_THEME.token(TokenKind::Identifier);
        assert_ne!(keyword, name);
        assert!(keyword.add_modifier.contains(Modifier::BOLD));
    }
}
