//! Source positions and caret-style error rendering
//!
//! Every token and AST node records a byte offset. [`LineIndex`] turns those
//! offsets into 1-based line/column pairs using a line-start table built once
//! per source string, and the `render_*` functions print the offending line
//! with a `^` under each reported column:
//!
//! ```text
//! Lexical error on line 1 (columns: 5, 9)
//!     x = @ 1 $ ;
//!         ^   ^
//!   - column 5: invalid character '@'
//!   - column 9: invalid character '$'
//! ```

use crate::parser::ast::SourceLocation;
use crate::parser::lexer::LexError;
use std::collections::BTreeMap;
use std::fmt;

/// 1-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Line-start table for one source string.
pub struct LineIndex<'src> {
    source: &'src str,
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a line/column pair.
    ///
    /// Offsets past the end of the source map to the position just after the
    /// last character.
    pub fn locate(&self, location: SourceLocation) -> LineColumn {
        let offset = location.offset.min(self.source.len());
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let start = self.line_starts[line_idx];
        let column = self
            .source
            .get(start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - start);

        LineColumn {
            line: line_idx + 1,
            column: column + 1,
        }
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text(&self, line: usize) -> &'src str {
        let Some(&start) = self.line_starts.get(line.wrapping_sub(1)) else {
            return "";
        };
        let end = self
            .line_starts
            .get(line)
            .map(|&next| next - 1)
            .unwrap_or(self.source.len());
        self.source[start..end].trim_end_matches('\r')
    }
}

/// Build the caret line for the given 1-based columns.
fn caret_line(columns: &[usize]) -> String {
    let width = columns.iter().copied().max().unwrap_or(0);
    let mut carets = vec![' '; width];
    for &column in columns {
        if column > 0 {
            carets[column - 1] = '^';
        }
    }
    carets.into_iter().collect()
}

/// Render one positioned message with the source line and a caret under it.
pub fn render(
    index: &LineIndex<'_>,
    title: &str,
    location: SourceLocation,
    message: &dyn fmt::Display,
) -> String {
    let position = index.locate(location);
    format!(
        "{} at {}: {}\n    {}\n    {}",
        title,
        position,
        message,
        index.line_text(position.line),
        caret_line(&[position.column])
    )
}

/// Coalesce lexical errors by source line.
///
/// Produces one message per affected line, in line order, with every bad
/// column marked and one bullet per error sorted by column.
pub fn render_lexical_errors(index: &LineIndex<'_>, errors: &[LexError]) -> Vec<String> {
    let mut by_line: BTreeMap<usize, Vec<(usize, &LexError)>> = BTreeMap::new();
    for error in errors {
        let position = index.locate(error.location);
        by_line
            .entry(position.line)
            .or_default()
            .push((position.column, error));
    }

    by_line
        .into_iter()
        .map(|(line, mut entries)| {
            entries.sort_by_key(|(column, _)| *column);
            let mut columns: Vec<usize> = entries.iter().map(|(column, _)| *column).collect();
            columns.dedup();

            let summary = columns
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ");

            let mut message = format!(
                "Lexical error on line {} (columns: {})\n    {}\n    {}",
                line,
                summary,
                index.line_text(line),
                caret_line(&columns)
            );
            for (column, error) in &entries {
                message.push_str(&format!(
                    "\n  - column {}: invalid character '{}'",
                    column, error.character
                ));
            }
            message
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_first_line() {
        let index = LineIndex::new("abc\ndef");
        assert_eq!(
            index.locate(SourceLocation::new(0)),
            LineColumn { line: 1, column: 1 }
        );
        assert_eq!(
            index.locate(SourceLocation::new(2)),
            LineColumn { line: 1, column: 3 }
        );
    }

    #[test]
    fn test_locate_after_newline() {
        let index = LineIndex::new("abc\ndef\n\nx");
        assert_eq!(
            index.locate(SourceLocation::new(4)),
            LineColumn { line: 2, column: 1 }
        );
        assert_eq!(
            index.locate(SourceLocation::new(9)),
            LineColumn { line: 4, column: 1 }
        );
        assert_eq!(index.line_count(), 4);
    }

    #[test]
    fn test_locate_counts_characters() {
        let index = LineIndex::new("então x");
        // 'x' sits at byte 7 but is the 7th character
        assert_eq!(
            index.locate(SourceLocation::new(7)),
            LineColumn { line: 1, column: 7 }
        );
    }

    #[test]
    fn test_locate_past_end() {
        let index = LineIndex::new("ab");
        assert_eq!(
            index.locate(SourceLocation::new(10)),
            LineColumn { line: 1, column: 3 }
        );
    }

    #[test]
    fn test_line_text_strips_terminators() {
        let index = LineIndex::new("one\r\ntwo\nthree");
        assert_eq!(index.line_text(1), "one");
        assert_eq!(index.line_text(2), "two");
        assert_eq!(index.line_text(3), "three");
        assert_eq!(index.line_text(4), "");
        assert_eq!(index.line_text(0), "");
    }

    #[test]
    fn test_render_places_caret() {
        let index = LineIndex::new("x = 1;\ny = ;");
        let text = render(&index, "Syntax error", SourceLocation::new(11), &"expected expression");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Syntax error at line 2, column 5: expected expression");
        assert_eq!(lines[1], "    y = ;");
        assert_eq!(lines[2], "        ^");
    }

    #[test]
    fn test_lexical_errors_coalesced_and_ordered() {
        let source = "a $ b @\nok";
        let index = LineIndex::new(source);
        let errors = vec![
            LexError {
                character: '@',
                location: SourceLocation::new(6),
            },
            LexError {
                character: '$',
                location: SourceLocation::new(2),
            },
        ];
        let rendered = render_lexical_errors(&index, &errors);
        assert_eq!(rendered.len(), 1);
        let lines: Vec<&str> = rendered[0].lines().collect();
        assert_eq!(lines[0], "Lexical error on line 1 (columns: 3, 7)");
        assert_eq!(lines[1], "    a $ b @");
        assert_eq!(lines[2], "      ^   ^");
        assert_eq!(lines[3], "  - column 3: invalid character '$'");
        assert_eq!(lines[4], "  - column 7: invalid character '@'");
    }
}
