//! Syntax-highlighted preview rendering.
//!
//! Highlighting is a pluggable capability behind [`Highlighter`]: a pure
//! `(text, language_tag) -> styled lines` transform with no error path.
//! Tags the implementation does not recognize degrade to plaintext, never to
//! a failure.

use once_cell::sync::Lazy;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use syntect::easy::HighlightLines;
use syntect::highlighting::FontStyle;
use syntect::highlighting::Theme;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME: Lazy<Theme> = Lazy::new(|| {
    let mut themes = ThemeSet::load_defaults().themes;
    themes.remove("base16-ocean.dark").unwrap_or_default()
});

/// Produce styled preview lines for a document.
pub trait Highlighter {
    fn highlight(&self, text: &str, language: &str) -> Vec<Line<'static>>;
}

/// Syntect-backed highlighter using the bundled default syntaxes and theme.
#[derive(Debug, Default)]
pub struct SyntectHighlighter;

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, text: &str, language: &str) -> Vec<Line<'static>> {
        let Some(syntax) = SYNTAX_SET.find_syntax_by_token(language) else {
            return plaintext_lines(text);
        };
        let mut highlighter = HighlightLines::new(syntax, &THEME);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(text) {
            match highlighter.highlight_line(line, &SYNTAX_SET) {
                Ok(ranges) => {
                    let spans: Vec<Span<'static>> = ranges
                        .into_iter()
                        .map(|(style, segment)| {
                            Span::styled(
                                segment.trim_end_matches(['\n', '\r']).to_string(),
                                syntect_to_ratatui(style),
                            )
                        })
                        .collect();
                    lines.push(Line::from(spans));
                }
                // A parse hiccup on one line falls back to that line raw.
                Err(_) => lines.push(raw_line(line)),
            }
        }
        lines
    }
}

fn plaintext_lines(text: &str) -> Vec<Line<'static>> {
    text.lines().map(raw_line).collect()
}

fn raw_line(line: &str) -> Line<'static> {
    Line::from(line.trim_end_matches(['\n', '\r']).to_string())
}

fn syntect_to_ratatui(style: syntect::highlighting::Style) -> Style {
    let mut out = Style::default().fg(Color::Rgb(
        style.foreground.r,
        style.foreground.g,
        style.foreground.b,
    ));
    if style.font_style.contains(FontStyle::BOLD) {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_language_degrades_to_plaintext() {
        let text = "first line\nsecond line\n";
        let lines = SyntectHighlighter::new().highlight(text, "no-such-language");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[0].spans[0].content.as_ref(), "first line");
        assert_eq!(lines[0].spans[0].style, Style::default());
    }

    #[test]
    fn rust_source_gets_styled_spans() {
        let lines = SyntectHighlighter::new().highlight("fn main() {}\n", "rust");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.iter().any(|s| s.style.fg.is_some()));
    }

    #[test]
    fn lines_never_contain_newlines() {
        let lines = SyntectHighlighter::new().highlight("a\r\nb\n", "rust");
        for line in &lines {
            for span in &line.spans {
                assert!(!span.content.contains('\n'));
                assert!(!span.content.contains('\r'));
            }
        }
    }

    #[test]
    fn empty_text_yields_no_lines() {
        let lines = SyntectHighlighter::new().highlight("", "rust");
        assert!(lines.is_empty());
    }
}
