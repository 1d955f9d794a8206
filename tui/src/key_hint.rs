//! Keyboard hint spans for footers.

use crossterm::event::KeyCode;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Span;

fn key_label(key: KeyCode) -> String {
    match key {
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        other => format!("{other}").to_ascii_lowercase(),
    }
}

/// A dimmed span naming a key, e.g. `←` or `enter`.
pub(crate) fn key(key: KeyCode) -> Span<'static> {
    Span::styled(key_label(key), Style::default().bold())
}

/// A `keys + label` hint group, e.g. `← → navigate`.
pub(crate) fn hint(keys: &[KeyCode], label: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, code) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(key(*code));
    }
    spans.push(Span::styled(format!(" {label}"), Style::default().dim()));
    spans
}
