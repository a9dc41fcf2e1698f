mod popup;

pub use popup::PopupDialog;

use crate::ui::form::FormField;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Label, value row and (when touched and invalid) the inline error of one input.
pub fn input_lines(
    label: &str,
    field: &FormField,
    focused: bool,
    masked: bool,
    error_text: &str,
) -> Vec<Line<'static>> {
    let value = if masked {
        "•".repeat(field.value().chars().count())
    } else {
        field.value().to_string()
    };
    let caret = if focused { "▏" } else { "" };
    let marker_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let value_style = if field.has_error() {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    let mut lines = vec![
        Line::from(Span::styled(label.to_string(), Style::default().fg(MUTED_TEXT))),
        Line::from(vec![
            Span::styled(if focused { "› " } else { "  " }, marker_style),
            Span::styled(value, value_style),
            Span::styled(caret, marker_style),
        ]),
    ];
    if field.has_error() {
        lines.push(Line::from(Span::styled(
            error_text.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines
}

/// A `[ label ]` button, dimmed when disabled.
pub fn button(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };
    Span::styled(format!("[ {} ]", label), style)
}
