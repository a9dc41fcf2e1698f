//! Busy overlay with a caller-supplied status message.

use crate::ui::components::PopupDialog;
use crate::ui::theme::{ACCENT, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct Loading<'a> {
    message: &'a str,
    tick: u64,
}

impl<'a> Loading<'a> {
    pub fn new(message: &'a str, tick: u64) -> Self {
        Self { message, tick }
    }

    pub fn spinner_frame(tick: u64) -> &'static str {
        SPINNER[(tick % SPINNER.len() as u64) as usize]
    }

    pub fn render(self, frame: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                Self::spinner_frame(self.tick),
                Style::default().fg(ACCENT),
            ))
            .centered(),
            Line::from(Span::styled(
                self.message.to_string(),
                Style::default().fg(HEADER_TEXT),
            ))
            .centered(),
        ];
        PopupDialog::new("Please wait", lines).render(frame, area);
    }
}
