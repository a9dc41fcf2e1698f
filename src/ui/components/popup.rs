use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Bordered box centered in an area, sized to its content.
pub struct PopupDialog<'a> {
    title: String,
    lines: Vec<Line<'a>>,
    fixed_width: Option<u16>,
    border: Color,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: impl Into<String>, lines: Vec<Line<'a>>) -> Self {
        Self {
            title: title.into(),
            lines,
            fixed_width: None,
            border: POPUP_BORDER,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    pub fn render(self, frame: &mut Frame<'_>, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let title_width = self.title.chars().count() as u16;
        let width = self
            .fixed_width
            .unwrap_or_else(|| content_width.max(title_width).saturating_add(4));
        let height = (self.lines.len() as u16).saturating_add(2);
        let rect = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.title), Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border));
        frame.render_widget(Paragraph::new(self.lines).block(block), rect);
    }
}
