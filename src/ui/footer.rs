use crate::ui::app::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    route: Route,
    dialog_open: bool,
}

impl Footer {
    pub fn new(route: Route, dialog_open: bool) -> Self {
        Self { route, dialog_open }
    }

    fn hints(&self) -> &'static str {
        match self.route {
            Route::Login => " Tab: Next field │ Enter: Login │ Esc/Ctrl+Q: Quit",
            Route::Users if self.dialog_open => " y/Enter: Delete │ n/Esc: Cancel │ Ctrl+Q: Quit",
            Route::Users => {
                " ←/→: Page │ ↑/↓: Select │ Enter: Edit │ d: Delete │ r: Refresh │ l: Logout │ Ctrl+Q: Quit"
            }
            Route::Edit => " Tab: Next field │ Enter: Save │ Esc: Cancel │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints contain arrows and box characters.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
