use crate::ui::components::{button, PopupDialog};
use crate::ui::delete::reducer::DeleteDialogState;
use crate::ui::loading::Loading;
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

pub fn render_delete_dialog(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &DeleteDialogState,
    tick: u64,
) {
    let DeleteDialogState::Visible {
        first_name, busy, ..
    } = state
    else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Are you sure you want to delete {}?", first_name),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            button("Cancel (n)", true),
            Span::raw("  "),
            button("Delete (y)", !busy),
        ])
        .right_aligned(),
    ];

    PopupDialog::new("Confirm Delete", lines)
        .border_color(STATUS_ERROR)
        .render(frame, area);

    if *busy {
        Loading::new("Deleting User...", tick).render(frame, area);
    }
}
