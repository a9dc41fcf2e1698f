use crate::ui::components::{button, input_lines, PopupDialog};
use crate::ui::edit::state::{EditField, EditForm, EditState};
use crate::ui::loading::Loading;
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

const FORM_WIDTH: u16 = 60;
const TITLE: &str = "Edit User Details";

pub fn render_edit(frame: &mut Frame<'_>, area: Rect, state: &EditState, tick: u64) {
    match state {
        EditState::Closed => {}
        EditState::Loading { .. } => Loading::new("Loading User...", tick).render(frame, area),
        EditState::LoadFailed { message, .. } => {
            let lines = vec![
                error_line(message),
                Line::from(""),
                Line::from(button("Cancel (Esc)", true)).centered(),
            ];
            PopupDialog::new(TITLE, lines)
                .fixed_width(FORM_WIDTH)
                .render(frame, area);
        }
        EditState::Editing(form) => {
            PopupDialog::new(TITLE, form_lines(form))
                .fixed_width(FORM_WIDTH)
                .render(frame, area);
            if form.saving {
                Loading::new("Saving Changes...", tick).render(frame, area);
            }
        }
    }
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(STATUS_ERROR),
    ))
    .centered()
}

fn form_lines(form: &EditForm) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(error) = &form.error {
        lines.push(error_line(error));
        lines.push(Line::from(""));
    }
    lines.push(
        Line::from(Span::styled(
            format!("Avatar: {}", form.avatar),
            Style::default().fg(MUTED_TEXT),
        ))
        .centered(),
    );
    lines.push(Line::from(""));

    lines.extend(input_lines(
        "First Name",
        &form.first_name,
        form.focus == EditField::FirstName,
        false,
        "Please enter a valid first name.",
    ));
    lines.push(Line::from(""));
    lines.extend(input_lines(
        "Last Name",
        &form.last_name,
        form.focus == EditField::LastName,
        false,
        "Please enter a valid last name.",
    ));
    lines.push(Line::from(""));
    lines.extend(input_lines(
        "Email",
        &form.email,
        form.focus == EditField::Email,
        false,
        "Please enter a valid email.",
    ));
    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            button("Cancel (Esc)", true),
            Span::raw("   "),
            button("Save Changes (Enter)", !form.saving),
        ])
        .centered(),
    );
    lines
}
