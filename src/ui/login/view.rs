use crate::ui::components::{button, input_lines, PopupDialog};
use crate::ui::loading::Loading;
use crate::ui::login::state::{LoginField, LoginState};
use crate::ui::theme::STATUS_ERROR;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

const FORM_WIDTH: u16 = 52;

pub fn render_login(frame: &mut Frame<'_>, area: Rect, state: &LoginState, tick: u64) {
    let mut lines = Vec::new();
    if let Some(error) = &state.form_error {
        lines.push(
            Line::from(Span::styled(error.clone(), Style::default().fg(STATUS_ERROR))).centered(),
        );
        lines.push(Line::from(""));
    }

    lines.extend(input_lines(
        "Email",
        &state.email,
        state.focus == LoginField::Email,
        false,
        "Please enter a valid email.",
    ));
    lines.push(Line::from(""));
    lines.extend(input_lines(
        "Password",
        &state.password,
        state.focus == LoginField::Password,
        true,
        "Please enter a valid password.",
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(button("Login", !state.busy)).centered());

    PopupDialog::new("Login", lines)
        .fixed_width(FORM_WIDTH)
        .render(frame, area);

    if state.busy {
        Loading::new("Logging...", tick).render(frame, area);
    }
}
