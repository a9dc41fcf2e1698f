use crate::api::User;
use crate::ui::components::button;
use crate::ui::loading::Loading;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use crate::ui::users::state::UsersState;
use crate::ui::users::EMPTY_MESSAGE;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const CARD_HEIGHT: u16 = 5;

pub fn render_users(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &UsersState,
    users: &[User],
    tick: u64,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let mut heading = vec![Line::from(Span::styled(
        "ResReq Users List",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))
    .centered()];
    if let Some(error) = &state.error {
        heading.push(
            Line::from(Span::styled(error.clone(), Style::default().fg(STATUS_ERROR))).centered(),
        );
    }
    frame.render_widget(Paragraph::new(heading), chunks[0]);

    if !state.loading {
        if users.is_empty() {
            let empty = Line::from(Span::styled(EMPTY_MESSAGE, Style::default().fg(MUTED_TEXT)))
                .centered();
            frame.render_widget(Paragraph::new(empty), chunks[1]);
        } else {
            render_cards(frame, chunks[1], users, state.selected);
        }
    }

    frame.render_widget(Paragraph::new(pagination_line(state)), chunks[2]);

    if state.loading {
        Loading::new("Fetching Users...", tick).render(frame, area);
    }
}

fn columns_for(width: u16) -> usize {
    match width {
        w if w >= 90 => 3,
        w if w >= 60 => 2,
        _ => 1,
    }
}

fn render_cards(frame: &mut Frame<'_>, area: Rect, users: &[User], selected: usize) {
    let columns = columns_for(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = selected / columns;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);
    let card_width = area.width / columns as u16;

    for (idx, user) in users.iter().enumerate() {
        let row = idx / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let rect = Rect {
            x: area.x + (idx % columns) as u16 * card_width,
            y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT,
        };
        render_card(frame, rect, user, idx == selected);
    }
}

fn render_card(frame: &mut Frame<'_>, area: Rect, user: &User, selected: bool) {
    let (border, background) = if selected {
        (ACCENT, Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        (GLOBAL_BORDER, Style::default())
    };
    let lines = vec![
        Line::from(Span::styled(
            user.full_name(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(user.email.clone(), Style::default().fg(HEADER_TEXT))).centered(),
        Line::from(Span::styled(user.avatar.clone(), Style::default().fg(MUTED_TEXT))).centered(),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(lines).style(background).block(block), area);
}

fn pagination_line(state: &UsersState) -> Line<'static> {
    let page = match state.total_pages {
        Some(total) => format!("  Page {} of {}  ", state.page, total),
        None => format!("  Page {}  ", state.page),
    };
    Line::from(vec![
        button("◀ Previous", state.has_previous()),
        Span::styled(page, Style::default().fg(HEADER_TEXT)),
        button("Next ▶", state.has_next()),
    ])
    .centered()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_areas_use_fewer_columns() {
        assert_eq!(columns_for(120), 3);
        assert_eq!(columns_for(70), 2);
        assert_eq!(columns_for(40), 1);
    }

    #[test]
    fn pagination_mentions_total_when_known() {
        let state = UsersState {
            page: 2,
            total_pages: Some(2),
            ..UsersState::default()
        };
        let text: String = pagination_line(&state)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(text.contains("Page 2 of 2"));
    }
}
