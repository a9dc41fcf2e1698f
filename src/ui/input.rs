use crate::ui::app::{App, Route};
use crate::ui::edit::{EditIntent, EditState};
use crate::ui::login::LoginIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::Login => handle_login_key(app, key),
        Route::Users => {
            if app.delete_dialog().is_visible() {
                handle_delete_key(app, key);
            } else {
                handle_users_key(app, key);
            }
        }
        Route::Edit => handle_edit_key(app, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_login(LoginIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_login(LoginIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Char(ch) if is_text(key) => app.dispatch_login(LoginIntent::Input(ch)),
        _ => {}
    }
}

fn handle_users_key(app: &mut App, key: KeyEvent) {
    if app.users().loading {
        if key.code == KeyCode::Char('l') {
            app.logout();
        }
        return;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('p') => app.previous_page(),
        KeyCode::Right | KeyCode::Char('n') => app.next_page(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Enter | KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_selected(),
        KeyCode::Char('r') => app.refresh_users(),
        KeyCode::Char('l') => app.logout(),
        _ => {}
    }
}

fn handle_delete_key(app: &mut App, key: KeyEvent) {
    if app.delete_dialog().is_busy() {
        return;
    }
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        if !app.edit().is_saving() {
            app.cancel_edit();
        }
        return;
    }
    if !matches!(app.edit(), EditState::Editing(_)) {
        return;
    }
    match key.code {
        KeyCode::Enter => app.submit_edit(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_edit(EditIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_edit(EditIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_edit(EditIntent::Backspace),
        KeyCode::Char(ch) if is_text(key) => app.dispatch_edit(EditIntent::Input(ch)),
        _ => {}
    }
}

fn is_text(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::{MemoryTokenStorage, SessionStore};
    use tokio::sync::mpsc;

    fn press(app: &mut App, ch: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
    }

    fn loading_app() -> (App, mpsc::Receiver<crate::worker::ApiCommand>) {
        let storage = MemoryTokenStorage::with_token("QpwL5tke4Pnpja7X4");
        let session = SessionStore::open(Box::new(storage)).unwrap();
        let mut app = App::new(Config::default(), session);
        let (tx, rx) = mpsc::channel(16);
        app.set_command_sender(tx);
        app.start();
        assert!(app.users().loading);
        (app, rx)
    }

    #[test]
    fn logout_is_accepted_while_page_loads() {
        let (mut app, _rx) = loading_app();
        press(&mut app, 'l');
        assert_eq!(app.route(), Route::Login);
        assert!(!app.session().is_authenticated());
    }

    #[test]
    fn paging_is_ignored_while_page_loads() {
        let (mut app, _rx) = loading_app();
        press(&mut app, 'n');
        assert_eq!(app.users().page, 1);
        assert_eq!(app.route(), Route::Users);
    }

    #[test]
    fn ctrl_q_matches_regardless_of_case() {
        let key = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::CONTROL);
        assert!(is_ctrl_char(key, 'q'));
        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!is_ctrl_char(plain, 'q'));
    }

    #[test]
    fn shifted_characters_are_text() {
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert!(is_text(key));
        let ctrl = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert!(!is_text(ctrl));
    }
}
