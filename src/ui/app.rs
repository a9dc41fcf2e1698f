use crate::config::{Config, SecureString};
use crate::session::SessionStore;
use crate::ui::delete::{DeleteDialogState, DeleteIntent, DeleteReducer};
use crate::ui::edit::{self, EditIntent, EditReducer, EditState};
use crate::ui::login::{self, LoginIntent, LoginReducer, LoginState};
use crate::ui::mvi::Reducer;
use crate::ui::users::{
    UsersIntent, UsersReducer, UsersState, DELETE_FAILED_MESSAGE, FETCH_FAILED_MESSAGE,
};
use crate::worker::{ApiCommand, ApiCommandSender, ApiEvent};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Login,
    Users,
    Edit,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    tick: u64,
    config: Config,
    session: SessionStore,
    commands: Option<ApiCommandSender>,
    last_command_error: Option<String>,
    login: LoginState,
    users: UsersState,
    delete_dialog: DeleteDialogState,
    edit: EditState,
}

impl App {
    /// Signed-in sessions start on the user list, everything else on login.
    pub fn new(config: Config, session: SessionStore) -> Self {
        let route = if session.is_authenticated() {
            Route::Users
        } else {
            Route::Login
        };
        Self {
            should_quit: false,
            route,
            tick: 0,
            config,
            session,
            commands: None,
            last_command_error: None,
            login: LoginState::default(),
            users: UsersState::default(),
            delete_dialog: DeleteDialogState::default(),
            edit: EditState::default(),
        }
    }

    pub fn set_command_sender(&mut self, sender: ApiCommandSender) {
        self.commands = Some(sender);
    }

    /// Page one is fetched eagerly, whether or not the user is signed in.
    pub fn start(&mut self) {
        tracing::info!(route = ?self.route, "Application started");
        self.ensure_users_loaded();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn users(&self) -> &UsersState {
        &self.users
    }

    pub fn delete_dialog(&self) -> &DeleteDialogState {
        &self.delete_dialog
    }

    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    fn navigate(&mut self, route: Route) {
        if self.route != route {
            tracing::info!(from = ?self.route, to = ?route, "Navigate");
        }
        self.route = route;
        if route == Route::Users {
            self.ensure_users_loaded();
        }
    }

    // ========================================================================
    // Login
    // ========================================================================

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login, LoginReducer, intent);
    }

    /// Validate and, if the form is complete, send the credentials.
    pub fn submit_login(&mut self) {
        let was_busy = self.login.busy;
        self.dispatch_login(LoginIntent::Submit);
        if was_busy || !self.login.busy {
            return;
        }

        let command = ApiCommand::Login {
            email: self.login.email.value().to_string(),
            password: SecureString::new(self.login.password.value().to_string()),
        };
        if !self.send_command(command) {
            let message = self
                .last_command_error
                .clone()
                .unwrap_or_else(|| login::GENERIC_FAILURE.to_string());
            self.dispatch_login(LoginIntent::Failed { message });
        }
    }

    pub fn logout(&mut self) {
        if let Err(err) = self.session.logout() {
            tracing::warn!(error = %err, "Failed to clear persisted token");
        }
        tracing::info!("Logged out");
        self.login = LoginState::default();
        dispatch_mvi!(self, users, UsersReducer, UsersIntent::Reset);
        dispatch_mvi!(self, delete_dialog, DeleteReducer, DeleteIntent::Cancel);
        dispatch_mvi!(self, edit, EditReducer, EditIntent::Close);
        self.navigate(Route::Login);
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Fetch the current page when the list is empty and nothing says it
    /// should stay empty.
    pub fn ensure_users_loaded(&mut self) {
        if self.session.users().is_empty() && self.users.wants_fetch() {
            self.fetch_page();
        }
    }

    fn fetch_page(&mut self) {
        dispatch_mvi!(self, users, UsersReducer, UsersIntent::FetchStarted);
        let command = ApiCommand::FetchPage {
            page: self.users.page,
            generation: self.users.generation,
        };
        if !self.send_command(command) {
            let generation = self.users.generation;
            dispatch_mvi!(
                self,
                users,
                UsersReducer,
                UsersIntent::PageFailed {
                    generation,
                    message: FETCH_FAILED_MESSAGE.to_string(),
                }
            );
        }
    }

    pub fn next_page(&mut self) {
        self.change_page(UsersIntent::NextPage);
    }

    pub fn previous_page(&mut self) {
        self.change_page(UsersIntent::PreviousPage);
    }

    fn change_page(&mut self, intent: UsersIntent) {
        let before = self.users.page;
        dispatch_mvi!(self, users, UsersReducer, intent);
        if self.users.page != before {
            self.session.clear_users();
            self.fetch_page();
        }
    }

    pub fn refresh_users(&mut self) {
        self.session.clear_users();
        self.fetch_page();
    }

    pub fn select_next(&mut self) {
        let len = self.session.users().len();
        dispatch_mvi!(self, users, UsersReducer, UsersIntent::SelectNext { len });
    }

    pub fn select_prev(&mut self) {
        let len = self.session.users().len();
        dispatch_mvi!(self, users, UsersReducer, UsersIntent::SelectPrev { len });
    }

    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_user_id() {
            self.open_edit(id);
        }
    }

    fn selected_user_id(&self) -> Option<u64> {
        self.session
            .users()
            .get(self.users.selected)
            .map(|user| user.id)
    }

    // ========================================================================
    // Delete dialog
    // ========================================================================

    pub fn open_delete_selected(&mut self) {
        let Some(user) = self.session.users().get(self.users.selected) else {
            return;
        };
        let intent = DeleteIntent::Open {
            user_id: user.id,
            first_name: user.first_name.clone(),
        };
        dispatch_mvi!(self, delete_dialog, DeleteReducer, intent);
    }

    pub fn cancel_delete(&mut self) {
        dispatch_mvi!(self, delete_dialog, DeleteReducer, DeleteIntent::Cancel);
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.delete_dialog.target() else {
            return;
        };
        if self.delete_dialog.is_busy() {
            return;
        }
        dispatch_mvi!(self, delete_dialog, DeleteReducer, DeleteIntent::Confirm);
        if !self.send_command(ApiCommand::DeleteUser { id }) {
            self.finish_delete(false);
        }
    }

    fn finish_delete(&mut self, deleted: bool) {
        if !deleted {
            dispatch_mvi!(
                self,
                users,
                UsersReducer,
                UsersIntent::DeleteFailed {
                    message: DELETE_FAILED_MESSAGE.to_string(),
                }
            );
        }
        dispatch_mvi!(self, delete_dialog, DeleteReducer, DeleteIntent::Finished);
    }

    // ========================================================================
    // Edit
    // ========================================================================

    pub fn dispatch_edit(&mut self, intent: EditIntent) {
        dispatch_mvi!(self, edit, EditReducer, intent);
    }

    /// Open the editor for `id`, falling back to a fetch when the user is not
    /// on the loaded page.
    pub fn open_edit(&mut self, id: u64) {
        match self.session.find_user(id) {
            Some(user) => {
                let user = user.clone();
                self.dispatch_edit(EditIntent::Open { user });
            }
            None => {
                self.dispatch_edit(EditIntent::Loading { user_id: id });
                if !self.send_command(ApiCommand::FetchUser { id }) {
                    let message = self.last_command_error.clone().unwrap_or_default();
                    self.dispatch_edit(EditIntent::LoadFailed {
                        user_id: id,
                        message,
                    });
                }
            }
        }
        self.navigate(Route::Edit);
    }

    pub fn submit_edit(&mut self) {
        let was_saving = self.edit.is_saving();
        self.dispatch_edit(EditIntent::Submit);
        if was_saving || !self.edit.is_saving() {
            return;
        }
        let Some(user) = self.edit.form().map(|form| form.draft()) else {
            return;
        };
        if !self.send_command(ApiCommand::UpdateUser { user }) {
            self.dispatch_edit(EditIntent::SaveFailed {
                message: edit::UPDATE_FAILED_MESSAGE.to_string(),
            });
        }
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch_edit(EditIntent::Close);
        self.navigate(Route::Users);
    }

    // ========================================================================
    // API results
    // ========================================================================

    pub fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::PageLoaded {
                generation,
                page,
                result,
            } => {
                if !self.users.is_current(generation) {
                    tracing::debug!(page, generation, "Dropping stale page result");
                    return;
                }
                match result {
                    Ok(user_page) => {
                        let intent = UsersIntent::PageLoaded {
                            generation,
                            total_pages: user_page.total_pages,
                            count: user_page.data.len(),
                        };
                        self.session.set_users(user_page.data);
                        dispatch_mvi!(self, users, UsersReducer, intent);
                    }
                    Err(_) => {
                        dispatch_mvi!(
                            self,
                            users,
                            UsersReducer,
                            UsersIntent::PageFailed {
                                generation,
                                message: FETCH_FAILED_MESSAGE.to_string(),
                            }
                        );
                    }
                }
            }
            ApiEvent::UserLoaded { id, result } => {
                if self.edit != (EditState::Loading { user_id: id }) {
                    return;
                }
                match result {
                    Ok(user) => self.dispatch_edit(EditIntent::Open { user }),
                    Err(err) => self.dispatch_edit(EditIntent::LoadFailed {
                        user_id: id,
                        message: err.to_string(),
                    }),
                }
            }
            ApiEvent::LoggedIn { result } => {
                if !self.login.busy {
                    return;
                }
                let token = match result {
                    Ok(token) => token,
                    Err(err) => {
                        let message = login::failure_message(&err);
                        self.dispatch_login(LoginIntent::Failed { message });
                        return;
                    }
                };
                if let Err(err) = self.session.set_token(token) {
                    self.dispatch_login(LoginIntent::Failed {
                        message: err.to_string(),
                    });
                    return;
                }
                tracing::info!("Logged in");
                self.dispatch_login(LoginIntent::Succeeded);
                self.navigate(Route::Users);
            }
            ApiEvent::UserUpdated { user, result } => {
                let id = user.id;
                let editing_this = self.edit.is_saving() && self.edit.user_id() == Some(id);
                match result {
                    Ok(()) => {
                        self.session.replace_user(user);
                        if editing_this {
                            self.dispatch_edit(EditIntent::Saved);
                            self.navigate(Route::Users);
                        }
                    }
                    Err(err) => {
                        if editing_this {
                            self.dispatch_edit(EditIntent::SaveFailed {
                                message: edit::failure_message(&err),
                            });
                        }
                    }
                }
            }
            ApiEvent::UserDeleted { id, result } => {
                let deleted = result.is_ok();
                if deleted {
                    self.session.remove_user(id);
                    let len = self.session.users().len();
                    dispatch_mvi!(self, users, UsersReducer, UsersIntent::UserRemoved { len });
                }
                if self.delete_dialog.target() == Some(id) {
                    self.finish_delete(deleted);
                } else if !deleted {
                    dispatch_mvi!(
                        self,
                        users,
                        UsersReducer,
                        UsersIntent::DeleteFailed {
                            message: DELETE_FAILED_MESSAGE.to_string(),
                        }
                    );
                }
                if self.route == Route::Users {
                    self.ensure_users_loaded();
                }
            }
        }
    }

    fn send_command(&mut self, command: ApiCommand) -> bool {
        let Some(sender) = &self.commands else {
            self.last_command_error = Some("API worker is not running".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to queue API command");
                self.last_command_error = Some(format!("Failed to queue request: {}", err));
                false
            }
        }
    }
}
