use crate::ui::form::FormField;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub email: FormField,
    pub password: FormField,
    pub focus: LoginField,
    /// A login request is in flight; further submits are ignored.
    pub busy: bool,
    pub form_error: Option<String>,
}

impl UiState for LoginState {}

impl LoginState {
    pub fn is_valid(&self) -> bool {
        self.email.is_valid() && self.password.is_valid()
    }

    pub(crate) fn focused_mut(&mut self) -> &mut FormField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}
