use crate::api::User;
use crate::ui::form::FormField;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    FirstName,
    LastName,
    Email,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            EditField::FirstName => EditField::LastName,
            EditField::LastName => EditField::Email,
            EditField::Email => EditField::FirstName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditField::FirstName => EditField::Email,
            EditField::LastName => EditField::FirstName,
            EditField::Email => EditField::LastName,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub user_id: u64,
    /// Not editable; sent back unchanged.
    pub avatar: String,
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub focus: EditField,
    pub saving: bool,
    pub error: Option<String>,
}

impl EditForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            avatar: user.avatar.clone(),
            first_name: FormField::with_value(user.first_name.clone()),
            last_name: FormField::with_value(user.last_name.clone()),
            email: FormField::with_value(user.email.clone()),
            focus: EditField::default(),
            saving: false,
            error: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.first_name.is_valid() && self.last_name.is_valid() && self.email.is_valid()
    }

    /// The user as it will be submitted.
    pub fn draft(&self) -> User {
        User {
            id: self.user_id,
            email: self.email.value().to_string(),
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            avatar: self.avatar.clone(),
        }
    }

    pub(crate) fn focused_mut(&mut self) -> &mut FormField {
        match self.focus {
            EditField::FirstName => &mut self.first_name,
            EditField::LastName => &mut self.last_name,
            EditField::Email => &mut self.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    #[default]
    Closed,
    /// The user was not on the loaded page and is being fetched by id.
    Loading { user_id: u64 },
    LoadFailed { user_id: u64, message: String },
    Editing(EditForm),
}

impl UiState for EditState {}

impl EditState {
    pub fn user_id(&self) -> Option<u64> {
        match self {
            EditState::Closed => None,
            EditState::Loading { user_id } | EditState::LoadFailed { user_id, .. } => {
                Some(*user_id)
            }
            EditState::Editing(form) => Some(form.user_id),
        }
    }

    pub fn form(&self) -> Option<&EditForm> {
        match self {
            EditState::Editing(form) => Some(form),
            _ => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.form().is_some_and(|form| form.saving)
    }
}
