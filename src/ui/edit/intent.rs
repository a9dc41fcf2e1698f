use crate::api::User;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditIntent {
    Open { user: User },
    Loading { user_id: u64 },
    LoadFailed { user_id: u64, message: String },
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    Submit,
    Saved,
    SaveFailed { message: String },
    Close,
}

impl Intent for EditIntent {}
