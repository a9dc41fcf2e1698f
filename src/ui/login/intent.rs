use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    Input(char),
    Backspace,
    /// Leave the focused field (marking it touched) for the next one.
    FocusNext,
    FocusPrev,
    /// Validate; either show the form error or mark the request in flight.
    Submit,
    Succeeded,
    Failed { message: String },
}

impl Intent for LoginIntent {}
