use crate::ui::edit::intent::EditIntent;
use crate::ui::edit::state::{EditForm, EditState};
use crate::ui::edit::REQUIRED_MESSAGE;
use crate::ui::mvi::Reducer;

pub struct EditReducer;

impl Reducer for EditReducer {
    type State = EditState;
    type Intent = EditIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditIntent::Open { user } => EditState::Editing(EditForm::from_user(&user)),
            EditIntent::Loading { user_id } => EditState::Loading { user_id },
            EditIntent::LoadFailed { user_id, message } => match state {
                EditState::Loading { user_id: pending } if pending == user_id => {
                    EditState::LoadFailed { user_id, message }
                }
                other => other,
            },
            EditIntent::Close | EditIntent::Saved => EditState::Closed,
            intent => match state {
                EditState::Editing(form) => EditState::Editing(reduce_form(form, intent)),
                other => other,
            },
        }
    }
}

fn reduce_form(mut form: EditForm, intent: EditIntent) -> EditForm {
    match intent {
        EditIntent::Input(ch) => form.focused_mut().push(ch),
        EditIntent::Backspace => form.focused_mut().pop(),
        EditIntent::FocusNext => {
            form.focused_mut().blur();
            form.focus = form.focus.next();
        }
        EditIntent::FocusPrev => {
            form.focused_mut().blur();
            form.focus = form.focus.prev();
        }
        EditIntent::Submit => {
            if form.saving {
                return form;
            }
            if !form.is_valid() {
                form.error = Some(REQUIRED_MESSAGE.to_string());
                return form;
            }
            form.saving = true;
            form.error = None;
        }
        EditIntent::SaveFailed { message } => {
            form.saving = false;
            form.error = Some(message);
        }
        EditIntent::Open { .. }
        | EditIntent::Loading { .. }
        | EditIntent::LoadFailed { .. }
        | EditIntent::Saved
        | EditIntent::Close => {}
    }
    form
}
