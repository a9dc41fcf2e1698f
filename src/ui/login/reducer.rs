use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginField, LoginState};
use crate::ui::login::REQUIRED_MESSAGE;
use crate::ui::mvi::Reducer;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Input(ch) => {
                state.focused_mut().push(ch);
                state
            }
            LoginIntent::Backspace => {
                state.focused_mut().pop();
                state
            }
            LoginIntent::FocusNext | LoginIntent::FocusPrev => {
                state.focused_mut().blur();
                state.focus = match state.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
                state
            }
            LoginIntent::Submit => {
                if state.busy {
                    return state;
                }
                if !state.is_valid() {
                    state.form_error = Some(REQUIRED_MESSAGE.to_string());
                    return state;
                }
                state.busy = true;
                state.form_error = None;
                state
            }
            LoginIntent::Succeeded => LoginState::default(),
            LoginIntent::Failed { message } => {
                state.busy = false;
                state.form_error = Some(message);
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(state: LoginState, text: &str) -> LoginState {
        text.chars()
            .fold(state, |s, ch| LoginReducer::reduce(s, LoginIntent::Input(ch)))
    }

    #[test]
    fn focus_next_marks_field_touched() {
        let state = LoginReducer::reduce(LoginState::default(), LoginIntent::FocusNext);
        assert!(state.email.is_touched());
        assert!(state.email.has_error());
        assert!(!state.password.is_touched());
        assert_eq!(state.focus, LoginField::Password);
    }

    #[test]
    fn input_goes_to_focused_field() {
        let state = typed(LoginState::default(), "eve");
        let state = LoginReducer::reduce(state, LoginIntent::FocusNext);
        let state = typed(state, "pw");
        assert_eq!(state.email.value(), "eve");
        assert_eq!(state.password.value(), "pw");
    }

    #[test]
    fn backspace_on_empty_field_is_harmless() {
        let state = LoginReducer::reduce(LoginState::default(), LoginIntent::Backspace);
        assert_eq!(state.email.value(), "");
    }
}
