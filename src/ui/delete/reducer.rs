use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteDialogState {
    #[default]
    Hidden,
    Visible {
        user_id: u64,
        first_name: String,
        /// The delete request is in flight.
        busy: bool,
    },
}

impl UiState for DeleteDialogState {}

impl DeleteDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Visible { busy: true, .. })
    }

    pub fn target(&self) -> Option<u64> {
        match self {
            Self::Visible { user_id, .. } => Some(*user_id),
            Self::Hidden => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DeleteIntent {
    Open { user_id: u64, first_name: String },
    Cancel,
    Confirm,
    /// The request finished, successfully or not. Either way the dialog closes.
    Finished,
}

impl Intent for DeleteIntent {}

pub struct DeleteReducer;

impl Reducer for DeleteReducer {
    type State = DeleteDialogState;
    type Intent = DeleteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeleteIntent::Open {
                user_id,
                first_name,
            } => DeleteDialogState::Visible {
                user_id,
                first_name,
                busy: false,
            },
            DeleteIntent::Cancel | DeleteIntent::Finished => DeleteDialogState::Hidden,
            DeleteIntent::Confirm => match state {
                DeleteDialogState::Visible {
                    user_id,
                    first_name,
                    ..
                } => DeleteDialogState::Visible {
                    user_id,
                    first_name,
                    busy: true,
                },
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> DeleteDialogState {
        DeleteReducer::reduce(
            DeleteDialogState::Hidden,
            DeleteIntent::Open {
                user_id: 7,
                first_name: "Michael".to_string(),
            },
        )
    }

    #[test]
    fn open_carries_target() {
        let state = open();
        assert!(state.is_visible());
        assert!(!state.is_busy());
        assert_eq!(state.target(), Some(7));
    }

    #[test]
    fn confirm_marks_busy() {
        let state = DeleteReducer::reduce(open(), DeleteIntent::Confirm);
        assert!(state.is_busy());
        assert_eq!(state.target(), Some(7));
    }

    #[test]
    fn confirm_while_hidden_is_noop() {
        let state = DeleteReducer::reduce(DeleteDialogState::Hidden, DeleteIntent::Confirm);
        assert_eq!(state, DeleteDialogState::Hidden);
    }

    #[test]
    fn finished_closes() {
        let busy = DeleteReducer::reduce(open(), DeleteIntent::Confirm);
        assert_eq!(
            DeleteReducer::reduce(busy, DeleteIntent::Finished),
            DeleteDialogState::Hidden
        );
    }
}
