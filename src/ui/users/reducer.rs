use crate::ui::mvi::Reducer;
use crate::ui::users::intent::UsersIntent;
use crate::ui::users::state::UsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::FetchStarted => UsersState {
                generation: state.generation + 1,
                loading: true,
                error: None,
                ..state
            },
            UsersIntent::PageLoaded {
                generation,
                total_pages,
                count,
            } => {
                if !state.is_current(generation) {
                    return state;
                }
                UsersState {
                    loading: false,
                    total_pages,
                    last_page_empty: count == 0,
                    selected: 0,
                    ..state
                }
            }
            UsersIntent::PageFailed {
                generation,
                message,
            } => {
                if !state.is_current(generation) {
                    return state;
                }
                UsersState {
                    loading: false,
                    error: Some(message),
                    ..state
                }
            }
            UsersIntent::NextPage => {
                if !state.has_next() {
                    return state;
                }
                UsersState {
                    page: state.page + 1,
                    last_page_empty: false,
                    selected: 0,
                    ..state
                }
            }
            UsersIntent::PreviousPage => {
                if !state.has_previous() {
                    return state;
                }
                UsersState {
                    page: state.page - 1,
                    last_page_empty: false,
                    selected: 0,
                    ..state
                }
            }
            UsersIntent::SelectNext { len } => {
                let selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                UsersState { selected, ..state }
            }
            UsersIntent::SelectPrev { len } => {
                let selected = if state.selected == 0 {
                    len.saturating_sub(1)
                } else {
                    state.selected - 1
                };
                UsersState { selected, ..state }
            }
            UsersIntent::UserRemoved { len } => UsersState {
                selected: state.selected.min(len.saturating_sub(1)),
                ..state
            },
            UsersIntent::DeleteFailed { message } => UsersState {
                error: Some(message),
                ..state
            },
            UsersIntent::Reset => UsersState::default(),
        }
    }
}
