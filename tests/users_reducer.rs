use userdeck::ui::mvi::Reducer;
use userdeck::ui::users::{UsersIntent, UsersReducer, UsersState};

fn started() -> UsersState {
    UsersReducer::reduce(UsersState::default(), UsersIntent::FetchStarted)
}

#[test]
fn fetch_started_bumps_generation() {
    let state = started();
    assert!(state.loading);
    assert_eq!(state.generation, 1);
    let state = UsersReducer::reduce(state, UsersIntent::FetchStarted);
    assert_eq!(state.generation, 2);
}

#[test]
fn page_loaded_records_metadata() {
    let state = UsersReducer::reduce(
        started(),
        UsersIntent::PageLoaded {
            generation: 1,
            total_pages: Some(2),
            count: 6,
        },
    );
    assert!(!state.loading);
    assert_eq!(state.total_pages, Some(2));
    assert!(!state.last_page_empty);
}

#[test]
fn stale_results_are_dropped() {
    let state = UsersReducer::reduce(started(), UsersIntent::FetchStarted);
    let after = UsersReducer::reduce(
        state.clone(),
        UsersIntent::PageFailed {
            generation: 1,
            message: "Failed to fetch users.".to_string(),
        },
    );
    assert_eq!(after, state);
}

#[test]
fn previous_on_first_page_does_nothing() {
    let state = UsersReducer::reduce(UsersState::default(), UsersIntent::PreviousPage);
    assert_eq!(state.page, 1);
}

#[test]
fn next_blocked_at_total_pages() {
    let state = UsersState {
        page: 2,
        total_pages: Some(2),
        ..UsersState::default()
    };
    let after = UsersReducer::reduce(state.clone(), UsersIntent::NextPage);
    assert_eq!(after, state);
}

#[test]
fn next_blocked_after_empty_page() {
    let state = UsersReducer::reduce(
        started(),
        UsersIntent::PageLoaded {
            generation: 1,
            total_pages: None,
            count: 0,
        },
    );
    assert!(state.last_page_empty);
    assert_eq!(UsersReducer::reduce(state, UsersIntent::NextPage).page, 1);
}

#[test]
fn page_change_resets_selection() {
    let state = UsersState {
        selected: 4,
        ..UsersState::default()
    };
    let state = UsersReducer::reduce(state, UsersIntent::NextPage);
    assert_eq!(state.page, 2);
    assert_eq!(state.selected, 0);
}

#[test]
fn selection_wraps() {
    let state = UsersReducer::reduce(UsersState::default(), UsersIntent::SelectPrev { len: 3 });
    assert_eq!(state.selected, 2);
    let state = UsersReducer::reduce(state, UsersIntent::SelectNext { len: 3 });
    assert_eq!(state.selected, 0);
}

#[test]
fn removal_clamps_selection() {
    let state = UsersState {
        selected: 3,
        ..UsersState::default()
    };
    let state = UsersReducer::reduce(state, UsersIntent::UserRemoved { len: 3 });
    assert_eq!(state.selected, 2);
}

#[test]
fn reset_returns_to_first_page() {
    let state = UsersState {
        page: 3,
        error: Some("x".to_string()),
        ..UsersState::default()
    };
    assert_eq!(
        UsersReducer::reduce(state, UsersIntent::Reset),
        UsersState::default()
    );
}
