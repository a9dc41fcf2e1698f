use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    /// A fetch for the current page is about to be issued.
    FetchStarted,
    PageLoaded {
        generation: u64,
        total_pages: Option<u32>,
        count: usize,
    },
    PageFailed {
        generation: u64,
        message: String,
    },
    NextPage,
    PreviousPage,
    SelectNext { len: usize },
    SelectPrev { len: usize },
    /// The list shrank to `len` entries after a delete.
    UserRemoved { len: usize },
    DeleteFailed { message: String },
    Reset,
}

impl Intent for UsersIntent {}
