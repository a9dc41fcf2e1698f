use crate::ui::mvi::UiState;

/// Pagination and fetch bookkeeping for the Users screen.
///
/// The users themselves live in the session store.
#[derive(Debug, Clone, PartialEq)]
pub struct UsersState {
    /// 1-based page currently shown (or being fetched).
    pub page: u32,
    /// `total_pages` from the most recent response, when the API sent one.
    pub total_pages: Option<u32>,
    pub loading: bool,
    /// Tag of the newest page fetch. Results carrying any other tag are stale.
    pub generation: u64,
    /// The current page was fetched and came back empty.
    pub last_page_empty: bool,
    pub error: Option<String>,
    pub selected: usize,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: None,
            loading: false,
            generation: 0,
            last_page_empty: false,
            error: None,
            selected: 0,
        }
    }
}

impl UiState for UsersState {}

impl UsersState {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Next is available until the end of data is known: either the page
    /// reached `total_pages`, or (without that metadata) a page came back empty.
    pub fn has_next(&self) -> bool {
        match self.total_pages {
            Some(total_pages) => self.page < total_pages,
            None => !self.last_page_empty,
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// An empty list should be refetched unless a fetch is running or the
    /// page is known to be empty.
    pub fn wants_fetch(&self) -> bool {
        !self.loading && !self.last_page_empty
    }
}
