//! Delete confirmation dialog shown over the Users screen.

mod dialog;
mod reducer;

pub use dialog::render_delete_dialog;
pub use reducer::{DeleteDialogState, DeleteIntent, DeleteReducer};
