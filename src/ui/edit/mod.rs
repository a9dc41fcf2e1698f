//! Edit screen: prefilled form for one user, submitted with `PUT /api/users/{id}`.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::EditIntent;
pub use reducer::EditReducer;
pub use state::{EditField, EditForm, EditState};
pub use view::render_edit;

use crate::api::ApiError;

pub const REQUIRED_MESSAGE: &str = "All fields are required!!";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update user.";

/// Inline message for a failed update.
pub fn failure_message(err: &ApiError) -> String {
    if err.is_rejected() {
        UPDATE_FAILED_MESSAGE.to_string()
    } else {
        err.to_string()
    }
}
