//! Users screen: one page of user cards with pagination, edit and delete.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::UsersIntent;
pub use reducer::UsersReducer;
pub use state::UsersState;
pub use view::render_users;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users.";
pub const DELETE_FAILED_MESSAGE: &str = "Error deleting user.";
pub const EMPTY_MESSAGE: &str = "No users found.";
