/// Marker trait for screen state.
///
/// A state holds everything its view needs except the session data, which
/// the view reads from `SessionStore` directly.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
