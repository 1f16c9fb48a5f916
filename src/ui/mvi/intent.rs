//! Marker trait for intents.

/// An action fed to a reducer.
///
/// Intents come from two places:
/// - the user (a submitted name, the "Try again" control)
/// - the fetch worker (a lookup completed or failed)
pub trait Intent: Send + 'static {}
