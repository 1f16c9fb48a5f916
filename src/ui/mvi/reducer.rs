//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms a state snapshot according to an intent.
///
/// Reducers are the only place where state transitions happen and they
/// never perform I/O. Effects such as issuing a fetch are decided by the
/// owning component around the dispatch call.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Consume the current snapshot and return the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
