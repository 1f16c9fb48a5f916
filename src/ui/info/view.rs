//! Pure render of the fetch lifecycle.

use crate::lookup::{LookupFailure, Pokemon};

use super::state::FetchState;

/// What the info panel should show.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupView<'a> {
    /// "Submit a pokemon" prompt.
    Idle,
    /// Loading placeholder for `key`.
    Loading { key: &'a str },
    /// The resolved pokemon.
    Data(&'a Pokemon),
}

/// An empty key is idle no matter what the state says; a rejected state is
/// returned as `Err` instead of a view.
pub(super) fn render<'a>(
    key: &'a str,
    state: &'a FetchState,
) -> Result<LookupView<'a>, LookupFailure> {
    if key.is_empty() {
        return Ok(LookupView::Idle);
    }

    match state {
        FetchState::Idle => Ok(LookupView::Idle),
        FetchState::Pending { .. } => Ok(LookupView::Loading { key }),
        FetchState::Resolved { pokemon, .. } => Ok(LookupView::Data(pokemon)),
        FetchState::Rejected { failure, .. } => Err(failure.clone()),
    }
}
