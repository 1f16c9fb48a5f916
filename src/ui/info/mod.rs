//! Pokemon info component: the fetch state machine for one lookup key.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - fetch lifecycle enum
//! - `intent.rs` - key changes and fetch completions
//! - `reducer.rs` - transitions, including stale-completion suppression
//! - `view.rs` - pure render of the current snapshot
//!
//! The component never talks to the network itself. A key change returns a
//! [`FetchCommand`] that the container forwards to the fetch worker, and
//! the worker's [`LookupCompletion`] comes back through [`PokemonInfo::complete`].

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::InfoIntent;
pub use reducer::InfoReducer;
pub use state::{FetchState, FetchStatus};
pub use view::LookupView;

use crate::lookup::{FetchCommand, FetchRequest, LookupCompletion, LookupFailure};
use crate::ui::mvi::Reducer;

#[derive(Debug, Default)]
pub struct PokemonInfo {
    /// The lookup key as last supplied by the container.
    key: String,
    /// Bumped on every key change that issues a fetch.
    generation: u64,
    state: FetchState,
}

impl PokemonInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// React to the container's lookup key.
    ///
    /// Returns `None` when the key is unchanged. An empty key moves to idle
    /// and asks for any running fetch to be cancelled. Any other key moves
    /// to pending before the fetch is even started, so the next render
    /// shows the loading view.
    pub fn set_key(&mut self, key: &str) -> Option<FetchCommand> {
        if key == self.key {
            return None;
        }
        self.key = key.to_string();

        if key.is_empty() {
            self.dispatch(InfoIntent::KeyCleared);
            return Some(FetchCommand::Cancel);
        }

        self.generation = self.generation.wrapping_add(1);
        let request = FetchRequest {
            key: self.key.clone(),
            generation: self.generation,
        };
        self.dispatch(InfoIntent::KeyChanged {
            key: request.key.clone(),
            generation: request.generation,
        });
        Some(FetchCommand::Fetch(request))
    }

    /// Apply a fetch outcome. Returns `false` when it was stale.
    pub fn complete(&mut self, completion: LookupCompletion) -> bool {
        let key = completion.key.clone();
        let generation = completion.generation;
        let before = self.state.status();
        self.dispatch(InfoIntent::Completed(completion));

        let applied = before != self.state.status();
        if !applied {
            tracing::warn!(
                key = %key,
                generation,
                active_key = %self.key,
                active_generation = self.generation,
                "Ignoring stale lookup completion"
            );
        }
        applied
    }

    /// Render the current snapshot.
    ///
    /// A rejected lookup does not render: its failure is returned for the
    /// enclosing recovery boundary to intercept.
    pub fn render(&self) -> Result<LookupView<'_>, LookupFailure> {
        view::render(&self.key, &self.state)
    }

    fn dispatch(&mut self, intent: InfoIntent) {
        self.state = InfoReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
