//! Messages exchanged between the UI loop and the fetch worker.

use super::error::LookupFailure;
use super::pokemon::Pokemon;

/// A fetch to start, tagged with the generation of the key change that
/// asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub key: String,
    pub generation: u64,
}

/// Effect produced by a lookup-key change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCommand {
    /// Start a fetch; any fetch still running is abandoned.
    Fetch(FetchRequest),
    /// The key was cleared; abandon whatever is running.
    Cancel,
}

/// Outcome of a fetch, tagged so the state machine can recognise stale
/// completions.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupCompletion {
    pub key: String,
    pub generation: u64,
    pub outcome: Result<Pokemon, LookupFailure>,
}

impl LookupCompletion {
    pub fn resolved(request: &FetchRequest, pokemon: Pokemon) -> Self {
        Self {
            key: request.key.clone(),
            generation: request.generation,
            outcome: Ok(pokemon),
        }
    }

    pub fn rejected(request: &FetchRequest, failure: LookupFailure) -> Self {
        Self {
            key: request.key.clone(),
            generation: request.generation,
            outcome: Err(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
