//! Intents for the pokemon info fetch lifecycle.

use crate::lookup::LookupCompletion;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum InfoIntent {
    /// The lookup key became empty.
    KeyCleared,

    /// The lookup key changed and a fetch tagged `generation` was issued.
    KeyChanged { key: String, generation: u64 },

    /// A fetch finished. May be stale.
    Completed(LookupCompletion),
}

impl Intent for InfoIntent {}
