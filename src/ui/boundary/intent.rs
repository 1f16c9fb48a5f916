//! Intents for the recovery boundary.

use crate::lookup::LookupFailure;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BoundaryIntent<K> {
    /// A descendant surfaced a failure while rendering.
    Capture {
        error: LookupFailure,
        reset_keys: Vec<K>,
    },

    /// The container's reset keys, as of now.
    ResetKeysObserved { reset_keys: Vec<K> },

    /// The fallback's "Try again" control was activated.
    Reset,
}

impl<K: Send + 'static> Intent for BoundaryIntent<K> {}
