//! State for the recovery boundary.

use crate::lookup::LookupFailure;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryState<K> {
    /// Children render normally.
    Clear,

    /// A descendant failed; the fallback is shown.
    Failed {
        error: LookupFailure,
        /// Reset keys as they were when the failure was captured.
        reset_keys: Vec<K>,
    },
}

impl<K> Default for BoundaryState<K> {
    fn default() -> Self {
        Self::Clear
    }
}

impl<K: Clone + PartialEq + Send + 'static> UiState for BoundaryState<K> {}

impl<K> BoundaryState<K> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn error(&self) -> Option<&LookupFailure> {
        match self {
            Self::Failed { error, .. } => Some(error),
            Self::Clear => None,
        }
    }
}
