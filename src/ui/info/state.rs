//! State for the pokemon info fetch lifecycle.

use crate::lookup::{LookupFailure, Pokemon};
use crate::ui::mvi::UiState;

/// Coarse lifecycle status, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Pending,
    Resolved,
    Rejected,
}

/// Fetch lifecycle for the active lookup key.
///
/// A payload only exists in `Resolved` and a failure only in `Rejected`,
/// so the two can never be present at once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// No key submitted.
    #[default]
    Idle,

    /// A fetch for `key` is outstanding.
    Pending {
        key: String,
        /// Generation of the key change that issued the fetch.
        generation: u64,
    },

    Resolved {
        key: String,
        pokemon: Pokemon,
    },

    Rejected {
        key: String,
        failure: LookupFailure,
    },
}

impl UiState for FetchState {}

impl FetchState {
    pub fn status(&self) -> FetchStatus {
        match self {
            Self::Idle => FetchStatus::Idle,
            Self::Pending { .. } => FetchStatus::Pending,
            Self::Resolved { .. } => FetchStatus::Resolved,
            Self::Rejected { .. } => FetchStatus::Rejected,
        }
    }

    /// Key this state belongs to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Pending { key, .. } | Self::Resolved { key, .. } | Self::Rejected { key, .. } => {
                Some(key.as_str())
            }
        }
    }

    pub fn pokemon(&self) -> Option<&Pokemon> {
        match self {
            Self::Resolved { pokemon, .. } => Some(pokemon),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LookupFailure> {
        match self {
            Self::Rejected { failure, .. } => Some(failure),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}
