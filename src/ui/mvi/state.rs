//! Marker trait for UI state snapshots.

/// A self-contained snapshot of component state.
///
/// `Default` is the mount-time value; `PartialEq` lets tests and the
/// container compare snapshots across dispatches.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
