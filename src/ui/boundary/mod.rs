//! Recovery boundary: intercepts failures surfaced by its child during
//! render, shows a fallback instead, and clears itself when the container's
//! reset keys change or the fallback's reset control fires.
//!
//! The propagated-failure channel is the `Result` returned by the child
//! render closure. Nothing unwinds; the boundary inspects the value.

mod intent;
mod reducer;
mod state;

pub use intent::BoundaryIntent;
pub use reducer::BoundaryReducer;
pub use state::BoundaryState;

use crate::lookup::LookupFailure;
use crate::ui::mvi::Reducer;

/// Result of rendering through the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Guarded<T> {
    /// The child rendered.
    Children(T),
    /// The child failed (now or earlier); show the fallback with this error.
    Fallback(LookupFailure),
}

#[derive(Debug)]
pub struct RecoveryBoundary<K> {
    state: BoundaryState<K>,
}

impl<K> Default for RecoveryBoundary<K> {
    fn default() -> Self {
        Self {
            state: BoundaryState::default(),
        }
    }
}

impl<K: Clone + PartialEq + Send + 'static> RecoveryBoundary<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BoundaryState<K> {
        &self.state
    }

    pub fn is_failed(&self) -> bool {
        self.state.is_failed()
    }

    /// Compare `reset_keys` with the snapshot taken at capture time and
    /// clear on any difference. Returns `true` if this cleared a failure.
    pub fn observe_reset_keys(&mut self, reset_keys: &[K]) -> bool {
        if !self.state.is_failed() {
            return false;
        }
        self.dispatch(BoundaryIntent::ResetKeysObserved {
            reset_keys: reset_keys.to_vec(),
        });
        let cleared = !self.state.is_failed();
        if cleared {
            tracing::debug!("Reset keys changed, recovery boundary cleared");
        }
        cleared
    }

    /// Render `child` unless a failure is already captured.
    ///
    /// A failure returned by `child` is captured together with
    /// `reset_keys` and the fallback is returned in the same pass.
    pub fn render<T, F>(&mut self, reset_keys: &[K], child: F) -> Guarded<T>
    where
        F: FnOnce() -> Result<T, LookupFailure>,
    {
        self.observe_reset_keys(reset_keys);

        if let BoundaryState::Failed { error, .. } = &self.state {
            return Guarded::Fallback(error.clone());
        }

        match child() {
            Ok(output) => Guarded::Children(output),
            Err(error) => {
                tracing::error!(error = %error, "Recovery boundary caught a lookup failure");
                self.dispatch(BoundaryIntent::Capture {
                    error: error.clone(),
                    reset_keys: reset_keys.to_vec(),
                });
                Guarded::Fallback(error)
            }
        }
    }

    /// The fallback's reset control.
    ///
    /// Clears a captured failure and then runs `on_reset`, which the
    /// container uses to clear the lookup key. When nothing is captured
    /// this does nothing, `on_reset` included, and returns `false`.
    pub fn reset<F>(&mut self, on_reset: F) -> bool
    where
        F: FnOnce(),
    {
        if !self.state.is_failed() {
            return false;
        }
        self.dispatch(BoundaryIntent::Reset);
        on_reset();
        true
    }

    fn dispatch(&mut self, intent: BoundaryIntent<K>) {
        self.state = BoundaryReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
