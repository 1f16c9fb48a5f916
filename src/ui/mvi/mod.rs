//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of UI state in this crate changes the same way: an intent is
//! fed to a reducer together with the current state snapshot, and the
//! reducer hands back the next snapshot. Rendering is a separate, explicit
//! step that reads the latest snapshot.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
