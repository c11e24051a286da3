//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The request lifecycle ([`crate::fetch`]), the error boundary
//! ([`crate::boundary`]) and the name form ([`crate::ui::form`]) are all
//! driven through these traits. Side effects (spawning lookups, notifying
//! error handlers) stay in the owners of the state, never in reducers.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
