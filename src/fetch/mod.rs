//! Fetch orchestration for the pokemon info component.
//!
//! # Architecture
//!
//! Uses the MVI pattern:
//! - `state.rs` - Request lifecycle enum
//! - `intent.rs` - Lifecycle events
//! - `reducer.rs` - State transitions
//! - `orchestrator.rs` - Issues lookups and filters stale completions

mod intent;
mod orchestrator;
mod reducer;
mod state;

pub use intent::FetchIntent;
pub use orchestrator::{CompletionReceiver, CompletionSender, FetchCompletion, FetchOrchestrator};
pub use reducer::FetchReducer;
pub use state::RequestState;
