//! Pokemon name form.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Input text and last submission
//! - `intent.rs` - Editing actions
//! - `reducer.rs` - State transitions
//! - `widget.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormState, QUICK_PICKS};
pub use widget::render_form;
