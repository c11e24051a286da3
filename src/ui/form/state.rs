//! State of the pokemon name form.

use crate::ui::mvi::UiState;

/// Names offered by the quick-pick key, in cycle order.
pub const QUICK_PICKS: &[&str] = &["pikachu", "charizard", "ninetales"];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    /// Text being edited.
    pub input: String,
    /// Last submitted name (trimmed).
    pub submitted: String,
    /// Index into [`QUICK_PICKS`] of the last quick pick.
    pub quick_pick: Option<usize>,
}

impl UiState for FormState {}

impl FormState {
    /// Whether submitting now would change the submitted name.
    pub fn has_pending_edit(&self) -> bool {
        self.input.trim() != self.submitted
    }
}
