//! State of the error boundary.

use crate::lookup::LookupError;
use crate::ui::mvi::UiState;

/// Identity of the request the boundary is guarding.
///
/// The generation changes on every new attempt, including a return to a key
/// that failed before, so the pair never repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetKey {
    pub key: String,
    pub generation: u64,
}

impl ResetKey {
    pub fn new(key: impl Into<String>, generation: u64) -> Self {
        Self {
            key: key.into(),
            generation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryState {
    /// Child renders normally.
    Clear { reset_key: ResetKey },

    /// Child failed; the fallback is shown until the boundary is reset.
    Caught {
        reset_key: ResetKey,
        error: LookupError,
    },
}

impl Default for BoundaryState {
    fn default() -> Self {
        Self::Clear {
            reset_key: ResetKey::default(),
        }
    }
}

impl UiState for BoundaryState {}

impl BoundaryState {
    pub fn reset_key(&self) -> &ResetKey {
        match self {
            Self::Clear { reset_key } | Self::Caught { reset_key, .. } => reset_key,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            Self::Caught { error, .. } => Some(error),
            Self::Clear { .. } => None,
        }
    }
}
