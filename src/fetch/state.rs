//! Request lifecycle state.

use crate::lookup::{LookupError, PokemonData};
use crate::ui::mvi::UiState;

/// Lifecycle of the lookup for the current key.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// No key submitted.
    #[default]
    Idle,

    /// Lookup in flight.
    Pending { key: String },

    /// Lookup succeeded.
    Resolved { key: String, data: PokemonData },

    /// Lookup failed.
    Rejected { key: String, error: LookupError },
}

impl UiState for RequestState {}

impl RequestState {
    /// Key this state belongs to (`None` when idle).
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Pending { key } | Self::Resolved { key, .. } | Self::Rejected { key, .. } => {
                Some(key)
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn data(&self) -> Option<&PokemonData> {
        match self {
            Self::Resolved { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            Self::Rejected { error, .. } => Some(error),
            _ => None,
        }
    }
}
