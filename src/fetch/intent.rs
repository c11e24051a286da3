//! Intents for the request lifecycle.

use crate::lookup::{LookupError, PokemonData};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FetchIntent {
    /// Key became empty.
    Clear,

    /// A lookup was issued for `key`.
    Request { key: String },

    /// Lookup for `key` completed successfully.
    Resolve { key: String, data: PokemonData },

    /// Lookup for `key` failed.
    Reject { key: String, error: LookupError },
}

impl Intent for FetchIntent {}
