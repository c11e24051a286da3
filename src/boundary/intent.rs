use crate::lookup::LookupError;
use crate::ui::mvi::Intent;

use super::state::ResetKey;

#[derive(Debug, Clone)]
pub enum BoundaryIntent {
    /// The child raised an error while rendering.
    Catch { error: LookupError },

    /// Reinitialise if `key` differs from the current reset key.
    ResetKey { key: ResetKey },
}

impl Intent for BoundaryIntent {}
