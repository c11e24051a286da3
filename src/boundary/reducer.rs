use crate::ui::mvi::Reducer;

use super::intent::BoundaryIntent;
use super::state::BoundaryState;

pub struct BoundaryReducer;

impl Reducer for BoundaryReducer {
    type State = BoundaryState;
    type Intent = BoundaryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // First error wins until the next reset.
            BoundaryIntent::Catch { error } => match state {
                BoundaryState::Clear { reset_key } => BoundaryState::Caught { reset_key, error },
                caught @ BoundaryState::Caught { .. } => caught,
            },

            BoundaryIntent::ResetKey { key } => {
                if *state.reset_key() == key {
                    state
                } else {
                    BoundaryState::Clear { reset_key: key }
                }
            }
        }
    }
}
