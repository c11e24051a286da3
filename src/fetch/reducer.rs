//! Reducer for the request lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::RequestState;

/// Request lifecycle transitions.
///
/// Completions are only applied to a `Pending` state for the same key; a
/// completion for any other key leaves the state untouched.
pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = RequestState;
    type Intent = FetchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Clear => RequestState::Idle,

            FetchIntent::Request { key } => {
                if key.is_empty() {
                    RequestState::Idle
                } else {
                    RequestState::Pending { key }
                }
            }

            FetchIntent::Resolve { key, data } => match state {
                RequestState::Pending { key: pending } if pending == key => {
                    RequestState::Resolved { key, data }
                }
                other => other,
            },

            FetchIntent::Reject { key, error } => match state {
                RequestState::Pending { key: pending } if pending == key => {
                    RequestState::Rejected { key, error }
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LookupError, PokemonData};

    fn pending(key: &str) -> RequestState {
        RequestState::Pending { key: key.into() }
    }

    #[test]
    fn request_moves_to_pending() {
        let state = FetchReducer::reduce(
            RequestState::Idle,
            FetchIntent::Request {
                key: "pikachu".into(),
            },
        );
        assert_eq!(state, pending("pikachu"));
    }

    #[test]
    fn empty_request_is_idle() {
        let state = FetchReducer::reduce(pending("pikachu"), FetchIntent::Request { key: String::new() });
        assert_eq!(state, RequestState::Idle);
    }

    #[test]
    fn resolve_for_pending_key_is_applied() {
        let state = FetchReducer::reduce(
            pending("pikachu"),
            FetchIntent::Resolve {
                key: "pikachu".into(),
                data: PokemonData::new("pikachu", 35),
            },
        );
        assert_eq!(state.data().map(|d| d.name.as_str()), Some("pikachu"));
    }

    #[test]
    fn resolve_for_other_key_is_ignored() {
        let state = FetchReducer::reduce(
            pending("charmander"),
            FetchIntent::Resolve {
                key: "pikachu".into(),
                data: PokemonData::new("pikachu", 35),
            },
        );
        assert_eq!(state, pending("charmander"));
    }

    #[test]
    fn reject_when_idle_is_ignored() {
        let state = FetchReducer::reduce(
            RequestState::Idle,
            FetchIntent::Reject {
                key: "missingno".into(),
                error: LookupError::not_found(),
            },
        );
        assert_eq!(state, RequestState::Idle);
    }

    #[test]
    fn clear_from_any_state_is_idle() {
        let rejected = RequestState::Rejected {
            key: "missingno".into(),
            error: LookupError::not_found(),
        };
        assert_eq!(FetchReducer::reduce(rejected, FetchIntent::Clear), RequestState::Idle);
    }
}
