use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormState, QUICK_PICKS};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert(ch) => {
                let mut input = state.input;
                input.push(ch);
                FormState { input, ..state }
            }

            FormIntent::Backspace => {
                let mut input = state.input;
                input.pop();
                FormState { input, ..state }
            }

            FormIntent::ClearInput => FormState {
                input: String::new(),
                ..state
            },

            FormIntent::QuickPick => {
                let next = state
                    .quick_pick
                    .map(|index| (index + 1) % QUICK_PICKS.len())
                    .unwrap_or(0);
                FormState {
                    input: QUICK_PICKS[next].to_string(),
                    quick_pick: Some(next),
                    ..state
                }
            }

            FormIntent::Submit => FormState {
                submitted: state.input.trim().to_string(),
                ..state
            },

            FormIntent::Prefill { name } => {
                let submitted = name.trim().to_string();
                FormState {
                    input: submitted.clone(),
                    submitted,
                    ..state
                }
            }
        }
    }
}
