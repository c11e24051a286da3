use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Append a character to the input.
    Insert(char),

    /// Delete the last character.
    Backspace,

    /// Empty the input without submitting.
    ClearInput,

    /// Replace the input with the next quick pick.
    QuickPick,

    /// Submit the trimmed input.
    Submit,

    /// Fill and submit `name` (start-up `--name`).
    Prefill { name: String },
}

impl Intent for FormIntent {}
