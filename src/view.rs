//! View selection for the pokemon info component.
//!
//! [`select_view`] is a pure function of [`RequestState`]. A rejected
//! request is returned as `Err` so that an enclosing
//! [`ErrorBoundary`](crate::boundary::ErrorBoundary) decides how failures
//! are presented.

use std::fmt;

use crate::fetch::RequestState;
use crate::lookup::{LookupError, PokemonData};

/// Placeholder shown before any name is submitted.
pub const IDLE_PROMPT: &str = "Submit a pokemon";

/// Heading of the error fallback.
pub const FALLBACK_HEADING: &str = "There was an error:";

/// One renderable output of the component.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// No name submitted.
    Idle,

    /// Lookup in flight for `name`.
    Loading { name: String },

    /// Lookup resolved.
    Data { pokemon: PokemonData },

    /// Substituted by the error boundary.
    Fallback { message: String },
}

/// Pick the view for `state`.
pub fn select_view(state: &RequestState) -> Result<View, LookupError> {
    match state {
        RequestState::Idle => Ok(View::Idle),
        RequestState::Pending { key } => Ok(View::Loading { name: key.clone() }),
        RequestState::Resolved { data, .. } => Ok(View::Data {
            pokemon: data.clone(),
        }),
        RequestState::Rejected { error, .. } => Err(error.clone()),
    }
}

impl View {
    pub fn fallback(error: &LookupError) -> Self {
        Self::Fallback {
            message: error.message().to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Plain-text rendering used by the headless `show` command.
impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Idle => f.write_str(IDLE_PROMPT),
            View::Loading { name } => {
                writeln!(f, "{}", name)?;
                writeln!(f, "HP: Loading...")?;
                write!(f, "Attacks: Loading...")
            }
            View::Data { pokemon } => {
                match &pokemon.number {
                    Some(number) => writeln!(f, "{} ({})", pokemon.name, number)?,
                    None => writeln!(f, "{}", pokemon.name)?,
                }
                write!(f, "HP: {}", pokemon.hp)?;
                if let Some(image) = &pokemon.image {
                    write!(f, "\nImage: {}", image)?;
                }
                for attack in &pokemon.attacks {
                    write!(f, "\n- {}: {} ({})", attack.name, attack.damage, attack.kind)?;
                }
                Ok(())
            }
            View::Fallback { message } => write!(f, "{} {}", FALLBACK_HEADING, message),
        }
    }
}
