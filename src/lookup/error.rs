//! The single failure kind of a pokemon lookup.

use thiserror::Error;

/// A lookup failed.
///
/// Carries only a human-readable message so that it can be stored in
/// request state, cloned into views and compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Unknown name in the offline roster.
    pub fn not_found() -> Self {
        Self::new("Pokemon not found")
    }

    /// The remote API answered with a `null` pokemon.
    pub fn no_pokemon_named(name: &str) -> Self {
        Self::new(format!("No pokemon with the name \"{}\"", name))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::new(format!("Request timed out: {}", err));
        }
        if err.is_decode() {
            return Self::new(format!("Unexpected response from pokemon API: {}", err));
        }
        Self::new(format!("Failed to reach pokemon API: {}", err))
    }
}
