//! Drives lookups for the current key and owns the request state.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::boundary::ResetKey;
use crate::lookup::{Lookup, LookupError, PokemonData};
use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::reducer::FetchReducer;
use super::state::RequestState;

/// Result of one lookup, tagged with the generation that issued it.
#[derive(Debug, Clone)]
pub struct FetchCompletion {
    pub generation: u64,
    pub key: String,
    pub result: Result<PokemonData, LookupError>,
}

pub type CompletionSender = mpsc::UnboundedSender<FetchCompletion>;
pub type CompletionReceiver = mpsc::UnboundedReceiver<FetchCompletion>;

/// Owner of [`RequestState`].
///
/// Every key change starts a new generation. Lookups run as tokio tasks and
/// report back through the completion channel; the event loop hands each
/// completion to [`FetchOrchestrator::apply`], which drops anything issued
/// by an older generation. The task of a superseded generation is aborted.
///
/// Methods that start a lookup must be called from within a tokio runtime.
pub struct FetchOrchestrator {
    state: RequestState,
    key: String,
    generation: u64,
    lookup: Arc<dyn Lookup>,
    completions: CompletionSender,
    in_flight: Option<JoinHandle<()>>,
}

impl FetchOrchestrator {
    pub fn new(lookup: Arc<dyn Lookup>, completions: CompletionSender) -> Self {
        Self {
            state: RequestState::default(),
            key: String::new(),
            generation: 0,
            lookup,
            completions,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Current input key (empty when idle).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Generation of the most recent request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Identity of the current request, for resetting an error boundary.
    pub fn reset_key(&self) -> ResetKey {
        ResetKey::new(self.key(), self.generation())
    }

    /// Set the input key.
    ///
    /// Returns `false` if the key did not change; no lookup is issued then.
    pub fn set_key(&mut self, key: &str) -> bool {
        if key == self.key {
            return false;
        }
        self.key = key.to_string();
        self.start_generation();
        true
    }

    /// Issue a fresh lookup for the current key.
    ///
    /// Returns `false` when there is no key to retry.
    pub fn retry(&mut self) -> bool {
        if self.key.is_empty() {
            return false;
        }
        self.start_generation();
        true
    }

    /// Apply a lookup completion.
    ///
    /// Returns `false` when the completion belongs to a superseded request
    /// and was discarded.
    pub fn apply(&mut self, completion: FetchCompletion) -> bool {
        if completion.generation != self.generation {
            tracing::debug!(
                generation = completion.generation,
                current = self.generation,
                key = %completion.key,
                "Dropping stale lookup completion"
            );
            return false;
        }

        self.in_flight = None;
        let FetchCompletion { key, result, .. } = completion;
        let intent = match result {
            Ok(data) => {
                tracing::info!(key = %key, generation = self.generation, "Lookup resolved");
                FetchIntent::Resolve { key, data }
            }
            Err(error) => {
                tracing::warn!(key = %key, generation = self.generation, error = %error, "Lookup rejected");
                FetchIntent::Reject { key, error }
            }
        };
        self.dispatch(intent);
        true
    }

    fn start_generation(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }

        if self.key.is_empty() {
            tracing::debug!(generation = self.generation, "Key cleared");
            self.dispatch(FetchIntent::Clear);
            return;
        }

        self.dispatch(FetchIntent::Request {
            key: self.key.clone(),
        });
        self.spawn_lookup();
    }

    fn spawn_lookup(&mut self) {
        let lookup = Arc::clone(&self.lookup);
        let completions = self.completions.clone();
        let generation = self.generation;
        let key = self.key.clone();

        tracing::debug!(
            key = %key,
            generation,
            backend = lookup.name(),
            "Issuing lookup"
        );

        self.in_flight = Some(tokio::spawn(async move {
            let result = lookup.fetch(&key).await;
            let completion = FetchCompletion {
                generation,
                key,
                result,
            };
            if completions.send(completion).is_err() {
                tracing::trace!(generation, "Lookup completion dropped (receiver gone)");
            }
        }));
    }

    fn dispatch(&mut self, intent: FetchIntent) {
        self.state = FetchReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

impl Drop for FetchOrchestrator {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
