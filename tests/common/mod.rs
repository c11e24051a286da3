//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod gated_lookup;
pub mod mock_backend;

use pokeinfo::boundary::ErrorBoundary;
use pokeinfo::fetch::{CompletionReceiver, FetchCompletion, FetchOrchestrator};
use pokeinfo::lookup::Lookup;
use pokeinfo::view::View;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub use gated_lookup::GatedLookup;
pub use mock_backend::{MockBackend, MockResponse};

/// Orchestrator, boundary and completion channel wired the way the
/// interactive screen wires them.
pub struct Harness {
    pub orchestrator: FetchOrchestrator,
    pub boundary: ErrorBoundary,
    pub completions: CompletionReceiver,
}

impl Harness {
    pub fn new(lookup: Arc<dyn Lookup>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            orchestrator: FetchOrchestrator::new(lookup, tx),
            boundary: ErrorBoundary::new(),
            completions: rx,
        }
    }

    pub fn view(&mut self) -> View {
        self.boundary.reset_keys(self.orchestrator.reset_key());
        self.boundary.render(self.orchestrator.state())
    }

    /// Receive the next completion and hand it to the orchestrator.
    /// Returns whether it was applied.
    pub async fn apply_next(&mut self) -> bool {
        let completion = self.next_completion().await;
        self.orchestrator.apply(completion)
    }

    pub async fn next_completion(&mut self) -> FetchCompletion {
        tokio::time::timeout(std::time::Duration::from_secs(5), self.completions.recv())
            .await
            .expect("timed out waiting for lookup completion")
            .expect("completion channel closed")
    }
}

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
