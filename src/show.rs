//! Headless single lookup: the same orchestrator, boundary and view
//! selector as the interactive screen, without a terminal.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::boundary::ErrorBoundary;
use crate::fetch::FetchOrchestrator;
use crate::lookup::Lookup;
use crate::view::View;

/// Look `name` up and return the view the info screen would settle on.
pub async fn show(lookup: Arc<dyn Lookup>, name: &str) -> View {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = FetchOrchestrator::new(lookup, tx);
    let mut boundary = ErrorBoundary::new();
    boundary.on_error(|error| tracing::warn!(error = %error, "Lookup failed"));

    orchestrator.set_key(name.trim());
    while orchestrator.state().is_pending() {
        match rx.recv().await {
            Some(completion) => {
                orchestrator.apply(completion);
            }
            None => break,
        }
    }

    boundary.reset_keys(orchestrator.reset_key());
    boundary.render(orchestrator.state())
}
