//! Pokemon lookup backends.
//!
//! The fetch orchestrator only sees the [`Lookup`] trait; which backend sits
//! behind it is decided from config (`[lookup] source`).

mod error;
mod graphql;
mod offline;
mod types;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{LookupConfig, LookupSource};

pub use error::LookupError;
pub use graphql::GraphqlLookup;
pub use offline::OfflineLookup;
pub use types::{Attack, PokemonData};

/// Asynchronous pokemon lookup.
///
/// Implementations must report failures through the returned `Result`;
/// they are stored in request state and shown by the error boundary.
#[async_trait]
pub trait Lookup: Send + Sync {
    /// Short backend name for logging.
    fn name(&self) -> &'static str;

    /// Look up a pokemon by name.
    async fn fetch(&self, name: &str) -> Result<PokemonData, LookupError>;
}

/// Build the lookup backend selected by config.
pub fn from_config(config: &LookupConfig) -> Result<Arc<dyn Lookup>, LookupError> {
    match config.source {
        LookupSource::Graphql => {
            let lookup = GraphqlLookup::new(config)?;
            tracing::info!(endpoint = lookup.endpoint(), "Using GraphQL pokemon lookup");
            Ok(Arc::new(lookup))
        }
        LookupSource::Offline => {
            tracing::info!(delay_ms = config.offline_delay_ms, "Using offline pokemon roster");
            Ok(Arc::new(OfflineLookup::with_delay(config.offline_delay())))
        }
    }
}
