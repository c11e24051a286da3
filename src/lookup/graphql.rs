//! Lookup against the public pokemon GraphQL API.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::LookupConfig;

use super::error::LookupError;
use super::types::{Attack, PokemonData};
use super::Lookup;

const POKEMON_QUERY: &str = r#"query PokemonInfo($name: String) {
  pokemon(name: $name) {
    id
    number
    name
    image
    maxHP
    attacks {
      special {
        name
        type
        damage
      }
    }
  }
}"#;

/// HTTP client for the GraphQL pokemon endpoint.
pub struct GraphqlLookup {
    client: Client,
    endpoint: String,
}

impl GraphqlLookup {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Lookup for GraphqlLookup {
    fn name(&self) -> &'static str {
        "graphql"
    }

    async fn fetch(&self, name: &str) -> Result<PokemonData, LookupError> {
        let body = json!({
            "query": POKEMON_QUERY,
            "variables": { "name": name.to_lowercase() },
        });

        tracing::debug!(endpoint = %self.endpoint, name = %name, "Sending pokemon query");

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json;charset=UTF-8")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::warn!(status = %status, latency_ms, error = %error_text, "Pokemon API error");
            return Err(LookupError::new(format!(
                "Pokemon API returned {}: {}",
                status, error_text
            )));
        }

        let payload: GraphqlResponse = response.json().await?;
        tracing::debug!(latency_ms, name = %name, "Pokemon query completed");
        payload.into_pokemon(name)
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<GraphqlData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    pokemon: Option<WirePokemon>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePokemon {
    name: String,
    #[serde(default)]
    number: Option<String>,
    #[serde(default, rename = "maxHP")]
    max_hp: Option<u32>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    attacks: Option<WireAttacks>,
}

#[derive(Debug, Deserialize)]
struct WireAttacks {
    #[serde(default)]
    special: Vec<Attack>,
}

impl GraphqlResponse {
    fn into_pokemon(self, requested: &str) -> Result<PokemonData, LookupError> {
        if !self.errors.is_empty() {
            let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(LookupError::new(messages.join("\n")));
        }

        match self.data.and_then(|data| data.pokemon) {
            Some(wire) => Ok(PokemonData {
                name: wire.name,
                number: wire.number,
                hp: wire.max_hp.unwrap_or_default(),
                image: wire.image,
                attacks: wire.attacks.map(|a| a.special).unwrap_or_default(),
            }),
            None => Err(LookupError::no_pokemon_named(requested)),
        }
    }
}
