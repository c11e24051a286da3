//! Lookup whose calls stay pending until the test releases them.

use async_trait::async_trait;
use parking_lot::Mutex;
use pokeinfo::lookup::{Lookup, LookupError, PokemonData};
use std::collections::HashMap;
use tokio::sync::oneshot;

type Gate = oneshot::Sender<Result<PokemonData, LookupError>>;

#[derive(Default)]
pub struct GatedLookup {
    gates: Mutex<HashMap<String, Gate>>,
    calls: Mutex<Vec<String>>,
}

impl GatedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Yield until a call for `name` is waiting on its gate.
    pub async fn wait_for_call(&self, name: &str) {
        for _ in 0..1000 {
            if self.gates.lock().contains_key(name) {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("lookup for '{}' was never issued", name);
    }

    /// Complete the pending call for `name`. Returns false if nobody is
    /// waiting any more.
    pub fn release(&self, name: &str, result: Result<PokemonData, LookupError>) -> bool {
        match self.gates.lock().remove(name) {
            Some(gate) => gate.send(result).is_ok(),
            None => false,
        }
    }
}

#[async_trait]
impl Lookup for GatedLookup {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn fetch(&self, name: &str) -> Result<PokemonData, LookupError> {
        let (tx, rx) = oneshot::channel();
        self.calls.lock().push(name.to_string());
        self.gates.lock().insert(name.to_string(), tx);
        rx.await
            .unwrap_or_else(|_| Err(LookupError::new("gate dropped")))
    }
}
