//! In-memory lookup used with `--offline` and in tests.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::LookupError;
use super::types::{Attack, PokemonData};
use super::Lookup;

/// Lookup backed by a fixed roster.
///
/// Names are matched case-insensitively. Every call is recorded, including
/// calls for unknown names.
pub struct OfflineLookup {
    roster: HashMap<String, PokemonData>,
    delay: Duration,
    calls: Mutex<Vec<String>>,
}

impl OfflineLookup {
    /// Built-in roster, answering immediately.
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    /// Built-in roster, answering after `delay`.
    pub fn with_delay(delay: Duration) -> Self {
        Self::from_roster(builtin_roster(), delay)
    }

    pub fn from_roster(roster: impl IntoIterator<Item = PokemonData>, delay: Duration) -> Self {
        let roster = roster
            .into_iter()
            .map(|pokemon| (pokemon.name.to_lowercase(), pokemon))
            .collect();
        Self {
            roster,
            delay,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Names this lookup was invoked with, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Default for OfflineLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Lookup for OfflineLookup {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn fetch(&self, name: &str) -> Result<PokemonData, LookupError> {
        self.calls.lock().push(name.to_string());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.roster
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(LookupError::not_found)
    }
}

fn builtin_roster() -> Vec<PokemonData> {
    vec![
        pokemon("pikachu", "025", 35, &[("Thunder", "Electric", 100), ("Thunderbolt", "Electric", 55)]),
        pokemon("charmander", "004", 39, &[("Flamethrower", "Fire", 55)]),
        pokemon("bulbasaur", "001", 45, &[("Power Whip", "Grass", 70), ("Seed Bomb", "Grass", 40)]),
        pokemon("squirtle", "007", 44, &[("Aqua Jet", "Water", 25), ("Water Pulse", "Water", 35)]),
        pokemon("charizard", "006", 78, &[("Fire Blast", "Fire", 100), ("Dragon Claw", "Dragon", 35)]),
        pokemon("ninetales", "038", 73, &[("Heat Wave", "Fire", 95), ("Overheat", "Fire", 160)]),
        pokemon("mew", "151", 100, &[("Psychic", "Psychic", 100), ("Moonblast", "Fairy", 85)]),
    ]
}

fn pokemon(name: &str, number: &str, hp: u32, attacks: &[(&str, &str, u32)]) -> PokemonData {
    PokemonData {
        name: name.to_string(),
        number: Some(number.to_string()),
        hp,
        image: Some(format!("https://img.pokemondb.net/artwork/{}.jpg", name)),
        attacks: attacks
            .iter()
            .map(|(name, kind, damage)| Attack {
                name: name.to_string(),
                kind: kind.to_string(),
                damage: *damage,
            })
            .collect(),
    }
}
