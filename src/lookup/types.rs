use serde::{Deserialize, Serialize};

/// Data shown in the data view for a resolved lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonData {
    pub name: String,
    /// Pokedex number as the API formats it (e.g. "025").
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub hp: u32,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub attacks: Vec<Attack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    /// Element type ("Electric", "Fire", ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub damage: u32,
}

impl PokemonData {
    pub fn new(name: impl Into<String>, hp: u32) -> Self {
        Self {
            name: name.into(),
            number: None,
            hp,
            image: None,
            attacks: Vec::new(),
        }
    }
}
