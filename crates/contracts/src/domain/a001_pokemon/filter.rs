use serde::{Deserialize, Serialize};

use super::aggregate::PokemonSummary;

/// Which field the search term is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    All,
    #[default]
    ByNumber,
    ByName,
}

impl FilterMode {
    /// Value used for the radio inputs (`#all`, `#number`, `#name`)
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::ByNumber => "number",
            FilterMode::ByName => "name",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(FilterMode::All),
            "number" => Some(FilterMode::ByNumber),
            "name" => Some(FilterMode::ByName),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::ByNumber => "Number",
            FilterMode::ByName => "Name",
        }
    }

    pub fn all() -> [FilterMode; 3] {
        [FilterMode::ByNumber, FilterMode::ByName, FilterMode::All]
    }

    /// `term` must already be lowercased
    pub fn matches(&self, pokemon: &PokemonSummary, term: &str) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::ByNumber => pokemon.id.to_string().starts_with(term),
            FilterMode::ByName => pokemon.name.to_lowercase().starts_with(term),
        }
    }
}

/// Stable prefix filter over the loaded list. The term is lowercased here.
pub fn filter_pokemon(items: &[PokemonSummary], term: &str, mode: FilterMode) -> Vec<PokemonSummary> {
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|pokemon| mode.matches(pokemon, &term))
        .cloned()
        .collect()
}
