use super::aggregate::{PokemonId, PokemonSummary};
use crate::shared::config::PokedexConfig;

/// Everything a list card displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonCard {
    pub id: PokemonId,
    pub caption: String,
    pub sprite_url: String,
    pub sprite_alt: String,
    pub name: String,
}

impl PokemonCard {
    pub fn from_summary(pokemon: &PokemonSummary, config: &PokedexConfig) -> Self {
        Self {
            id: pokemon.id,
            caption: pokemon.id.to_string(),
            sprite_url: config.sprite_url(pokemon.id),
            sprite_alt: pokemon.name.clone(),
            name: pokemon.name.clone(),
        }
    }
}

/// One card per record, in list order
pub fn build_cards(items: &[PokemonSummary], config: &PokedexConfig) -> Vec<PokemonCard> {
    items
        .iter()
        .map(|pokemon| PokemonCard::from_summary(pokemon, config))
        .collect()
}
