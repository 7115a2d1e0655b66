use async_trait::async_trait;
use contracts::domain::a001_pokemon::{PokemonId, PokemonListResponse};
use contracts::shared::{PokedexConfig, PokedexError};
use contracts::usecases::common::PokemonSource;

use crate::shared::api_utils::get_json;

/// Клиент PokeAPI поверх gloo-net
#[derive(Debug, Clone, Copy)]
pub struct PokeApi {
    config: &'static PokedexConfig,
}

impl PokeApi {
    pub fn new(config: &'static PokedexConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl PokemonSource for PokeApi {
    /// Получить первые `max_pokemon` записей списка
    async fn fetch_pokemon_list(&self) -> Result<PokemonListResponse, PokedexError> {
        get_json(&self.config.list_url()).await
    }

    /// Полная запись покемона по номеру
    async fn fetch_pokemon(&self, id: PokemonId) -> Result<serde_json::Value, PokedexError> {
        get_json(&self.config.pokemon_url(id)).await
    }

    /// Запись вида (species) по номеру
    async fn fetch_species(&self, id: PokemonId) -> Result<serde_json::Value, PokedexError> {
        get_json(&self.config.species_url(id)).await
    }
}
