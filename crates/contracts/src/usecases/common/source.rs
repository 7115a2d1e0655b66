use async_trait::async_trait;

use crate::domain::a001_pokemon::{PokemonId, PokemonListResponse};
use crate::shared::error::PokedexError;

/// Read-only access to the PokeAPI endpoints the viewer needs.
///
/// Futures are not `Send`: the browser implementation runs on the main thread.
#[async_trait(?Send)]
pub trait PokemonSource {
    /// `GET /pokemon?limit=N`
    async fn fetch_pokemon_list(&self) -> Result<PokemonListResponse, PokedexError>;

    /// `GET /pokemon/{id}`; the body only has to be valid JSON
    async fn fetch_pokemon(&self, id: PokemonId) -> Result<serde_json::Value, PokedexError>;

    /// `GET /pokemon-species/{id}`; the body only has to be valid JSON
    async fn fetch_species(&self, id: PokemonId) -> Result<serde_json::Value, PokedexError>;
}
