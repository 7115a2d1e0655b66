//! Initial list fetch

use crate::domain::a001_pokemon::PokemonSummary;
use crate::usecases::common::PokemonSource;

/// Fetch the bounded list and ingest it.
///
/// Any failure is logged and yields an empty list; there is no retry.
pub async fn load_pokedex<S: PokemonSource + ?Sized>(source: &S) -> Vec<PokemonSummary> {
    match source.fetch_pokemon_list().await {
        Ok(response) => {
            let items = response.into_summaries();
            log::info!("Loaded {} Pokemon", items.len());
            items
        }
        Err(e) => {
            log::error!("Error fetching data: {}", e);
            Vec::new()
        }
    }
}
