//! API utilities for talking to PokeAPI
//!
//! Holds the page configuration and a JSON GET helper shared by all requests.

use contracts::shared::{load_config, PokedexConfig, PokedexError};
use gloo_net::http::Request;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

static CONFIG: Lazy<PokedexConfig> = Lazy::new(load_config);

/// Configuration used for endpoint, sprite and navigation URLs
///
/// # Example
/// ```rust,ignore
/// let url = config().pokemon_url(PokemonId::new(25));
/// ```
pub fn config() -> &'static PokedexConfig {
    &CONFIG
}

/// GET `url` and decode the JSON body
///
/// # Errors
/// - `Network` when the request cannot be sent
/// - `Http` for any non-2xx status
/// - `Parse` when the body is not the expected JSON
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, PokedexError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| PokedexError::Network(e.to_string()))?;

    PokedexError::check_status(response.status())?;

    response
        .json::<T>()
        .await
        .map_err(|e| PokedexError::Parse(e.to_string()))
}
