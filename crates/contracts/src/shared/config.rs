use serde::{Deserialize, Serialize};

use crate::domain::a001_pokemon::PokemonId;
use crate::shared::error::PokedexError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PokedexConfig {
    pub api: ApiConfig,
    pub sprites: SpritesConfig,
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Number of entries requested by the list call (`?limit=`)
    pub max_pokemon: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SpritesConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NavigationConfig {
    pub detail_page: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://pokeapi.co/api/v2"
max_pokemon = 151

[sprites]
base_url = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon"

[navigation]
detail_page = "./detail.html"

[logging]
level = "debug"
"#;

#[derive(Serialize)]
struct DetailQuery {
    id: PokemonId,
}

impl PokedexConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, PokedexError> {
        toml::from_str(contents).map_err(|e| PokedexError::Config(e.to_string()))
    }

    pub fn list_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.api_base(), self.api.max_pokemon)
    }

    pub fn pokemon_url(&self, id: PokemonId) -> String {
        format!("{}/pokemon/{}", self.api_base(), id)
    }

    pub fn species_url(&self, id: PokemonId) -> String {
        format!("{}/pokemon-species/{}", self.api_base(), id)
    }

    pub fn sprite_url(&self, id: PokemonId) -> String {
        format!("{}/{}.png", self.sprites.base_url.trim_end_matches('/'), id)
    }

    /// Detail page URL carrying the identifier as `?id=`
    pub fn detail_page_url(&self, id: PokemonId) -> String {
        let query = serde_qs::to_string(&DetailQuery { id }).unwrap_or_else(|_| format!("id={}", id));
        format!("{}?{}", self.navigation.detail_page, query)
    }

    /// Falls back to `Debug` when the configured level is not recognized
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }

    fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://pokeapi.co/api/v2".to_string(),
                max_pokemon: 151,
            },
            sprites: SpritesConfig {
                base_url:
                    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon"
                        .to_string(),
            },
            navigation: NavigationConfig {
                detail_page: "./detail.html".to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

/// Load the embedded configuration.
///
/// A broken embedded document is logged and replaced by `PokedexConfig::default()`.
pub fn load_config() -> PokedexConfig {
    match PokedexConfig::from_toml_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}, using built-in defaults", e);
            PokedexConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = PokedexConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.max_pokemon, 151);
        assert_eq!(config, PokedexConfig::default());
        assert_eq!(load_config(), config);
    }

    #[test]
    fn test_endpoint_urls() {
        let config = PokedexConfig::default();
        let id = PokemonId::new(25);
        assert_eq!(config.list_url(), "https://pokeapi.co/api/v2/pokemon?limit=151");
        assert_eq!(config.pokemon_url(id), "https://pokeapi.co/api/v2/pokemon/25");
        assert_eq!(
            config.species_url(id),
            "https://pokeapi.co/api/v2/pokemon-species/25"
        );
        assert_eq!(
            config.sprite_url(id),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
        );
        assert_eq!(config.detail_page_url(id), "./detail.html?id=25");
    }

    #[test]
    fn test_trailing_slashes_are_normalized() {
        let config = PokedexConfig::from_toml_str(
            r#"
[api]
base_url = "http://localhost:8080/api/v2/"
max_pokemon = 20

[sprites]
base_url = "http://localhost:8080/sprites/"

[navigation]
detail_page = "/detail"
"#,
        )
        .unwrap();
        let id = PokemonId::new(7);
        assert_eq!(config.list_url(), "http://localhost:8080/api/v2/pokemon?limit=20");
        assert_eq!(config.sprite_url(id), "http://localhost:8080/sprites/7.png");
        assert_eq!(config.detail_page_url(id), "/detail?id=7");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_log_level() {
        let mut config = PokedexConfig::default();
        config.logging.level = "warn".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.logging.level = "verbose".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = PokedexConfig::from_toml_str("[api]\nbase_url = 1").unwrap_err();
        assert!(matches!(err, PokedexError::Config(_)));
    }
}
