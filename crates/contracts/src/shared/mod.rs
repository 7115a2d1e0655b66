pub mod config;
pub mod error;

pub use config::{load_config, PokedexConfig, DEFAULT_CONFIG};
pub use error::PokedexError;
