use thiserror::Error;

/// Ошибки обращения к PokeAPI и загрузки конфигурации
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokedexError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl PokedexError {
    /// Статус 2xx считается успешным, всё остальное превращается в `Http`
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::Http { status })
        }
    }
}

impl From<serde_json::Error> for PokedexError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
