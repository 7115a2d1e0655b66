use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// National dex number as it appears in PokeAPI resource URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonId(pub u32);

impl PokemonId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Extract the id from a resource URL such as
    /// `https://pokeapi.co/api/v2/pokemon/25/` (last non-empty path segment).
    pub fn from_resource_url(url: &str) -> Option<Self> {
        url.trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse::<u32>().ok())
            .map(Self)
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Wire DTOs
// ============================================================================

/// `{ name, url }` pair used throughout PokeAPI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Response of `GET /pokemon?limit=N`; paging fields are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListResponse {
    pub results: Vec<NamedResource>,
}

// ============================================================================
// Summary record
// ============================================================================

/// List entry with the identifier resolved once at ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: PokemonId,
    pub name: String,
    pub url: String,
}

impl PokemonSummary {
    pub fn new(id: PokemonId, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
        }
    }

    /// `None` when the URL carries no numeric trailing segment
    pub fn from_resource(resource: NamedResource) -> Option<Self> {
        let id = PokemonId::from_resource_url(&resource.url)?;
        Some(Self {
            id,
            name: resource.name,
            url: resource.url,
        })
    }
}

impl PokemonListResponse {
    /// Convert the raw results into summaries, keeping API order.
    /// Entries whose URL does not end in an id are dropped with a warning.
    pub fn into_summaries(self) -> Vec<PokemonSummary> {
        self.results
            .into_iter()
            .filter_map(|resource| {
                let url = resource.url.clone();
                let summary = PokemonSummary::from_resource(resource);
                if summary.is_none() {
                    log::warn!("Skipping Pokemon entry with unexpected URL: {}", url);
                }
                summary
            })
            .collect()
    }
}
