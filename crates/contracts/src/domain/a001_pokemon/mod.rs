pub mod aggregate;
pub mod filter;
pub mod state;
pub mod view_model;

pub use aggregate::{NamedResource, PokemonId, PokemonListResponse, PokemonSummary};
pub use filter::{filter_pokemon, FilterMode};
pub use state::{ListView, PokedexState};
pub use view_model::{build_cards, PokemonCard};
