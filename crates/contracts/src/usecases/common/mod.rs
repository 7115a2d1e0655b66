//! Common traits for all UseCases

pub mod navigator;
pub mod source;

// Re-exports
pub use navigator::Navigator;
pub use source::PokemonSource;
