use contracts::domain::a001_pokemon::{FilterMode, PokedexState};
use contracts::usecases::u002_open_detail::PrefetchGuard;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub pokedex: RwSignal<PokedexState>,
    pub prefetch_guard: StoredValue<PrefetchGuard>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            pokedex: RwSignal::new(PokedexState::new(FilterMode::default())),
            prefetch_guard: StoredValue::new(PrefetchGuard::new()),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
