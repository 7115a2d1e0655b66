use super::aggregate::PokemonSummary;
use super::filter::{filter_pokemon, FilterMode};

/// Observable states of the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Full,
    Filtered,
}

/// Page state: the loaded list plus the current search.
///
/// `all` is only ever replaced wholesale by [`PokedexState::load`];
/// `visible` is what the list renderer draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokedexState {
    all: Vec<PokemonSummary>,
    visible: Vec<PokemonSummary>,
    query: String,
    mode: FilterMode,
    not_found: bool,
}

impl PokedexState {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Replace the list and show it unfiltered
    pub fn load(&mut self, items: Vec<PokemonSummary>) {
        self.all = items;
        self.visible = self.all.clone();
        self.query.clear();
        self.not_found = false;
    }

    /// Apply a search term with the current mode
    pub fn search(&mut self, input: &str) {
        self.query = input.to_lowercase();
        self.visible = filter_pokemon(&self.all, &self.query, self.mode);
        self.not_found = self.visible.is_empty();
    }

    /// Switch mode and re-apply the current term
    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
        let query = self.query.clone();
        self.search(&query);
    }

    /// Empty the term and show the full list again; the mode is kept
    pub fn clear(&mut self) {
        self.query.clear();
        self.visible = self.all.clone();
        self.not_found = false;
    }

    pub fn all(&self) -> &[PokemonSummary] {
        &self.all
    }

    pub fn visible(&self) -> &[PokemonSummary] {
        &self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn not_found(&self) -> bool {
        self.not_found
    }

    pub fn view(&self) -> ListView {
        if self.query.is_empty() {
            ListView::Full
        } else {
            ListView::Filtered
        }
    }
}
