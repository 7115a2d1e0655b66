//! Card click: prefetch both detail records, then redirect

pub mod token;

pub use token::{PrefetchGuard, PrefetchToken};

use crate::domain::a001_pokemon::PokemonId;
use crate::shared::config::PokedexConfig;
use crate::usecases::common::{Navigator, PokemonSource};

/// How a click ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    /// Redirected to the contained URL
    Navigated(String),
    /// One of the two requests failed
    Failed,
    /// A newer click took over while the requests were in flight
    Superseded,
}

/// Request the full record and the species record concurrently.
///
/// `true` only when both arrive as valid JSON. Failures are logged, never surfaced.
pub async fn prefetch_detail<S: PokemonSource + ?Sized>(source: &S, id: PokemonId) -> bool {
    let result = futures::future::try_join(source.fetch_pokemon(id), source.fetch_species(id)).await;
    match result {
        Ok(_) => true,
        Err(e) => {
            log::error!("Failed to fetch Pokemon data before redirect ({}): {}", id, e);
            false
        }
    }
}

/// Prefetch and navigate to the detail page if `token` is still the latest click.
///
/// The token has to be taken synchronously in the click handler, before this
/// future is spawned, so click order decides which request may navigate.
pub async fn open_detail<S, N>(
    source: &S,
    navigator: &N,
    guard: &PrefetchGuard,
    token: PrefetchToken,
    config: &PokedexConfig,
    id: PokemonId,
) -> DetailOutcome
where
    S: PokemonSource + ?Sized,
    N: Navigator + ?Sized,
{
    if !prefetch_detail(source, id).await {
        return DetailOutcome::Failed;
    }

    if !guard.is_current(token) {
        log::debug!("Detail prefetch for {} superseded by a newer click", id);
        return DetailOutcome::Superseded;
    }

    let url = config.detail_page_url(id);
    log::info!("Navigating to {}", url);
    navigator.navigate(&url);
    DetailOutcome::Navigated(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pokemon::{NamedResource, PokedexState, PokemonListResponse};
    use crate::shared::error::PokedexError;
    use crate::usecases::u001_load_pokedex::load_pokedex;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct StubSource {
        fail_pokemon: bool,
        fail_species: bool,
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl PokemonSource for StubSource {
        async fn fetch_pokemon_list(&self) -> Result<PokemonListResponse, PokedexError> {
            self.calls.borrow_mut().push("list".to_string());
            Ok(PokemonListResponse {
                results: (1..=151)
                    .map(|id| NamedResource {
                        name: format!("pokemon-{}", id),
                        url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
                    })
                    .collect(),
            })
        }

        async fn fetch_pokemon(&self, id: PokemonId) -> Result<serde_json::Value, PokedexError> {
            self.calls.borrow_mut().push(format!("pokemon/{}", id));
            if self.fail_pokemon {
                Err(PokedexError::Http { status: 404 })
            } else {
                Ok(json!({ "id": id.value() }))
            }
        }

        async fn fetch_species(&self, id: PokemonId) -> Result<serde_json::Value, PokedexError> {
            self.calls.borrow_mut().push(format!("pokemon-species/{}", id));
            if self.fail_species {
                Err(PokedexError::Parse("expected value".to_string()))
            } else {
                Ok(json!({ "id": id.value() }))
            }
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.visited.borrow_mut().push(url.to_string());
        }
    }

    fn click(source: &StubSource, navigator: &RecordingNavigator, id: u32) -> DetailOutcome {
        let guard = PrefetchGuard::new();
        let token = guard.begin();
        block_on(open_detail(
            source,
            navigator,
            &guard,
            token,
            &PokedexConfig::default(),
            PokemonId::new(id),
        ))
    }

    #[test]
    fn test_prefetch_success_navigates() {
        let source = StubSource::default();
        let navigator = RecordingNavigator::default();

        let outcome = click(&source, &navigator, 25);

        assert_eq!(outcome, DetailOutcome::Navigated("./detail.html?id=25".to_string()));
        assert_eq!(*navigator.visited.borrow(), vec!["./detail.html?id=25"]);
        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.contains(&"pokemon/25".to_string()));
        assert!(calls.contains(&"pokemon-species/25".to_string()));
    }

    #[test]
    fn test_either_failure_blocks_navigation() {
        for (fail_pokemon, fail_species) in [(true, false), (false, true), (true, true)] {
            let source = StubSource {
                fail_pokemon,
                fail_species,
                ..StubSource::default()
            };
            let navigator = RecordingNavigator::default();

            assert_eq!(click(&source, &navigator, 4), DetailOutcome::Failed);
            assert!(navigator.visited.borrow().is_empty());
        }
    }

    #[test]
    fn test_prefetch_detail_reports_bool() {
        let ok = StubSource::default();
        assert!(block_on(prefetch_detail(&ok, PokemonId::new(1))));

        let broken = StubSource {
            fail_species: true,
            ..StubSource::default()
        };
        assert!(!block_on(prefetch_detail(&broken, PokemonId::new(1))));
    }

    #[test]
    fn test_superseded_click_does_not_navigate() {
        let source = StubSource::default();
        let navigator = RecordingNavigator::default();
        let guard = PrefetchGuard::new();
        let config = PokedexConfig::default();

        let stale = guard.begin();
        let latest = guard.begin();

        let first = block_on(open_detail(
            &source,
            &navigator,
            &guard,
            stale,
            &config,
            PokemonId::new(1),
        ));
        assert_eq!(first, DetailOutcome::Superseded);
        assert!(navigator.visited.borrow().is_empty());

        let second = block_on(open_detail(
            &source,
            &navigator,
            &guard,
            latest,
            &config,
            PokemonId::new(7),
        ));
        assert_eq!(second, DetailOutcome::Navigated("./detail.html?id=7".to_string()));
        assert_eq!(*navigator.visited.borrow(), vec!["./detail.html?id=7"]);
    }

    #[test]
    fn test_page_flow_with_stubbed_api() {
        let source = StubSource {
            fail_species: true,
            ..StubSource::default()
        };
        let navigator = RecordingNavigator::default();

        let mut state = PokedexState::default();
        state.load(block_on(load_pokedex(&source)));
        assert_eq!(state.visible().len(), 151);
        let before = state.clone();

        let id = state.visible()[41].id;
        let guard = PrefetchGuard::new();
        let token = guard.begin();
        let outcome = block_on(open_detail(
            &source,
            &navigator,
            &guard,
            token,
            &PokedexConfig::default(),
            id,
        ));

        assert_eq!(outcome, DetailOutcome::Failed);
        assert!(navigator.visited.borrow().is_empty());
        assert_eq!(state, before);
        assert_eq!(source.calls.borrow().len(), 3);
    }
}
