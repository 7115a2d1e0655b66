use contracts::domain::a001_pokemon::{build_cards, FilterMode, PokemonId};
use contracts::usecases::u001_load_pokedex::load_pokedex;
use contracts::usecases::u002_open_detail::open_detail;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_pokemon::api::PokeApi;
use crate::domain::a001_pokemon::ui::card::PokemonListItem;
use crate::domain::a001_pokemon::ui::search_bar::SearchBar;
use crate::layout::global_context::use_global_context;
use crate::shared::api_utils::config;
use crate::shared::navigation::BrowserNavigator;

#[component]
#[allow(non_snake_case)]
pub fn PokemonList() -> impl IntoView {
    let ctx = use_global_context();
    let pokedex = ctx.pokedex;
    let (input_value, set_input_value) = signal(String::new());

    let fetch = move || {
        spawn_local(async move {
            let items = load_pokedex(&PokeApi::new(config())).await;
            pokedex.update(|state| state.load(items));
        });
    };

    let handle_search = Callback::new(move |raw: String| {
        pokedex.update(|state| state.search(&raw));
        set_input_value.set(raw);
    });

    let handle_mode_change = Callback::new(move |mode: FilterMode| {
        pokedex.update(|state| state.set_mode(mode));
    });

    let handle_clear = Callback::new(move |_: ()| {
        set_input_value.set(String::new());
        pokedex.update(|state| state.clear());
    });

    // The token is taken here, in click order, before the requests are spawned.
    let open_details = Callback::new(move |id: PokemonId| {
        let guard = ctx.prefetch_guard.get_value();
        let token = guard.begin();
        spawn_local(async move {
            let api = PokeApi::new(config());
            open_detail(&api, &BrowserNavigator, &guard, token, config(), id).await;
        });
    });

    fetch();

    view! {
        <div class="page">
            <div class="header__actions">
                <SearchBar
                    value=input_value
                    mode=Signal::derive(move || pokedex.with(|state| state.mode()))
                    on_input=handle_search
                    on_mode_change=handle_mode_change
                    on_clear=handle_clear
                />
                <span class="body3-fonts result-count">
                    {move || format!("{} Pokémon", pokedex.with(|state| state.visible().len()))}
                </span>
            </div>

            <div class="list-wrapper">
                {move || {
                    pokedex
                        .with(|state| build_cards(state.visible(), config()))
                        .into_iter()
                        .map(|card| view! { <PokemonListItem card=card on_open=open_details /> })
                        .collect_view()
                }}
            </div>

            <div
                id="not-found-message"
                style:display=move || {
                    if pokedex.with(|state| state.not_found()) { "block" } else { "none" }
                }
            >
                {"Pokemon not found"}
            </div>
        </div>
    }
}
