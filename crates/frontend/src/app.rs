use crate::domain::a001_pokemon::ui::list::PokemonList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Page state and the click guard are shared through context.
    provide_context(AppGlobalContext::new());

    view! {
        <Shell>
            <PokemonList />
        </Shell>
    }
}
