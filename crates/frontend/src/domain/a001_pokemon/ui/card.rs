use contracts::domain::a001_pokemon::{PokemonCard, PokemonId};
use leptos::prelude::*;

/// One clickable entry of the list
#[component]
#[allow(non_snake_case)]
pub fn PokemonListItem(
    card: PokemonCard,
    /// Called with the card's id on click
    on_open: Callback<PokemonId>,
) -> impl IntoView {
    let id = card.id;

    view! {
        <div class="list-item" on:click=move |_| on_open.run(id)>
            <div class="number-wrap">
                <p class="caption-fonts">{card.caption}</p>
            </div>
            <div class="img-wrap">
                <img src=card.sprite_url alt=card.sprite_alt />
            </div>
            <div class="name-wrap">
                <p class="body3-fonts">{card.name}</p>
            </div>
        </div>
    }
}
