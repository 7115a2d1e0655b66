use contracts::domain::a001_pokemon::FilterMode;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Search field, clear control and filter-mode radios.
///
/// Every input event is forwarded immediately; there is no debounce.
#[component]
#[allow(non_snake_case)]
pub fn SearchBar(
    /// Raw text of the input
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    mode: Signal<FilterMode>,
    on_input: Callback<String>,
    on_mode_change: Callback<FilterMode>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="search-wrapper">
            <div class="search-wrap">
                <span class="search-icon">{icon("search")}</span>
                <input
                    type="text"
                    class="search-input body3-fonts"
                    id="search-input"
                    placeholder="Search"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <span
                    class="search-close-icon"
                    title="Clear"
                    on:click=move |_| on_clear.run(())
                >
                    {icon("x")}
                </span>
            </div>
            <div class="sort-wrapper">
                <p class="body3-fonts">{"Sort by:"}</p>
                <div class="filter-wrapper">
                    {FilterMode::all()
                        .into_iter()
                        .map(|option| {
                            let radio_id = option.as_str();
                            view! {
                                <div class="filter-wrap">
                                    <input
                                        type="radio"
                                        id=radio_id
                                        name="filters"
                                        value=radio_id
                                        prop:checked=move || mode.get() == option
                                        on:change=move |_| on_mode_change.run(option)
                                    />
                                    <label for=radio_id class="body3-fonts">{option.label()}</label>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
