pub mod global_context;

use leptos::prelude::*;

/// Page shell: header bar with the title, content below.
///
/// ```text
/// +------------------------------+
/// |  Pokédex                     |
/// +------------------------------+
/// |  children                    |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <main class="main">
            <header class="header home">
                <div class="container">
                    <div class="logo-wrapper">
                        <h1 class="header__title">{"Pokédex"}</h1>
                    </div>
                </div>
            </header>
            <section class="pokemon-list">
                <div class="container">
                    {children()}
                </div>
            </section>
        </main>
    }
}
