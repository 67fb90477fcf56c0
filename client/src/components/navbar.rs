//! Top navigation bar with links to the wizard and the listings table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::UiState;

/// Persistent navigation shell. On narrow screens the links collapse behind
/// a menu toggle; following any link closes the menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move |_| ui.update(UiState::close_menu);

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">
                    <span class="navbar__logo" aria-hidden="true">"◆"</span>
                    "Listing App"
                </A>
                <button
                    class="btn navbar__toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || ui.get().menu_open.to_string()
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if ui.get().menu_open { "✕" } else { "☰" }}
                </button>
                <ul class="navbar__links" class:navbar__links--open=move || ui.get().menu_open>
                    <li on:click=close>
                        <A href="/" exact=true attr:class="navbar__link">
                            "Create Listing"
                        </A>
                    </li>
                    <li on:click=close>
                        <A href="/listings" attr:class="navbar__link">
                            "All Listings"
                        </A>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
