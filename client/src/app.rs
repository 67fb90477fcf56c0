//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    create::CreateListingPage, detail::ListingDetailPage, edit::EditListingPage, listings::ListingsPage,
};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Only the navigation chrome state is shared through context; every page
/// owns and re-fetches its own listing data.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/listing-admin.css"/>
        <Title text="Listing App"/>

        <Router>
            <div class="app">
                <Navbar/>
                <main class="app__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=CreateListingPage/>
                        <Route path=StaticSegment("listings") view=ListingsPage/>
                        <Route path=(StaticSegment("listings"), ParamSegment("id")) view=ListingDetailPage/>
                        <Route
                            path=(StaticSegment("listings"), ParamSegment("id"), StaticSegment("edit"))
                            view=EditListingPage
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
