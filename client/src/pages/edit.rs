//! Listing edit view: fetch, pre-fill, replace in full.
//!
//! SYSTEM CONTEXT
//! ==============
//! Saves issue a full `PUT`. Validation rejections keep the form on screen
//! with a summary banner and the backend's message under each offending
//! field; a successful save returns to the detail view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{listing_path, route_listing_id};
use crate::components::listing_fields::ListingFields;
use crate::net::types::ListingId;
use crate::state::edit::EditState;
use crate::state::form::{FormScreen, ListingForm};

/// Edit view for `/listings/:id/edit`.
#[component]
pub fn EditListingPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let listing_id = Memo::new(move |_| route_listing_id(params.with(|p| p.get("id"))));

    let state = RwSignal::new(EditState {
        loading: true,
        ..EditState::default()
    });
    let form = RwSignal::new(ListingForm::default());
    let saved = RwSignal::new(None::<ListingId>);

    Effect::new(move || {
        if let Some(id) = saved.get() {
            navigate(&listing_path(&id), NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let Some(id) = listing_id.get() else {
            state.update(|s| s.loading = false);
            return;
        };
        state.update(EditState::begin_load);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_listing(&id).await;
            if let Err(e) = &result {
                leptos::logging::error!("error fetching listing {id}: {e}");
            }
            state.update(|s| s.finish_load(result));
            if let Some(loaded) = state.with_untracked(|s| s.form.clone()) {
                form.set(loaded);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = listing_id.get_untracked() else {
            return;
        };
        let mut pending = None;
        state.update(|s| {
            s.form = Some(form.get_untracked());
            pending = s.begin_save();
        });
        let Some(payload) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_listing(&id, &payload).await;
            if let Err(e) = &result {
                leptos::logging::error!("error updating listing {id}: {e}");
            }
            let mut next = None;
            state.update(|s| next = s.finish_save(&id, result));
            if next.is_some() {
                saved.set(next);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, payload);
    };

    let saving = Signal::derive(move || state.with(|s| s.saving));
    let field_errors = Signal::derive(move || state.with(|s| s.field_errors.clone()));
    let cancel_href = move || listing_id.get().map(|id| listing_path(&id)).unwrap_or_else(|| "/listings".to_owned());

    view! {
        <div class="page edit">
            {move || {
                let (loading, load_error, loaded) = state.with(|s| (s.loading, s.load_error.clone(), s.form.is_some()));
                if loading {
                    return view! { <div class="card card--muted">"Loading listing..."</div> }.into_any();
                }
                if let Some(message) = load_error {
                    return view! {
                        <div class="alert alert--error" role="alert">
                            <strong>"Error! "</strong>
                            {message}
                        </div>
                    }
                    .into_any();
                }
                if !loaded {
                    return view! { <div class="card card--empty">"Listing not found."</div> }.into_any();
                }
                view! {
                    <header class="page__header page__header--split">
                        <h1 class="page__title">"Edit Listing"</h1>
                        <div class="page__actions">
                            <A href=cancel_href attr:class="btn">
                                "Cancel"
                            </A>
                            <button
                                type="submit"
                                form="edit-listing-form"
                                class="btn btn--primary"
                                disabled=move || saving.get()
                            >
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </header>
                    <Show when=move || state.with(|s| s.save_error.is_some())>
                        <p class="alert alert--error" role="alert">
                            {move || state.with(|s| s.save_error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <form id="edit-listing-form" class="card" on:submit=on_submit>
                        <ListingFields form screen=FormScreen::Edit field_errors disabled=saving/>
                    </form>
                }
                .into_any()
            }}
        </div>
    }
}
