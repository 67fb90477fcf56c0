//! Read-only listing detail with edit, delete and per-record export.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{listing_edit_path, route_listing_id};
use crate::components::export_menu::ExportMenu;
use crate::components::listing_summary::ListingSummary;
use crate::components::status_badge::{StatusBadge, StockBadge};
use crate::net::types::{ExportFormat, Listing, ListingId};

const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this listing?";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete listing";
const LOAD_FAILED_MESSAGE: &str = "Failed to fetch listing details";
const EXPORT_FAILED_MESSAGE: &str = "Failed to export listing. Please try again.";

/// Detail view for `/listings/:id`.
#[component]
pub fn ListingDetailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let listing_id = Memo::new(move |_| route_listing_id(params.with(|p| p.get("id"))));

    let listing = RwSignal::new(None::<Listing>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);
    let exporting = RwSignal::new(false);
    let deleted = RwSignal::new(false);

    Effect::new(move || {
        if deleted.get() {
            navigate("/listings", NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let Some(id) = listing_id.get() else {
            loading.set(false);
            return;
        };
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_listing(&id).await {
                Ok(found) => listing.set(Some(found)),
                Err(e) => {
                    leptos::logging::error!("error fetching listing {id}: {e}");
                    listing.set(None);
                    error.set(Some(e.message_or(LOAD_FAILED_MESSAGE)));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, LOAD_FAILED_MESSAGE);
    });

    let on_delete = move |_| {
        let Some(id) = listing_id.get_untracked() else {
            return;
        };
        if deleting.get_untracked() || !crate::util::dialog::confirm(DELETE_CONFIRM_MESSAGE) {
            return;
        }
        deleting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_listing(&id).await {
                Ok(()) => deleted.set(true),
                Err(e) => {
                    leptos::logging::error!("error deleting listing {id}: {e}");
                    error.set(Some(e.message_or(DELETE_FAILED_MESSAGE)));
                }
            }
            deleting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, DELETE_FAILED_MESSAGE);
            deleting.set(false);
        }
    };

    let on_export = Callback::new(move |format: ExportFormat| {
        if let Some(id) = listing_id.get_untracked() {
            export_record(id, format, exporting);
        }
    });

    view! {
        <div class="page detail">
            {move || {
                if loading.get() {
                    return view! { <div class="card card--muted">"Loading listing..."</div> }.into_any();
                }
                let Some(current) = listing.get() else {
                    return match error.get() {
                        Some(message) => view! {
                            <div class="alert alert--error" role="alert">
                                <strong>"Error! "</strong>
                                {message}
                            </div>
                        }
                        .into_any(),
                        None => view! { <div class="card card--empty">"Listing not found."</div> }.into_any(),
                    };
                };
                let edit_href = listing_id.get_untracked().map(|id| listing_edit_path(&id)).unwrap_or_default();
                view! {
                    <header class="page__header page__header--split">
                        <div>
                            <h1 class="page__title">"Listing Details"</h1>
                            <p class="page__subtitle">
                                {current.title.clone()}
                                " "
                                <StatusBadge status=current.status/>
                                " "
                                <StockBadge quantity=current.quantity/>
                            </p>
                        </div>
                        <div class="page__actions">
                            <A href=edit_href attr:class="btn btn--primary">
                                "Edit"
                            </A>
                            <ExportMenu on_select=on_export busy=exporting/>
                            <button class="btn btn--danger" disabled=move || deleting.get() on:click=on_delete>
                                {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                            </button>
                            <A href="/listings" attr:class="btn">
                                "Back to Listings"
                            </A>
                        </div>
                    </header>
                    <Show when=move || error.get().is_some()>
                        <p class="alert alert--error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="card">
                        <ListingSummary listing=current/>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

fn export_record(id: ListingId, format: ExportFormat, exporting: RwSignal<bool>) {
    exporting.set(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::export::{listing_file_name, save_download};

        let saved = match crate::net::api::export_listing(&id, format).await {
            Ok(bytes) => save_download(&bytes, format.mime_type(), &listing_file_name(&id, format)),
            Err(e) => Err(e.to_string()),
        };
        if let Err(e) = saved {
            leptos::logging::error!("error exporting listing {id}: {e}");
            crate::util::dialog::alert(EXPORT_FAILED_MESSAGE);
        }
        exporting.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, format, EXPORT_FAILED_MESSAGE);
        exporting.set(false);
    }
}
