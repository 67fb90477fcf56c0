//! Listings table with search, status filter, export and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The collection is fetched once on mount; search, filter and the summary
//! counts are derived client-side. Deletes are confirmed in a modal and only
//! remove the row after the backend acknowledges them.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::{listing_edit_path, listing_path};
use crate::components::delete_dialog::DeleteListingDialog;
use crate::components::export_menu::ExportMenu;
use crate::components::status_badge::{StatusBadge, StockBadge};
use crate::net::types::{ExportFormat, Listing};
use crate::state::listings::{ListingsState, StatusFilter};
use crate::util::format::{format_inr, initials};

pub(crate) const EXPORT_FAILED_MESSAGE: &str = "Failed to export listings. Please try again.";

fn empty_title(filtered: bool) -> &'static str {
    if filtered { "No matching listings" } else { "No listings yet" }
}

fn empty_hint(filtered: bool) -> &'static str {
    if filtered {
        "Try changing your search keywords or filters."
    } else {
        "Create your first product listing to start managing your catalog."
    }
}

fn load_listings(state: RwSignal<ListingsState>) {
    state.update(ListingsState::begin_fetch);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_listings().await;
        if let Err(e) = &result {
            leptos::logging::error!("error fetching listings: {e}");
        }
        state.update(|s| s.finish_fetch(result));
    });
}

fn export_collection(format: ExportFormat, exporting: RwSignal<bool>) {
    exporting.set(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::export::{collection_file_name, save_download, today};

        let saved = match crate::net::api::export_listings(format).await {
            Ok(bytes) => save_download(&bytes, format.mime_type(), &collection_file_name(format, today())),
            Err(e) => Err(e.to_string()),
        };
        if let Err(e) = saved {
            leptos::logging::error!("error exporting listings: {e}");
            crate::util::dialog::alert(EXPORT_FAILED_MESSAGE);
        }
        exporting.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = format;
        exporting.set(false);
    }
}

/// Product listings table.
#[component]
pub fn ListingsPage() -> impl IntoView {
    let state = RwSignal::new(ListingsState::default());
    let exporting = RwSignal::new(false);

    load_listings(state);

    let on_export = Callback::new(move |format: ExportFormat| export_collection(format, exporting));
    let on_cancel_delete = Callback::new(move |()| state.update(ListingsState::cancel_delete));
    let on_confirm_delete = Callback::new(move |()| {
        let mut pending = None;
        state.update(|s| pending = s.begin_delete());
        let Some(id) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_listing(&id).await;
            if let Err(e) = &result {
                leptos::logging::error!("error deleting listing {id}: {e}");
            }
            let mut alert = None;
            state.update(|s| alert = s.finish_delete(&id, result));
            if let Some(message) = alert {
                crate::util::dialog::alert(message);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });
    let deleting = Signal::derive(move || state.with(|s| s.deleting_id.is_some()));

    view! {
        <div class="page listings">
            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                {move || {
                    state
                        .with(|s| s.pending_delete.clone())
                        .map(|listing| {
                            view! {
                                <DeleteListingDialog
                                    listing
                                    busy=deleting
                                    on_cancel=on_cancel_delete
                                    on_confirm=on_confirm_delete
                                />
                            }
                        })
                }}
            </Show>

            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"Product Listings"</h1>
                    <p class="page__subtitle">"Search, filter, export and manage your catalog."</p>
                </div>
                <div class="page__actions">
                    <A href="/" attr:class="btn btn--primary">
                        "+ Create Listing"
                    </A>
                    <ExportMenu on_select=on_export busy=exporting/>
                </div>
            </header>

            <div class="toolbar card">
                <input
                    class="toolbar__search"
                    type="search"
                    placeholder="Search by title or SKU..."
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.search = value);
                    }
                />
                <select
                    class="toolbar__filter"
                    prop:value=move || state.with(|s| s.status_filter.as_str())
                    on:change=move |ev| {
                        let filter = StatusFilter::parse(&event_target_value(&ev));
                        state.update(|s| s.status_filter = filter);
                    }
                >
                    {StatusFilter::options()
                        .map(|filter| view! { <option value=filter.as_str()>{filter.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="stats">
                <Stat label="Total" value=Signal::derive(move || state.with(|s| s.counts().total))/>
                <Stat
                    label="Active"
                    value=Signal::derive(move || state.with(|s| s.counts().active))
                    modifier="stat--ok"
                />
                <Stat
                    label="Inactive"
                    value=Signal::derive(move || state.with(|s| s.counts().inactive))
                    modifier="stat--danger"
                />
                <Stat label="Showing" value=Signal::derive(move || state.with(|s| s.counts().showing))/>
            </div>

            {move || {
                let (loading, error, visible, filtered) = state
                    .with(|s| (s.loading, s.error.clone(), s.visible(), s.is_filtered()));
                if loading {
                    view! { <div class="card card--muted">"Loading listings..."</div> }.into_any()
                } else if let Some(message) = error {
                    view! {
                        <div class="card card--error" role="alert">
                            <h3>"Error loading listings"</h3>
                            <p>{message}</p>
                            <button class="btn" on:click=move |_| load_listings(state)>
                                "Try again"
                            </button>
                        </div>
                    }
                    .into_any()
                } else if visible.is_empty() {
                    view! {
                        <div class="card card--empty">
                            <h3>{empty_title(filtered)}</h3>
                            <p>{empty_hint(filtered)}</p>
                            <A href="/" attr:class="btn btn--primary">
                                "+ Create Listing"
                            </A>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <ListingsTable rows=visible state deleting/> }.into_any()
                }
            }}

            <footer class="listings__footer">
                <span>
                    {move || {
                        let counts = state.with(ListingsState::counts);
                        format!("Showing {} of {} listings", counts.showing, counts.total)
                    }}
                </span>
                <button
                    class="btn btn--link"
                    disabled=move || exporting.get()
                    on:click=move |_| on_export.run(ExportFormat::ShopifyCsv)
                >
                    "Export All"
                </button>
            </footer>
        </div>
    }
}

#[component]
fn Stat(
    label: &'static str,
    value: Signal<usize>,
    #[prop(optional)] modifier: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat {modifier}")>
            <p class="stat__label">{label}</p>
            <p class="stat__value">{move || value.get()}</p>
        </div>
    }
}

#[component]
fn ListingsTable(rows: Vec<Listing>, state: RwSignal<ListingsState>, deleting: Signal<bool>) -> impl IntoView {
    view! {
        <div class="card table-wrap">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"SKU"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                        <th>"Status"</th>
                        <th class="table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|listing| view! { <ListingRow listing state deleting/> })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ListingRow(listing: Listing, state: RwSignal<ListingsState>, deleting: Signal<bool>) -> impl IntoView {
    let links = listing
        .product_id
        .as_ref()
        .map(|id| (listing_path(id), listing_edit_path(id)));
    let id_label = listing
        .product_id
        .as_ref()
        .map(|id| format!("ID: {id}"))
        .unwrap_or_default();
    let title = if listing.title.trim().is_empty() { "Untitled listing".to_owned() } else { listing.title.clone() };
    // Records without an id cannot be addressed by the delete endpoint.
    let row_listing = listing.product_id.is_some().then(|| listing.clone());

    view! {
        <tr class="table__row">
            <td>
                <div class="table__product">
                    {match listing.image_urls().into_iter().next() {
                        Some(url) => view! { <img class="table__thumb" src=url alt=""/> }.into_any(),
                        None => view! { <span class="table__avatar">{initials(&listing.title)}</span> }.into_any(),
                    }}
                    <div>
                        <p class="table__title">{title}</p>
                        <p class="table__meta">{id_label}</p>
                    </div>
                </div>
            </td>
            <td>
                <span class="chip">{listing.item_sku.clone()}</span>
            </td>
            <td>{format_inr(listing.standard_price)}</td>
            <td>
                <StockBadge quantity=listing.quantity/>
            </td>
            <td>
                <StatusBadge status=listing.status/>
            </td>
            <td class="table__actions">
                {links
                    .map(|(view_href, edit_href)| {
                        view! {
                            <A href=view_href attr:class="btn btn--small">
                                "View"
                            </A>
                            <A href=edit_href attr:class="btn btn--small">
                                "Edit"
                            </A>
                        }
                    })}
                {row_listing
                    .map(|row_listing| {
                        view! {
                            <button
                                class="btn btn--small btn--danger"
                                disabled=move || deleting.get()
                                on:click=move |_| {
                                    let listing = row_listing.clone();
                                    state.update(|s| s.request_delete(listing));
                                }
                            >
                                "Delete"
                            </button>
                        }
                    })}
            </td>
        </tr>
    }
}
