//! Confirmation dialog guarding listing deletion.

use leptos::prelude::*;

use crate::net::types::Listing;
use crate::util::format::format_inr;

/// Modal asking the user to confirm deleting `listing`. Both buttons are
/// disabled while the delete request is in flight.
#[component]
pub fn DeleteListingDialog(
    listing: Listing,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && !busy.get_untracked() {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div
            class="dialog-backdrop"
            on:click=move |_| {
                if !busy.get_untracked() {
                    on_cancel.run(());
                }
            }
        >
            <div
                class="dialog"
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>"Delete listing?"</h2>
                <p class="dialog__hint">"This action can’t be undone."</p>
                <div class="dialog__danger">
                    <p class="dialog__danger-title">{listing.title.clone()}</p>
                    <p>"SKU: " {listing.item_sku.clone()}</p>
                    <p>"Price: " {format_inr(listing.standard_price)}</p>
                </div>
                <div class="dialog__actions">
                    <button class="btn" disabled=move || busy.get() on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
