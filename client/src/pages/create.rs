//! Listing creation wizard: upload images, review the generated draft,
//! submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. The upload response pre-fills the draft with
//! AI-generated fields; the user completes the rest and submits. Everything
//! lives in page-local signals, so leaving the route discards the draft and
//! releases the image previews.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::image_dropzone::ImageDropzone;
use crate::components::listing_fields::ListingFields;
use crate::components::listing_summary::ListingSummary;
use crate::net::error::FieldErrors;
use crate::state::form::{FormScreen, ListingForm};
use crate::state::wizard::{SelectedImage, WizardState, WizardStep};

const STEPS: [WizardStep; 3] = [WizardStep::Upload, WizardStep::Details, WizardStep::Complete];

/// Three-step creation wizard.
#[component]
pub fn CreateListingPage() -> impl IntoView {
    let wizard = RwSignal::new(WizardState::default());
    // Draft bound to the inputs; synced into the wizard around upload/submit.
    let form = RwSignal::new(ListingForm::default());

    let step = Memo::new(move |_| wizard.with(|w| w.step));
    let loading = Signal::derive(move || wizard.with(|w| w.loading));
    let images = Signal::derive(move || wizard.with(|w| w.images.clone()));

    let on_add = Callback::new(move |(picked, rejected): (Vec<SelectedImage>, usize)| {
        wizard.update(|w| w.add_images(picked, rejected));
    });
    let on_remove = Callback::new(move |index: usize| wizard.update(|w| w.remove_image(index)));

    let on_upload = move |_| {
        let mut pending = None;
        wizard.update(|w| pending = w.begin_upload());
        let Some(selected) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::upload_images(&selected).await;
            if let Err(e) = &result {
                leptos::logging::warn!("image upload failed: {e}");
            }
            wizard.update(|w| w.finish_upload(result));
            form.set(wizard.with_untracked(|w| w.form.clone()));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = selected;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut pending = None;
        wizard.update(|w| {
            w.form = form.get_untracked();
            pending = w.begin_submit();
        });
        let Some(payload) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_listing(&payload).await;
            match &result {
                Ok(()) => leptos::logging::log!("listing created"),
                Err(e) => leptos::logging::warn!("listing submit failed: {e}"),
            }
            wizard.update(|w| w.finish_submit(payload, result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let on_previous = move |_| {
        wizard.update(|w| {
            w.form = form.get_untracked();
            w.previous();
        });
    };

    let on_reset = move |_| {
        wizard.update(WizardState::reset);
        form.set(ListingForm::default());
    };

    view! {
        <div class="page wizard">
            <header class="page__header">
                <h1 class="page__title">"Create New Listing"</h1>
                <p class="page__subtitle">
                    "Upload product images and we'll draft the listing details for you."
                </p>
            </header>

            <ol class="wizard__steps">
                {STEPS
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li class=move || s.css_class(step.get())>
                                <span class="wizard__step-number">{s.number()}</span>
                                <span class="wizard__step-title">{s.title()}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>

            <Show when=move || wizard.with(|w| w.error.is_some())>
                <p class="alert alert--error" role="alert">
                    {move || wizard.with(|w| w.error.clone().unwrap_or_default())}
                </p>
            </Show>

            {move || match step.get() {
                WizardStep::Upload => view! {
                    <section class="card">
                        <h2 class="card__title">"Upload Product Images"</h2>
                        <ImageDropzone images disabled=loading on_add on_remove/>
                        <div class="card__actions">
                            <button class="btn btn--primary" disabled=move || loading.get() on:click=on_upload>
                                {move || if loading.get() { "Uploading..." } else { "Next" }}
                            </button>
                        </div>
                    </section>
                }
                .into_any(),
                WizardStep::Details => view! {
                    <form class="card" on:submit=on_submit>
                        <h2 class="card__title">"Product Details"</h2>
                        <UploadedImages urls=wizard.with_untracked(|w| w.uploaded_images.clone())/>
                        <ListingFields
                            form
                            screen=FormScreen::Create
                            field_errors=Signal::derive(FieldErrors::new)
                            disabled=loading
                        />
                        <div class="card__actions">
                            <button
                                type="button"
                                class="btn"
                                disabled=move || loading.get()
                                on:click=on_previous
                            >
                                "Previous"
                            </button>
                            <button type="submit" class="btn btn--primary" disabled=move || loading.get()>
                                {move || if loading.get() { "Submitting..." } else { "Submit" }}
                            </button>
                        </div>
                    </form>
                }
                .into_any(),
                WizardStep::Complete => view! {
                    <section class="card">
                        <div class="wizard__done">
                            <span class="wizard__done-icon" aria-hidden="true">"✓"</span>
                            <h2 class="card__title">"Listing Submitted Successfully"</h2>
                            <p>"Here is a summary of the listing you created."</p>
                        </div>
                        {wizard
                            .with_untracked(|w| w.submitted.clone())
                            .map(|listing| view! { <ListingSummary listing/> })}
                        <div class="card__actions">
                            <A href="/listings" attr:class="btn">
                                "View All Listings"
                            </A>
                            <button class="btn btn--primary" on:click=on_reset>
                                "Create New Listing"
                            </button>
                        </div>
                    </section>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Thumbnails of the images already stored by the backend.
#[component]
fn UploadedImages(urls: Vec<String>) -> impl IntoView {
    (!urls.is_empty()).then(|| {
        view! {
            <div class="preview-grid preview-grid--compact">
                {urls
                    .into_iter()
                    .enumerate()
                    .map(|(index, url)| {
                        view! {
                            <figure class="preview-grid__item">
                                <img src=url alt=format!("Uploaded image {}", index + 1)/>
                                {(index == 0).then(|| view! { <span class="preview-grid__main">"Main"</span> })}
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
    })
}
