//! Image picker with drag-and-drop, previews and per-image removal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Files are filtered by MIME type before their bytes are read, then handed
//! to the wizard as `SelectedImage`s carrying a preview object URL. Type and
//! count limits are enforced by `WizardState::add_images`.

use leptos::prelude::*;

use crate::state::wizard::{MAX_IMAGES, SelectedImage};

/// Drop target plus preview grid for the wizard's upload step.
#[component]
pub fn ImageDropzone(
    #[prop(into)] images: Signal<Vec<SelectedImage>>,
    #[prop(into)] disabled: Signal<bool>,
    /// Receives the readable images and the number of files skipped up front.
    on_add: Callback<(Vec<SelectedImage>, usize)>,
    on_remove: Callback<usize>,
) -> impl IntoView {
    let dragging = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(files) = input.files() {
                read_files(&files, on_add);
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, on_add);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        if disabled.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                read_files(&files, on_add);
            }
        }
    };

    view! {
        <div class="dropzone-wrap">
            <label
                class="dropzone"
                class:dropzone--active=move || dragging.get()
                class:dropzone--disabled=move || disabled.get()
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=on_drop
            >
                <input
                    class="dropzone__input"
                    type="file"
                    multiple=true
                    accept="image/jpeg,image/jpg,image/png,image/webp"
                    disabled=move || disabled.get()
                    on:change=on_change
                />
                <span class="dropzone__icon" aria-hidden="true">"⬆"</span>
                <p class="dropzone__title">
                    {move || if dragging.get() { "Drop the images here" } else { "Drag & drop product images here, or click to select" }}
                </p>
                <p class="dropzone__hint">
                    {format!("JPEG, PNG or WEBP, up to {MAX_IMAGES} images")}
                </p>
            </label>

            <Show when=move || !images.with(Vec::is_empty)>
                <p class="dropzone__count">
                    {move || format!("{} of {MAX_IMAGES} images selected", images.with(Vec::len))}
                </p>
                <div class="preview-grid">
                    {move || {
                        images
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, image)| {
                                view! {
                                    <figure class="preview-grid__item">
                                        <img src=image.preview.as_str().to_owned() alt=image.name.clone()/>
                                        <figcaption class="preview-grid__name">{image.name.clone()}</figcaption>
                                        {(index == 0).then(|| view! { <span class="preview-grid__main">"Main"</span> })}
                                        <button
                                            class="preview-grid__remove"
                                            aria-label="Remove image"
                                            disabled=move || disabled.get()
                                            on:click=move |_| on_remove.run(index)
                                        >
                                            "✕"
                                        </button>
                                    </figure>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Read every accepted file in `files` and report the batch once complete.
#[cfg(feature = "hydrate")]
fn read_files(files: &web_sys::FileList, on_add: Callback<(Vec<SelectedImage>, usize)>) {
    use crate::state::wizard::is_accepted_image;

    let mut accepted = Vec::new();
    let mut rejected = 0_usize;
    for index in 0..files.length() {
        let Some(file) = files.get(index) else {
            continue;
        };
        if is_accepted_image(&file.type_()) {
            accepted.push(file);
        } else {
            rejected += 1;
        }
    }

    leptos::task::spawn_local(async move {
        let mut images = Vec::with_capacity(accepted.len());
        for file in accepted {
            match read_file(&file).await {
                Ok(image) => images.push(image),
                Err(e) => {
                    leptos::logging::warn!("failed to read {}: {e}", file.name());
                    rejected += 1;
                }
            }
        }
        on_add.run((images, rejected));
    });
}

#[cfg(feature = "hydrate")]
async fn read_file(file: &web_sys::File) -> Result<SelectedImage, String> {
    use crate::util::object_url::ObjectUrl;

    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let preview = ObjectUrl::for_blob(file).ok_or("preview url unavailable")?;
    Ok(SelectedImage {
        name: file.name(),
        mime: file.type_(),
        bytes: bytes.into(),
        preview,
    })
}
