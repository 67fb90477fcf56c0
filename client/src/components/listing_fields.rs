//! Sectioned listing form shared by the creation wizard and the edit view.
//!
//! DESIGN
//! ======
//! Rendering is driven entirely by `FormField` descriptors, so both screens
//! always show the same fields with the same labels and input kinds.
//! Per-field server messages are shown under the matching input.

use leptos::prelude::*;

use crate::net::error::FieldErrors;
use crate::state::form::{
    BULLET_POINTS_KEY, BULLET_SLOTS, FieldKind, FormField, FormScreen, FormSection, ListingForm, field_messages,
};

/// Every editable listing field, grouped into titled sections.
#[component]
pub fn ListingFields(
    form: RwSignal<ListingForm>,
    screen: FormScreen,
    #[prop(into)] field_errors: Signal<FieldErrors>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    FormSection::ALL
        .into_iter()
        .map(|section| {
            let fields = section
                .fields()
                .map(|field| view! { <FieldInput form field screen field_errors disabled/> })
                .collect::<Vec<_>>();
            let bullets = (section == FormSection::Basic)
                .then(|| view! { <BulletPointInputs form field_errors disabled/> });
            view! {
                <section class="form-section">
                    <h3 class="form-section__title">{section.title()}</h3>
                    <div class="form-section__grid">{fields}</div>
                </section>
                {bullets}
            }
        })
        .collect::<Vec<_>>()
}

#[component]
fn FieldInput(
    form: RwSignal<ListingForm>,
    field: FormField,
    screen: FormScreen,
    field_errors: Signal<FieldErrors>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = format!("field-{}", field.name());
    let value = move || form.with(|f| f.get(field));
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(field, &event_target_value(&ev)));
    let error = move || field_errors.with(|errors| field_messages(errors, field.name()));
    let placeholder = field.placeholder().unwrap_or_default();
    let required = field.required(screen);

    let input = match field.kind() {
        FieldKind::Text => view! {
            <input
                id=id.clone()
                class="field__input"
                type="text"
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        FieldKind::TextArea { rows } => view! {
            <textarea
                id=id.clone()
                class="field__input field__input--area"
                rows=rows.to_string()
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        FieldKind::Integer => view! {
            <input
                id=id.clone()
                class="field__input"
                type="number"
                step="1"
                min=(field == FormField::Quantity).then_some("0")
                required=required
                disabled=move || disabled.get()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        FieldKind::Decimal => view! {
            <input
                id=id.clone()
                class="field__input"
                type="number"
                step="0.01"
                min="0"
                required=required
                disabled=move || disabled.get()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=id.clone()
                class="field__input"
                required=required
                disabled=move || disabled.get()
                prop:value=value
                on:change=on_input
            >
                {options
                    .iter()
                    .map(|&(option, label)| {
                        view! {
                            <option value=option selected=move || value() == option>
                                {label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div
            class="field"
            class:field--wide=matches!(field.kind(), FieldKind::TextArea { .. })
            class:field--invalid=move || error().is_some()
        >
            <label class="field__label" for=id>
                {field.label()}
                {required.then_some(view! { <span class="field__required">" *"</span> })}
            </label>
            {input}
            {move || error().map(|message| view! { <p class="field__error">{message}</p> })}
        </div>
    }
}

#[component]
fn BulletPointInputs(
    form: RwSignal<ListingForm>,
    field_errors: Signal<FieldErrors>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let error = move || field_errors.with(|errors| field_messages(errors, BULLET_POINTS_KEY));

    view! {
        <section class="form-section">
            <h3 class="form-section__title">"Bullet Points"</h3>
            <div class="form-section__list">
                {(0..BULLET_SLOTS)
                    .map(|index| {
                        view! {
                            <input
                                class="field__input"
                                type="text"
                                placeholder=format!("Bullet point {}", index + 1)
                                disabled=move || disabled.get()
                                prop:value=move || {
                                    form.with(|f| f.bullet_points.get(index).cloned().unwrap_or_default())
                                }
                                on:input=move |ev| {
                                    form.update(|f| f.set_bullet_point(index, &event_target_value(&ev)));
                                }
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {move || error().map(|message| view! { <p class="field__error">{message}</p> })}
        </section>
    }
}
