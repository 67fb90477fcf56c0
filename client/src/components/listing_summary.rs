//! Read-only rendering of a listing, grouped the way the detail view and
//! the wizard's completion step present it.

use leptos::prelude::*;

use crate::net::types::{Choice, Listing};
use crate::util::format::{format_inr, format_measure, format_optional_inr};

fn text_or_dash(value: &str) -> String {
    if value.trim().is_empty() { "—".to_owned() } else { value.to_owned() }
}

fn choice_label<T: Choice>(value: Option<T>) -> &'static str {
    value.map_or("—", |choice| choice.label())
}

#[component]
fn Row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="summary__row">
            <dt class="summary__label">{label}</dt>
            <dd class="summary__value">{value}</dd>
        </div>
    }
}

/// Every listing attribute in labelled sections, followed by its images.
#[component]
pub fn ListingSummary(listing: Listing) -> impl IntoView {
    let images = listing.image_urls();
    let bullet_points = listing
        .bullet_points
        .iter()
        .filter(|point| !point.trim().is_empty())
        .cloned()
        .collect::<Vec<_>>();

    view! {
        <div class="summary">
            <section class="summary__section">
                <h3 class="summary__title">"Basic Information"</h3>
                <dl class="summary__grid">
                    <Row label="Title" value=text_or_dash(&listing.title)/>
                    <Row label="Brand" value=text_or_dash(&listing.brand)/>
                    <Row label="Product Type" value=text_or_dash(&listing.product_type)/>
                    <Row label="Item SKU" value=text_or_dash(&listing.item_sku)/>
                    <Row label="Product ID Type" value=choice_label(listing.product_id_type).to_owned()/>
                    <Row label="HSN Code" value=text_or_dash(&listing.hsn_code)/>
                </dl>
                <p class="summary__description">{text_or_dash(&listing.description)}</p>
                {(!bullet_points.is_empty())
                    .then(|| {
                        view! {
                            <ul class="summary__bullets">
                                {bullet_points.into_iter().map(|point| view! { <li>{point}</li> }).collect::<Vec<_>>()}
                            </ul>
                        }
                    })}
            </section>

            <section class="summary__section">
                <h3 class="summary__title">"Pricing & Inventory"</h3>
                <dl class="summary__grid">
                    <Row label="Standard Price" value=format_inr(listing.standard_price)/>
                    <Row label="Sale Price" value=format_optional_inr(listing.sale_price)/>
                    <Row label="Quantity" value=listing.quantity.to_string()/>
                    <Row label="Status" value=choice_label(listing.status).to_owned()/>
                    <Row label="Fulfilled By" value=choice_label(listing.fulfilled_by).to_owned()/>
                    <Row label="Procurement Type" value=choice_label(listing.procurement_type).to_owned()/>
                </dl>
            </section>

            <section class="summary__section">
                <h3 class="summary__title">"Additional Details"</h3>
                <dl class="summary__grid">
                    <Row label="Department" value=choice_label(listing.department).to_owned()/>
                    <Row label="Material Type" value=text_or_dash(&listing.material_type)/>
                    <Row label="Metal Type" value=text_or_dash(&listing.metal_type)/>
                    <Row label="Metal Stamp" value=text_or_dash(&listing.metal_stamp)/>
                    <Row label="Gem Type" value=text_or_dash(&listing.gem_type)/>
                    <Row
                        label="Material Categorisation"
                        value=text_or_dash(&listing.jewellery_material_categorisation)
                    />
                    <Row label="Ring Size" value=listing.ring_size.to_string()/>
                    <Row label="Ring Sizing System" value=text_or_dash(&listing.ring_sizing_system)/>
                    <Row label="Back Finding" value=text_or_dash(&listing.back_finding)/>
                    <Row label="Chain Type" value=text_or_dash(&listing.chain_type)/>
                    <Row label="Clasp Type" value=text_or_dash(&listing.clasp_type)/>
                    <Row label="Bracelet Style" value=text_or_dash(&listing.bracelet_style)/>
                    <Row label="Occasion" value=text_or_dash(&listing.occasion)/>
                    <Row label="Trend" value=text_or_dash(&listing.trend)/>
                </dl>
            </section>

            <section class="summary__section">
                <h3 class="summary__title">"Dimensions & Care"</h3>
                <dl class="summary__grid">
                    <Row label="Weight" value=format_measure(listing.weight, "g")/>
                    <Row label="Length" value=format_measure(listing.length, "cm")/>
                    <Row label="Width" value=format_measure(listing.width, "cm")/>
                    <Row label="Height" value=format_measure(listing.height, "cm")/>
                </dl>
                <p class="summary__description">{text_or_dash(&listing.material_care)}</p>
            </section>

            <section class="summary__section">
                <h3 class="summary__title">"Images"</h3>
                {if images.is_empty() {
                    view! { <p class="summary__empty">"No images"</p> }.into_any()
                } else {
                    view! {
                        <div class="preview-grid">
                            {images
                                .into_iter()
                                .enumerate()
                                .map(|(index, url)| {
                                    let href = url.clone();
                                    view! {
                                        <a class="preview-grid__item" href=href target="_blank" rel="noopener">
                                            <img src=url alt=format!("Product image {}", index + 1)/>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }}
            </section>
        </div>
    }
}
