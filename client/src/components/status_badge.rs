//! Status and stock badges for table rows and the detail header.

use leptos::prelude::*;

use crate::net::types::{Choice, Status};
use crate::state::listings::StockLevel;

fn status_class(status: Option<Status>) -> &'static str {
    match status {
        Some(Status::Active) => "badge badge--ok",
        Some(Status::Inactive) => "badge badge--danger",
        Some(Status::Pending) => "badge badge--warn",
        None => "badge",
    }
}

/// Lifecycle badge; records without a recognised status show "Unknown".
#[component]
pub fn StatusBadge(status: Option<Status>) -> impl IntoView {
    view! {
        <span class=status_class(status)>
            {status.map_or("Unknown", Status::label)}
        </span>
    }
}

/// Stock badge derived from the listing quantity.
#[component]
pub fn StockBadge(quantity: i64) -> impl IntoView {
    let level = StockLevel::for_quantity(quantity);
    view! {
        <span class=level.css_class() title=format!("{quantity} units")>
            {level.label()}
        </span>
    }
}
