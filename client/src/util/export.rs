//! Export file naming and browser download trigger.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::net::types::{ExportFormat, ListingId};

/// File name for a whole-collection export, e.g.
/// `listings_shopify_2026-10-16.csv`.
pub fn collection_file_name(format: ExportFormat, date: time::Date) -> String {
    format!("listings_{}_{date}.{}", format.platform(), format.extension())
}

/// File name for a single-listing export, e.g. `listing_42.csv`.
pub fn listing_file_name(id: &ListingId, format: ExportFormat) -> String {
    format!("listing_{id}.{}", format.extension())
}

/// Current UTC calendar date.
pub fn today() -> time::Date {
    time::OffsetDateTime::now_utc().date()
}

/// Hand `bytes` to the browser's save-as flow under `file_name`.
///
/// # Errors
///
/// Returns a description of the failing DOM step; outside the browser this
/// always fails.
pub fn save_download(bytes: &[u8], mime: &str, file_name: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        use crate::util::object_url::{ObjectUrl, bytes_to_blob};

        let blob = bytes_to_blob(bytes, mime).map_err(|e| format!("blob: {e:?}"))?;
        let url = ObjectUrl::for_blob(&blob).ok_or("object url unavailable")?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("document unavailable")?;
        let body = document.body().ok_or("document body unavailable")?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("anchor: {e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        anchor.set_href(url.as_str());
        anchor.set_download(file_name);
        body.append_child(&anchor)
            .map_err(|e| format!("append: {e:?}"))?;
        anchor.click();
        anchor.remove();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, mime, file_name);
        Err("downloads are only available in the browser".to_owned())
    }
}
