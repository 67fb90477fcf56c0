//! Listing wire types for the `/listing_api` REST surface.
//!
//! DESIGN
//! ======
//! The backend is loosely typed: decimals arrive as strings, optional text
//! may be `null`, identifiers may be numbers or strings and closed-set values
//! are not always lowercase. Every field therefore decodes leniently and
//! defaults when missing, so one malformed attribute never hides a record.
//! Serialization emits exactly the payload shape the backend accepts,
//! including its `fullfilled_by` and `ocassion` spellings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================
// Identifier
// =============================================================

/// Backend-assigned listing identifier.
///
/// Opaque to the client: numeric ids are kept in their decimal string form
/// and only ever used to build URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl ListingId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as _;

        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(Self(s)),
            serde_json::Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
        }
    }
}

// =============================================================
// Closed-set fields
// =============================================================

/// A closed-set field rendered as a `<select>`.
pub trait Choice: Copy + Sized + 'static {
    /// Every variant in display order.
    const ALL: &'static [Self];

    /// Wire value.
    fn as_str(self) -> &'static str;

    /// Human-readable option label.
    fn label(self) -> &'static str;

    /// Case-insensitive parse of a wire value.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.as_str().eq_ignore_ascii_case(raw))
    }
}

/// Lifecycle status of a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Active,
    Inactive,
}

impl Choice for Status {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive, Self::Pending];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// Who fulfils orders for the listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfilledBy {
    #[default]
    Merchant,
    Amazon,
    Seller,
    Flipkart,
}

impl Choice for FulfilledBy {
    const ALL: &'static [Self] = &[Self::Merchant, Self::Amazon, Self::Seller, Self::Flipkart];

    fn as_str(self) -> &'static str {
        match self {
            Self::Merchant => "merchant",
            Self::Amazon => "amazon",
            Self::Seller => "seller",
            Self::Flipkart => "flipkart",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Merchant => "Merchant",
            Self::Amazon => "Amazon",
            Self::Seller => "Seller",
            Self::Flipkart => "Flipkart",
        }
    }
}

/// How stock is procured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcurementType {
    Express,
    #[default]
    InStock,
}

impl Choice for ProcurementType {
    const ALL: &'static [Self] = &[Self::Express, Self::InStock];

    fn as_str(self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::InStock => "in_stock",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Express => "Express",
            Self::InStock => "In Stock",
        }
    }
}

/// Catalog department.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    #[default]
    Womens,
    Mens,
    Kids,
    Unisex,
}

impl Choice for Department {
    const ALL: &'static [Self] = &[Self::Womens, Self::Mens, Self::Kids, Self::Unisex];

    fn as_str(self) -> &'static str {
        match self {
            Self::Womens => "womens",
            Self::Mens => "mens",
            Self::Kids => "kids",
            Self::Unisex => "unisex",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Womens => "Womens",
            Self::Mens => "Mens",
            Self::Kids => "Kids",
            Self::Unisex => "Unisex",
        }
    }
}

/// External product identifier scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductIdType {
    #[default]
    Asin,
    Upc,
    Ean,
}

impl Choice for ProductIdType {
    const ALL: &'static [Self] = &[Self::Asin, Self::Upc, Self::Ean];

    fn as_str(self) -> &'static str {
        match self {
            Self::Asin => "ASIN",
            Self::Upc => "UPC",
            Self::Ean => "EAN",
        }
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

// =============================================================
// Listing
// =============================================================

/// A product listing as read from and written to the backend.
///
/// The same type is used for decoded records, AI-generated draft suggestions
/// and outgoing create/replace payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ListingId>,
    #[serde(deserialize_with = "lenient_choice", skip_serializing_if = "Option::is_none")]
    pub product_id_type: Option<ProductIdType>,

    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub product_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub brand: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub bullet_points: Vec<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub item_sku: String,
    #[serde(deserialize_with = "lenient_string")]
    pub hsn_code: String,

    #[serde(deserialize_with = "lenient_i64")]
    pub quantity: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub standard_price: f64,
    /// Serialized as `null` when absent; the backend treats the field as nullable.
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub sale_price: Option<f64>,

    #[serde(deserialize_with = "lenient_string")]
    pub main_image_url: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub additional_image_urls: Vec<String>,

    #[serde(rename = "department_name", deserialize_with = "lenient_choice", skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(deserialize_with = "lenient_string")]
    pub material_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub metal_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub metal_stamp: String,
    #[serde(deserialize_with = "lenient_string")]
    pub gem_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub jewellery_material_categorisation: String,

    #[serde(deserialize_with = "lenient_i64")]
    pub ring_size: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub ring_sizing_system: String,
    #[serde(deserialize_with = "lenient_string")]
    pub back_finding: String,
    #[serde(deserialize_with = "lenient_string")]
    pub chain_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub clasp_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub bracelet_style: String,
    #[serde(rename = "ocassion", deserialize_with = "lenient_string")]
    pub occasion: String,
    #[serde(deserialize_with = "lenient_string")]
    pub trend: String,

    #[serde(deserialize_with = "lenient_f64")]
    pub weight: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub length: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub width: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub height: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub material_care: String,

    #[serde(deserialize_with = "lenient_choice", skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(rename = "fullfilled_by", deserialize_with = "lenient_choice", skip_serializing_if = "Option::is_none")]
    pub fulfilled_by: Option<FulfilledBy>,
    #[serde(deserialize_with = "lenient_choice", skip_serializing_if = "Option::is_none")]
    pub procurement_type: Option<ProcurementType>,

    /// Backend fields this client does not model. Sent back untouched so a
    /// full replace does not drop them.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Listing {
    /// Main image followed by the additional images, skipping blanks.
    pub fn image_urls(&self) -> Vec<String> {
        std::iter::once(&self.main_image_url)
            .chain(self.additional_image_urls.iter())
            .filter(|url| !url.trim().is_empty())
            .cloned()
            .collect()
    }
}

// =============================================================
// Response envelopes
// =============================================================

/// The shapes `GET /listing_api/listings/` is known to answer with.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingsEnvelope {
    /// A bare JSON array of listings.
    Bare(Vec<Listing>),
    /// A paginated object carrying the listings under `results`.
    Paged(Vec<Listing>),
    /// Anything else; treated as an empty collection.
    FallbackEmpty,
}

impl ListingsEnvelope {
    /// Classify a decoded response body.
    ///
    /// Array elements that are not listing objects are skipped rather than
    /// failing the whole collection.
    pub fn decode(body: serde_json::Value) -> Self {
        match body {
            serde_json::Value::Array(items) => Self::Bare(decode_items(items)),
            serde_json::Value::Object(mut map) => match map.remove("results") {
                Some(serde_json::Value::Array(items)) => Self::Paged(decode_items(items)),
                _ => Self::FallbackEmpty,
            },
            _ => Self::FallbackEmpty,
        }
    }

    pub fn into_listings(self) -> Vec<Listing> {
        match self {
            Self::Bare(items) | Self::Paged(items) => items,
            Self::FallbackEmpty => Vec::new(),
        }
    }
}

fn decode_items(items: Vec<serde_json::Value>) -> Vec<Listing> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// Response of `POST /listing_api/images/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageUploadResponse {
    #[serde(deserialize_with = "lenient_string")]
    pub main_image_url: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub extra_image_urls: Vec<String>,
    /// AI-generated draft fields, when image analysis produced any.
    pub listing: Option<Listing>,
}

impl ImageUploadResponse {
    /// Uploaded image URLs with the main image first.
    pub fn uploaded_images(&self) -> Vec<String> {
        std::iter::once(&self.main_image_url)
            .chain(self.extra_image_urls.iter())
            .filter(|url| !url.is_empty())
            .cloned()
            .collect()
    }
}

// =============================================================
// Export formats
// =============================================================

/// Marketplace-specific export rendering offered by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    ShopifyCsv,
    AmazonTsv,
    FlipkartXlsx,
    MyntraCsv,
}

impl ExportFormat {
    pub const ALL: [Self; 4] = [Self::ShopifyCsv, Self::AmazonTsv, Self::FlipkartXlsx, Self::MyntraCsv];

    /// Path segment used by the export endpoints, e.g. `shopify.csv`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShopifyCsv => "shopify.csv",
            Self::AmazonTsv => "amazon.tsv",
            Self::FlipkartXlsx => "flipkart.xlsx",
            Self::MyntraCsv => "myntra.csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ShopifyCsv => "Shopify (CSV)",
            Self::AmazonTsv => "Amazon (TSV)",
            Self::FlipkartXlsx => "Flipkart (Excel)",
            Self::MyntraCsv => "Myntra (CSV)",
        }
    }

    /// Marketplace name, the part before the extension.
    pub fn platform(self) -> &'static str {
        self.as_str().split('.').next().unwrap_or_default()
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        self.as_str().rsplit('.').next().unwrap_or_default()
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::ShopifyCsv | Self::MyntraCsv => "text/csv",
            Self::AmazonTsv => "text/tab-separated-values",
            Self::FlipkartXlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

// =============================================================
// Lenient field decoders
// =============================================================

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn number_from_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).unwrap_or_default())
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if let serde_json::Value::Number(n) = &value
        && let Some(int) = n.as_i64()
    {
        return Ok(int);
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(number_from_value(&value).map_or(0, |n| n.trunc() as i64))
}

fn lenient_choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Choice,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(T::parse))
}
