//! Editable listing draft shared by the creation wizard and the edit view.
//!
//! DESIGN
//! ======
//! Numeric inputs are held as the raw strings the user typed and only coerced
//! when a payload is built, so half-typed values ("12.") survive re-renders.
//! `FormField` is the single configuration surface for the form: labels,
//! placeholders, input kinds and sections all come from it, and both screens
//! render the same descriptors.
//!
//! Coercion mirrors the backend contract the UI has always had: unparseable
//! numbers become `0` (or `null` for the sale price) instead of blocking
//! submission.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::error::FieldErrors;
use crate::net::types::{
    Choice, Department, FulfilledBy, Listing, ListingId, ProcurementType, ProductIdType, Status,
};

/// Number of bullet-point slots shown while editing.
pub const BULLET_SLOTS: usize = 5;

pub const DEFAULT_RING_SIZING_SYSTEM: &str = "India";

/// Validation key the backend uses for the bullet-point list.
pub const BULLET_POINTS_KEY: &str = "bullet_points";

/// Server messages reported under `key`, joined for display.
pub fn field_messages(errors: &FieldErrors, key: &str) -> Option<String> {
    errors
        .get(key)
        .filter(|messages| !messages.is_empty())
        .map(|messages| messages.join(" "))
}

// =============================================================
// Coercion
// =============================================================

/// Pad with empty strings or truncate so exactly `BULLET_SLOTS` remain.
pub fn pad_bullet_points(mut points: Vec<String>) -> Vec<String> {
    points.truncate(BULLET_SLOTS);
    points.resize(BULLET_SLOTS, String::new());
    points
}

/// Trimmed, non-empty bullet points in their original order.
pub fn submitted_bullet_points(points: &[String]) -> Vec<String> {
    points
        .iter()
        .map(|point| point.trim())
        .filter(|point| !point.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Integer coercion from the leading digits (`"7.9"` → 7, `"1e3"` → 1,
/// `"12kg"` → 12); no leading digits is `0`.
pub fn coerce_int(raw: &str) -> i64 {
    let raw = raw.trim_start();
    let sign = usize::from(raw.starts_with(['+', '-']));
    let digits = raw[sign..].bytes().take_while(u8::is_ascii_digit).count();
    raw[..sign + digits].parse::<i64>().unwrap_or(0)
}

/// Decimal coercion; anything without a numeric prefix is `0`.
pub fn coerce_decimal(raw: &str) -> f64 {
    coerce_optional_decimal(raw).unwrap_or(0.0)
}

/// Decimal coercion for nullable fields from the longest numeric prefix
/// (`"12.5g"` → 12.5, `"1e3"` → 1000); blank or non-numeric is `None`.
pub fn coerce_optional_decimal(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let candidate_len = raw
        .bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();
    (1..=candidate_len)
        .rev()
        .find_map(|end| raw[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Draft text for a generated suggestion; zero means "not detected" and
/// shows blank.
fn suggested_decimal(value: f64) -> String {
    if value.abs() < f64::EPSILON { String::new() } else { value.to_string() }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() { default.to_owned() } else { value.to_owned() }
}

// =============================================================
// Field descriptors
// =============================================================

/// Which screen a form is rendered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormScreen {
    Create,
    Edit,
}

/// Form sections in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSection {
    Basic,
    Pricing,
    Classification,
    Specifics,
    Details,
    Logistics,
}

impl FormSection {
    pub const ALL: [Self; 6] = [
        Self::Basic,
        Self::Pricing,
        Self::Classification,
        Self::Specifics,
        Self::Details,
        Self::Logistics,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "Basic Information",
            Self::Pricing => "Pricing",
            Self::Classification => "Category & Classification",
            Self::Specifics => "Product Specifics",
            Self::Details => "Additional Details",
            Self::Logistics => "Status & Logistics",
        }
    }

    /// Fields belonging to this section, in render order.
    pub fn fields(self) -> impl Iterator<Item = FormField> {
        FormField::ALL
            .iter()
            .copied()
            .filter(move |field| field.section() == self)
    }
}

/// How a field is rendered and coerced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea { rows: u8 },
    Integer,
    Decimal,
    /// `(value, label)` pairs.
    Select(&'static [(&'static str, &'static str)]),
}

/// Every user-editable listing attribute except bullet points and images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    ProductIdType,
    ItemSku,
    Title,
    Brand,
    ProductType,
    Quantity,
    Description,
    StandardPrice,
    SalePrice,
    Department,
    MaterialType,
    MetalType,
    MetalStamp,
    GemType,
    MaterialCategorisation,
    RingSize,
    RingSizingSystem,
    BackFinding,
    ChainType,
    ClaspType,
    BraceletStyle,
    Occasion,
    Trend,
    HsnCode,
    Weight,
    Length,
    Width,
    Height,
    MaterialCare,
    Status,
    FulfilledBy,
    ProcurementType,
}

impl FormField {
    pub const ALL: &'static [Self] = &[
        Self::ProductIdType,
        Self::ItemSku,
        Self::Title,
        Self::Brand,
        Self::ProductType,
        Self::Quantity,
        Self::Description,
        Self::StandardPrice,
        Self::SalePrice,
        Self::Department,
        Self::MaterialType,
        Self::MetalType,
        Self::MetalStamp,
        Self::GemType,
        Self::MaterialCategorisation,
        Self::RingSize,
        Self::RingSizingSystem,
        Self::BackFinding,
        Self::ChainType,
        Self::ClaspType,
        Self::BraceletStyle,
        Self::Occasion,
        Self::Trend,
        Self::HsnCode,
        Self::Weight,
        Self::Length,
        Self::Width,
        Self::Height,
        Self::MaterialCare,
        Self::Status,
        Self::FulfilledBy,
        Self::ProcurementType,
    ];

    /// Backend field name; also the key used in validation errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::ProductIdType => "product_id_type",
            Self::ItemSku => "item_sku",
            Self::Title => "title",
            Self::Brand => "brand",
            Self::ProductType => "product_type",
            Self::Quantity => "quantity",
            Self::Description => "description",
            Self::StandardPrice => "standard_price",
            Self::SalePrice => "sale_price",
            Self::Department => "department_name",
            Self::MaterialType => "material_type",
            Self::MetalType => "metal_type",
            Self::MetalStamp => "metal_stamp",
            Self::GemType => "gem_type",
            Self::MaterialCategorisation => "jewellery_material_categorisation",
            Self::RingSize => "ring_size",
            Self::RingSizingSystem => "ring_sizing_system",
            Self::BackFinding => "back_finding",
            Self::ChainType => "chain_type",
            Self::ClaspType => "clasp_type",
            Self::BraceletStyle => "bracelet_style",
            Self::Occasion => "ocassion",
            Self::Trend => "trend",
            Self::HsnCode => "hsn_code",
            Self::Weight => "weight",
            Self::Length => "length",
            Self::Width => "width",
            Self::Height => "height",
            Self::MaterialCare => "material_care",
            Self::Status => "status",
            Self::FulfilledBy => "fullfilled_by",
            Self::ProcurementType => "procurement_type",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ProductIdType => "Product ID Type",
            Self::ItemSku => "Item SKU",
            Self::Title => "Title",
            Self::Brand => "Brand",
            Self::ProductType => "Product Type",
            Self::Quantity => "Quantity",
            Self::Description => "Description",
            Self::StandardPrice => "Standard Price (INR)",
            Self::SalePrice => "Sale Price (INR)",
            Self::Department => "Department",
            Self::MaterialType => "Material Type",
            Self::MetalType => "Metal Type",
            Self::MetalStamp => "Metal Stamp",
            Self::GemType => "Gem Type",
            Self::MaterialCategorisation => "Material Categorisation",
            Self::RingSize => "Ring Size",
            Self::RingSizingSystem => "Ring Sizing System",
            Self::BackFinding => "Back Finding",
            Self::ChainType => "Chain Type",
            Self::ClaspType => "Clasp Type",
            Self::BraceletStyle => "Bracelet Style",
            Self::Occasion => "Occasion",
            Self::Trend => "Trend",
            Self::HsnCode => "HSN Code",
            Self::Weight => "Weight (grams)",
            Self::Length => "Length (cm)",
            Self::Width => "Width (cm)",
            Self::Height => "Height (cm)",
            Self::MaterialCare => "Material Care Instructions",
            Self::Status => "Status",
            Self::FulfilledBy => "Fulfilled By",
            Self::ProcurementType => "Procurement Type",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::MaterialType => Some("e.g., Metal, Sterling Silver, Gold"),
            Self::MetalStamp => Some("e.g., 925, 10K, 14K"),
            Self::MaterialCategorisation => Some("e.g., Fine, Fashion, Imitation"),
            Self::BackFinding => Some("e.g., Push Back, Screw Back"),
            Self::ChainType => Some("e.g., Box Chain, Rope Chain"),
            Self::ClaspType => Some("e.g., Lobster Claw, Spring Ring"),
            Self::BraceletStyle => Some("e.g., Bangle, Cuff, Tennis Bracelet"),
            Self::Occasion => Some("e.g., Casual, Formal, Party"),
            Self::Trend => Some("e.g., Vintage, Modern, Bohemian"),
            _ => None,
        }
    }

    /// Marked with an asterisk and enforced by the browser on `screen`.
    ///
    /// The wizard asks for the full catalog attribute set up front; the edit
    /// view only insists on the identifying core so stored records with
    /// blank optional attributes can always be re-saved.
    pub fn required(self, screen: FormScreen) -> bool {
        match screen {
            FormScreen::Create => self.required_on_create(),
            FormScreen::Edit => matches!(
                self,
                Self::Title
                    | Self::Description
                    | Self::ProductType
                    | Self::ItemSku
                    | Self::Brand
                    | Self::StandardPrice
                    | Self::Quantity
                    | Self::HsnCode
            ),
        }
    }

    fn required_on_create(self) -> bool {
        matches!(
            self,
            Self::ProductIdType
                | Self::ItemSku
                | Self::Title
                | Self::Brand
                | Self::ProductType
                | Self::Quantity
                | Self::Description
                | Self::StandardPrice
                | Self::Department
                | Self::MaterialType
                | Self::MetalType
                | Self::MetalStamp
                | Self::MaterialCategorisation
                | Self::HsnCode
                | Self::Weight
                | Self::Length
                | Self::Width
                | Self::Height
                | Self::MaterialCare
        )
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Description => FieldKind::TextArea { rows: 4 },
            Self::MaterialCare => FieldKind::TextArea { rows: 3 },
            Self::Quantity | Self::RingSize => FieldKind::Integer,
            Self::StandardPrice | Self::SalePrice | Self::Weight | Self::Length | Self::Width | Self::Height => {
                FieldKind::Decimal
            }
            Self::ProductIdType => FieldKind::Select(PRODUCT_ID_TYPE_OPTIONS),
            Self::Department => FieldKind::Select(DEPARTMENT_OPTIONS),
            Self::Status => FieldKind::Select(STATUS_OPTIONS),
            Self::FulfilledBy => FieldKind::Select(FULFILLED_BY_OPTIONS),
            Self::ProcurementType => FieldKind::Select(PROCUREMENT_OPTIONS),
            _ => FieldKind::Text,
        }
    }

    pub fn section(self) -> FormSection {
        match self {
            Self::ProductIdType
            | Self::ItemSku
            | Self::Title
            | Self::Brand
            | Self::ProductType
            | Self::Quantity
            | Self::Description => FormSection::Basic,
            Self::StandardPrice | Self::SalePrice => FormSection::Pricing,
            Self::Department
            | Self::MaterialType
            | Self::MetalType
            | Self::MetalStamp
            | Self::GemType
            | Self::MaterialCategorisation => FormSection::Classification,
            Self::RingSize
            | Self::RingSizingSystem
            | Self::BackFinding
            | Self::ChainType
            | Self::ClaspType
            | Self::BraceletStyle => FormSection::Specifics,
            Self::Occasion
            | Self::Trend
            | Self::HsnCode
            | Self::Weight
            | Self::Length
            | Self::Width
            | Self::Height
            | Self::MaterialCare => FormSection::Details,
            Self::Status | Self::FulfilledBy | Self::ProcurementType => FormSection::Logistics,
        }
    }
}

const PRODUCT_ID_TYPE_OPTIONS: &[(&str, &str)] = &[("ASIN", "ASIN"), ("UPC", "UPC"), ("EAN", "EAN")];
const DEPARTMENT_OPTIONS: &[(&str, &str)] =
    &[("womens", "Womens"), ("mens", "Mens"), ("kids", "Kids"), ("unisex", "Unisex")];
const STATUS_OPTIONS: &[(&str, &str)] = &[("active", "Active"), ("inactive", "Inactive"), ("pending", "Pending")];
const FULFILLED_BY_OPTIONS: &[(&str, &str)] = &[
    ("merchant", "Merchant"),
    ("amazon", "Amazon"),
    ("seller", "Seller"),
    ("flipkart", "Flipkart"),
];
const PROCUREMENT_OPTIONS: &[(&str, &str)] = &[("express", "Express"), ("in_stock", "In Stock")];

// =============================================================
// ListingForm
// =============================================================

/// Editable draft of one listing.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingForm {
    /// Carried through from an existing record; `None` while creating.
    pub product_id: Option<ListingId>,
    pub product_id_type: ProductIdType,
    pub item_sku: String,
    pub title: String,
    pub brand: String,
    pub product_type: String,
    pub quantity: String,
    pub description: String,
    /// Always exactly `BULLET_SLOTS` entries.
    pub bullet_points: Vec<String>,
    pub standard_price: String,
    pub sale_price: String,
    pub department: Department,
    pub material_type: String,
    pub metal_type: String,
    pub metal_stamp: String,
    pub gem_type: String,
    pub material_categorisation: String,
    pub ring_size: String,
    pub ring_sizing_system: String,
    pub back_finding: String,
    pub chain_type: String,
    pub clasp_type: String,
    pub bracelet_style: String,
    pub occasion: String,
    pub trend: String,
    pub hsn_code: String,
    pub weight: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub material_care: String,
    pub status: Status,
    pub fulfilled_by: FulfilledBy,
    pub procurement_type: ProcurementType,
    pub main_image_url: String,
    pub additional_image_urls: Vec<String>,
    /// Unmodelled backend fields of the record being edited.
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            product_id: None,
            product_id_type: ProductIdType::default(),
            item_sku: String::new(),
            title: String::new(),
            brand: String::new(),
            product_type: String::new(),
            quantity: "0".to_owned(),
            description: String::new(),
            bullet_points: pad_bullet_points(Vec::new()),
            standard_price: String::new(),
            sale_price: String::new(),
            department: Department::default(),
            material_type: String::new(),
            metal_type: String::new(),
            metal_stamp: String::new(),
            gem_type: String::new(),
            material_categorisation: String::new(),
            ring_size: "0".to_owned(),
            ring_sizing_system: DEFAULT_RING_SIZING_SYSTEM.to_owned(),
            back_finding: String::new(),
            chain_type: String::new(),
            clasp_type: String::new(),
            bracelet_style: String::new(),
            occasion: String::new(),
            trend: String::new(),
            hsn_code: String::new(),
            weight: String::new(),
            length: String::new(),
            width: String::new(),
            height: String::new(),
            material_care: String::new(),
            status: Status::default(),
            fulfilled_by: FulfilledBy::default(),
            procurement_type: ProcurementType::default(),
            main_image_url: String::new(),
            additional_image_urls: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }
}

impl ListingForm {
    /// Pre-fill from a stored record for editing. Stored values are shown
    /// as-is, zeros included.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            product_id: listing.product_id.clone(),
            product_id_type: listing.product_id_type.unwrap_or_default(),
            item_sku: listing.item_sku.clone(),
            title: listing.title.clone(),
            brand: listing.brand.clone(),
            product_type: listing.product_type.clone(),
            quantity: listing.quantity.to_string(),
            description: listing.description.clone(),
            bullet_points: pad_bullet_points(listing.bullet_points.clone()),
            standard_price: listing.standard_price.to_string(),
            sale_price: listing.sale_price.map(|v| v.to_string()).unwrap_or_default(),
            department: listing.department.unwrap_or_default(),
            material_type: listing.material_type.clone(),
            metal_type: listing.metal_type.clone(),
            metal_stamp: listing.metal_stamp.clone(),
            gem_type: listing.gem_type.clone(),
            material_categorisation: listing.jewellery_material_categorisation.clone(),
            ring_size: listing.ring_size.to_string(),
            ring_sizing_system: listing.ring_sizing_system.clone(),
            back_finding: listing.back_finding.clone(),
            chain_type: listing.chain_type.clone(),
            clasp_type: listing.clasp_type.clone(),
            bracelet_style: listing.bracelet_style.clone(),
            occasion: listing.occasion.clone(),
            trend: listing.trend.clone(),
            hsn_code: listing.hsn_code.clone(),
            weight: listing.weight.to_string(),
            length: listing.length.to_string(),
            width: listing.width.to_string(),
            height: listing.height.to_string(),
            material_care: listing.material_care.clone(),
            status: listing.status.unwrap_or_default(),
            fulfilled_by: listing.fulfilled_by.unwrap_or_default(),
            procurement_type: listing.procurement_type.unwrap_or_default(),
            main_image_url: listing.main_image_url.clone(),
            additional_image_urls: listing.additional_image_urls.clone(),
            extra: listing.extra.clone(),
        }
    }

    /// Merge AI-generated draft fields.
    ///
    /// Blank or zero suggestions fall back to the field default. SKU, HSN
    /// code, prices and product id type are never suggested and keep
    /// whatever the user already entered.
    pub fn apply_suggestion(&mut self, suggestion: &Listing) {
        self.title.clone_from(&suggestion.title);
        self.description.clone_from(&suggestion.description);
        self.product_type.clone_from(&suggestion.product_type);
        self.bullet_points = pad_bullet_points(suggestion.bullet_points.clone());
        self.quantity = suggestion.quantity.to_string();
        self.brand.clone_from(&suggestion.brand);
        self.department = suggestion.department.unwrap_or_default();
        self.material_type.clone_from(&suggestion.material_type);
        self.metal_type.clone_from(&suggestion.metal_type);
        self.metal_stamp.clone_from(&suggestion.metal_stamp);
        self.gem_type.clone_from(&suggestion.gem_type);
        self.material_categorisation
            .clone_from(&suggestion.jewellery_material_categorisation);
        self.ring_size = suggestion.ring_size.to_string();
        self.ring_sizing_system = non_empty_or(&suggestion.ring_sizing_system, DEFAULT_RING_SIZING_SYSTEM);
        self.back_finding.clone_from(&suggestion.back_finding);
        self.chain_type.clone_from(&suggestion.chain_type);
        self.clasp_type.clone_from(&suggestion.clasp_type);
        self.bracelet_style.clone_from(&suggestion.bracelet_style);
        self.status = suggestion.status.unwrap_or_default();
        self.fulfilled_by = suggestion.fulfilled_by.unwrap_or_default();
        self.procurement_type = suggestion.procurement_type.unwrap_or_default();
        self.occasion.clone_from(&suggestion.occasion);
        self.weight = suggested_decimal(suggestion.weight);
        self.length = suggested_decimal(suggestion.length);
        self.width = suggested_decimal(suggestion.width);
        self.height = suggested_decimal(suggestion.height);
        self.trend.clone_from(&suggestion.trend);
        self.material_care.clone_from(&suggestion.material_care);
    }

    /// Record where the backend stored the uploaded images.
    pub fn set_images(&mut self, main_image_url: &str, additional_image_urls: &[String]) {
        main_image_url.clone_into(&mut self.main_image_url);
        self.additional_image_urls = additional_image_urls.to_vec();
    }

    /// Current value of `field` as shown in its input.
    pub fn get(&self, field: FormField) -> String {
        match field {
            FormField::ProductIdType => self.product_id_type.as_str().to_owned(),
            FormField::Department => self.department.as_str().to_owned(),
            FormField::Status => self.status.as_str().to_owned(),
            FormField::FulfilledBy => self.fulfilled_by.as_str().to_owned(),
            FormField::ProcurementType => self.procurement_type.as_str().to_owned(),
            text => self.text_slot(text).map(String::clone).unwrap_or_default(),
        }
    }

    /// Store raw input for `field`. Unknown select values are ignored.
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::ProductIdType => set_choice(&mut self.product_id_type, value),
            FormField::Department => set_choice(&mut self.department, value),
            FormField::Status => set_choice(&mut self.status, value),
            FormField::FulfilledBy => set_choice(&mut self.fulfilled_by, value),
            FormField::ProcurementType => set_choice(&mut self.procurement_type, value),
            text => {
                if let Some(slot) = self.text_slot_mut(text) {
                    value.clone_into(slot);
                }
            }
        }
    }

    /// Replace bullet point `index`; out-of-range indices are ignored.
    pub fn set_bullet_point(&mut self, index: usize, value: &str) {
        if let Some(slot) = self.bullet_points.get_mut(index) {
            value.clone_into(slot);
        }
    }

    /// Build the create/replace payload, coercing numeric drafts.
    pub fn to_payload(&self) -> Listing {
        Listing {
            product_id: self.product_id.clone(),
            product_id_type: Some(self.product_id_type),
            title: self.title.clone(),
            description: self.description.clone(),
            product_type: self.product_type.clone(),
            brand: self.brand.clone(),
            bullet_points: submitted_bullet_points(&self.bullet_points),
            item_sku: self.item_sku.clone(),
            hsn_code: self.hsn_code.clone(),
            quantity: coerce_int(&self.quantity).max(0),
            standard_price: coerce_decimal(&self.standard_price),
            sale_price: coerce_optional_decimal(&self.sale_price),
            main_image_url: self.main_image_url.clone(),
            additional_image_urls: self.additional_image_urls.clone(),
            extra: self.extra.clone(),
            department: Some(self.department),
            material_type: self.material_type.clone(),
            metal_type: self.metal_type.clone(),
            metal_stamp: self.metal_stamp.clone(),
            gem_type: self.gem_type.clone(),
            jewellery_material_categorisation: self.material_categorisation.clone(),
            ring_size: coerce_int(&self.ring_size),
            ring_sizing_system: self.ring_sizing_system.clone(),
            back_finding: self.back_finding.clone(),
            chain_type: self.chain_type.clone(),
            clasp_type: self.clasp_type.clone(),
            bracelet_style: self.bracelet_style.clone(),
            occasion: self.occasion.clone(),
            trend: self.trend.clone(),
            weight: coerce_decimal(&self.weight),
            length: coerce_decimal(&self.length),
            width: coerce_decimal(&self.width),
            height: coerce_decimal(&self.height),
            material_care: self.material_care.clone(),
            status: Some(self.status),
            fulfilled_by: Some(self.fulfilled_by),
            procurement_type: Some(self.procurement_type),
        }
    }

    fn text_slot(&self, field: FormField) -> Option<&String> {
        Some(match field {
            FormField::ItemSku => &self.item_sku,
            FormField::Title => &self.title,
            FormField::Brand => &self.brand,
            FormField::ProductType => &self.product_type,
            FormField::Quantity => &self.quantity,
            FormField::Description => &self.description,
            FormField::StandardPrice => &self.standard_price,
            FormField::SalePrice => &self.sale_price,
            FormField::MaterialType => &self.material_type,
            FormField::MetalType => &self.metal_type,
            FormField::MetalStamp => &self.metal_stamp,
            FormField::GemType => &self.gem_type,
            FormField::MaterialCategorisation => &self.material_categorisation,
            FormField::RingSize => &self.ring_size,
            FormField::RingSizingSystem => &self.ring_sizing_system,
            FormField::BackFinding => &self.back_finding,
            FormField::ChainType => &self.chain_type,
            FormField::ClaspType => &self.clasp_type,
            FormField::BraceletStyle => &self.bracelet_style,
            FormField::Occasion => &self.occasion,
            FormField::Trend => &self.trend,
            FormField::HsnCode => &self.hsn_code,
            FormField::Weight => &self.weight,
            FormField::Length => &self.length,
            FormField::Width => &self.width,
            FormField::Height => &self.height,
            FormField::MaterialCare => &self.material_care,
            FormField::ProductIdType
            | FormField::Department
            | FormField::Status
            | FormField::FulfilledBy
            | FormField::ProcurementType => return None,
        })
    }

    fn text_slot_mut(&mut self, field: FormField) -> Option<&mut String> {
        Some(match field {
            FormField::ItemSku => &mut self.item_sku,
            FormField::Title => &mut self.title,
            FormField::Brand => &mut self.brand,
            FormField::ProductType => &mut self.product_type,
            FormField::Quantity => &mut self.quantity,
            FormField::Description => &mut self.description,
            FormField::StandardPrice => &mut self.standard_price,
            FormField::SalePrice => &mut self.sale_price,
            FormField::MaterialType => &mut self.material_type,
            FormField::MetalType => &mut self.metal_type,
            FormField::MetalStamp => &mut self.metal_stamp,
            FormField::GemType => &mut self.gem_type,
            FormField::MaterialCategorisation => &mut self.material_categorisation,
            FormField::RingSize => &mut self.ring_size,
            FormField::RingSizingSystem => &mut self.ring_sizing_system,
            FormField::BackFinding => &mut self.back_finding,
            FormField::ChainType => &mut self.chain_type,
            FormField::ClaspType => &mut self.clasp_type,
            FormField::BraceletStyle => &mut self.bracelet_style,
            FormField::Occasion => &mut self.occasion,
            FormField::Trend => &mut self.trend,
            FormField::HsnCode => &mut self.hsn_code,
            FormField::Weight => &mut self.weight,
            FormField::Length => &mut self.length,
            FormField::Width => &mut self.width,
            FormField::Height => &mut self.height,
            FormField::MaterialCare => &mut self.material_care,
            FormField::ProductIdType
            | FormField::Department
            | FormField::Status
            | FormField::FulfilledBy
            | FormField::ProcurementType => return None,
        })
    }
}

fn set_choice<T: Choice>(slot: &mut T, raw: &str) {
    if let Some(choice) = T::parse(raw) {
        *slot = choice;
    }
}
