use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    Amazon,
    Flipkart,
    Meesho,
    Ajio,
    Myntra,
    Tatacliq,
    Jiomart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketplaceStatus {
    Live,
    NotLive,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceListing {
    pub marketplace: Marketplace,
    pub status: MarketplaceStatus,
    pub marketplace_id: Option<String>,
    pub last_synced: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub hsn_code: String,
    pub category: String,
    pub brand: String,

    // Pricing
    pub purchase_price: Decimal,
    pub packaging_cost: Decimal,
    pub shipping_cost: Decimal,
    pub other_cost: Decimal,
    pub total_purchase_cost: Decimal,
    pub selling_price: Decimal,
    pub mrp: Decimal,

    // Marketplace pricing
    pub marketplace_origin: Marketplace,
    pub amazon_price: Option<Decimal>,
    pub flipkart_price: Option<Decimal>,
    pub meesho_price: Option<Decimal>,
    pub ajio_price: Option<Decimal>,
    pub myntra_price: Option<Decimal>,
    pub tatacliq_price: Option<Decimal>,
    pub jiomart_price: Option<Decimal>,

    // Inventory counters
    pub total_inventory: i64,
    pub sold_quantity: i64,
    pub return_quantity: i64,
    pub pending_return_quantity: i64,
    pub damaged_quantity: i64,

    pub image_url: Option<String>,
    pub description: Option<String>,
    pub barcode: Option<String>,
    pub weight: Option<Decimal>,
    pub dimensions: Option<Dimensions>,

    #[serde(default)]
    pub marketplace_listings: Vec<MarketplaceListing>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub product_id: String,
    pub warehouse_id: String,
    pub warehouse_name: String,
    pub available: i64,
    pub reserved: i64,
    pub on_hold: i64,
    pub inbound: i64,
    pub reorder_level: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub code: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub gstin: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub payment_terms: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoStatus {
    Draft,
    Sent,
    PartiallyReceived,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoLineItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub sku: String,
    pub ordered_qty: i64,
    pub received_qty: i64,
    pub rejected_qty: i64,
    pub purchase_price: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub po_no: String,
    pub vendor_id: String,
    pub created_date: DateTime<Utc>,
    pub expected_delivery_date: Option<DateTime<Utc>>,
    pub status: PoStatus,
    #[serde(default)]
    pub items: Vec<PoLineItem>,
    pub total_items: i64,
    pub total_quantity: i64,
    pub total_value: Decimal,
    pub warehouse_id: String,
}
