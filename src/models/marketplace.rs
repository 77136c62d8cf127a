use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::catalog::Marketplace;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceConnection {
    pub id: String,
    pub marketplace: Marketplace,
    pub store_name: Option<String>,
    pub seller_id: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub refresh_token: Option<String>,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_key: Option<String>,
    pub location_id: Option<String>,
    pub is_active: bool,
    pub last_synced: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectMarketplaceRequest {
    pub marketplace_name: String,
    pub store_name: String,
    pub app_key: String,
    pub app_secret: String,
    pub location_id: Option<String>,
    pub refresh_token: Option<String>,
    pub seller_id: Option<String>,
    pub aws_access_key: Option<String>,
    pub aws_secret_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectMarketplaceResponse {
    pub success: bool,
    pub connection_id: Option<String>,
    #[serde(default)]
    pub message: String,
    pub token_expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMarketplaceOrdersResponse {
    pub success: Option<bool>,
    pub message: Option<String>,
    /// Marketplace-specific shipment payloads, passed through untyped.
    #[serde(default)]
    pub shipments: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportMarketplaceProductsResponse {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub imported_count: Option<i64>,
}
