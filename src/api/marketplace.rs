// Marketplace connections and marketplace-side order actions.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::http::ApiResponse;
use crate::models::marketplace::{
    ConnectMarketplaceRequest, ConnectMarketplaceResponse, ImportMarketplaceProductsResponse,
    MarketplaceConnection, SearchMarketplaceOrdersResponse,
};

/// Shipment states requested when searching marketplace orders; mirrors the
/// states the dashboard asks for.
const SEARCH_ORDER_STATES: &[&str] = &["Approved", "Packed", "Ready_To_Dispatch"];

impl ApiClient {
    pub async fn marketplace_connections(&self) -> ClientResult<Vec<MarketplaceConnection>> {
        self.get_json("marketplace/connections").await
    }

    pub async fn update_marketplace_connection(
        &self,
        id: &str,
        updates: &Value,
    ) -> ClientResult<()> {
        self.put_unit(&format!("marketplace-connections/{id}"), updates)
            .await
    }

    pub async fn connect_marketplace(
        &self,
        payload: &ConnectMarketplaceRequest,
    ) -> ClientResult<ConnectMarketplaceResponse> {
        self.post_json("marketplace/connect", payload).await
    }

    pub async fn sync_marketplace(&self, id: &str) -> ClientResult<()> {
        self.post_unit(&format!("marketplace/{id}/sync-products"), &json!({}))
            .await
    }

    pub async fn search_marketplace_orders(
        &self,
        connection_id: &str,
        from_date: DateTime<Utc>,
        to_date: DateTime<Utc>,
    ) -> ClientResult<SearchMarketplaceOrdersResponse> {
        self.post_json(
            &format!("marketplace/{connection_id}/orders/search"),
            &json!({
                "fromDate": from_date,
                "toDate": to_date,
                "states": SEARCH_ORDER_STATES,
            }),
        )
        .await
    }

    /// Returns the generated label payload (base64 or URL, marketplace
    /// dependent).
    pub async fn generate_label(
        &self,
        connection_id: &str,
        shipment_id: &str,
    ) -> ClientResult<Value> {
        self.post_json(
            &format!("marketplace/{connection_id}/shipments/{shipment_id}/label"),
            &json!({}),
        )
        .await
    }

    pub async fn dispatch_shipment(
        &self,
        connection_id: &str,
        shipment_id: &str,
    ) -> ClientResult<()> {
        self.post_unit(
            &format!("marketplace/{connection_id}/shipments/{shipment_id}/dispatch"),
            &json!({}),
        )
        .await
    }

    /// Invoice documents are marketplace-dependent binary or text payloads;
    /// the raw response is handed back untouched.
    pub async fn invoice(
        &self,
        connection_id: &str,
        shipment_id: &str,
    ) -> ClientResult<ApiResponse> {
        let request = self.request(
            reqwest::Method::GET,
            &format!("marketplace/{connection_id}/shipments/{shipment_id}/invoice"),
        )?;
        self.execute(request).await
    }

    pub async fn import_marketplace_products(
        &self,
        connection_id: &str,
    ) -> ClientResult<ImportMarketplaceProductsResponse> {
        self.post_json(
            &format!("marketplace/{connection_id}/import-flipkart-products"),
            &json!({}),
        )
        .await
    }
}
