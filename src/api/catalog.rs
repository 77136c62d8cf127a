// Products, inventory, vendors, and purchase orders.

use serde_json::{json, Value};

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::catalog::{InventoryItem, Product, PurchaseOrder, Vendor};

impl ApiClient {
    // ========== Products ==========

    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        self.get_json("products").await
    }

    pub async fn product(&self, id: &str) -> ClientResult<Product> {
        self.get_json(&format!("products/{id}")).await
    }

    /// Returns the new product's id.
    pub async fn create_product(&self, product: &Value) -> ClientResult<String> {
        self.post_json("products", product).await
    }

    pub async fn update_product(&self, id: &str, updates: &Value) -> ClientResult<()> {
        self.put_unit(&format!("products/{id}"), updates).await
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<()> {
        self.delete_unit(&format!("products/{id}")).await
    }

    // ========== Inventory ==========

    pub async fn inventory(&self) -> ClientResult<Vec<InventoryItem>> {
        self.get_json("inventory").await
    }

    pub async fn update_inventory(&self, id: &str, updates: &Value) -> ClientResult<()> {
        self.put_unit(&format!("inventory/{id}"), updates).await
    }

    /// Stock adjustment is computed server-side; the client only names the
    /// product, warehouse, and signed delta.
    pub async fn adjust_inventory(
        &self,
        product_id: &str,
        warehouse_id: &str,
        adjustment: i64,
    ) -> ClientResult<()> {
        self.post_unit(
            "inventory/adjust",
            &json!({
                "productId": product_id,
                "warehouseId": warehouse_id,
                "adjustment": adjustment,
            }),
        )
        .await
    }

    // ========== Vendors ==========

    pub async fn vendors(&self) -> ClientResult<Vec<Vendor>> {
        self.get_json("inventory/vendors").await
    }

    pub async fn vendor(&self, id: &str) -> ClientResult<Vendor> {
        self.get_json(&format!("inventory/vendors/{id}")).await
    }

    pub async fn create_vendor(&self, vendor: &Value) -> ClientResult<String> {
        self.post_json("inventory/vendors", vendor).await
    }

    pub async fn update_vendor(&self, id: &str, updates: &Value) -> ClientResult<()> {
        self.put_unit(&format!("inventory/vendors/{id}"), updates).await
    }

    pub async fn delete_vendor(&self, id: &str) -> ClientResult<()> {
        self.delete_unit(&format!("inventory/vendors/{id}")).await
    }

    // ========== Purchase Orders ==========

    pub async fn purchase_orders(&self) -> ClientResult<Vec<PurchaseOrder>> {
        self.get_json("inventory/purchase-orders").await
    }

    pub async fn purchase_order(&self, id: &str) -> ClientResult<PurchaseOrder> {
        self.get_json(&format!("inventory/purchase-orders/{id}")).await
    }

    pub async fn create_purchase_order(&self, po: &Value) -> ClientResult<String> {
        self.post_json("inventory/purchase-orders", po).await
    }

    pub async fn update_purchase_order(&self, id: &str, updates: &Value) -> ClientResult<()> {
        self.put_unit(&format!("inventory/purchase-orders/{id}"), updates)
            .await
    }

    pub async fn delete_purchase_order(&self, id: &str) -> ClientResult<()> {
        self.delete_unit(&format!("inventory/purchase-orders/{id}"))
            .await
    }

    /// Record received line items against a purchase order.
    pub async fn receive_purchase_order(&self, id: &str, items: &Value) -> ClientResult<()> {
        self.post_unit(
            &format!("inventory/purchase-orders/{id}/receive"),
            &json!({ "items": items }),
        )
        .await
    }
}
