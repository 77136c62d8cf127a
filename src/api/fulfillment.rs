// Orders, warehouses, carriers, shipments, and users.

use serde_json::{json, Value};

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::fulfillment::{Carrier, Order, Shipment, ShipmentStatus, User, Warehouse};

impl ApiClient {
    // ========== Orders ==========

    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        self.get_json("orders").await
    }

    pub async fn order(&self, id: &str) -> ClientResult<Order> {
        self.get_json(&format!("orders/{id}")).await
    }

    pub async fn create_order(&self, order: &Value) -> ClientResult<String> {
        self.post_json("orders", order).await
    }

    pub async fn update_order(&self, id: &str, updates: &Value) -> ClientResult<()> {
        self.put_unit(&format!("orders/{id}"), updates).await
    }

    pub async fn delete_order(&self, id: &str) -> ClientResult<()> {
        self.delete_unit(&format!("orders/{id}")).await
    }

    // ========== Warehouses ==========

    pub async fn warehouses(&self) -> ClientResult<Vec<Warehouse>> {
        self.get_json("inventory/warehouses").await
    }

    pub async fn warehouse(&self, id: &str) -> ClientResult<Warehouse> {
        self.get_json(&format!("inventory/warehouses/{id}")).await
    }

    pub async fn create_warehouse(&self, warehouse: &Value) -> ClientResult<String> {
        self.post_json("inventory/warehouses", warehouse).await
    }

    pub async fn update_warehouse(&self, id: &str, updates: &Value) -> ClientResult<()> {
        self.put_unit(&format!("inventory/warehouses/{id}"), updates)
            .await
    }

    pub async fn delete_warehouse(&self, id: &str) -> ClientResult<()> {
        self.delete_unit(&format!("inventory/warehouses/{id}")).await
    }

    // ========== Carriers ==========

    pub async fn carriers(&self) -> ClientResult<Vec<Carrier>> {
        self.get_json("carriers").await
    }

    pub async fn create_carrier(&self, carrier: &Value) -> ClientResult<String> {
        self.post_json("carriers", carrier).await
    }

    pub async fn update_carrier(&self, id: &str, updates: &Value) -> ClientResult<()> {
        self.put_unit(&format!("carriers/{id}"), updates).await
    }

    // ========== Shipments ==========

    pub async fn shipments(&self) -> ClientResult<Vec<Shipment>> {
        self.get_json("shipments").await
    }

    pub async fn shipment(&self, id: &str) -> ClientResult<Shipment> {
        self.get_json(&format!("shipments/{id}")).await
    }

    pub async fn create_shipment(&self, shipment: &Value) -> ClientResult<String> {
        self.post_json("shipments", shipment).await
    }

    pub async fn update_shipment_status(
        &self,
        id: &str,
        status: ShipmentStatus,
    ) -> ClientResult<()> {
        self.put_unit(
            &format!("shipments/{id}/status"),
            &json!({ "status": status }),
        )
        .await
    }

    // ========== Users ==========

    pub async fn users(&self) -> ClientResult<Vec<User>> {
        self.get_json("users").await
    }

    pub async fn user(&self, id: &str) -> ClientResult<User> {
        self.get_json(&format!("users/{id}")).await
    }

    pub async fn create_user(&self, user: &Value) -> ClientResult<String> {
        self.post_json("users", user).await
    }

    pub async fn update_user(&self, id: &str, updates: &Value) -> ClientResult<()> {
        self.put_unit(&format!("users/{id}"), updates).await
    }

    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        self.delete_unit(&format!("users/{id}")).await
    }
}
