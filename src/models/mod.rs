pub mod auth;
pub mod catalog;
pub mod fulfillment;
pub mod marketplace;

pub use auth::{CurrentUser, LoginRequest, LoginResponse, SignupRequest, SignupResponse};
pub use catalog::{
    InventoryItem, Marketplace, MarketplaceListing, MarketplaceStatus, PoLineItem, PoStatus,
    Product, PurchaseOrder, Vendor,
};
pub use fulfillment::{
    Carrier, Customer, Order, OrderItem, OrderStatus, PaymentMode, Shipment, ShipmentStatus, User,
    UserRole, Warehouse,
};
pub use marketplace::{
    ConnectMarketplaceRequest, ConnectMarketplaceResponse, ImportMarketplaceProductsResponse,
    MarketplaceConnection, SearchMarketplaceOrdersResponse,
};
