pub mod auth;
pub mod inventory;
pub mod marketplace;
pub mod orders;
pub mod products;
