pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod http;
pub mod models;
pub mod session;

#[cfg(test)]
pub mod testing;
