//! Client tier of the storefront: a typed HTTP client for the REST API,
//! per-resource gateways, a synchronized cart/favorites store and the
//! multi-step checkout draft.

pub mod auth;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;

pub mod services {
    pub mod cart;
    pub mod categories;
    pub mod favorites;
    pub mod orders;
    pub mod products;
}

pub mod store {
    pub mod cache;
    pub mod checkout;
    pub mod commands;
    pub mod notice;
    pub mod sync_store;
}
