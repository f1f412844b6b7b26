//! Proxy6 Client - Rust SDK for the Proxy6 proxy-seller API
//!
//! This crate provides:
//! - HTTP transport implementing the vendor's key-in-URL request layout and
//!   `status`/`error_id` response envelope
//! - A typed client with one method per vendor operation (pricing,
//!   availability, listing, purchase, prolongation, deletion, checks)
//! - Model types for proxies, price quotes, purchases, and the account
//!   summary carried on every response
//! - A typed error taxonomy selected from vendor error codes

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod model;

pub use client::Proxy6Client;
pub use config::Proxy6ClientConfig;
pub use error::{Proxy6Error, Result};
pub use http::Proxy6HttpClient;
pub use model::*;
