//! # WooCommerce API Rust Client
//!
//! A typed, async client for the WooCommerce REST API, covering product
//! and product-variation listing and retrieval.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`WooConfig`] and [`WooConfigBuilder`]
//! - Validated newtypes for API credentials and the store URL
//! - Authentication per store scheme: HTTP Basic for HTTPS stores,
//!   one-legged OAuth 1.0a signing for plain-HTTP stores
//! - Typed query parameter records with allowed-set validation,
//!   pagination normalization, and deterministic serialization
//! - Typed [`Product`](rest::resources::Product) and
//!   [`Variation`](rest::resources::Variation) resources with `find` /
//!   `all` operations (nested under the parent product for variations)
//! - Last-page detection from the `X-WP-TotalPages` response header
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{WooConfig, ConsumerKey, ConsumerSecret, StoreUrl, ApiVersion};
//!
//! // Create configuration using the builder pattern
//! let config = WooConfig::builder()
//!     .store_url(StoreUrl::new("https://example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_your_key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_your_secret").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Fetching Resources
//!
//! ```rust,ignore
//! use woocommerce_api::{HttpClient, WooConfig};
//! use woocommerce_api::rest::RestResource;
//! use woocommerce_api::resources::{Product, ProductListParams, Variation};
//!
//! let client = HttpClient::new(&config);
//!
//! // Fetch one product
//! let product = Product::find(&client, 123).await?;
//!
//! // List published products, page by page
//! let mut params = ProductListParams::default();
//! params.status = Some("publish".to_string());
//! loop {
//!     let page = Product::all(&client, Some(params.clone())).await?;
//!     for product in page.iter() {
//!         println!("{}", product.name.as_deref().unwrap_or(""));
//!     }
//!     // is_last_page() is None when the server does not report a
//!     // total page count; stop rather than loop blindly.
//!     if page.is_last_page() != Some(false) {
//!         break;
//!     }
//!     let next = page.page().map_or(2, |p| p.current_page + 1);
//!     params.paging.page = Some(next);
//! }
//!
//! // List a product's variations
//! let variations = Variation::all_with_parent(&client, "product_id", 123, None).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Credentials, URLs, and query parameters
//!   validate before any request is made
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Errors are surfaced, not handled**: validation, transport, HTTP
//!   status, and deserialization failures propagate unmodified

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

/// Convenience alias for [`rest::resources`].
pub use rest::resources;

// Re-export public types at crate root for convenience
pub use config::{
    ApiVersion, AuthMethod, ConsumerKey, ConsumerSecret, StoreUrl, WooConfig, WooConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError, HttpResponse, HttpResponseError};

// Re-export REST layer types
pub use rest::{
    ListParams, PageMeta, Paging, QueryBuilder, ResourceError, ResourceResponse, RestResource,
};
