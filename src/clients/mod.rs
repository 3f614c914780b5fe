//! HTTP transport layer for WooCommerce API communication.
//!
//! This module provides the foundational HTTP layer for making
//! authenticated requests to a store's REST namespace. It handles base
//! URL construction, credential injection, and response/header parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpResponse`]: A response with status, headers, raw body, and the
//!   parsed `X-WP-Total` / `X-WP-TotalPages` pagination headers
//! - [`HttpError`] / [`HttpResponseError`]: transport-level error types
//! - [`ApiErrorBody`]: the standard WooCommerce error body shape
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{HttpClient, WooConfig};
//!
//! let client = HttpClient::new(&config);
//! let response = client.get("products", &[]).await?;
//! if response.is_ok() {
//!     let products: Vec<serde_json::Value> = response.json()?;
//! }
//! ```

mod errors;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_response::{ApiErrorBody, ApiErrorData, HttpResponse};
