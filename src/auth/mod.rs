//! Request authentication for the WooCommerce API.
//!
//! Stores served over TLS authenticate with HTTP Basic credentials or
//! query-string credentials; stores served over plain HTTP must sign each
//! request with one-legged OAuth 1.0a instead, so the consumer secret
//! never travels on the wire. This module implements the signing half;
//! method selection lives in [`crate::config::AuthMethod`].

pub mod signature;

pub use signature::{sign_request, sign_request_at};
