//! Error types for client configuration.
//!
//! This module contains the error type returned by configuration
//! constructors. All configuration values validate on construction, so a
//! misconfigured client fails before any request is made.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{ConsumerKey, ConfigError};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
///
/// Each variant carries enough context to point at the offending value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Generate API credentials under WooCommerce > Settings > Advanced > REST API.")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("Consumer secret cannot be empty. Generate API credentials under WooCommerce > Settings > Advanced > REST API.")]
    EmptyConsumerSecret,

    /// Store URL is invalid.
    #[error("Invalid store URL '{url}'. Expected an absolute http:// or https:// URL (e.g., 'https://example.com').")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version string is invalid.
    #[error("Invalid API version '{version}'. Expected 'v1', 'v2', or 'v3' (optionally prefixed with 'wc/').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing from the builder.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_consumer_key_error_message() {
        let error = ConfigError::EmptyConsumerKey;
        let message = error.to_string();
        assert!(message.contains("Consumer key cannot be empty"));
    }

    #[test]
    fn test_invalid_store_url_error_message() {
        let error = ConfigError::InvalidStoreUrl {
            url: "ftp://example.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://example.com"));
        assert!(message.contains("Expected an absolute"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "consumer_key",
        };
        let message = error.to_string();
        assert!(message.contains("consumer_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyConsumerKey;
        let _: &dyn std::error::Error = &error;
    }
}
