//! HTTP-specific error types.
//!
//! This module contains the error types for the transport layer:
//!
//! - [`HttpResponseError`]: a non-2xx HTTP response from the API
//! - [`HttpError`]: unified error type for transport operations
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::HttpError;
//!
//! match client.get("products", &[]).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// Carries the status code and a message derived from the response body.
/// WooCommerce error bodies have the shape
/// `{"code": "...", "message": "...", "data": {"status": ...}}`; when the
/// body parses, `message` holds the upstream message, otherwise the raw
/// body text.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Invalid ID.".to_string(),
/// };
/// assert_eq!(error.to_string(), "HTTP 404: Invalid ID.");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Message derived from the response body.
    pub message: String,
}

/// Unified error type for transport operations.
///
/// The client performs exactly one request per call; failures are
/// returned to the caller unmodified, with no retry or local recovery.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if this is a response error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_message_includes_code() {
        let error = HttpResponseError {
            code: 500,
            message: "Internal server error".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 500: Internal server error");
    }

    #[test]
    fn test_status_accessor() {
        let error = HttpError::Response(HttpResponseError {
            code: 404,
            message: "Invalid ID.".to_string(),
        });
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
        };
        let _ = response_error;

        let http_error: &dyn std::error::Error = &HttpError::Response(HttpResponseError {
            code: 400,
            message: "test".to_string(),
        });
        let _ = http_error;
    }
}
