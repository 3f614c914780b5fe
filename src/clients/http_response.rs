//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type for accessing status,
//! headers, the raw body, and the WordPress pagination headers that the
//! WooCommerce API attaches to collection responses.

use std::collections::HashMap;

use serde::Deserialize;

/// The standard WooCommerce/WordPress error body.
///
/// Non-2xx responses carry a JSON object like:
///
/// ```json
/// {"code": "woocommerce_rest_product_invalid_id", "message": "Invalid ID.", "data": {"status": 404}}
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., `woocommerce_rest_product_invalid_id`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error data.
    #[serde(default)]
    pub data: Option<ApiErrorData>,
}

/// The `data` object of a WooCommerce error body.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiErrorData {
    /// The HTTP status the API associates with the error.
    #[serde(default)]
    pub status: Option<u16>,
}

/// An HTTP response from the WooCommerce API.
///
/// The body is kept as raw text; typed deserialization happens in the
/// resource layer so that parse failures surface as deserialization
/// errors rather than being swallowed by the transport.
///
/// Collection endpoints include the total result count and total page
/// count as response headers; both are parsed into typed fields when
/// present.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (a header may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Total number of items in the collection (from `X-WP-Total`).
    pub total: Option<u64>,
    /// Total number of pages (from `X-WP-TotalPages`).
    pub total_pages: Option<u32>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the pagination headers.
    ///
    /// Header names are expected lowercase, matching the header map
    /// produced by [`HttpClient`](crate::clients::HttpClient).
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let total = Self::header_value(&headers, "x-wp-total");
        let total_pages = Self::header_value(&headers, "x-wp-totalpages");

        Self {
            code,
            headers,
            body,
            total,
            total_pages,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the body is not
    /// valid JSON or does not match the expected shape.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Parses the standard WooCommerce error body, if the body has that shape.
    #[must_use]
    pub fn api_error(&self) -> Option<ApiErrorBody> {
        serde_json::from_str(&self.body).ok()
    }

    /// Returns the best available error message for this response.
    ///
    /// Prefers the `message` field of the standard error body and falls
    /// back to the raw body text (or the status code alone for empty
    /// bodies).
    #[must_use]
    pub fn error_message(&self) -> String {
        self.api_error().map_or_else(
            || {
                let trimmed = self.body.trim();
                if trimmed.is_empty() {
                    format!("status code {}", self.code)
                } else {
                    trimmed.to_string()
                }
            },
            |e| e.message,
        )
    }

    /// Parses the first value of a header into `T`.
    fn header_value<T: std::str::FromStr>(
        headers: &HashMap<String, Vec<String>>,
        name: &str,
    ) -> Option<T> {
        headers
            .get(name)
            .and_then(|values| values.first())
            .and_then(|value| value.parse().ok())
    }
}
