//! HTTP client for WooCommerce API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! GET requests against a store's REST namespace. The client owns the
//! base URL construction and credential handling; everything above it
//! (query building, deserialization, error mapping) lives in the
//! [`rest`](crate::rest) layer, and everything below it (connection
//! pooling, TLS, timeouts) belongs to reqwest.

use std::collections::HashMap;

use crate::auth::signature;
use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::{AuthMethod, WooConfig};

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the WooCommerce API.
///
/// The client handles:
/// - Base URL construction (`{store_url}/wp-json/{api_version}`)
/// - Default headers including User-Agent and Accept
/// - Credential injection per the configured [`AuthMethod`]
///
/// Each call performs exactly one request; there is no retry loop and no
/// rate-limit handling.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::{HttpClient, WooConfig, ConsumerKey, ConsumerSecret, StoreUrl};
///
/// let config = WooConfig::builder()
///     .store_url(StoreUrl::new("https://example.com")?)
///     .consumer_key(ConsumerKey::new("ck_xxx")?)
///     .consumer_secret(ConsumerSecret::new("cs_xxx")?)
///     .build()?;
///
/// let client = HttpClient::new(&config);
/// let response = client.get("products", &[]).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL including the REST namespace (no trailing slash).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// How credentials are attached to requests.
    auth_method: AuthMethod,
    consumer_key: String,
    consumer_secret: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &WooConfig) -> Self {
        let base_url = format!("{}/wp-json/{}", config.store_url(), config.api_version());

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}WooCommerce API Client v{CLIENT_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
            auth_method: config.resolved_auth_method(),
            consumer_key: config.consumer_key().as_ref().to_string(),
            consumer_secret: config.consumer_secret().as_ref().to_string(),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the authentication method requests will use.
    #[must_use]
    pub const fn auth_method(&self) -> AuthMethod {
        self.auth_method
    }

    /// Sends a GET request to the given path within the REST namespace.
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the namespace (e.g., `products`,
    ///   `products/123/variations`)
    /// * `query` - Query parameters as ordered key/value pairs
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] when the request cannot be
    /// completed. Non-2xx responses are *not* an error at this layer;
    /// the caller inspects [`HttpResponse::is_ok`].
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<HttpResponse, HttpError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut pairs: Vec<(String, String)> = query.to_vec();
        match self.auth_method {
            AuthMethod::Basic => {}
            AuthMethod::QueryString => {
                pairs.push(("consumer_key".to_string(), self.consumer_key.clone()));
                pairs.push(("consumer_secret".to_string(), self.consumer_secret.clone()));
            }
            AuthMethod::OAuth1a => {
                let oauth = signature::sign_request(
                    "GET",
                    &url,
                    &pairs,
                    &self.consumer_key,
                    &self.consumer_secret,
                );
                pairs.extend(oauth);
            }
        }

        let mut request = self.client.get(&url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }
        if self.auth_method == AuthMethod::Basic {
            request = request.basic_auth(&self.consumer_key, Some(&self.consumer_secret));
        }
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        tracing::debug!(url = %url, params = pairs.len(), "GET");

        let response = request.send().await?;

        let code = response.status().as_u16();
        let headers = Self::parse_response_headers(response.headers());
        let body = response.text().await.unwrap_or_default();

        if code >= 400 {
            tracing::warn!(url = %url, status = code, "request failed");
        }

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
