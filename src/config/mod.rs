//! Configuration types for the WooCommerce API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with a WooCommerce store.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WooConfig`]: The main configuration struct holding all client settings
//! - [`WooConfigBuilder`]: A builder for constructing [`WooConfig`] instances
//! - [`ConsumerKey`] / [`ConsumerSecret`]: Validated API credential newtypes
//! - [`StoreUrl`]: A validated store URL
//! - [`ApiVersion`]: The REST API namespace version to use
//! - [`AuthMethod`]: How credentials are attached to requests
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{WooConfig, ConsumerKey, ConsumerSecret, StoreUrl, ApiVersion};
//!
//! let config = WooConfig::builder()
//!     .store_url(StoreUrl::new("https://example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_xxx").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_xxx").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ConsumerKey, ConsumerSecret, StoreUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// How API credentials are attached to outgoing requests.
///
/// The upstream API documents HTTP Basic authentication for stores served
/// over TLS, and one-legged OAuth 1.0a request signing for stores served
/// over plain HTTP (where credentials must never travel in cleartext
/// headers). Query-string credentials are an HTTPS-only alternative for
/// servers that strip the `Authorization` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMethod {
    /// Send the consumer key/secret as HTTP Basic credentials.
    Basic,
    /// Send `consumer_key` and `consumer_secret` as query parameters.
    QueryString,
    /// Sign each request with one-legged OAuth 1.0a (HMAC-SHA256).
    OAuth1a,
}

/// Configuration for the WooCommerce API client.
///
/// Holds the store URL, API credentials, namespace version, and
/// authentication method. There is no global state: configuration is
/// instance-based and passed explicitly into
/// [`HttpClient::new`](crate::clients::HttpClient::new).
///
/// # Thread Safety
///
/// `WooConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::{WooConfig, ConsumerKey, ConsumerSecret, StoreUrl, AuthMethod};
///
/// let config = WooConfig::builder()
///     .store_url(StoreUrl::new("https://example.com").unwrap())
///     .consumer_key(ConsumerKey::new("ck_xxx").unwrap())
///     .consumer_secret(ConsumerSecret::new("cs_xxx").unwrap())
///     .build()
///     .unwrap();
///
/// // HTTPS stores authenticate with Basic credentials unless overridden.
/// assert_eq!(config.resolved_auth_method(), AuthMethod::Basic);
/// ```
#[derive(Clone, Debug)]
pub struct WooConfig {
    store_url: StoreUrl,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    api_version: ApiVersion,
    auth_method: Option<AuthMethod>,
    user_agent_prefix: Option<String>,
}

impl WooConfig {
    /// Creates a new builder for constructing a `WooConfig`.
    #[must_use]
    pub fn builder() -> WooConfigBuilder {
        WooConfigBuilder::new()
    }

    /// Returns the store URL.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the API version in use.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the explicitly configured authentication method, if any.
    #[must_use]
    pub const fn auth_method(&self) -> Option<AuthMethod> {
        self.auth_method
    }

    /// Returns the authentication method that requests will actually use.
    ///
    /// Falls back to the scheme-based default when no method was set:
    /// HTTPS stores use [`AuthMethod::Basic`], plain-HTTP stores use
    /// [`AuthMethod::OAuth1a`].
    #[must_use]
    pub fn resolved_auth_method(&self) -> AuthMethod {
        self.auth_method.unwrap_or(if self.store_url.is_https() {
            AuthMethod::Basic
        } else {
            AuthMethod::OAuth1a
        })
    }

    /// Returns the optional User-Agent prefix.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for [`WooConfig`].
///
/// Required fields: `store_url`, `consumer_key`, `consumer_secret`.
/// Everything else has a sensible default.
#[derive(Debug, Default)]
pub struct WooConfigBuilder {
    store_url: Option<StoreUrl>,
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    api_version: Option<ApiVersion>,
    auth_method: Option<AuthMethod>,
    user_agent_prefix: Option<String>,
}

impl WooConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store URL (required).
    #[must_use]
    pub fn store_url(mut self, store_url: StoreUrl) -> Self {
        self.store_url = Some(store_url);
        self
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, consumer_key: ConsumerKey) -> Self {
        self.consumer_key = Some(consumer_key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, consumer_secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(consumer_secret);
        self
    }

    /// Sets the API version. Defaults to [`ApiVersion::latest`].
    #[must_use]
    pub const fn api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = Some(api_version);
        self
    }

    /// Overrides the authentication method.
    ///
    /// When not set, the method is chosen from the store URL scheme at
    /// request time; see [`WooConfig::resolved_auth_method`].
    #[must_use]
    pub const fn auth_method(mut self, auth_method: AuthMethod) -> Self {
        self.auth_method = Some(auth_method);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when `store_url`,
    /// `consumer_key`, or `consumer_secret` was not set.
    pub fn build(self) -> Result<WooConfig, ConfigError> {
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;
        let consumer_key = self.consumer_key.ok_or(ConfigError::MissingRequiredField {
            field: "consumer_key",
        })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        Ok(WooConfig {
            store_url,
            consumer_key,
            consumer_secret,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            auth_method: self.auth_method,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

// Verify WooConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooConfig>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn https_config() -> WooConfig {
        WooConfig::builder()
            .store_url(StoreUrl::new("https://example.com").unwrap())
            .consumer_key(ConsumerKey::new("ck_test").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_with_required_fields() {
        let config = https_config();
        assert_eq!(config.store_url().as_ref(), "https://example.com");
        assert_eq!(config.consumer_key().as_ref(), "ck_test");
        assert_eq!(config.api_version(), ApiVersion::latest());
    }

    #[test]
    fn test_builder_missing_store_url_fails() {
        let result = WooConfig::builder()
            .consumer_key(ConsumerKey::new("ck_test").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "store_url" })
        ));
    }

    #[test]
    fn test_builder_missing_credentials_fails() {
        let result = WooConfig::builder()
            .store_url(StoreUrl::new("https://example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "consumer_key"
            })
        ));
    }

    #[test]
    fn test_https_store_defaults_to_basic_auth() {
        assert_eq!(https_config().resolved_auth_method(), AuthMethod::Basic);
    }

    #[test]
    fn test_http_store_defaults_to_oauth() {
        let config = WooConfig::builder()
            .store_url(StoreUrl::new("http://shop.local").unwrap())
            .consumer_key(ConsumerKey::new("ck_test").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.resolved_auth_method(), AuthMethod::OAuth1a);
    }

    #[test]
    fn test_explicit_auth_method_wins() {
        let config = WooConfig::builder()
            .store_url(StoreUrl::new("https://example.com").unwrap())
            .consumer_key(ConsumerKey::new("ck_test").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
            .auth_method(AuthMethod::QueryString)
            .build()
            .unwrap();

        assert_eq!(config.resolved_auth_method(), AuthMethod::QueryString);
    }

    #[test]
    fn test_user_agent_prefix_is_stored() {
        let config = WooConfig::builder()
            .store_url(StoreUrl::new("https://example.com").unwrap())
            .consumer_key(ConsumerKey::new("ck_test").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }
}
