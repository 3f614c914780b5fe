//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that
//! validate their contents on construction. Invalid values are rejected
//! with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated WooCommerce consumer key.
///
/// This newtype ensures the key is non-empty and provides type safety to
/// prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ConsumerKey;
///
/// let key = ConsumerKey::new("ck_xxxxxxxxxxxxxxxx").unwrap();
/// assert_eq!(key.as_ref(), "ck_xxxxxxxxxxxxxxxx");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyConsumerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated WooCommerce consumer secret.
///
/// The `Debug` implementation masks the secret value, displaying
/// `ConsumerSecret(*****)` instead of the actual secret, so it cannot
/// leak through logs.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("cs_xxxxxxxxxxxxxxxx").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyConsumerSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

/// A validated store URL.
///
/// The URL must be absolute with an `http://` or `https://` scheme and a
/// non-empty host. Trailing slashes are normalized away so the REST base
/// path can be appended uniformly.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::StoreUrl;
///
/// let url = StoreUrl::new("https://example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://example.com");
/// assert!(url.is_https());
///
/// let url = StoreUrl::new("http://shop.local").unwrap();
/// assert!(!url.is_https());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreUrl(String);

impl StoreUrl {
    /// Creates a new validated store URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreUrl`] if the URL does not have
    /// an `http`/`https` scheme or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        let valid = rest.is_some_and(|rest| {
            let host = rest.split('/').next().unwrap_or_default();
            !host.is_empty()
        });

        if !valid {
            return Err(ConfigError::InvalidStoreUrl { url });
        }

        Ok(Self(trimmed.trim_end_matches('/').to_string()))
    }

    /// Returns `true` if the store is served over TLS.
    ///
    /// The upstream API requires one-legged OAuth signing for plain-HTTP
    /// stores, so this drives the default authentication method.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.0.starts_with("https://")
    }
}

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StoreUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
