//! WooCommerce API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for selecting which
//! version of the WooCommerce REST API namespace to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// WooCommerce REST API version.
///
/// The API is namespaced under `/wp-json/wc/{version}`. New installations
/// should use [`ApiVersion::latest`]; the legacy `v1`/`v2` namespaces are
/// still served by recent WooCommerce releases for compatibility.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V3);
///
/// // Parse from string
/// let version: ApiVersion = "wc/v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
///
/// // Display as the namespace segment used in request paths
/// assert_eq!(format!("{}", ApiVersion::V3), "wc/v3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// API namespace `wc/v1` (legacy).
    V1,
    /// API namespace `wc/v2` (legacy).
    V2,
    /// API namespace `wc/v3` (current).
    V3,
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns `true` if this version is a legacy namespace.
    ///
    /// Legacy namespaces remain available upstream but receive no new
    /// fields; prefer [`ApiVersion::latest`].
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        !matches!(self, Self::V3)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let namespace = match self {
            Self::V1 => "wc/v1",
            Self::V2 => "wc/v2",
            Self::V3 => "wc/v3",
        };
        f.write_str(namespace)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let version = normalized.strip_prefix("wc/").unwrap_or(&normalized);

        match version {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
