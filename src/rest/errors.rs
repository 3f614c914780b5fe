//! Resource-specific error types for REST API operations.
//!
//! The resource layer maps transport outcomes to semantic errors:
//!
//! - invalid query parameter values fail **before any network call** with
//!   [`ResourceError::InvalidParameter`]
//! - 404 on a single-item fetch becomes [`ResourceError::NotFound`]
//! - other non-2xx statuses become [`ResourceError::Http`] wrapping the
//!   status code and the body-derived message
//! - bodies that cannot be parsed into the expected shape become
//!   [`ResourceError::Deserialization`]
//!
//! All kinds propagate to the caller unmodified; there is no retry and no
//! local recovery.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{ResourceError, RestResource};
//!
//! match Product::find(&client, 123).await {
//!     Ok(product) => println!("found: {:?}", product.name),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} {id} does not exist");
//!     }
//!     Err(e) => println!("error: {e}"),
//! }
//! ```

use crate::clients::{HttpError, HttpResponse, HttpResponseError};
use thiserror::Error;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A query parameter holds a value outside its allowed set.
    ///
    /// Raised by parameter validation before any request is made.
    #[error("invalid value `{value}` for query parameter `{field}`, allowed values are {allowed:?}")]
    InvalidParameter {
        /// The wire name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// The fixed set of allowed values.
        allowed: &'static [&'static str],
    },

    /// The resource was not found (HTTP 404 on a single-item fetch).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Product").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// No path template matches the provided IDs and operation.
    ///
    /// Returned when a nested operation is attempted without the
    /// required parent ID.
    #[error("cannot resolve path for {resource}::{operation} with the provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all").
        operation: &'static str,
    },

    /// The response body could not be parsed into the expected shape.
    ///
    /// No partial results are returned.
    #[error("failed to deserialize {resource} response: {source}")]
    Deserialization {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A transport-level error occurred (network failure or a non-2xx
    /// status that does not map to a more specific variant).
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps a non-success HTTP response to a semantic error.
    ///
    /// A 404 with a known resource ID becomes [`ResourceError::NotFound`];
    /// everything else wraps the status code and the body-derived
    /// message.
    #[must_use]
    pub fn from_response(
        response: &HttpResponse,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        match (response.code, id) {
            (404, Some(id)) => Self::NotFound {
                resource,
                id: id.to_string(),
            },
            _ => Self::Http(HttpError::Response(HttpResponseError {
                code: response.code,
                message: response.error_message(),
            })),
        }
    }

    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
