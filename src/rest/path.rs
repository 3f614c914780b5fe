//! Path building infrastructure for REST resources.
//!
//! Resources can be reachable through more than one route. A variation,
//! for example, lives under its parent product:
//! `products/{product_id}/variations/{id}`. The path resolution system
//! selects the most specific template whose required IDs are all
//! available, then interpolates the ID values into the template.
//!
//! All resource operations in this crate are reads, so every template is
//! requested with GET; templates carry only the operation, the required
//! ID names, and the URL pattern.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         ResourceOperation::Find,
//!         &["product_id", "id"],
//!         "products/{product_id}/variations/{id}",
//!     ),
//!     ResourcePath::new(ResourceOperation::All, &["product_id"], "products/{product_id}/variations"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["product_id", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("product_id", "42");
//! ids.insert("id", "7");
//! assert_eq!(build_path(path.template, &ids), "products/42/variations/7");
//! ```

use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
///
/// This client exposes the read side of the API only, so the set is
/// limited to single-item and collection fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource by ID (GET `/resources/{id}`).
    Find,
    /// List a resource collection (GET `/resources`).
    All,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{id_name}` placeholders for ID interpolation:
/// `products/{id}`, `products/{product_id}/variations/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["product_id", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Filters the templates by operation, keeps those whose required IDs
/// are all available, and returns the most specific match (the one with
/// the most required IDs).
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Replaces `{id_name}` placeholders in the template with values from
/// the provided map. Placeholders without a value are left unchanged.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
