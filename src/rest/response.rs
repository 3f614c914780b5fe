//! Response wrapper for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines
//! resource data with the collection page metadata the API reports in
//! its `X-WP-Total` / `X-WP-TotalPages` response headers. The wrapper
//! implements `Deref` for ergonomic access to the inner data.
//!
//! # Example
//!
//! ```rust,ignore
//! let response = Product::all(&client, None).await?;
//!
//! // Iterate directly (Vec method via Deref)
//! for product in response.iter() {
//!     println!("{:?}", product.name);
//! }
//!
//! match response.is_last_page() {
//!     Some(true) => println!("done"),
//!     Some(false) => println!("more pages available"),
//!     None => println!("server did not report a page count"),
//! }
//! ```

use std::ops::{Deref, DerefMut};

use crate::clients::HttpResponse;

/// Collection page metadata derived from response headers.
///
/// The API reports the total item and page counts as headers on
/// collection responses. Both are optional: a server (or intermediary)
/// that strips them leaves the page position unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// The page this response holds (1-based, from the request).
    pub current_page: u32,
    /// Total number of items in the collection (`X-WP-Total`).
    pub total: Option<u64>,
    /// Total number of pages (`X-WP-TotalPages`).
    pub total_pages: Option<u32>,
}

impl PageMeta {
    /// Builds page metadata from a response and the requested page.
    #[must_use]
    pub const fn from_response(response: &HttpResponse, current_page: u32) -> Self {
        Self {
            current_page,
            total: response.total,
            total_pages: response.total_pages,
        }
    }

    /// Returns whether this page is the last one.
    ///
    /// `None` when the server did not report a total page count.
    #[must_use]
    pub fn is_last_page(&self) -> Option<bool> {
        self.total_pages.map(|total| self.current_page >= total)
    }
}

/// A response from a REST resource operation.
///
/// Combines the deserialized data with page metadata. Implements
/// `Deref<Target = T>` so the inner data can be used directly: iterate a
/// `ResourceResponse<Vec<Product>>`, or read fields off a
/// `ResourceResponse<Product>`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::{PageMeta, ResourceResponse};
///
/// let response = ResourceResponse::new(
///     vec!["a", "b"],
///     Some(PageMeta { current_page: 2, total: Some(11), total_pages: Some(2) }),
/// );
///
/// assert_eq!(response.len(), 2);          // Vec method via Deref
/// assert_eq!(response.is_last_page(), Some(true));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    /// The resource data.
    data: T,
    /// Page metadata; `None` for single-item responses.
    page: Option<PageMeta>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(data: T, page: Option<PageMeta>) -> Self {
        Self { data, page }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    ///
    /// In most cases Deref coercion makes calling this unnecessary.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the page metadata, if this was a collection response.
    #[must_use]
    pub const fn page(&self) -> Option<&PageMeta> {
        self.page.as_ref()
    }

    /// Returns whether the fetched page was the last one.
    ///
    /// `None` when the response carried no page metadata or the server
    /// did not report a total page count — the caller cannot tell from
    /// this response whether more pages exist.
    #[must_use]
    pub fn is_last_page(&self) -> Option<bool> {
        self.page.as_ref().and_then(PageMeta::is_last_page)
    }

    /// Returns the total number of items, when reported.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.page.as_ref().and_then(|p| p.total)
    }

    /// Returns the total number of pages, when reported.
    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.page.as_ref().and_then(|p| p.total_pages)
    }

    /// Maps the inner data to a new type, preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            page: self.page,
        }
    }
}

/// Provides transparent access to the inner data.
impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Provides mutable access to the inner data.
impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
