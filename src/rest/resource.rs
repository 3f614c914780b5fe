//! REST resource trait for read operations.
//!
//! This module defines the [`RestResource`] trait, which provides a
//! standardized interface for the read side of the WooCommerce REST API.
//! Resources that implement this trait gain `find()` and `all()` methods,
//! plus `*_with_parent` variants for resources nested under a parent
//! (variations under a product).
//!
//! Collection fetches run the full query pipeline before any request:
//! enumerated fields are validated against their allowed sets, the
//! pagination block is normalized, and the record is serialized to an
//! ordered query string. The API returns collections as bare JSON
//! arrays; bodies that do not parse surface as
//! [`ResourceError::Deserialization`] with no partial results.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use woocommerce_api::rest::{ListParams, ResourceOperation, ResourcePath, RestResource};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Coupon {
//!     pub id: Option<u64>,
//!     pub code: Option<String>,
//! }
//!
//! impl RestResource for Coupon {
//!     type Id = u64;
//!     type ListParams = CouponListParams;
//!
//!     const NAME: &'static str = "Coupon";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(ResourceOperation::Find, &["id"], "coupons/{id}"),
//!         ResourcePath::new(ResourceOperation::All, &[], "coupons"),
//!     ];
//! }
//!
//! // Usage:
//! let coupon = Coupon::find(&client, 123).await?;
//! let coupons = Coupon::all(&client, None).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::clients::HttpClient;
use crate::rest::query::ListParams;
use crate::rest::{
    build_path, get_path, PageMeta, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse,
};

/// A REST resource that can be fetched singly or as a collection.
///
/// Implementors define the resource's name, path templates, and list
/// parameter type, and get default implementations for all read
/// operations.
///
/// # Associated Types
///
/// - `Id`: The type of the resource's identifier (usually `u64`)
/// - `ListParams`: The collection query parameter record
#[allow(async_fn_in_trait)]
pub trait RestResource: DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// The collection query parameter record for `all()` operations.
    type ListParams: ListParams + Default + Send + Sync;

    /// The singular name of the resource (e.g., "Product").
    ///
    /// Used in error messages.
    const NAME: &'static str;

    /// Available path templates for this resource.
    ///
    /// Path selection chooses the most specific template whose required
    /// IDs are available.
    const PATHS: &'static [ResourcePath];

    /// Fetches a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] when the API reports 404,
    /// [`ResourceError::Deserialization`] when the body does not parse,
    /// and [`ResourceError::Http`] for other failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = Product::find(&client, 123).await?;
    /// println!("{:?}", product.name);
    /// ```
    async fn find(
        client: &HttpClient,
        id: Self::Id,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id.to_string());

        fetch_one::<Self>(client, &ids, &id.to_string()).await
    }

    /// Fetches a single nested resource by parent and own ID.
    ///
    /// # Arguments
    ///
    /// * `parent_id_name` - The template name of the parent ID (e.g., `product_id`)
    /// * `parent_id` - The parent resource ID
    /// * `id` - The resource ID
    ///
    /// # Errors
    ///
    /// Same contract as [`RestResource::find`];
    /// [`ResourceError::PathResolutionFailed`] when no nested template
    /// matches.
    async fn find_with_parent<P: Display + Send + Sync>(
        client: &HttpClient,
        parent_id_name: &str,
        parent_id: P,
        id: Self::Id,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert(parent_id_name, parent_id.to_string());
        ids.insert("id", id.to_string());

        fetch_one::<Self>(client, &ids, &id.to_string()).await
    }

    /// Lists resources matching the given parameters.
    ///
    /// The caller controls the page through
    /// [`Paging::page`](crate::rest::Paging); check
    /// [`ResourceResponse::is_last_page`] to decide whether to continue.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] before any request
    /// when an enumerated field holds a disallowed value;
    /// [`ResourceError::Http`] wrapping the status code for non-2xx
    /// responses; [`ResourceError::Deserialization`] when the body is
    /// not the expected JSON array.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut params = ProductListParams::default();
    /// params.paging.page = Some(2);
    /// let page = Product::all(&client, Some(params)).await?;
    /// if page.is_last_page() == Some(false) {
    ///     // fetch page 3...
    /// }
    /// ```
    async fn all(
        client: &HttpClient,
        params: Option<Self::ListParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        fetch_collection::<Self>(client, &HashMap::new(), params).await
    }

    /// Lists nested resources under a parent resource.
    ///
    /// # Arguments
    ///
    /// * `parent_id_name` - The template name of the parent ID (e.g., `product_id`)
    /// * `parent_id` - The parent resource ID
    /// * `params` - Optional collection parameters
    ///
    /// # Errors
    ///
    /// Same contract as [`RestResource::all`];
    /// [`ResourceError::PathResolutionFailed`] when no nested template
    /// matches.
    async fn all_with_parent<P: Display + Send + Sync>(
        client: &HttpClient,
        parent_id_name: &str,
        parent_id: P,
        params: Option<Self::ListParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert(parent_id_name, parent_id.to_string());

        fetch_collection::<Self>(client, &ids, params).await
    }
}

/// Resolves a template, issues the GET, and decodes a single resource.
async fn fetch_one<T: RestResource>(
    client: &HttpClient,
    ids: &HashMap<&str, String>,
    id_label: &str,
) -> Result<ResourceResponse<T>, ResourceError> {
    let available: Vec<&str> = ids.keys().copied().collect();
    let path = get_path(T::PATHS, ResourceOperation::Find, &available).ok_or(
        ResourceError::PathResolutionFailed {
            resource: T::NAME,
            operation: ResourceOperation::Find.as_str(),
        },
    )?;

    let url = build_path(path.template, ids);
    let response = client.get(&url, &[]).await?;

    if !response.is_ok() {
        return Err(ResourceError::from_response(
            &response,
            T::NAME,
            Some(id_label),
        ));
    }

    let item: T = response
        .json()
        .map_err(|source| ResourceError::Deserialization {
            resource: T::NAME,
            source,
        })?;

    Ok(ResourceResponse::new(item, None))
}

/// Resolves a template, runs the query pipeline, issues the GET, and
/// decodes the JSON array body.
async fn fetch_collection<T: RestResource>(
    client: &HttpClient,
    ids: &HashMap<&str, String>,
    params: Option<T::ListParams>,
) -> Result<ResourceResponse<Vec<T>>, ResourceError> {
    let available: Vec<&str> = ids.keys().copied().collect();
    let path = get_path(T::PATHS, ResourceOperation::All, &available).ok_or(
        ResourceError::PathResolutionFailed {
            resource: T::NAME,
            operation: ResourceOperation::All.as_str(),
        },
    )?;

    let url = build_path(path.template, ids);

    let mut params = params.unwrap_or_default();
    let query = params.prepare()?;
    let current_page = params.paging().current_page();

    let response = client.get(&url, &query).await?;

    if !response.is_ok() {
        return Err(ResourceError::from_response(&response, T::NAME, None));
    }

    let items: Vec<T> = response
        .json()
        .map_err(|source| ResourceError::Deserialization {
            resource: T::NAME,
            source,
        })?;

    let page = PageMeta::from_response(&response, current_page);
    Ok(ResourceResponse::new(items, Some(page)))
}
