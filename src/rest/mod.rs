//! REST resource infrastructure.
//!
//! This module provides the resource layer of the client:
//!
//! - **[`RestResource`] trait**: a standardized interface for single-item
//!   and collection fetches, including nested (`*_with_parent`) access
//! - **[`ListParams`] / [`Paging`] / [`QueryBuilder`]**: query parameter
//!   records with validation against fixed allowed sets, pagination
//!   normalization, and deterministic serialization
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper combining data
//!   with page metadata ([`PageMeta`], including last-page detection)
//! - **Path building**: multiple template support for nested resources
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! Individual resources (Product, Variation) are implemented in the
//! [`resources`] submodule.
//!
//! # Example: Listing a Resource
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{ListParams, RestResource};
//! use woocommerce_api::resources::{Product, ProductListParams};
//!
//! let mut params = ProductListParams::default();
//! params.status = Some("publish".to_string());
//! params.paging.per_page = Some(25);
//!
//! let page = Product::all(&client, Some(params)).await?;
//! for product in page.iter() {
//!     println!("{:?}", product.name);
//! }
//! if page.is_last_page() == Some(false) {
//!     // advance params.paging.page and fetch again
//! }
//! ```

mod errors;
mod path;
mod query;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use query::{
    ensure_one_of, ListParams, Paging, QueryBuilder, DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE,
    ORDER_DIRECTIONS,
};
pub use resource::RestResource;
pub use response::{PageMeta, ResourceResponse};
