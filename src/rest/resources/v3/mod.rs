//! Resources for the `wc/v3` API namespace.
//!
//! # Product Resource
//!
//! ```rust,ignore
//! use woocommerce_api::rest::RestResource;
//! use woocommerce_api::resources::{Product, ProductListParams};
//!
//! // Fetch one product
//! let product = Product::find(&client, 123).await?;
//!
//! // List published products, newest first
//! let mut params = ProductListParams::default();
//! params.status = Some("publish".to_string());
//! params.paging.order = Some("desc".to_string());
//! let products = Product::all(&client, Some(params)).await?;
//! ```
//!
//! # Variation Resource
//!
//! Variations are nested under their parent product:
//!
//! ```rust,ignore
//! use woocommerce_api::rest::RestResource;
//! use woocommerce_api::resources::Variation;
//!
//! let variations = Variation::all_with_parent(&client, "product_id", 123, None).await?;
//! let variation = Variation::find_with_parent(&client, "product_id", 123, 456).await?;
//! ```

mod common;
mod product;
mod variation;

pub use common::{
    DefaultAttribute, Dimensions, MetaData, ProductAttribute, ProductCategory, ProductDownload,
    ProductImage, ProductTag, VariationAttribute,
};
pub use product::{
    Product, ProductListParams, PRODUCT_ORDERBY_VALUES, PRODUCT_STATUSES, PRODUCT_TYPES,
    STOCK_STATUSES,
};
pub use variation::{Variation, VariationListParams};
