//! Version-specific REST resource implementations.
//!
//! Resources are organized by API namespace version so that schema
//! differences between versions can live side by side:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports the latest version)
//!   v3/
//!     mod.rs         <- wc/v3 resources
//! ```
//!
//! The latest stable version is re-exported at this module level for
//! convenience:
//!
//! ```rust
//! use woocommerce_api::rest::resources::Product;            // wc/v3
//! use woocommerce_api::rest::resources::v3::Product as ProductV3; // explicit
//! ```

pub mod v3;

// Re-export the latest version's resources at this level.
pub use v3::{
    DefaultAttribute, Dimensions, MetaData, Product, ProductAttribute, ProductCategory,
    ProductDownload, ProductImage, ProductListParams, ProductTag, Variation, VariationAttribute,
    VariationListParams,
};
