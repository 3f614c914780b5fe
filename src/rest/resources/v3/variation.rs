//! Product variation resource implementation.
//!
//! Variations are the concrete purchasable combinations of a variable
//! product's attributes (e.g., "Ship Your Idea — Black"). They live
//! under their parent product in the API, so the fetch operations here
//! are the `*_with_parent` variants.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::RestResource;
//! use woocommerce_api::resources::{Variation, VariationListParams};
//!
//! // List a product's variations
//! let variations = Variation::all_with_parent(&client, "product_id", 799, None).await?;
//!
//! // Fetch one variation
//! let variation = Variation::find_with_parent(&client, "product_id", 799, 819).await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::query::{ListParams, Paging, QueryBuilder};
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

use super::common::{Dimensions, MetaData, ProductDownload, ProductImage, VariationAttribute};

/// A variation of a variable product.
///
/// The schema is a subset of the product schema: a variation has no name
/// or categories of its own, a single image instead of a gallery, and
/// one selected term per attribute.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Variation {
    /// Unique identifier for the variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// When the variation was created (site-local time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<NaiveDateTime>,

    /// When the variation was created (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the variation was last modified (site-local time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<NaiveDateTime>,

    /// When the variation was last modified (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Variation description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Variation URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Current variation price (decimal string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Regular variation price (decimal string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,

    /// Sale price (decimal string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,

    /// Start of the sale period (site-local time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from: Option<NaiveDateTime>,

    /// Start of the sale period (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from_gmt: Option<NaiveDateTime>,

    /// End of the sale period (site-local time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to: Option<NaiveDateTime>,

    /// End of the sale period (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to_gmt: Option<NaiveDateTime>,

    /// Whether the variation is currently on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,

    /// Variation status: `draft`, `pending`, `private`, or `publish`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the variation can be bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasable: Option<bool>,

    /// Whether the variation is virtual (no shipping).
    #[serde(rename = "virtual", skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<bool>,

    /// Whether the variation is downloadable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,

    /// Downloadable files attached to the variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<Vec<ProductDownload>>,

    /// Number of times the variation can be downloaded (-1 for unlimited).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,

    /// Days until download access expires (-1 for never).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_expiry: Option<i64>,

    /// Tax status: `taxable`, `shipping`, or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,

    /// Tax class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Whether stock is managed at the variation level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<bool>,

    /// Stock quantity (only when stock is managed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,

    /// Stock status: `instock`, `outofstock`, or `onbackorder`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,

    /// Backorder setting: `no`, `notify`, or `yes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backorders: Option<String>,

    /// Whether backorders are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backorders_allowed: Option<bool>,

    /// Whether the variation is currently on backorder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backordered: Option<bool>,

    /// Variation weight (string, store unit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Package dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Shipping class slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,

    /// Shipping class ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class_id: Option<u64>,

    /// The variation image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,

    /// Selected attribute terms for this variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<VariationAttribute>>,

    /// Menu order used for custom sorting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    /// Meta data entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

impl RestResource for Variation {
    type Id = u64;
    type ListParams = VariationListParams;

    const NAME: &'static str = "Variation";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            ResourceOperation::Find,
            &["product_id", "id"],
            "products/{product_id}/variations/{id}",
        ),
        ResourcePath::new(
            ResourceOperation::All,
            &["product_id"],
            "products/{product_id}/variations",
        ),
    ];
}

/// Parameters for listing a product's variations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariationListParams {
    /// Shared pagination block (`page`, `per_page`, `offset`, `order`, `orderby`).
    pub paging: Paging,

    /// Limit results to those matching a free-text search.
    pub search: Option<String>,
}

impl ListParams for VariationListParams {
    fn paging(&self) -> &Paging {
        &self.paging
    }

    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }

    fn append_filters(&self, query: &mut QueryBuilder) {
        query.push_str("search", self.search.as_deref());
    }
}
