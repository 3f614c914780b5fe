//! Product resource implementation.
//!
//! Products are the goods a store sells. The [`Product`] struct mirrors
//! the `wc/v3` product schema field-for-field; [`ProductListParams`]
//! carries the collection filters with their wire names.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::RestResource;
//! use woocommerce_api::resources::{Product, ProductListParams};
//!
//! // Fetch one product
//! let product = Product::find(&client, 123).await?;
//! println!("{}", product.name.as_deref().unwrap_or(""));
//!
//! // List in-stock simple products under $25
//! let mut params = ProductListParams::default();
//! params.product_type = Some("simple".to_string());
//! params.stock_status = Some("instock".to_string());
//! params.max_price = Some("25.00".to_string());
//! let products = Product::all(&client, Some(params)).await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::query::{ensure_one_of, ListParams, Paging, QueryBuilder};
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, RestResource};

use super::common::{
    DefaultAttribute, Dimensions, MetaData, ProductAttribute, ProductCategory, ProductDownload,
    ProductImage, ProductTag,
};

/// Fields products can be ordered by.
pub const PRODUCT_ORDERBY_VALUES: &[&str] = &[
    "id",
    "include",
    "title",
    "slug",
    "price",
    "popularity",
    "rating",
];

/// Allowed values for the product `status` filter.
pub const PRODUCT_STATUSES: &[&str] = &["any", "draft", "pending", "private", "publish"];

/// Allowed values for the product `type` filter.
pub const PRODUCT_TYPES: &[&str] = &["simple", "grouped", "external", "variable"];

/// Allowed values for the `stock_status` filter.
pub const STOCK_STATUSES: &[&str] = &["instock", "outofstock", "onbackorder"];

/// A product in a WooCommerce store.
///
/// All fields are optional; the upstream API omits or nulls fields
/// depending on product type (e.g., `external_url` only exists on
/// external products) and prices are reported as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Product slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Product URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    /// When the product was created (site-local time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<NaiveDateTime>,

    /// When the product was created (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the product was last modified (site-local time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<NaiveDateTime>,

    /// When the product was last modified (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Product type: `simple`, `grouped`, `external`, or `variable`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Product status: `draft`, `pending`, `private`, or `publish`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the product is featured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// Catalog visibility: `visible`, `catalog`, `search`, or `hidden`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_visibility: Option<String>,

    /// Product description (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Product short description (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Current product price (decimal string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Regular product price (decimal string).
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

    /// Rendered price string (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_html: Option<String>,

    /// Whether the product is currently on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,

    /// Whether the product can be bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasable: Option<bool>,

    /// Number of units sold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sales: Option<i64>,

    /// Whether the product is virtual (no shipping).
    #[serde(rename = "virtual", skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<bool>,

    /// Whether the product is downloadable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,

    /// Downloadable files attached to the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<Vec<ProductDownload>>,

    /// Number of times the product can be downloaded (-1 for unlimited).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,

    /// Days until download access expires (-1 for never).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_expiry: Option<i64>,

    /// External product URL (external products only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    /// External product button text (external products only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    /// Tax status: `taxable`, `shipping`, or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,

    /// Tax class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Whether stock is managed at the product level.
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

    /// Whether the product is currently on backorder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backordered: Option<bool>,

    /// Whether only one unit can be bought per order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_individually: Option<bool>,

    /// Product weight (string, store unit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Package dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Whether the product needs shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_required: Option<bool>,

    /// Whether shipping is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_taxable: Option<bool>,

    /// Shipping class slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,

    /// Shipping class ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class_id: Option<u64>,

    /// Whether reviews are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_allowed: Option<bool>,

    /// Average review rating (decimal string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<String>,

    /// Number of ratings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<i64>,

    /// IDs of related products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_ids: Option<Vec<u64>>,

    /// IDs of up-sell products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsell_ids: Option<Vec<u64>>,

    /// IDs of cross-sell products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_sell_ids: Option<Vec<u64>>,

    /// Parent product ID (grouped products and variations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Note shown to customers after purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_note: Option<String>,

    /// Categories the product is assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<ProductCategory>>,

    /// Tags assigned to the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ProductTag>>,

    /// Product images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,

    /// Product attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<ProductAttribute>>,

    /// Default variation attribute selections (variable products).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_attributes: Option<Vec<DefaultAttribute>>,

    /// IDs of the product's variations (variable products).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<u64>>,

    /// IDs of grouped products (grouped products).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped_products: Option<Vec<u64>>,

    /// Menu order used for custom sorting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    /// Meta data entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

impl RestResource for Product {
    type Id = u64;
    type ListParams = ProductListParams;

    const NAME: &'static str = "Product";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "products/{id}"),
        ResourcePath::new(ResourceOperation::All, &[], "products"),
    ];
}

/// Parameters for listing products.
///
/// Field names match the upstream wire contract verbatim; `type` is
/// represented as `product_type` to avoid the reserved word. Enumerated
/// fields are validated against their allowed sets before any request;
/// everything left `None` is omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Shared pagination block (`page`, `per_page`, `offset`, `order`, `orderby`).
    pub paging: Paging,

    /// Limit results to those matching a free-text search.
    pub search: Option<String>,

    /// Limit to products published after this date.
    pub after: Option<NaiveDateTime>,

    /// Limit to products published before this date.
    pub before: Option<NaiveDateTime>,

    /// Exclude specific product IDs.
    pub exclude: Vec<u64>,

    /// Limit to specific product IDs.
    pub include: Vec<u64>,

    /// Limit to products with the given parent IDs.
    pub parent: Vec<u64>,

    /// Exclude products with the given parent IDs.
    pub parent_exclude: Vec<u64>,

    /// Limit to products with a specific slug.
    pub slug: Option<String>,

    /// Limit to products with a specific status.
    pub status: Option<String>,

    /// Limit to products of a specific type (wire name `type`).
    pub product_type: Option<String>,

    /// Limit to products with a specific SKU.
    pub sku: Option<String>,

    /// Limit to featured products.
    pub featured: Option<bool>,

    /// Limit to products in a category (term ID).
    pub category: Option<String>,

    /// Limit to products with a tag (term ID).
    pub tag: Option<String>,

    /// Limit to products in a shipping class (term ID).
    pub shipping_class: Option<String>,

    /// Limit to products with a specific attribute (taxonomy slug).
    pub attribute: Option<String>,

    /// Limit to products with a specific attribute term (requires `attribute`).
    pub attribute_term: Option<String>,

    /// Limit to products with a specific tax class.
    pub tax_class: Option<String>,

    /// Limit to products on sale (or explicitly not on sale).
    pub on_sale: Option<bool>,

    /// Limit to products priced at or above this amount (decimal string).
    pub min_price: Option<String>,

    /// Limit to products priced at or below this amount (decimal string).
    pub max_price: Option<String>,

    /// Limit to products with a specific stock status.
    pub stock_status: Option<String>,
}

impl ListParams for ProductListParams {
    fn paging(&self) -> &Paging {
        &self.paging
    }

    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }

    fn validate(&self) -> Result<(), ResourceError> {
        self.paging.validate()?;
        ensure_one_of(
            "orderby",
            self.paging.orderby.as_deref(),
            PRODUCT_ORDERBY_VALUES,
        )?;
        ensure_one_of("status", self.status.as_deref(), PRODUCT_STATUSES)?;
        ensure_one_of("type", self.product_type.as_deref(), PRODUCT_TYPES)?;
        ensure_one_of("stock_status", self.stock_status.as_deref(), STOCK_STATUSES)
    }

    fn append_filters(&self, query: &mut QueryBuilder) {
        query.push_str("search", self.search.as_deref());
        query.push_date("after", self.after.as_ref());
        query.push_date("before", self.before.as_ref());
        query.push_ids("exclude", &self.exclude);
        query.push_ids("include", &self.include);
        query.push_ids("parent", &self.parent);
        query.push_ids("parent_exclude", &self.parent_exclude);
        query.push_str("slug", self.slug.as_deref());
        query.push_str("status", self.status.as_deref());
        query.push_str("type", self.product_type.as_deref());
        query.push_str("sku", self.sku.as_deref());
        query.push_bool("featured", self.featured);
        query.push_str("category", self.category.as_deref());
        query.push_str("tag", self.tag.as_deref());
        query.push_str("shipping_class", self.shipping_class.as_deref());
        query.push_str("attribute", self.attribute.as_deref());
        query.push_str("attribute_term", self.attribute_term.as_deref());
        query.push_str("tax_class", self.tax_class.as_deref());
        query.push_bool("on_sale", self.on_sale);
        query.push_str("min_price", self.min_price.as_deref());
        query.push_str("max_price", self.max_price.as_deref());
        query.push_str("stock_status", self.stock_status.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_product_deserialization_from_api_response() {
        let json = r#"{
            "id": 799,
            "name": "Ship Your Idea",
            "slug": "ship-your-idea-22",
            "permalink": "https://example.com/product/ship-your-idea-22/",
            "date_created": "2017-03-23T17:03:12",
            "date_created_gmt": "2017-03-23T20:03:12",
            "date_modified": "2017-03-23T17:03:12",
            "date_modified_gmt": "2017-03-23T20:03:12",
            "type": "variable",
            "status": "publish",
            "featured": false,
            "catalog_visibility": "visible",
            "description": "<p>Pellentesque habitant morbi tristique senectus.</p>\n",
            "short_description": "<p>Pellentesque habitant morbi.</p>\n",
            "sku": "SHIP-22",
            "price": "",
            "regular_price": "",
            "sale_price": "",
            "date_on_sale_from": null,
            "date_on_sale_from_gmt": null,
            "date_on_sale_to": null,
            "date_on_sale_to_gmt": null,
            "price_html": "",
            "on_sale": false,
            "purchasable": true,
            "total_sales": 0,
            "virtual": false,
            "downloadable": false,
            "downloads": [],
            "download_limit": -1,
            "download_expiry": -1,
            "external_url": "",
            "button_text": "",
            "tax_status": "taxable",
            "tax_class": "",
            "manage_stock": false,
            "stock_quantity": null,
            "stock_status": "instock",
            "backorders": "no",
            "backorders_allowed": false,
            "backordered": false,
            "sold_individually": false,
            "weight": "",
            "dimensions": { "length": "", "width": "", "height": "" },
            "shipping_required": true,
            "shipping_taxable": true,
            "shipping_class": "",
            "shipping_class_id": 0,
            "reviews_allowed": true,
            "average_rating": "0.00",
            "rating_count": 0,
            "related_ids": [31, 22, 369],
            "upsell_ids": [],
            "cross_sell_ids": [],
            "parent_id": 0,
            "purchase_note": "",
            "categories": [
                { "id": 9, "name": "Clothing", "slug": "clothing" },
                { "id": 14, "name": "T-shirts", "slug": "t-shirts" }
            ],
            "tags": [],
            "images": [
                {
                    "id": 795,
                    "date_created": "2017-03-23T14:03:08",
                    "date_created_gmt": "2017-03-23T20:03:08",
                    "date_modified": "2017-03-23T14:03:08",
                    "date_modified_gmt": "2017-03-23T20:03:08",
                    "src": "https://example.com/wp-content/uploads/2017/03/T_4_front.jpg",
                    "name": "",
                    "alt": ""
                }
            ],
            "attributes": [
                {
                    "id": 6,
                    "name": "Color",
                    "position": 0,
                    "visible": false,
                    "variation": true,
                    "options": ["Black", "Green"]
                }
            ],
            "default_attributes": [],
            "variations": [819, 820],
            "grouped_products": [],
            "menu_order": 0,
            "meta_data": []
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, Some(799));
        assert_eq!(product.name, Some("Ship Your Idea".to_string()));
        assert_eq!(product.product_type, Some("variable".to_string()));
        assert_eq!(product.status, Some("publish".to_string()));
        assert_eq!(product.featured, Some(false));
        assert_eq!(product.sku, Some("SHIP-22".to_string()));
        assert_eq!(product.is_virtual, Some(false));
        assert_eq!(product.stock_status, Some("instock".to_string()));
        assert_eq!(product.stock_quantity, None);
        assert_eq!(product.date_on_sale_from, None);
        assert_eq!(product.related_ids, Some(vec![31, 22, 369]));
        assert_eq!(product.variations, Some(vec![819, 820]));
        assert!(product.date_created.is_some());

        let categories = product.categories.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, Some("Clothing".to_string()));

        let attributes = product.attributes.unwrap();
        assert_eq!(attributes[0].name, Some("Color".to_string()));
        assert_eq!(
            attributes[0].options,
            Some(vec!["Black".to_string(), "Green".to_string()])
        );
    }

    #[test]
    fn test_product_serialization_uses_wire_names() {
        let product = Product {
            product_type: Some("simple".to_string()),
            is_virtual: Some(true),
            ..Default::default()
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "simple");
        assert_eq!(json["virtual"], true);
        assert!(json.get("product_type").is_none());
        assert!(json.get("is_virtual").is_none());
        // Absent fields are omitted entirely
        assert!(json.get("name").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_validation_accepts_every_allowed_value() {
        for (field, values) in [
            ("status", PRODUCT_STATUSES),
            ("type", PRODUCT_TYPES),
            ("stock_status", STOCK_STATUSES),
            ("orderby", PRODUCT_ORDERBY_VALUES),
        ] {
            for value in values {
                let mut params = ProductListParams::default();
                match field {
                    "status" => params.status = Some((*value).to_string()),
                    "type" => params.product_type = Some((*value).to_string()),
                    "stock_status" => params.stock_status = Some((*value).to_string()),
                    _ => params.paging.orderby = Some((*value).to_string()),
                }
                assert!(
                    params.validate().is_ok(),
                    "expected `{value}` to be a valid `{field}`"
                );
            }
        }
    }

    #[test]
    fn test_validation_rejects_values_outside_allowed_sets() {
        let mut params = ProductListParams {
            status: Some("trashed".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ResourceError::InvalidParameter { field: "status", .. })
        ));

        params = ProductListParams {
            product_type: Some("bundle".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ResourceError::InvalidParameter { field: "type", .. })
        ));

        params = ProductListParams {
            stock_status: Some("sold_out".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ResourceError::InvalidParameter {
                field: "stock_status",
                ..
            })
        ));

        params = ProductListParams::default();
        params.paging.orderby = Some("color".to_string());
        assert!(matches!(
            params.validate(),
            Err(ResourceError::InvalidParameter {
                field: "orderby",
                ..
            })
        ));
    }

    #[test]
    fn test_validation_accepts_empty_and_absent_fields() {
        let params = ProductListParams {
            status: Some(String::new()),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        assert!(ProductListParams::default().validate().is_ok());
    }

    #[test]
    fn test_prepare_serializes_each_set_field_exactly_once() {
        let mut params = ProductListParams {
            search: Some("hoodie".to_string()),
            status: Some("publish".to_string()),
            product_type: Some("simple".to_string()),
            include: vec![12, 33],
            featured: Some(true),
            min_price: Some("5.00".to_string()),
            ..Default::default()
        };

        let pairs = params.prepare().unwrap();

        for (key, value) in [
            ("page", "1"),
            ("per_page", "10"),
            ("search", "hoodie"),
            ("status", "publish"),
            ("type", "simple"),
            ("include", "12,33"),
            ("featured", "true"),
            ("min_price", "5.00"),
        ] {
            let matches: Vec<_> = pairs.iter().filter(|(k, _)| k == key).collect();
            assert_eq!(matches.len(), 1, "expected exactly one `{key}` pair");
            assert_eq!(matches[0].1, value);
        }

        // Unset fields produce no pairs at all.
        for key in ["sku", "slug", "on_sale", "max_price", "exclude", "offset"] {
            assert!(
                !pairs.iter().any(|(k, _)| k == key),
                "expected `{key}` to be omitted"
            );
        }
    }

    #[test]
    fn test_prepare_rejects_invalid_enumerated_value_before_serializing() {
        let mut params = ProductListParams {
            status: Some("bogus".to_string()),
            ..Default::default()
        };
        assert!(params.prepare().is_err());
    }

    #[test]
    fn test_product_path_constants() {
        let find = get_path(Product::PATHS, ResourceOperation::Find, &["id"]);
        assert_eq!(find.unwrap().template, "products/{id}");

        let all = get_path(Product::PATHS, ResourceOperation::All, &[]);
        assert_eq!(all.unwrap().template, "products");

        assert_eq!(Product::NAME, "Product");
    }
}
