//! Embedded record types shared by the v3 resources.
//!
//! These structs mirror the nested objects the API embeds in product and
//! variation responses. Every field is optional: the upstream schema
//! omits or nulls fields freely depending on product type and store
//! configuration.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Package dimensions of a product or variation.
///
/// The API reports dimensions as strings in the store's configured unit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// Product length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,

    /// Product width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// Product height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

/// An image attached to a product or variation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    /// The attachment ID of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// When the image was created (site-local time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<NaiveDateTime>,

    /// When the image was created (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the image was last modified (site-local time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<NaiveDateTime>,

    /// When the image was last modified (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Image name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Image alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A category reference embedded in a product response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCategory {
    /// Category ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Category slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// A tag reference embedded in a product response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductTag {
    /// Tag ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Tag name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tag slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// An attribute of a product (e.g., Size with options Small/Medium).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttribute {
    /// Attribute ID (0 for custom, non-taxonomy attributes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Attribute position in the attribute list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Whether the attribute is visible on the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Whether the attribute is used for variations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<bool>,

    /// The attribute's terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// A default variation attribute selection on a variable product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultAttribute {
    /// Attribute ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Selected attribute term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

/// An attribute selection on a variation (one term per attribute).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VariationAttribute {
    /// Attribute ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Selected attribute term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

/// A downloadable file attached to a product or variation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductDownload {
    /// File ID (a UUID string upstream).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// File name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// File URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// A meta data entry on a product or variation.
///
/// Values are free-form: plugins store strings, numbers, arrays, and
/// objects here, so the value stays a raw JSON value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetaData {
    /// Meta ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Meta key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Meta value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_deserializes_with_dates() {
        let json = r#"{
            "id": 792,
            "date_created": "2017-03-23T14:01:13",
            "date_created_gmt": "2017-03-23T20:01:13",
            "date_modified": "2017-03-23T14:01:13",
            "date_modified_gmt": "2017-03-23T20:01:13",
            "src": "https://example.com/wp-content/uploads/2017/03/T_2_front.jpg",
            "name": "",
            "alt": ""
        }"#;

        let image: ProductImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.id, Some(792));
        assert!(image.date_created.is_some());
        assert_eq!(image.name, Some(String::new()));
    }

    #[test]
    fn test_dimensions_default_is_all_none() {
        let dimensions = Dimensions::default();
        assert!(dimensions.length.is_none());
        assert!(dimensions.width.is_none());
        assert!(dimensions.height.is_none());
    }

    #[test]
    fn test_meta_data_value_keeps_arbitrary_json() {
        let json = r#"{"id": 11, "key": "_custom", "value": {"nested": [1, 2]}}"#;
        let meta: MetaData = serde_json::from_str(json).unwrap();
        assert_eq!(meta.key, Some("_custom".to_string()));
        assert_eq!(
            meta.value,
            Some(serde_json::json!({"nested": [1, 2]}))
        );
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let category = ProductCategory {
            id: Some(9),
            name: None,
            slug: None,
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json, serde_json::json!({"id": 9}));
    }
}
