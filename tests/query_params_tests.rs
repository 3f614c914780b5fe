//! Integration tests for the query parameter pipeline.
//!
//! These tests verify the three contracts every list request goes
//! through, via the public API: allowed-set validation, pagination
//! normalization (including idempotence), and deterministic
//! serialization with omission of absent fields.

use chrono::NaiveDate;

use woocommerce_api::resources::{ProductListParams, VariationListParams};
use woocommerce_api::rest::resources::v3::{
    PRODUCT_ORDERBY_VALUES, PRODUCT_STATUSES, PRODUCT_TYPES, STOCK_STATUSES,
};
use woocommerce_api::{ListParams, Paging, ResourceError};

// ============================================================================
// Validation: allowed sets
// ============================================================================

#[test]
fn test_every_documented_value_is_accepted() {
    for status in PRODUCT_STATUSES {
        let params = ProductListParams {
            status: Some((*status).to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_ok(), "status `{status}` rejected");
    }

    for product_type in PRODUCT_TYPES {
        let params = ProductListParams {
            product_type: Some((*product_type).to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_ok(), "type `{product_type}` rejected");
    }

    for stock_status in STOCK_STATUSES {
        let params = ProductListParams {
            stock_status: Some((*stock_status).to_string()),
            ..Default::default()
        };
        assert!(
            params.validate().is_ok(),
            "stock_status `{stock_status}` rejected"
        );
    }

    for orderby in PRODUCT_ORDERBY_VALUES {
        let mut params = ProductListParams::default();
        params.paging.orderby = Some((*orderby).to_string());
        assert!(params.validate().is_ok(), "orderby `{orderby}` rejected");
    }
}

#[test]
fn test_values_outside_the_set_are_rejected_with_field_name() {
    let cases: Vec<(&str, ProductListParams)> = vec![
        (
            "status",
            ProductListParams {
                status: Some("archived".to_string()),
                ..Default::default()
            },
        ),
        (
            "type",
            ProductListParams {
                product_type: Some("subscription".to_string()),
                ..Default::default()
            },
        ),
        (
            "stock_status",
            ProductListParams {
                stock_status: Some("low".to_string()),
                ..Default::default()
            },
        ),
    ];

    for (expected_field, params) in cases {
        match params.validate() {
            Err(ResourceError::InvalidParameter { field, .. }) => {
                assert_eq!(field, expected_field);
            }
            other => panic!("expected InvalidParameter for {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn test_error_message_names_value_and_allowed_set() {
    let params = ProductListParams {
        status: Some("live".to_string()),
        ..Default::default()
    };
    let message = params.validate().unwrap_err().to_string();
    assert!(message.contains("status"));
    assert!(message.contains("live"));
    assert!(message.contains("publish"));
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_prepare_normalizes_paging_idempotently() {
    let mut params = ProductListParams::default();
    params.paging.page = Some(0);
    params.paging.per_page = Some(250);

    let first = params.prepare().unwrap();
    assert_eq!(params.paging.page, Some(1));
    assert_eq!(params.paging.per_page, Some(100));

    // Running the pipeline again over the normalized record changes nothing.
    let second = params.prepare().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_normalization_applies_to_variations_too() {
    let mut params = VariationListParams::default();
    let pairs = params.prepare().unwrap();

    assert!(pairs.contains(&("page".to_string(), "1".to_string())));
    assert!(pairs.contains(&("per_page".to_string(), "10".to_string())));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_default_params_serialize_to_paging_only() {
    let mut params = ProductListParams::default();
    let pairs = params.prepare().unwrap();

    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["page", "per_page"]);
}

#[test]
fn test_full_params_serialize_with_wire_names() {
    let after = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let mut params = ProductListParams {
        search: Some("hoodie".to_string()),
        after: Some(after),
        exclude: vec![1, 2],
        slug: Some("blue-hoodie".to_string()),
        status: Some("publish".to_string()),
        product_type: Some("variable".to_string()),
        sku: Some("HOOD-1".to_string()),
        featured: Some(false),
        category: Some("9".to_string()),
        tax_class: Some("reduced-rate".to_string()),
        on_sale: Some(true),
        min_price: Some("10".to_string()),
        max_price: Some("40".to_string()),
        stock_status: Some("instock".to_string()),
        ..Default::default()
    };
    params.paging = Paging {
        page: Some(3),
        per_page: Some(20),
        offset: None,
        order: Some("desc".to_string()),
        orderby: Some("price".to_string()),
    };

    let pairs = params.prepare().unwrap();

    let expect = [
        ("page", "3"),
        ("per_page", "20"),
        ("order", "desc"),
        ("orderby", "price"),
        ("search", "hoodie"),
        ("after", "2024-01-01T00:00:00"),
        ("exclude", "1,2"),
        ("slug", "blue-hoodie"),
        ("status", "publish"),
        ("type", "variable"),
        ("sku", "HOOD-1"),
        ("featured", "false"),
        ("category", "9"),
        ("tax_class", "reduced-rate"),
        ("on_sale", "true"),
        ("min_price", "10"),
        ("max_price", "40"),
        ("stock_status", "instock"),
    ];

    assert_eq!(pairs.len(), expect.len());
    for (key, value) in expect {
        assert!(
            pairs.contains(&(key.to_string(), value.to_string())),
            "missing pair {key}={value}"
        );
    }
}

#[test]
fn test_serialization_is_deterministic() {
    let build = || {
        let mut params = ProductListParams {
            search: Some("shirt".to_string()),
            include: vec![5, 6],
            status: Some("publish".to_string()),
            ..Default::default()
        };
        params.prepare().unwrap()
    };

    assert_eq!(build(), build());
}
