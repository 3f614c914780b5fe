//! Query parameter records: validation, normalization, serialization.
//!
//! Every collection endpoint accepts a record of optional filter fields
//! plus a shared pagination block. This module provides the pieces those
//! records are built from:
//!
//! - [`Paging`]: the shared `page` / `per_page` / `offset` / `order` /
//!   `orderby` block, with normalization ([`Paging::tidy`]) that fills
//!   pagination defaults before serialization
//! - [`QueryBuilder`]: an ordered, deterministic query-pair builder that
//!   omits absent and empty values entirely
//! - [`ListParams`]: the trait collection parameter records implement,
//!   wiring validation, normalization, and serialization together
//! - [`ensure_one_of`]: the allowed-set check used by enumerated fields
//!
//! Presence is tracked per field with `Option`; a field that was never
//! set produces no query pair, and there is no ambiguity between "not
//! set" and "set to the type's zero value".

use chrono::NaiveDateTime;

use crate::rest::errors::ResourceError;

/// First page of a collection.
pub const DEFAULT_PAGE: u32 = 1;

/// Default number of items per page, matching the upstream API default.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Maximum number of items per page accepted upstream.
pub const MAX_PER_PAGE: u32 = 100;

/// Allowed values for the `order` direction field.
pub const ORDER_DIRECTIONS: &[&str] = &["asc", "desc"];

/// Date format the API accepts for date-bound filters (site-local,
/// zone-less ISO 8601).
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Checks an enumerated field against its fixed allowed set.
///
/// Absent and empty values are always valid; only a non-empty value
/// outside the set fails.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParameter`] naming the field, the
/// offending value, and the allowed set.
pub fn ensure_one_of(
    field: &'static str,
    value: Option<&str>,
    allowed: &'static [&'static str],
) -> Result<(), ResourceError> {
    match value {
        Some(v) if !v.is_empty() && !allowed.contains(&v) => Err(ResourceError::InvalidParameter {
            field,
            value: v.to_string(),
            allowed,
        }),
        _ => Ok(()),
    }
}

/// Shared pagination block for collection endpoints.
///
/// Every field is optional. [`Paging::tidy`] fills `page` and `per_page`
/// with bounded defaults so that every serialized list request pins its
/// page; `offset`, `order`, and `orderby` stay as provided.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::Paging;
///
/// let mut paging = Paging {
///     per_page: Some(500),
///     ..Default::default()
/// };
/// paging.tidy();
///
/// assert_eq!(paging.page, Some(1));
/// assert_eq!(paging.per_page, Some(100)); // clamped to the upstream maximum
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paging {
    /// Page of the collection to fetch (1-based).
    pub page: Option<u32>,
    /// Number of items per page.
    pub per_page: Option<u32>,
    /// Offset at which to start the result set.
    pub offset: Option<u32>,
    /// Sort direction: `asc` or `desc`.
    pub order: Option<String>,
    /// Field to sort by; the allowed set is resource-specific.
    pub orderby: Option<String>,
}

impl Paging {
    /// Normalizes the pagination fields in place.
    ///
    /// Fills `page` (minimum 1) and clamps `per_page` into
    /// `1..=`[`MAX_PER_PAGE`]. Idempotent: applying it twice yields the
    /// same values as applying it once.
    pub fn tidy(&mut self) {
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);

        self.page = Some(page);
        self.per_page = Some(per_page);
    }

    /// Validates the enumerated `order` direction.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] when `order` holds a
    /// value other than `asc` or `desc`.
    pub fn validate(&self) -> Result<(), ResourceError> {
        ensure_one_of("order", self.order.as_deref(), ORDER_DIRECTIONS)
    }

    /// Returns the page this block addresses, defaulting to the first.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Appends the pagination fields to a query.
    pub fn append(&self, query: &mut QueryBuilder) {
        query.push_u32("page", self.page);
        query.push_u32("per_page", self.per_page);
        query.push_u32("offset", self.offset);
        query.push_str("order", self.order.as_deref());
        query.push_str("orderby", self.orderby.as_deref());
    }
}

/// An ordered query-string builder.
///
/// Pairs are emitted in insertion order, making serialization a pure,
/// deterministic function of the parameter record. Absent (`None`) and
/// empty values are omitted entirely; list values are comma-joined.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::QueryBuilder;
///
/// let mut query = QueryBuilder::new();
/// query.push_str("search", Some("shirt"));
/// query.push_str("sku", None);                // omitted
/// query.push_ids("include", &[12, 33]);
///
/// assert_eq!(
///     query.into_pairs(),
///     vec![
///         ("search".to_string(), "shirt".to_string()),
///         ("include".to_string(), "12,33".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a string field, omitting `None` and empty values.
    pub fn push_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.is_empty() {
                self.pairs.push((key.to_string(), v.to_string()));
            }
        }
    }

    /// Appends an integer field, omitting `None`.
    pub fn push_u32(&mut self, key: &str, value: Option<u32>) {
        if let Some(v) = value {
            self.pairs.push((key.to_string(), v.to_string()));
        }
    }

    /// Appends a boolean field, omitting `None`.
    ///
    /// `Some(false)` is serialized: a filter explicitly set to `false`
    /// is meaningful upstream (e.g., `on_sale=false`).
    pub fn push_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.pairs.push((key.to_string(), v.to_string()));
        }
    }

    /// Appends a date-bound field, omitting `None`.
    pub fn push_date(&mut self, key: &str, value: Option<&NaiveDateTime>) {
        if let Some(v) = value {
            self.pairs
                .push((key.to_string(), v.format(DATE_FORMAT).to_string()));
        }
    }

    /// Appends an ID-list field as comma-joined values, omitting empty lists.
    pub fn push_ids(&mut self, key: &str, ids: &[u64]) {
        if !ids.is_empty() {
            let joined = ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.push((key.to_string(), joined));
        }
    }

    /// Returns the number of pairs collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pairs have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consumes the builder, returning the ordered pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

/// Collection query parameter records.
///
/// Implementors hold the resource-specific filter fields plus a shared
/// [`Paging`] block. The provided [`ListParams::prepare`] runs the full
/// pipeline a list request needs: validate the enumerated fields, tidy
/// the pagination block, and serialize to ordered query pairs.
pub trait ListParams {
    /// Returns the shared pagination block.
    fn paging(&self) -> &Paging;

    /// Returns the shared pagination block mutably.
    fn paging_mut(&mut self) -> &mut Paging;

    /// Checks enumerated fields against their fixed allowed sets.
    ///
    /// The default checks only the shared `order` direction; resources
    /// with their own enumerated fields extend this.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] for the first field
    /// holding a value outside its allowed set.
    fn validate(&self) -> Result<(), ResourceError> {
        self.paging().validate()
    }

    /// Appends the resource-specific filter fields to a query.
    fn append_filters(&self, query: &mut QueryBuilder);

    /// Validates, normalizes, and serializes this record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] when validation
    /// fails; no normalization or serialization happens in that case.
    fn prepare(&mut self) -> Result<Vec<(String, String)>, ResourceError> {
        self.validate()?;
        self.paging_mut().tidy();

        let mut query = QueryBuilder::new();
        self.paging().append(&mut query);
        self.append_filters(&mut query);
        Ok(query.into_pairs())
    }
}
