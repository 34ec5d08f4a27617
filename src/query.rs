//! Deterministic filter/sort/paginate pipeline over the product collection.
//!
//! The engine is a pure function: given a snapshot of the collection and a
//! set of list parameters it produces one page of results plus pagination
//! metadata. Filters apply in a fixed order (category, min price, max price,
//! search) before sorting and slicing, so the reported totals always describe
//! the filtered set.

use crate::model::{Category, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default page size when the requested size is missing or out of range.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest accepted page size; anything above falls back to the default.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Parameters for a list query. Deserializes directly from a query string
/// with camelCase keys (`pageNumber`, `minPrice`, ...).
///
/// Out-of-range but well-typed values are coerced, never rejected:
/// `pageNumber` 0 becomes 1, and a `pageSize` outside 1..=100 becomes the
/// default 10 (not the nearest bound).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_price: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
            category: None,
            min_price: None,
            max_price: None,
            sort_by: None,
            search: None,
        }
    }
}

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Recognized sort orders. Anything unrecognized falls back to [`SortKey::Id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    NameDesc,
    Price,
    PriceDesc,
    CreatedAt,
    CreatedAtDesc,
    /// Default order: ascending by id.
    Id,
}

impl SortKey {
    /// Resolve a raw `sortBy` value case-insensitively.
    pub fn parse(raw: Option<&str>) -> SortKey {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("name") => SortKey::Name,
            Some("name_desc") => SortKey::NameDesc,
            Some("price") => SortKey::Price,
            Some("price_desc") => SortKey::PriceDesc,
            Some("createdat") => SortKey::CreatedAt,
            Some("createdat_desc") => SortKey::CreatedAtDesc,
            _ => SortKey::Id,
        }
    }
}

/// One page of results plus the metadata a caller needs to render
/// pagination controls. Serializes with camelCase keys.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Effective (coerced) page number.
    pub page_number: u32,
    /// Effective (coerced) page size.
    pub page_size: u32,
    /// Count of records after filtering, before slicing.
    pub total_records: usize,
    /// `ceil(total_records / page_size)`; 0 when the filtered set is empty.
    pub total_pages: usize,
}

/// Run the full pipeline over a snapshot of the collection.
///
/// Out-of-range page numbers yield an empty page, not an error. The sort is
/// stable, so ties preserve the collection's original relative order.
pub fn execute(products: &[Product], params: &ListParams) -> Page<Product> {
    let page_number = params.page_number.max(1);
    let page_size = if (1..=MAX_PAGE_SIZE).contains(&params.page_size) {
        params.page_size
    } else {
        DEFAULT_PAGE_SIZE
    };

    let category = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(Category::parse);
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| params.min_price.is_none_or(|min| p.price >= min))
        .filter(|p| params.max_price.is_none_or(|max| p.price <= max))
        .filter(|p| {
            search.as_deref().is_none_or(|needle| {
                p.name.to_lowercase().contains(needle)
                    || p.description.to_lowercase().contains(needle)
            })
        })
        .cloned()
        .collect();

    // Stable sort: equal keys keep their pre-sort (insertion) order.
    match SortKey::parse(params.sort_by.as_deref()) {
        SortKey::Name => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => filtered.sort_by(|a, b| b.name.cmp(&a.name)),
        SortKey::Price => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::CreatedAt => filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::CreatedAtDesc => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Id => filtered.sort_by(|a, b| a.id.cmp(&b.id)),
    }

    let total_records = filtered.len();
    let total_pages = total_records.div_ceil(page_size as usize);

    let data: Vec<Product> = filtered
        .into_iter()
        .skip((page_number as usize - 1) * page_size as usize)
        .take(page_size as usize)
        .collect();

    Page {
        data,
        page_number,
        page_size,
        total_records,
        total_pages,
    }
}
