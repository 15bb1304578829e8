use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product. Owned and mutated only by the data provider; the
/// browse core treats it as immutable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    /// Integer major currency unit (TL). Fractional prices are not
    /// representable anywhere in the catalog.
    pub price: i64,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_bestseller: bool,
    pub created_at: DateTime<Utc>,
}

/// Read-only category reference data, keyed by slug.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Banner {
    pub id: String,
    pub image: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub order: i32,
}

/// One page of products plus the paging envelope. Transient, recomputed
/// per request, never persisted.
///
/// Invariant: `1 <= page <= total_pages` whenever `total_pages >= 1`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PageResult {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocationSuggestion {
    pub name: String,
}

/// Query parameters for `GET /api/products`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ProductListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category: Option<String>,
    pub bestseller: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// Outcome of a seed call. Seeding is idempotent: a populated catalog is
/// left untouched and reported as-is.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SeedSummary {
    pub message: String,
    pub categories_count: usize,
    pub banners_count: usize,
    pub products_count: usize,
}
