use std::sync::RwLock;

use async_trait::async_trait;
use log::info;

use crate::error::CatalogError;
use crate::models::{
    Banner, Category, LocationSuggestion, PageResult, Product, ProductListQuery, SeedSummary,
};
use crate::provider::CatalogProvider;
use crate::seed;

pub const DEFAULT_PER_PAGE: u32 = 12;
pub const MAX_PER_PAGE: u32 = 100;
const SEARCH_LIMIT: usize = 20;
const LOCATION_LIMIT: usize = 10;

#[derive(Debug, Default)]
struct CatalogData {
    products: Vec<Product>,
    categories: Vec<Category>,
    banners: Vec<Banner>,
    locations: Vec<String>,
}

/// In-memory catalog. All reads and the idempotent seed go through one
/// `RwLock`; no lock is ever held across an await point.
#[derive(Debug, Default)]
pub struct CatalogStore {
    inner: RwLock<CatalogData>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with the seed catalog already installed.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.seed_catalog();
        store
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, CatalogData> {
        // Accessors never panic while holding the lock; if one ever does,
        // the catalog data itself is still consistent, so keep serving it.
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn seed_catalog(&self) -> SeedSummary {
        let mut data = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !data.products.is_empty() {
            return SeedSummary {
                message: "Veritabanı zaten dolu".to_string(),
                categories_count: data.categories.len(),
                banners_count: data.banners.len(),
                products_count: data.products.len(),
            };
        }

        data.categories = seed::seed_categories();
        data.banners = seed::seed_banners();
        data.products = seed::seed_products();
        data.locations = seed::seed_locations();
        info!(
            "catalog seeded: {} categories, {} banners, {} products",
            data.categories.len(),
            data.banners.len(),
            data.products.len()
        );

        SeedSummary {
            message: "Veritabanı başarıyla dolduruldu".to_string(),
            categories_count: data.categories.len(),
            banners_count: data.banners.len(),
            products_count: data.products.len(),
        }
    }

    /// Filter, then page. Out-of-range pages are clamped into
    /// `[1, max(total_pages, 1)]` so the page invariant holds even for an
    /// empty result set; the caller never has to fabricate data.
    pub fn page_products(&self, query: &ProductListQuery) -> PageResult {
        let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
        let data = self.read();

        let filtered: Vec<&Product> = data
            .products
            .iter()
            .filter(|p| query.category.as_deref().map_or(true, |slug| p.category == slug))
            .filter(|p| query.bestseller.map_or(true, |flag| p.is_bestseller == flag))
            .collect();

        let total = filtered.len() as u64;
        let total_pages = (total.div_ceil(u64::from(per_page))) as u32;
        let page = query.page.unwrap_or(1).clamp(1, total_pages.max(1));
        let start = ((page - 1) * per_page) as usize;

        let products = filtered
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        PageResult { products, total, page, total_pages }
    }

    pub fn product_by_id(&self, id: &str) -> Option<Product> {
        self.read().products.iter().find(|p| p.id == id).cloned()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.read().categories.clone()
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<Category> {
        self.read().categories.iter().find(|c| c.slug == slug).cloned()
    }

    pub fn banners(&self) -> Vec<Banner> {
        let mut banners = self.read().banners.clone();
        banners.sort_by_key(|b| b.order);
        banners
    }

    /// Case-insensitive substring match over title and description.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = fold_for_match(query);
        self.read()
            .products
            .iter()
            .filter(|p| {
                fold_for_match(&p.title).contains(&needle)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| fold_for_match(d).contains(&needle))
            })
            .take(SEARCH_LIMIT)
            .cloned()
            .collect()
    }

    /// Delivery-location autocomplete. Queries below two characters match
    /// nothing rather than erroring; autocomplete callers fire per keystroke.
    pub fn locations(&self, query: &str) -> Vec<LocationSuggestion> {
        let needle = fold_for_match(query.trim());
        if needle.chars().count() < 2 {
            return Vec::new();
        }
        self.read()
            .locations
            .iter()
            .filter(|name| fold_for_match(name).contains(&needle))
            .take(LOCATION_LIMIT)
            .map(|name| LocationSuggestion { name: name.clone() })
            .collect()
    }
}

/// Lowercase for substring matching. `to_lowercase` turns the Turkish
/// dotted 'İ' into `i` plus a combining dot (U+0307), which an ASCII `i`
/// in the query would never match; strip the combining dot so "ikili"
/// finds "İkili" and "ist" finds "İstanbul".
fn fold_for_match(text: &str) -> String {
    text.to_lowercase().replace('\u{307}', "")
}

#[async_trait]
impl CatalogProvider for CatalogStore {
    async fn list_products(&self, query: &ProductListQuery) -> Result<PageResult, CatalogError> {
        Ok(self.page_products(query))
    }

    async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        self.product_by_id(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories())
    }

    async fn list_banners(&self) -> Result<Vec<Banner>, CatalogError> {
        Ok(self.banners())
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        Ok(self.search(query))
    }

    async fn search_locations(
        &self,
        query: &str,
    ) -> Result<Vec<LocationSuggestion>, CatalogError> {
        Ok(self.locations(query))
    }

    async fn seed(&self) -> Result<SeedSummary, CatalogError> {
        Ok(self.seed_catalog())
    }
}
