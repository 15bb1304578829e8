use async_trait::async_trait;

use crate::error::CatalogError;
use crate::models::{
    Banner, Category, LocationSuggestion, PageResult, Product, ProductListQuery, SeedSummary,
};

/// The catalog data provider the browse core talks to.
///
/// The core assumes nothing about caching, ordering or consistency beyond
/// "the most recent successful response for a given logical request
/// supersedes prior state for that same request". Implemented in-process by
/// [`crate::store::CatalogStore`] and by mocks in tests.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn list_products(&self, query: &ProductListQuery) -> Result<PageResult, CatalogError>;

    async fn get_product(&self, id: &str) -> Result<Product, CatalogError>;

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError>;

    async fn list_banners(&self) -> Result<Vec<Banner>, CatalogError>;

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError>;

    async fn search_locations(&self, query: &str)
        -> Result<Vec<LocationSuggestion>, CatalogError>;

    /// Idempotent bootstrap. Callers may treat failures as ignorable.
    async fn seed(&self) -> Result<SeedSummary, CatalogError>;
}
