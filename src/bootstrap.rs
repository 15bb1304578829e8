//! Initial catalog load: best-effort seed, then the three root reads in
//! parallel.

use futures::try_join;
use log::warn;

use crate::error::CatalogError;
use crate::models::{Banner, Category, PageResult, ProductListQuery};
use crate::provider::CatalogProvider;
use crate::store::DEFAULT_PER_PAGE;

/// Read-only context fetched once at the root and threaded down to views.
#[derive(Debug, Clone)]
pub struct CatalogContext {
    pub products: PageResult,
    pub categories: Vec<Category>,
    pub banners: Vec<Banner>,
}

/// Seed the provider (errors swallowed: seeding is idempotent and its
/// failure never affects correctness), then issue the first products page,
/// the category list and the banner list as three parallel reads.
pub async fn bootstrap<P: CatalogProvider>(provider: &P) -> Result<CatalogContext, CatalogError> {
    bootstrap_with_per_page(provider, DEFAULT_PER_PAGE).await
}

pub async fn bootstrap_with_per_page<P: CatalogProvider>(
    provider: &P,
    per_page: u32,
) -> Result<CatalogContext, CatalogError> {
    if let Err(err) = provider.seed().await {
        warn!("seed failed, continuing with whatever the catalog holds: {err}");
    }

    let query = ProductListQuery {
        page: Some(1),
        per_page: Some(per_page),
        ..Default::default()
    };
    let (products, categories, banners) = try_join!(
        provider.list_products(&query),
        provider.list_categories(),
        provider.list_banners(),
    )?;

    Ok(CatalogContext { products, categories, banners })
}
