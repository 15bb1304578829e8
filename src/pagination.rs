//! Paginated catalog browsing: the page-window rendering algorithm and the
//! controller that turns page/filter changes into provider fetches.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::CatalogError;
use crate::models::{PageResult, ProductListQuery};
use crate::provider::CatalogProvider;
use crate::store::DEFAULT_PER_PAGE;

/// Radius of the page window around the current page.
const WINDOW_RADIUS: u32 = 2;

/// One pagination control: a concrete page number or a collapsed gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

// Page controls serialize the way views render them: numbers as numbers,
// collapsed gaps as a "..." marker.
impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u32(*n),
            PageItem::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => write!(f, "..."),
        }
    }
}

/// Bounded set of page controls for `total_pages` pages with `current`
/// active: page 1 and the last page always show, plus a symmetric window of
/// radius 2 around `current`; every gap collapses to a single ellipsis.
pub fn page_window(total_pages: u32, current: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);

    let mut pages = vec![1];
    let lo = current.saturating_sub(WINDOW_RADIUS).max(2);
    let hi = (current + WINDOW_RADIUS).min(total_pages.saturating_sub(1));
    pages.extend(lo..=hi);
    if total_pages > 1 {
        pages.push(total_pages);
    }

    let mut window = Vec::with_capacity(pages.len() + 2);
    let mut prev = 0;
    for page in pages {
        if prev != 0 && page > prev + 1 {
            window.push(PageItem::Ellipsis);
        }
        window.push(PageItem::Page(page));
        prev = page;
    }
    window
}

/// Where the view should scroll after a successful page load. Not a
/// correctness requirement, but reproducible: the root catalog scrolls to
/// the top of the page, filtered views to the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    PageTop,
    Listing,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The fetch succeeded and the displayed page was replaced.
    Applied { scroll: ScrollTarget },
    /// The request was a no-op (out-of-range page); nothing was fetched.
    Ignored,
}

/// Drives paginated browsing against a [`CatalogProvider`].
///
/// Each navigation issues exactly one fetch. Success replaces the current
/// in-memory page; failure leaves prior state untouched and surfaces the
/// error. Failures are terminal for that navigation attempt, with no retry.
pub struct PaginationController<P> {
    provider: Arc<P>,
    per_page: u32,
    category: Option<String>,
    bestseller_only: bool,
    current: Option<PageResult>,
}

impl<P: CatalogProvider> PaginationController<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self::with_per_page(provider, DEFAULT_PER_PAGE)
    }

    pub fn with_per_page(provider: Arc<P>, per_page: u32) -> Self {
        Self {
            provider,
            per_page,
            category: None,
            bestseller_only: false,
            current: None,
        }
    }

    /// The most recently loaded page, if any navigation has succeeded yet.
    pub fn current(&self) -> Option<&PageResult> {
        self.current.as_ref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Page controls for the current state; empty before the first load.
    pub fn window(&self) -> Vec<PageItem> {
        self.current
            .as_ref()
            .map(|page| page_window(page.total_pages, page.page))
            .unwrap_or_default()
    }

    fn scroll_target(&self) -> ScrollTarget {
        if self.category.is_none() && !self.bestseller_only {
            ScrollTarget::PageTop
        } else {
            ScrollTarget::Listing
        }
    }

    async fn fetch(&mut self, page: u32) -> Result<Navigation, CatalogError> {
        let query = ProductListQuery {
            page: Some(page),
            per_page: Some(self.per_page),
            category: self.category.clone(),
            bestseller: self.bestseller_only.then_some(true),
        };
        let result = self.provider.list_products(&query).await?;
        self.current = Some(result);
        Ok(Navigation::Applied { scroll: self.scroll_target() })
    }

    /// Navigate to `page`. Requests for page 0, or past the known last
    /// page, are no-ops.
    pub async fn go_to_page(&mut self, page: u32) -> Result<Navigation, CatalogError> {
        if page < 1 {
            return Ok(Navigation::Ignored);
        }
        if let Some(current) = &self.current {
            if page > current.total_pages && current.total_pages >= 1 {
                return Ok(Navigation::Ignored);
            }
        }
        self.fetch(page).await
    }

    /// Change the active category filter. Always resets to page 1.
    pub async fn set_category(
        &mut self,
        category: Option<String>,
    ) -> Result<Navigation, CatalogError> {
        self.category = category;
        self.fetch(1).await
    }

    /// Restrict the listing to bestsellers (or lift the restriction).
    /// Resets to page 1 like any filter change.
    pub async fn set_bestseller_only(&mut self, on: bool) -> Result<Navigation, CatalogError> {
        self.bestseller_only = on;
        self.fetch(1).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::models::{Banner, Category, LocationSuggestion, Product, SeedSummary};
    use crate::store::CatalogStore;

    fn pages(window: &[PageItem]) -> Vec<String> {
        window.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn window_matches_reference_cases() {
        assert_eq!(pages(&page_window(10, 1)), ["1", "2", "3", "...", "10"]);
        assert_eq!(
            pages(&page_window(10, 5)),
            ["1", "...", "3", "4", "5", "6", "7", "...", "10"]
        );
        assert_eq!(pages(&page_window(3, 2)), ["1", "2", "3"]);
        assert_eq!(pages(&page_window(1, 1)), ["1"]);
        assert_eq!(pages(&page_window(2, 2)), ["1", "2"]);
    }

    #[test]
    fn window_is_strictly_increasing_with_endpoints_for_all_inputs() {
        for total in 1..=40u32 {
            for current in 1..=total {
                let window = page_window(total, current);
                let numbers: Vec<u32> = window
                    .iter()
                    .filter_map(|item| match item {
                        PageItem::Page(n) => Some(*n),
                        PageItem::Ellipsis => None,
                    })
                    .collect();
                assert_eq!(numbers.first(), Some(&1), "T={total} c={current}");
                assert_eq!(numbers.last(), Some(&total), "T={total} c={current}");
                assert!(
                    numbers.windows(2).all(|w| w[0] < w[1]),
                    "not increasing for T={total} c={current}"
                );
                assert!(numbers.contains(&current));
                // Ellipses appear exactly where consecutive entries gap.
                for pair in window.windows(2) {
                    if let [PageItem::Page(a), PageItem::Page(b)] = pair {
                        assert_eq!(*b, *a + 1, "uncollapsed gap for T={total} c={current}");
                    }
                }
            }
        }
    }

    /// Provider that counts calls and fails on demand.
    struct FlakyProvider {
        store: CatalogStore,
        calls: AtomicU32,
        fail: std::sync::atomic::AtomicBool,
    }

    impl FlakyProvider {
        fn new() -> Self {
            Self {
                store: CatalogStore::seeded(),
                calls: AtomicU32::new(0),
                fail: std::sync::atomic::AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl CatalogProvider for FlakyProvider {
        async fn list_products(
            &self,
            query: &ProductListQuery,
        ) -> Result<PageResult, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(CatalogError::Provider("connection reset".into()));
            }
            self.store.list_products(query).await
        }

        async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
            self.store.get_product(id).await
        }

        async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
            self.store.list_categories().await
        }

        async fn list_banners(&self) -> Result<Vec<Banner>, CatalogError> {
            self.store.list_banners().await
        }

        async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
            self.store.search_products(query).await
        }

        async fn search_locations(
            &self,
            query: &str,
        ) -> Result<Vec<LocationSuggestion>, CatalogError> {
            self.store.search_locations(query).await
        }

        async fn seed(&self) -> Result<SeedSummary, CatalogError> {
            self.store.seed().await
        }
    }

    #[tokio::test]
    async fn out_of_range_requests_do_not_fetch_or_alter_state() {
        let provider = Arc::new(FlakyProvider::new());
        let mut controller = PaginationController::with_per_page(provider.clone(), 5);
        controller.go_to_page(1).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        let shown_before = controller.current().unwrap().products.clone();

        assert_eq!(controller.go_to_page(0).await.unwrap(), Navigation::Ignored);
        assert_eq!(controller.go_to_page(99).await.unwrap(), Navigation::Ignored);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.current().unwrap().products, shown_before);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_prior_page_untouched() {
        let provider = Arc::new(FlakyProvider::new());
        let mut controller = PaginationController::with_per_page(provider.clone(), 5);
        controller.go_to_page(1).await.unwrap();

        provider.fail.store(true, Ordering::SeqCst);
        let err = controller.go_to_page(2).await.unwrap_err();
        assert!(matches!(err, CatalogError::Provider(_)));
        assert_eq!(controller.current().unwrap().page, 1);
    }

    #[tokio::test]
    async fn category_change_resets_to_page_one() {
        let provider = Arc::new(FlakyProvider::new());
        let mut controller = PaginationController::with_per_page(provider, 2);
        controller.set_category(Some("gul".into())).await.unwrap();
        controller.go_to_page(3).await.unwrap();
        assert_eq!(controller.current().unwrap().page, 3);

        controller.set_category(Some("orkide".into())).await.unwrap();
        let current = controller.current().unwrap();
        assert_eq!(current.page, 1);
        assert!(current.products.iter().all(|p| p.category == "orkide"));
    }

    #[tokio::test]
    async fn scroll_target_depends_on_view_kind() {
        let provider = Arc::new(FlakyProvider::new());
        let mut controller = PaginationController::new(provider);
        assert_eq!(
            controller.go_to_page(1).await.unwrap(),
            Navigation::Applied { scroll: ScrollTarget::PageTop }
        );
        assert_eq!(
            controller
                .set_category(crate::filter::category_filter("gul"))
                .await
                .unwrap(),
            Navigation::Applied { scroll: ScrollTarget::Listing }
        );
        // The "all products" sentinel puts the view back on the root catalog.
        assert_eq!(
            controller
                .set_category(crate::filter::category_filter("tumu"))
                .await
                .unwrap(),
            Navigation::Applied { scroll: ScrollTarget::PageTop }
        );
    }
}
