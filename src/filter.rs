//! Route-level category filtering.

/// Sentinel slug meaning "all products" (`/kategori/tumu` in the routes).
pub const ALL_PRODUCTS_SLUG: &str = "tumu";

/// Map a route slug to a provider filter parameter.
///
/// The sentinel slug clears the filter; every other slug, including ones
/// naming no known category, passes through verbatim. The server decides
/// whether an unknown slug means zero results; the view renders an explicit
/// empty state in that case.
pub fn category_filter(slug: &str) -> Option<String> {
    if slug == ALL_PRODUCTS_SLUG {
        None
    } else {
        Some(slug.to_string())
    }
}
