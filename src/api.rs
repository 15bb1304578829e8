//! HTTP surface of the catalog service. Paths are part of the storefront
//! contract and must not change.

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::error::CatalogError;
use crate::models::{ProductListQuery, SearchQuery};
use crate::search::normalize_query;
use crate::store::CatalogStore;

pub struct AppState {
    pub store: CatalogStore,
}

async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "ÇiçekZamanı API" }))
}

async fn seed(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.seed_catalog())
}

async fn list_products(
    data: web::Data<AppState>,
    query: web::Query<ProductListQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(data.store.page_products(&query))
}

async fn get_product(
    data: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    match data.store.product_by_id(&id) {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Err(CatalogError::ProductNotFound(id.into_inner())),
    }
}

async fn list_categories(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.categories())
}

async fn get_category(
    data: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    match data.store.category_by_slug(&slug) {
        Some(category) => Ok(HttpResponse::Ok().json(category)),
        None => Err(CatalogError::CategoryNotFound(slug.into_inner())),
    }
}

async fn list_banners(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.banners())
}

async fn search(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, CatalogError> {
    match normalize_query(&query.q) {
        Some(q) => Ok(HttpResponse::Ok().json(data.store.search(&q))),
        None => Err(CatalogError::InvalidQuery(
            "q must be at least 2 characters".to_string(),
        )),
    }
}

async fn search_locations(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(json!({ "results": data.store.locations(&query.q) }))
}

/// Route table, shared between the binary and the test harness.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/", web::get().to(index))
        .route("/api/seed", web::post().to(seed))
        .route("/api/products", web::get().to(list_products))
        .route("/api/products/{id}", web::get().to(get_product))
        .route("/api/categories", web::get().to(list_categories))
        .route("/api/categories/{slug}", web::get().to(get_category))
        .route("/api/banners", web::get().to(list_banners))
        .route("/api/search", web::get().to(search))
        .route("/api/locations/search", web::get().to(search_locations));
}
