//! Catalog service and browse core for the ÇiçekZamanı flower storefront.
//!
//! The library holds the reproducible core of the storefront: the data
//! model, an in-memory catalog store behind the [`provider::CatalogProvider`]
//! interface, the paginated browsing controller with its page-window
//! algorithm, the category filter, the debounced search box with
//! stale-response suppression, and the parallel bootstrap helper. The
//! binary wires the store into an actix-web server exposing the `/api`
//! surface the storefront consumes.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod provider;
pub mod search;
pub mod seed;
pub mod store;
