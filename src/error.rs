use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failure taxonomy for catalog operations.
///
/// Every variant is terminal for the triggering action: callers surface the
/// error (or keep their prior state) and wait for the user to re-trigger.
/// There are no retries anywhere in the system.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The data provider could not be reached or failed internally.
    #[error("provider error: {0}")]
    Provider(String),
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::ProductNotFound(_) | CatalogError::CategoryNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            CatalogError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            CatalogError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}
