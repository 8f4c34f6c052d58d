use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::brands::handlers;
use crate::features::brands::services::BrandService;

/// Create routes for the brands feature
pub fn routes(service: Arc<BrandService>) -> Router {
    Router::new()
        .route("/api/brands", get(handlers::list_brands))
        .with_state(service)
}
