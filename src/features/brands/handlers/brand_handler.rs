use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::brands::dtos::{BrandResponseDto, ListBrandsQuery};
use crate::features::brands::services::BrandService;
use crate::shared::constants::{STATUS_ACTIVE, TIMEOUT_GET_BRANDS};
use crate::shared::types::{ApiResponse, Meta};

/// List brands by status
#[utoipa::path(
    get,
    path = "/api/brands",
    params(ListBrandsQuery),
    responses(
        (status = 200, description = "List of brands", body = ApiResponse<Vec<BrandResponseDto>>),
        (status = 400, description = "Invalid status filter"),
        (status = 404, description = "No brands found")
    ),
    tag = "brands"
)]
pub async fn list_brands(
    State(service): State<Arc<BrandService>>,
    Query(query): Query<ListBrandsQuery>,
) -> Result<Json<ApiResponse<Vec<BrandResponseDto>>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let status = query
        .status
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| STATUS_ACTIVE.to_string());

    let (brands, total) = tokio::time::timeout(TIMEOUT_GET_BRANDS, service.list(&status))
        .await
        .map_err(|_| AppError::Canceled("brand listing timed out".to_string()))??;

    Ok(Json(ApiResponse::success(
        Some(brands),
        None,
        Some(Meta { total }),
    )))
}
