use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{CategoryNodeDto, CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::services::CategoryService;
use crate::shared::constants::{TIMEOUT_CREATE_CATEGORY, TIMEOUT_GET_HIERARCHY};
use crate::shared::types::ApiResponse;

/// Create a category
///
/// Creates a root category, or a subcategory when `parentCategoryUuid` is given.
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Parent category not found"),
        (status = 409, description = "Category name already exists")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = tokio::time::timeout(TIMEOUT_CREATE_CATEGORY, service.create(dto))
        .await
        .map_err(|_| AppError::Canceled("category creation timed out".to_string()))??;

    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Get the full category hierarchy
///
/// Returns the forest of categories: every root with its nested subcategories.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Category forest", body = ApiResponse<Vec<CategoryNodeDto>>),
    ),
    tag = "categories"
)]
pub async fn get_hierarchy(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryNodeDto>>>> {
    let forest = tokio::time::timeout(TIMEOUT_GET_HIERARCHY, service.get_hierarchy())
        .await
        .map_err(|_| AppError::Canceled("hierarchy read timed out".to_string()))??;

    Ok(Json(ApiResponse::success(Some(forest), None, None)))
}
