use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{CreateProductDto, ProductResponseDto};
use crate::features::products::services::ProductService;
use crate::shared::constants::TIMEOUT_CREATE_PRODUCT;
use crate::shared::types::ApiResponse;

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = tokio::time::timeout(TIMEOUT_CREATE_PRODUCT, service.create(dto))
        .await
        .map_err(|_| AppError::Canceled("product creation timed out".to_string()))??;

    Ok(Json(ApiResponse::success(Some(product), None, None)))
}
