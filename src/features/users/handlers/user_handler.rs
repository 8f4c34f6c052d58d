use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::users::dtos::{CreateUserDto, ListUsersQuery, UpdateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::constants::{TIMEOUT_CREATE_USER, TIMEOUT_GET_USERS, TIMEOUT_UPDATE_USER};
use crate::shared::pagination::NextPageInfo;
use crate::shared::types::ApiResponse;

/// Page of users plus derived paging metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPageDto {
    pub items: Vec<UserResponseDto>,
    pub page_info: NextPageInfo,
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User already exists with this email")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = tokio::time::timeout(TIMEOUT_CREATE_USER, service.create(dto))
        .await
        .map_err(|_| AppError::Canceled("user creation timed out".to_string()))??;

    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/api/users/{user_uuid}",
    params(
        ("user_uuid" = Uuid, Path, description = "User uuid")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Another user already has this email")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(service): State<Arc<UserService>>,
    Path(user_uuid): Path<Uuid>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = tokio::time::timeout(TIMEOUT_UPDATE_USER, service.update(user_uuid, dto))
        .await
        .map_err(|_| AppError::Canceled("user update timed out".to_string()))??;

    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

/// List users with keyset pagination
///
/// Pass the previous page's `endCursor` as `fromId` to fetch the next page.
#[utoipa::path(
    get,
    path = "/api/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Page of users", body = ApiResponse<UserPageDto>),
        (status = 400, description = "Invalid query params"),
        (status = 404, description = "No users found for this page")
    ),
    tag = "users"
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<ApiResponse<UserPageDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (items, page_info) = tokio::time::timeout(TIMEOUT_GET_USERS, service.find_all(query))
        .await
        .map_err(|_| AppError::Canceled("user listing timed out".to_string()))??;

    Ok(Json(ApiResponse::success(
        Some(UserPageDto { items, page_info }),
        None,
        None,
    )))
}
