use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::{
    dto::{CreateUserRequest, ListUsersQuery, UpdateUserRequest, UserResponse},
    error::ApiError,
    routes::AppState,
};

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let pagination = &state.settings.pagination;
    let skip = query.skip.unwrap_or(0).max(0);
    let limit = query
        .limit
        .unwrap_or(pagination.default_page_size)
        .clamp(1, pagination.max_page_size);

    let users = state.user_service.list_users(skip, limit).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    payload.validate()?;

    // Reject duplicate emails before attempting the insert.
    if state
        .user_service
        .get_user_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::BadRequest("Email already registered".to_string()));
    }

    let user = state.user_service.create_user(payload).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    payload.validate()?;

    let user = state
        .user_service
        .update_user(user_id, payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.user_service.delete_user(user_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
