use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use service::category::CategoryDto;
use service::CrudService;

use crate::errors::ApiError;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/categories", tag = "categories",
    responses((status = 200, description = "All categories", body = [crate::openapi::CategoryDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    Ok(Json(state.categories.get_all().await?))
}

#[utoipa::path(
    get, path = "/api/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category", body = crate::openapi::CategoryDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CategoryDto>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.categories.get_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/categories", tag = "categories",
    request_body = crate::openapi::CategoryDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CategoryDoc),
        (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CategoryDto>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryDto>), ApiError> {
    let Json(dto) = body?;
    let created = state.categories.create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/categories", tag = "categories",
    request_body = crate::openapi::CategoryDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CategoryDoc),
        (status = 400, description = "Invalid body or missing id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<CategoryDto>, JsonRejection>,
) -> Result<Json<CategoryDto>, ApiError> {
    let Json(dto) = body?;
    Ok(Json(state.categories.update(dto).await?))
}

#[utoipa::path(
    delete, path = "/api/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Deleted together with its news"),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.categories.delete(id).await?;
    Ok(StatusCode::OK)
}
