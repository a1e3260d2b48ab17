use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use service::news::NewsDto;
use service::CrudService;

use crate::errors::ApiError;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/news", tag = "news",
    responses((status = 200, description = "All news", body = [crate::openapi::NewsDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<NewsDto>>, ApiError> {
    Ok(Json(state.news.get_all().await?))
}

#[utoipa::path(
    get, path = "/api/news/{id}", tag = "news",
    params(("id" = i64, Path, description = "News id")),
    responses(
        (status = 200, description = "News item", body = crate::openapi::NewsDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<NewsDto>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.news.get_by_id(id).await?))
}

#[utoipa::path(
    get, path = "/api/news/category/{id}", tag = "news",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "News of the category", body = [crate::openapi::NewsDoc]),
        (status = 404, description = "Unknown category id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_category(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<NewsDto>>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.news.get_by_category_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/news", tag = "news",
    request_body = crate::openapi::NewsDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::NewsDoc),
        (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown category title", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewsDto>, JsonRejection>,
) -> Result<(StatusCode, Json<NewsDto>), ApiError> {
    let Json(dto) = body?;
    let created = state.news.create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/news", tag = "news",
    request_body = crate::openapi::NewsDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::NewsDoc),
        (status = 400, description = "Invalid body or missing id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown id or category title", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<NewsDto>, JsonRejection>,
) -> Result<Json<NewsDto>, ApiError> {
    let Json(dto) = body?;
    Ok(Json(state.news.update(dto).await?))
}

#[utoipa::path(
    delete, path = "/api/news/{id}", tag = "news",
    params(("id" = i64, Path, description = "News id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.news.delete(id).await?;
    Ok(StatusCode::OK)
}
