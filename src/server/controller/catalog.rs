use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CatalogItemDto, LanguageDto},
    },
    server::{
        error::AppError,
        model::catalog::{CatalogItem, CatalogKind, Language},
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

async fn list(state: &AppState, kind: CatalogKind) -> Result<Vec<CatalogItemDto>, AppError> {
    let items = CatalogService::new(&state.db).list(kind).await?;

    Ok(items.into_iter().map(CatalogItem::into_dto).collect())
}

/// GET /api/catalog/series
#[utoipa::path(
    get,
    path = "/api/catalog/series",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All series", body = [CatalogItemDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn series(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(list(&state, CatalogKind::Series).await?)))
}

/// GET /api/catalog/car-classes
#[utoipa::path(
    get,
    path = "/api/catalog/car-classes",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All car classes", body = [CatalogItemDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn car_classes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(list(&state, CatalogKind::CarClass).await?)))
}

/// GET /api/catalog/cars
#[utoipa::path(
    get,
    path = "/api/catalog/cars",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All cars", body = [CatalogItemDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cars(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(list(&state, CatalogKind::Car).await?)))
}

/// GET /api/catalog/tracks
#[utoipa::path(
    get,
    path = "/api/catalog/tracks",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All tracks", body = [CatalogItemDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn tracks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(list(&state, CatalogKind::Track).await?)))
}

/// GET /api/catalog/events
#[utoipa::path(
    get,
    path = "/api/catalog/events",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All events", body = [CatalogItemDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(list(&state, CatalogKind::Event).await?)))
}

/// GET /api/catalog/languages
#[utoipa::path(
    get,
    path = "/api/catalog/languages",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All languages", body = [LanguageDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn languages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let languages = CatalogService::new(&state.db).languages().await?;

    let dtos: Vec<_> = languages.into_iter().map(Language::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
