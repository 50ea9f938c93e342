use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        application::{ApplicationDto, CreateApplicationDto, UpdateApplicationStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::application::Application,
        service::application::ApplicationService,
        state::AppState,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApplicationListQuery {
    /// Only list applications with this status.
    pub status: Option<String>,
}

/// POST /api/posts/{post_id}/applications
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/applications",
    tag = APPLICATION_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application created", body = ApplicationDto),
        (status = 400, description = "Applying to your own post", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 409, description = "Post not open or already applied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let application = ApplicationService::new(&state.db)
        .apply(post_id, user.id, payload.message)
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// GET /api/posts/{post_id}/applications
/// Lists the applications to a post; owner only
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/applications",
    tag = APPLICATION_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ApplicationListQuery
    ),
    responses(
        (status = 200, description = "Applications to the post", body = [ApplicationDto]),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Post belongs to another user", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_for_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Query(query): Query<ApplicationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let applications = ApplicationService::new(&state.db)
        .list_for_post(post_id, user.id, query.status.as_deref())
        .await?;

    let dtos: Vec<_> = applications
        .into_iter()
        .map(Application::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// DELETE /api/posts/{post_id}/applications
/// Withdraws the caller's application
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}/applications",
    tag = APPLICATION_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Application withdrawn"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "No application to this post", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn withdraw(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    ApplicationService::new(&state.db)
        .withdraw(post_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/applications/mine
#[utoipa::path(
    get,
    path = "/api/applications/mine",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "The caller's applications", body = [ApplicationDto]),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_mine(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let applications = ApplicationService::new(&state.db)
        .list_mine(user.id)
        .await?;

    let dtos: Vec<_> = applications
        .into_iter()
        .map(Application::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// PUT /api/applications/{application_id}/status
/// Accepts or rejects an application; post owner only
#[utoipa::path(
    put,
    path = "/api/applications/{application_id}/status",
    tag = APPLICATION_TAG,
    params(
        ("application_id" = i32, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Application updated", body = ApplicationDto),
        (status = 400, description = "Status is not accepted or rejected", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Post belongs to another user", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Application already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_status(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
    Json(payload): Json<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let application = ApplicationService::new(&state.db)
        .set_status(application_id, user.id, &payload.status)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}
