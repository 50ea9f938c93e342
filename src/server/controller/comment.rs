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
        comment::{CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::{CommentExpand, CommentThread},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Deserialize, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListQuery {
    /// Comma separated relations to resolve: user, replies.
    pub expand: Option<String>,
}

/// GET /api/posts/{post_id}/comments
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        CommentListQuery
    ),
    responses(
        (status = 200, description = "Comment threads, newest first", body = [CommentDto]),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
    Query(query): Query<CommentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let expand = query
        .expand
        .as_deref()
        .map(CommentExpand::parse)
        .unwrap_or_default();

    let threads = CommentService::new(&state.db)
        .list_by_post(post_id, expand)
        .await?;

    let dtos: Vec<_> = threads.into_iter().map(CommentThread::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/posts/{post_id}/comments
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Blank body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let comment = CommentService::new(&state.db)
        .create_root(post_id, user.id, &payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentThread::new(comment).into_dto())))
}

/// POST /api/posts/{post_id}/comments/{comment_id}/replies
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments/{comment_id}/replies",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("comment_id" = i32, Path, description = "Top-level comment to reply to")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Reply created", body = CommentDto),
        (status = 400, description = "Blank body or parent is a reply", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Comment not found on this post", body = ErrorDto),
        (status = 409, description = "Parent comment was deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reply(
    State(state): State<AppState>,
    session: Session,
    Path((post_id, comment_id)): Path<(i32, i32)>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let reply = CommentService::new(&state.db)
        .create_reply(post_id, comment_id, user.id, &payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentThread::new(reply).into_dto())))
}

/// DELETE /api/posts/{post_id}/comments/{comment_id}
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Comment written by another user", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path((post_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    CommentService::new(&state.db)
        .delete(post_id, comment_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
