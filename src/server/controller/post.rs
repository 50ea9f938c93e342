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
        post::{CreatePostDto, PostDto, PostSearchDto, UpdatePostDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{filter::PostFilter, post::ExpandSet},
        service::post::{
            validate::{validate_create, validate_update},
            PostService,
        },
        state::AppState,
        util::parse::{parse_datetime, parse_list, parse_scalar, split_list},
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// Query string of a post search.
///
/// Every value is taken as a raw string and parsed by [`PostQuery::into_filter`], so a
/// malformed number or date is reported with the name of the parameter.
#[derive(Deserialize, Default, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostQuery {
    pub search: Option<String>,
    /// Comma separated categories.
    pub category: Option<String>,
    pub series_ids: Option<String>,
    pub car_class_ids: Option<String>,
    pub car_ids: Option<String>,
    pub track_ids: Option<String>,
    pub language_codes: Option<String>,
    pub license_levels: Option<String>,
    pub event_ids: Option<String>,
    pub min_irating: Option<String>,
    pub max_irating: Option<String>,
    pub min_license_level: Option<String>,
    pub has_event: Option<String>,
    pub timezone: Option<String>,
    /// Comma separated statuses.
    pub status: Option<String>,
    pub event_start_from: Option<String>,
    pub event_start_to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub expand: Option<String>,
}

impl PostQuery {
    /// Parses the raw query into search criteria and the expand set.
    ///
    /// # Returns
    /// - `Ok((PostFilter, ExpandSet))` - Typed criteria, not yet validated
    /// - `Err(AppError::BadRequest)` - A list entry or scalar does not parse as its type
    pub fn into_filter(self) -> Result<(PostFilter, ExpandSet), AppError> {
        let filter = PostFilter {
            search: self.search,
            user_id: None,
            categories: split_list(self.category.as_deref()),
            series_ids: parse_list("series_ids", self.series_ids.as_deref())?,
            car_class_ids: parse_list("car_class_ids", self.car_class_ids.as_deref())?,
            car_ids: parse_list("car_ids", self.car_ids.as_deref())?,
            track_ids: parse_list("track_ids", self.track_ids.as_deref())?,
            language_codes: split_list(self.language_codes.as_deref()),
            license_levels: split_list(self.license_levels.as_deref()),
            min_license_level: self.min_license_level,
            min_irating: parse_scalar("min_irating", self.min_irating.as_deref())?,
            max_irating: parse_scalar("max_irating", self.max_irating.as_deref())?,
            event_ids: parse_list("event_ids", self.event_ids.as_deref())?,
            has_event: parse_scalar("has_event", self.has_event.as_deref())?,
            timezone: self.timezone,
            statuses: split_list(self.status.as_deref()),
            event_start_from: parse_datetime("event_start_from", self.event_start_from.as_deref())?,
            event_start_to: parse_datetime("event_start_to", self.event_start_to.as_deref())?,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            limit: parse_scalar("limit", self.limit.as_deref())?,
            offset: parse_scalar("offset", self.offset.as_deref())?,
        };

        let expand = self
            .expand
            .as_deref()
            .map(ExpandSet::parse)
            .unwrap_or_default();

        Ok((filter, expand))
    }
}

#[derive(Deserialize, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpandQuery {
    /// Comma separated relations to resolve: event, series, car_class, track, cars, languages.
    pub expand: Option<String>,
}

/// GET /api/posts
/// Searches public open posts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(PostQuery),
    responses(
        (status = 200, description = "One page of matching posts", body = PostSearchDto),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<PostQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (filter, expand) = query.into_filter()?;

    let page = PostService::new(&state.db).search(filter, expand).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// GET /api/posts/mine
/// Searches the posts of the logged-in user, including private posts of any status
#[utoipa::path(
    get,
    path = "/api/posts/mine",
    tag = POST_TAG,
    params(PostQuery),
    responses(
        (status = 200, description = "One page of the caller's posts", body = PostSearchDto),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mine(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PostQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let (filter, expand) = query.into_filter()?;

    let page = PostService::new(&state.db)
        .search_mine(user.id, filter, expand)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// GET /api/posts/{post_id}
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ExpandQuery
    ),
    responses(
        (status = 200, description = "The post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
    Query(query): Query<ExpandQuery>,
) -> Result<impl IntoResponse, AppError> {
    let expand = query
        .expand
        .as_deref()
        .map(ExpandSet::parse)
        .unwrap_or_default();

    let post = PostService::new(&state.db)
        .get_by_id(post_id, expand)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// POST /api/posts
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let params = validate_create(user.id, payload)?;
    let post = PostService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// PUT /api/posts/{post_id}
/// Partially updates a post; owner only
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Post belongs to another user", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let params = validate_update(post_id, payload)?;
    let post = PostService::new(&state.db).update(user.id, params).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// DELETE /api/posts/{post_id}
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Post belongs to another user", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    PostService::new(&state.db).delete(user.id, post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
