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
        team::{CreateTeamMessageDto, MyTeamDto, TeamDto, TeamMessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::team::{MyTeam, TeamMessage},
        service::team::TeamService,
        state::AppState,
        util::parse::parse_scalar,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

#[derive(Deserialize, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessageListQuery {
    /// Only return messages newer than this message ID.
    pub after_id: Option<String>,
}

/// GET /api/posts/{post_id}/team
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/team",
    tag = TEAM_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "The team of the post", body = TeamDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not on the team", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let team = TeamService::new(&state.db).get_team(post_id, user.id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// GET /api/teams/mine
#[utoipa::path(
    get,
    path = "/api/teams/mine",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Teams the user owns or was accepted to", body = [MyTeamDto]),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mine(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let teams = TeamService::new(&state.db).get_my_teams(user.id).await?;

    let dtos: Vec<_> = teams.into_iter().map(MyTeam::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// DELETE /api/posts/{post_id}/team/members/{user_id}
/// Removes a member; members can remove themselves to leave
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}/team/members/{user_id}",
    tag = TEAM_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("user_id" = i32, Path, description = "Member to remove")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 400, description = "Owner tried to leave their own team", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner and not the member", body = ErrorDto),
        (status = 404, description = "Post or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((post_id, member_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    TeamService::new(&state.db)
        .remove_member(post_id, member_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/posts/{post_id}/team/messages
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/team/messages",
    tag = TEAM_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        MessageListQuery
    ),
    responses(
        (status = 200, description = "Chat messages, oldest first", body = [TeamMessageDto]),
        (status = 400, description = "Invalid after_id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not on the team", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_messages(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Query(query): Query<MessageListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let after_id = parse_scalar("after_id", query.after_id.as_deref())?;

    let messages = TeamService::new(&state.db)
        .list_messages(post_id, user.id, after_id)
        .await?;

    let dtos: Vec<_> = messages.into_iter().map(TeamMessage::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/posts/{post_id}/team/messages
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/team/messages",
    tag = TEAM_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateTeamMessageDto,
    responses(
        (status = 201, description = "Message posted", body = TeamMessageDto),
        (status = 400, description = "Blank body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not on the team", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_message(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<CreateTeamMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let message = TeamService::new(&state.db)
        .create_message(post_id, user.id, &payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}
