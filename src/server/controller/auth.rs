use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}

/// GET /api/auth/login
/// Redirects to the Discord authorization page
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /api/auth/callback
/// Completes the Discord login and stores the user in the session
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    CsrfSession::new(&session).validate(&params.state).await?;

    let user = auth_service.callback(params.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::to("/"))
}

/// GET /api/auth/logout
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user
/// Returns the logged-in user, or 401
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
