use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session; the caller is not logged in.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session points at a user id that no longer exists.
    ///
    /// # Fields
    /// - Local user id read from the session
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state in the callback URL does not match the token stored in the session, which
    /// indicates a forged or replayed callback.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed error is logged at debug level, or at
/// error level for token exchange failures.
///
/// # Returns
/// - 401 Unauthorized - For `UserNotInSession` and `UserNotInDatabase`
/// - 400 Bad Request - For `CsrfValidationFailed`
/// - 500 Internal Server Error - For `TokenExchange`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);
                (
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
            }
            Self::TokenExchange(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
