//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers and services. Domain errors
//! (`AuthError`, `FilterError`) map themselves to responses; store and infrastructure failures
//! are logged and returned to the client as a generic 500.

pub mod auth;
pub mod config;
pub mod filter;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, filter::FilterError, internal::InternalError,
    },
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error, mapped by `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised by the session store setup.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest (Discord API calls).
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Unexpected state inside the application, such as an unknown enum value in a row.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Search criteria rejected by the filter validator. Results in 400 Bad Request.
    #[error(transparent)]
    FilterErr(#[from] FilterError),

    /// Resource not found. Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// The resource exists but the caller may not act on it. Results in 403 Forbidden.
    #[error("{0}")]
    Forbidden(String),

    /// Invalid request. Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// The request conflicts with the current state of the resource. Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `FilterErr`
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else, logged with full details
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::FilterErr(err) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::Forbidden(msg) => error_response(StatusCode::FORBIDDEN, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so internal details never reach the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
