//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods relevant to
//! its concern:
//! - `AuthSession` - Authenticated user id
//! - `CsrfSession` - CSRF state of the OAuth login flow

use tower_sessions::Session;

use crate::server::error::{auth::AuthError, AppError};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the local id of the logged-in user.
    ///
    /// Called after a successful OAuth callback. The session id is cycled first so a session
    /// id issued before login cannot be reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the local id of the logged-in user.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Removes all session data and deletes the session from the store.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// The token is stored when the login redirect is issued and taken during the callback, so
/// each token validates at most one callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token found and removed
    /// - `Ok(None)` - No token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }

    /// Takes the stored token and compares it with the `state` the provider sent back.
    ///
    /// # Returns
    /// - `Ok(())` - Tokens match
    /// - `Err(AppError::AuthErr(CsrfValidationFailed))` - Token missing or different
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        match self.take_token().await? {
            Some(token) if token == state => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }
}
