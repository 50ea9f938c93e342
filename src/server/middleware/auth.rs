use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the logged-in user of a request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user stored in the session
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session refers to a deleted user
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Returns the logged-in user if there is one.
    ///
    /// Used by endpoints that work anonymously but return more to a logged-in user.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        match self.require().await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
