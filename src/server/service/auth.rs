use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

/// Fields of the Discord `/users/@me` response used for login.
#[derive(Debug, Deserialize)]
pub struct DiscordUser {
    /// Discord snowflake, sent as a string.
    pub id: String,
    pub username: String,
    /// Display name, when the account has one set.
    pub global_name: Option<String>,
    /// Avatar hash.
    pub avatar: Option<String>,
}

/// Service for Discord OAuth2 login.
///
/// Handles the authorization redirect and the callback, which exchanges the code for a token,
/// fetches the Discord account and upserts the local user.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
    /// HTTP client for Discord API requests.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client for Discord authentication.
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests only the `identify` scope.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - The authorization URL and the CSRF state to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Completes a login from the OAuth2 callback.
    ///
    /// # Arguments
    /// - `authorization_code` - Code Discord passed to the callback
    ///
    /// # Returns
    /// - `Ok(User)` - The created or refreshed local user
    /// - `Err(AppError::AuthErr)` - Token exchange failed
    /// - `Err(AppError::ReqwestErr)` - Fetching the Discord account failed
    /// - `Err(AppError::DbErr)` - Database error during the upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                name: discord_user
                    .global_name
                    .unwrap_or(discord_user.username),
                discord_id: discord_user.id,
                avatar: discord_user.avatar,
            })
            .await?;

        tracing::info!("User {} ({}) logged in", user.id, user.discord_id);

        Ok(user)
    }

    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user = self
            .http_client
            .get(DISCORD_USER_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }
}
