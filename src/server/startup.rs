use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool from the configured URL, then runs all pending SeaORM
/// migrations so the schema is current before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the `tower_sessions` table of the application database.
///
/// Sessions expire after seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to add to the router
/// - `Err(AppError::SqlxErr)` - Creating the session table failed
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let session_store = SqliteStore::new(pool);
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// HTTP client for the Discord API.
///
/// Redirects are disabled so a token exchange cannot be redirected elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Discord OAuth2 client from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect URLs set
/// - `Err(AppError::ConfigErr)` - One of the URLs is malformed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|e| invalid_url("DISCORD_AUTH_URL", e))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|e| invalid_url("DISCORD_TOKEN_URL", e))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|e| invalid_url("DISCORD_REDIRECT_URL", e))?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

fn invalid_url(name: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: err.to_string(),
    }
}
