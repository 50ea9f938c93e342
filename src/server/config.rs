use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Socket address the HTTP server binds to.
    pub server_addr: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present
    /// - `Err(AppError::ConfigErr)` - A required variable is missing, named in the error
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
