use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// See `.env.example` for the variables the server reads.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },
}
