use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `CORS_ORIGIN` is set but is not a valid header value.
    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}
