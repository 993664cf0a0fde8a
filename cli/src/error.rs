use leadboard::config::ConfigError;
use leadboard::{LoadError, SubmitError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("http client build failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid session cookie: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("authentication required")]
    AuthRequired,
    #[error("could not load leads: {0}")]
    Load(LoadError),
    #[error("lead not created: {0}")]
    Submit(SubmitError),
}
