use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Invalid filter: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
