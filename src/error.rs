use thiserror::Error;

/// Errors that can occur while loading or driving the home page
#[derive(Error, Debug)]
pub enum HomeError {
    /// Failed to reach the recipe endpoint
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Recipe endpoint returned {0}: {1}")]
    HttpStatus(u16, String),

    /// The response body was not a list of recipes
    #[error("Failed to parse recipes: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Sort order not in latest/popularity/rating/reviews
    #[error("Unknown sort order: {0}")]
    InvalidSortOrder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The load task ended without producing a result
    #[error("Recipe load was cancelled")]
    Cancelled,
}
