//! Error types for the energysync_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for energysync_core operations
///
/// The caffeine model and the scorer are total functions and never produce
/// one of these; errors only come from input parsing, drink aggregation,
/// configuration and output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A raw value supplied by the user failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Drink name not present in the reference table
    #[error("Unknown drink: {0}")]
    UnknownDrink(String),
}
