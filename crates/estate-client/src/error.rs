//! Error types for the Estate client.

use thiserror::Error;

/// Errors raised while setting up the client.
///
/// Failures of individual listing reads are reported as
/// [`estate_types::FeedError`] instead.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    /// A configuration value was present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
