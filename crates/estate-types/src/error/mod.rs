//! Typed error definitions for listing API reads.
//!
//! Feed failures are never shown to the user, only logged, but they still
//! carry enough structure to tell a dead network apart from a bad response.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading listings from the backend.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum FeedError {
    /// The request never produced a response (offline, DNS, CORS, aborted)
    #[error("Network failure: {message}")]
    Network { message: String },

    /// The backend answered with a non-success status
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    /// The response body was not a JSON array of listings
    #[error("Failed to decode listings: {message}")]
    Decode { message: String },
}

impl FeedError {
    /// Create a network error from any displayable cause.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Create a decode error from any displayable cause.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }

    /// Check if the backend was reached at all.
    pub fn reached_server(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Decode { .. })
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

/// Standard Result type using FeedError.
pub type Result<T> = std::result::Result<T, FeedError>;
