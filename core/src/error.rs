//! Error types for the posts API client.
//!
//! # Design
//! Every failed fetch lands in exactly one of four variants, decided at the
//! classification site in `service.rs`. Non-2xx statuses collapse into
//! `InvalidResponse` without the status code; the code is logged where the
//! classification happens. Underlying causes travel as strings so the error
//! stays plain data.

use std::fmt;

/// Errors returned by `PostsService` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The base URL and endpoint path did not compose into a well-formed URL.
    InvalidUrl(String),

    /// The request failed below HTTP: DNS, connection, TLS, or an aborted
    /// transfer.
    Network(String),

    /// No usable response: a status outside 200..300 or an empty body.
    InvalidResponse,

    /// The body arrived but did not match the expected schema.
    Decoding(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(raw) => write!(f, "Invalid URL: {raw}"),
            ApiError::Network(cause) => write!(f, "Network error: {cause}"),
            ApiError::InvalidResponse => write!(f, "Invalid response from server"),
            ApiError::Decoding(cause) => {
                write!(f, "Failed to decode response: {cause}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
