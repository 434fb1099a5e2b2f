//! Error types for the list-generation client.
//!
//! # Design
//! Only request construction can fail here. Response handling is a total
//! reduction into `ListResult` (a malformed or hostile response becomes a
//! `Failure` variant, never an `Err`), so there are no response-side error
//! variants at all.

use std::fmt;

/// Errors returned by `ListClient` build methods.
#[derive(Debug)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
