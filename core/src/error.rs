//! Error types for the todo API client.
//!
//! `NotFound` and `BadRequest` get dedicated variants because the server uses
//! both as ordinary outcomes: 404 for an absent todo, 400 for a rejected `id`
//! or body, with the reason as plain text. Anything else lands in `HttpError`.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400. Holds the server's plain-text reason.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned a status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
