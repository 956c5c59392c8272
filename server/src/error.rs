//! Error types for the todo server.
//!
//! # Design
//! `ApiError` covers every non-2xx answer the HTTP layer gives. Its `Display`
//! text is the plain-text body sent to the client, followed by a newline, so
//! handlers only need to return the variant. Store absence arrives as
//! `Option`/`bool` and is turned into `NotFound` here at the HTTP boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::ConfigError;

/// Client-facing errors produced by request handlers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing 'id' parameter")]
    MissingId,

    #[error("Invalid 'id' parameter")]
    InvalidId,

    /// The request body is not valid JSON for a todo. Carries the decoder's
    /// message verbatim.
    #[error("{0}")]
    InvalidBody(String),

    #[error("Todo not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("404 page not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingId | ApiError::InvalidId | ApiError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        (status, format!("{self}\n")).into_response()
    }
}

/// Errors that stop the server binary before it starts serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
