//! Plain-data HTTP exchange between `TodoClient` and whatever executes it.
//!
//! The client never opens a socket. It hands out an `HttpRequest` whose `url`
//! already carries the `?id=` query for single-todo operations, and it reads
//! back the status and body of an `HttpResponse`. Response headers are kept for
//! hosts that want them; the todo API's contract lives entirely in status
//! codes and bodies.

/// The four verbs the todo API routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL, query string included.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON todo payload for create and update; `None` otherwise.
    pub body: Option<String>,
}

/// What the host observed after executing an `HttpRequest`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// Raw body: JSON on success, a plain-text reason on 4xx.
    pub body: String,
}

impl HttpResponse {
    /// A response without headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
