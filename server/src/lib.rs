//! In-memory todo service over HTTP/JSON.
//!
//! # Overview
//! `TodoStore` holds the todos behind a read/write lock; `app` wires it into
//! an axum `Router` exposing:
//!
//! | Path         | Methods                  |
//! |--------------|--------------------------|
//! | `/api/todo`  | POST, GET, PUT, DELETE   |
//! | `/api/todos` | GET                      |
//!
//! Any other method on these paths, HEAD included, answers 405. Error bodies
//! are plain text.
//!
//! # Design
//! The store is built by the caller and handed to `app`, so the process owns
//! exactly one instance without a global. `run` serves on a listener the
//! caller has already bound, which lets tests use an ephemeral port.

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;
pub mod todo;

use std::future::Future;

use axum::{
    routing::{on, MethodFilter},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, StartupError};
pub use store::{SharedStore, TodoStore};
pub use todo::{CreatedTodo, Todo};

use handlers::{
    create_todo, delete_todo, get_todo, list_todos, method_not_allowed, route_not_found,
    update_todo,
};

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/api/todo",
            on(MethodFilter::HEAD, method_not_allowed)
                .get(get_todo)
                .post(create_todo)
                .put(update_todo)
                .delete(delete_todo)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/todos",
            on(MethodFilter::HEAD, method_not_allowed)
                .get(list_todos)
                .fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, store: SharedStore, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on port {}", addr.port());
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}
