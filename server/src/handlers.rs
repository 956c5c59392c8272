//! Request handlers for `/api/todo` and `/api/todos`.
//!
//! Bodies are taken as raw bytes and decoded here rather than through axum's
//! `Json` extractor, so that every decode failure is a 400 carrying the
//! decoder's message, whatever the request's content type. Only the first
//! JSON value of a body is read; anything after it is ignored.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::store::SharedStore;
use crate::todo::{CreatedTodo, Todo};

/// Decoded pairs of the query string, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// The `id` query parameter of the single-todo endpoints.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IdParam {
    pub id: Option<String>,
}

impl IdParam {
    /// Keeps the first `id` value when the parameter is repeated.
    pub fn from_pairs(pairs: QueryPairs) -> Self {
        let id = pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value);
        Self { id }
    }

    /// Resolves the `id` parameter. An empty value counts as missing.
    pub fn parse(&self) -> Result<i64, ApiError> {
        match self.id.as_deref() {
            None | Some("") => Err(ApiError::MissingId),
            Some(raw) => raw.parse().map_err(|_| ApiError::InvalidId),
        }
    }
}

fn parse_id(pairs: QueryPairs) -> Result<i64, ApiError> {
    IdParam::from_pairs(pairs).parse()
}

/// Decodes the first JSON value of `body`. `null` yields an empty todo; an
/// empty body is rejected.
fn decode_todo(body: &[u8]) -> Result<Todo, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Todo>>();
    match values.next() {
        Some(Ok(todo)) => Ok(todo.unwrap_or_default()),
        Some(Err(e)) => Err(ApiError::InvalidBody(e.to_string())),
        None => Err(ApiError::InvalidBody("EOF".to_string())),
    }
}

/// JSON response body terminated by a newline.
pub struct JsonLine<T>(pub T);

impl<T: Serialize> IntoResponse for JsonLine<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(mut bytes) => {
                bytes.push(b'\n');
                ([(header::CONTENT_TYPE, "application/json")], bytes).into_response()
            }
            Err(err) => {
                tracing::error!(%err, "failed to encode response");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedTodo>), ApiError> {
    let todo = decode_todo(&body)?;
    let id = store.create(todo);
    Ok((StatusCode::CREATED, Json(CreatedTodo { id })))
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    Query(pairs): Query<QueryPairs>,
) -> Result<JsonLine<Todo>, ApiError> {
    let id = parse_id(pairs)?;
    store.read(id).map(JsonLine).ok_or(ApiError::NotFound)
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Query(pairs): Query<QueryPairs>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(pairs)?;
    let todo = decode_todo(&body)?;
    if store.update(id, todo) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Query(pairs): Query<QueryPairs>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(pairs)?;
    if store.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn list_todos(State(store): State<SharedStore>) -> JsonLine<Vec<Todo>> {
    JsonLine(store.list())
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
