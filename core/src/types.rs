//! Domain DTOs for the todo API.
//!
//! These mirror the server's JSON schema but are defined independently so
//! the client does not pull in axum.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a todo or replacing an existing one. Updates
/// are full replacements, so both fields are always sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of a 201 answer to a create request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedTodo {
    pub id: i64,
}
