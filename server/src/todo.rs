//! Wire and storage representation of a todo item.
//!
//! # Design
//! One struct serves as request body, stored record and response body. Every
//! field defaults when absent so a body like `{"title":"x"}` decodes, while a
//! field of the wrong type is still rejected. A client-supplied `id` is
//! accepted by the decoder and then overwritten by the store.

use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: 0,
            title: title.into(),
            completed,
        }
    }
}

/// Response body of a successful create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTodo {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 7,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "Test", "completed": false}));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let todo: Todo = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(todo.title, "No completed field");
        assert!(!todo.completed);
        assert_eq!(todo.id, 0);

        let empty: Todo = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Todo::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let todo: Todo =
            serde_json::from_str(r#"{"title":"Done","completed":true,"owner":"me"}"#).unwrap();
        assert_eq!(todo, Todo::new("Done", true));
    }

    #[test]
    fn wrong_field_types_are_rejected() {
        assert!(serde_json::from_str::<Todo>(r#"{"completed":"yes"}"#).is_err());
        assert!(serde_json::from_str::<Todo>(r#"{"title":3}"#).is_err());
        assert!(serde_json::from_str::<Todo>(r#"{"id":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Todo>(r#""buy milk""#).is_err());
    }

    #[test]
    fn created_todo_shape() {
        let json = serde_json::to_string(&CreatedTodo { id: 1 }).unwrap();
        assert_eq!(json, r#"{"id":1}"#);
    }
}
