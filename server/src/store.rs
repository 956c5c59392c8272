//! In-memory todo store.
//!
//! # Design
//! A single `RwLock` guards both the map and the ID counter so that ID
//! assignment and insertion happen atomically. Writers (`create`, `update`,
//! `delete`) take the exclusive guard; `read` and `list` share the read guard.
//! None of the operations can fail: absence is reported through `Option` or
//! `bool`, never as an error.
//!
//! IDs start at 1 and are never reused, even after the todo holding them has
//! been deleted. A `BTreeMap` keeps `list` in ascending ID order.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::todo::Todo;

/// Store handle shared between request handlers.
pub type SharedStore = Arc<TodoStore>;

#[derive(Debug)]
struct Inner {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

/// Thread-safe keyed collection of todos plus its ID counter.
#[derive(Debug)]
pub struct TodoStore {
    inner: RwLock<Inner>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                todos: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Convenience constructor for the `Arc`-wrapped form used as router state.
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Stores `todo` under the next unused ID and returns that ID. Any `id`
    /// already set on `todo` is discarded.
    pub fn create(&self, mut todo: Todo) -> i64 {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        todo.id = id;
        inner.todos.insert(id, todo);
        tracing::debug!(id, "todo created");
        id
    }

    /// Returns a copy of the todo with `id`, or `None` if absent.
    pub fn read(&self, id: i64) -> Option<Todo> {
        self.inner.read().todos.get(&id).cloned()
    }

    /// Replaces title and completion of an existing todo. The stored ID is
    /// kept. Returns `false` without touching the store if `id` is absent.
    pub fn update(&self, id: i64, mut todo: Todo) -> bool {
        let mut inner = self.inner.write();
        match inner.todos.get_mut(&id) {
            Some(stored) => {
                todo.id = id;
                *stored = todo;
                tracing::debug!(id, "todo updated");
                true
            }
            None => false,
        }
    }

    /// Removes the todo with `id`. Returns whether it existed.
    pub fn delete(&self, id: i64) -> bool {
        let removed = self.inner.write().todos.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "todo deleted");
        }
        removed
    }

    /// All stored todos, ascending by ID.
    pub fn list(&self) -> Vec<Todo> {
        self.inner.read().todos.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().todos.is_empty()
    }
}
