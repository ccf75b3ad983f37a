//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's JSON schema (`userId`, `id`, `title`,
//! `completed`) but are defined independently from the mock-server crate.
//! Integration tests catch any schema drift between the two.
//!
//! `TodoItem::id` is optional because the backend assigns it; the create
//! payload is its own type so a client-chosen id can never be submitted.

use serde::{Deserialize, Serialize};

/// A single todo item as held by the store and returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTodo {
    pub fn new(user_id: i64, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            completed: false,
        }
    }
}

impl From<NewTodo> for TodoItem {
    fn from(todo: NewTodo) -> Self {
        Self {
            user_id: todo.user_id,
            id: None,
            title: todo.title,
            completed: todo.completed,
        }
    }
}
