//! Client-side state container for the todo collection.
//!
//! # Design
//! `TodoStore` owns the local `Vec<TodoItem>` and splits its methods into
//! three groups:
//! - getters (`list_all`, `find_by_id`, `count`): pure reads over `&self`;
//! - mutations (`set`, `add`, `remove`): private, synchronous, local-only;
//! - actions (`fetch_all`, `create`, `delete`): async, talk to the backend
//!   first and apply at most one mutation once it has answered.
//!
//! Local state only changes after the backend confirmed the operation. Any
//! error from building, sending or parsing a request is returned unchanged
//! and leaves the collection exactly as it was. Actions take `&mut self`, so
//! a store has one writer at a time.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{NewTodo, TodoItem};

pub struct TodoStore<T: Transport> {
    client: TodoClient,
    transport: T,
    items: Vec<TodoItem>,
}

impl<T: Transport> TodoStore<T> {
    /// Create an empty store.
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            items: Vec::new(),
        }
    }

    /// Drop every local item, returning the store to its initial state.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    // -----------------------------------------------------------------------
    // Getters
    // -----------------------------------------------------------------------

    pub fn list_all(&self) -> &[TodoItem] {
        &self.items
    }

    /// First item whose id equals `id`, or `None`.
    pub fn find_by_id(&self, id: i64) -> Option<&TodoItem> {
        self.items.iter().find(|todo| todo.id == Some(id))
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    fn set(&mut self, items: Vec<TodoItem>) {
        self.items = items;
    }

    fn add(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    fn remove(&mut self, id: i64) {
        self.items.retain(|todo| todo.id != Some(id));
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Replace the whole collection with the backend's list.
    pub async fn fetch_all(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_list_todos();
        let response = self.transport.execute(request).await?;
        let items = self.client.parse_list_todos(response)?;
        tracing::debug!(count = items.len(), "fetched todos");
        self.set(items);
        Ok(())
    }

    /// Submit `payload` and append the item the backend returned.
    ///
    /// The appended item carries the backend-assigned fields, not the
    /// submitted ones.
    pub async fn create(&mut self, payload: NewTodo) -> Result<&TodoItem, ApiError> {
        let request = self.client.build_create_todo(&payload)?;
        let response = self.transport.execute(request).await?;
        let created = self.client.parse_create_todo(response)?;
        tracing::debug!(id = ?created.id, title = %created.title, "created todo");
        self.add(created);
        // Non-empty: `add` just pushed the created item.
        Ok(&self.items[self.items.len() - 1])
    }

    /// Delete `id` on the backend, then drop it locally.
    ///
    /// The request is sent even when no local item has that id; in that case
    /// local state is left as it was.
    pub async fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        let request = self.client.build_delete_todo(id);
        let response = self.transport.execute(request).await?;
        self.client.parse_delete_todo(response)?;
        let before = self.items.len();
        self.remove(id);
        tracing::debug!(id, removed = before - self.items.len(), "deleted todo");
        Ok(())
    }
}
