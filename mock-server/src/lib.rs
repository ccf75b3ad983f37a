//! In-memory backend speaking the todo collection contract.
//!
//! Serves `GET /todos/`, `POST /todo` and `DELETE /todo/{id}`. Items keep
//! insertion order and ids are assigned as one past the current maximum.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    #[serde(default)]
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

/// The four-item collection the store's tests are written against.
pub fn fixture() -> Vec<Todo> {
    [
        (1, "delectus aut autem", false),
        (2, "quis ut nam facilis et officia qui", false),
        (3, "fugiat veniam minus", false),
        (4, "et porro tempora", true),
    ]
    .into_iter()
    .map(|(id, title, completed)| Todo {
        user_id: 1,
        id,
        title: title.to_string(),
        completed,
    })
    .collect()
}

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(todos));
    Router::new()
        .route("/todos", get(list_todos))
        .route("/todos/", get(list_todos))
        .route("/todo", post(create_todo))
        .route("/todo/{id}", delete(delete_todo))
        .with_state(db)
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

/// Bind a random local port and serve `todos` from it on the current runtime.
pub async fn spawn(todos: Vec<Todo>) -> Result<SocketAddr, std::io::Error> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(serve(listener, app_with(todos)));
    Ok(addr)
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    tracing::debug!(count = todos.len(), "list todos");
    Json(todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    let mut todos = db.write().await;
    let Some(id) = next_id(&todos) else {
        tracing::warn!("id space exhausted");
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    };
    let todo = Todo {
        user_id: input.user_id,
        id,
        title: input.title,
        completed: input.completed,
    };
    todos.push(todo.clone());
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut todos = db.write().await;
    let before = todos.len();
    todos.retain(|todo| todo.id != id);
    if todos.len() == before {
        tracing::debug!(id, "delete of unknown todo");
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::debug!(id, "deleted todo");
    Ok(Json(serde_json::json!({})))
}

/// One past the largest id, or `None` once `i64::MAX` is taken.
fn next_id(todos: &[Todo]) -> Option<i64> {
    todos.iter().map(|todo| todo.id).max().unwrap_or(0).checked_add(1)
}
