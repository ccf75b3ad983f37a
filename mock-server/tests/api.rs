use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, fixture, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(empty_request("GET", "/todos/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn list_todos_seeded_keeps_order() {
    let resp = app_with(fixture())
        .oneshot(empty_request("GET", "/todos/"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos, fixture());
}

#[tokio::test]
async fn list_todos_without_trailing_slash() {
    let resp = app_with(fixture())
        .oneshot(empty_request("GET", "/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 4);
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request("POST", "/todo", r#"{"userId":1,"title":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.user_id, 1);
    assert_eq!(todo.title, "Buy milk");
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_todo_on_fixture_assigns_next_id() {
    let resp = app_with(fixture())
        .oneshot(json_request(
            "POST",
            "/todo",
            r#"{"userId":2,"title":"Already done","completed":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 5);
    assert!(todo.completed);
}

#[tokio::test]
async fn create_todo_ignores_client_id() {
    let resp = app()
        .oneshot(json_request("POST", "/todo", r#"{"id":99,"userId":1,"title":"x"}"#))
        .await
        .unwrap();

    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 1);
}

#[tokio::test]
async fn create_todo_with_exhausted_ids_returns_500() {
    let mut todos = fixture();
    todos[0].id = i64::MAX;
    let app = app_with(todos);
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/todo", r#"{"userId":1,"title":"one too many"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = app.oneshot(empty_request("GET", "/todos/")).await.unwrap();
    let listed: Vec<Todo> = body_json(resp).await;
    assert_eq!(listed.len(), 4);
}

#[tokio::test]
async fn create_todo_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/todo", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/todo/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_todo_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/todo/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- full lifecycle ---

#[tokio::test]
async fn create_list_delete_lifecycle() {
    use tower::Service;

    let mut app = app_with(fixture()).into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todo", r#"{"userId":1,"title":"Walk dog"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Todo = body_json(resp).await;
    assert_eq!(created.id, 5);

    // list: appended at the end
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/todos/"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 5);
    assert_eq!(todos.last(), Some(&created));

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/todo/2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"{}");

    // delete again: gone
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/todo/2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/todos/"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, [1, 3, 4, 5]);
}
