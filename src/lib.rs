//! HTTP CRUD service for todos backed by SQLite.
//!
//! # Overview
//! Five routes plus a liveness endpoint, each mapped to one query-layer call.
//! Every request is a stateless request/response cycle; the only shared
//! resource is the database connection behind an async mutex, taken for the
//! duration of the single statement each operation issues.
//!
//! # Design
//! - `app` builds the router over a caller-supplied [`Db`], so tests can
//!   drive it against an in-memory database without binding a socket.
//! - Handlers take `Result<Json<T>, JsonRejection>` instead of `Json<T>` so
//!   every decode failure (bad syntax, missing field) maps to 400 rather
//!   than axum's split 400/422 defaults.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rusqlite::Connection;
use tokio::{net::TcpListener, sync::Mutex};

pub mod error;
pub mod store;
pub mod types;

pub use error::AppError;
pub use types::{CreateTodo, ListParams, Todo, UpdateTodo};

/// Shared handle to the SQLite connection.
pub type Db = Arc<Mutex<Connection>>;

pub fn app(db: Db) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app(db)).await
}

async fn health() -> &'static str {
    "OK"
}

async fn create_todo(
    State(db): State<Db>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let Json(input) = payload.map_err(|e| AppError::Client(e.body_text()))?;
    let conn = db.lock().await;
    let todo = store::create(&conn, &input.title)?;
    Ok(Json(todo))
}

async fn list_todos(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let conn = db.lock().await;
    let todos = store::list(&conn, params.limit(), params.offset())?;
    Ok(Json(todos))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Todo>, AppError> {
    let conn = db.lock().await;
    let todo = store::get(&conn, id)?;
    Ok(Json(todo))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let Json(input) = payload.map_err(|e| AppError::Client(e.body_text()))?;
    let conn = db.lock().await;
    let todo = store::update(&conn, id, &input.title, input.is_done)?;
    Ok(Json(todo))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, AppError> {
    let conn = db.lock().await;
    store::delete(&conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
