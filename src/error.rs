//! Error types for the todo service.
//!
//! # Design
//! `NotFound` gets a dedicated variant because id-based routes must answer
//! 404 when no row matches. Malformed input lands in `Client`; everything
//! else from the store lands in `Storage` with the raw driver message, which
//! is returned in the 500 body (this is an internal tool, not a hardened
//! service).

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors produced by the route handlers.
#[derive(Debug)]
pub enum AppError {
    /// The request could not be decoded (malformed or incomplete JSON).
    Client(String),

    /// No todo matches the requested id.
    NotFound,

    /// The backing store failed; carries the raw driver error.
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Client(msg) => write!(f, "invalid request: {msg}"),
            AppError::NotFound => write!(f, "todo not found"),
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => AppError::NotFound,
            other => AppError::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Client(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound => (StatusCode::NOT_FOUND, "todo not found".to_string()),
            AppError::Storage(msg) => {
                log::error!("storage error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, body).into_response()
    }
}
