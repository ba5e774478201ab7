//! Domain types and request payloads for the todo service.
//!
//! # Design
//! These types define the wire schema. The `create_at` field name (no "d")
//! is the published JSON contract, so it is kept verbatim rather than
//! normalized. `UpdateTodo` requires both fields: a PATCH always carries the
//! full mutable state of the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_done: bool,
    pub create_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for `POST /todos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for `PATCH /todos/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub is_done: bool,
}

/// Query parameters for `GET /todos`. `limit` falls back to 10 when absent
/// or zero; `offset` falls back to 0.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListParams {
    pub fn limit(&self) -> i64 {
        match self.limit {
            Some(0) | None => 10,
            Some(n) => n,
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}
