//! Query layer: parameterized SQL against SQLite.
//!
//! Each operation is a single implicit-transaction statement; errors from
//! the driver surface directly to the caller. Row mapping lives in
//! `row_to_todo` so every SELECT/RETURNING shares the same column order.

use chrono::Utc;
use rusqlite::{params, Connection, Row};

use crate::types::Todo;

const TODO_COLUMNS: &str = "id, title, is_done, create_at, updated_at";

/// Create the todos table if it does not exist.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            title      TEXT NOT NULL,
            is_done    INTEGER NOT NULL DEFAULT 0,
            create_at  TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
}

fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        is_done: row.get(2)?,
        create_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

/// Insert a new todo. Both timestamps are bound to the same instant, so a
/// freshly created record has `create_at == updated_at`.
pub fn create(conn: &Connection, title: &str) -> rusqlite::Result<Todo> {
    let now = Utc::now();
    conn.query_row(
        &format!(
            "INSERT INTO todos (title, is_done, create_at, updated_at) \
             VALUES (?1, 0, ?2, ?2) RETURNING {TODO_COLUMNS}"
        ),
        params![title, now],
        row_to_todo,
    )
}

pub fn list(conn: &Connection, limit: i64, offset: i64) -> rusqlite::Result<Vec<Todo>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TODO_COLUMNS} FROM todos ORDER BY id LIMIT ?1 OFFSET ?2"
    ))?;
    let todos = stmt
        .query_map(params![limit, offset], row_to_todo)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(todos)
}

/// Fetch one todo. Zero rows surfaces as `QueryReturnedNoRows`.
pub fn get(conn: &Connection, id: i64) -> rusqlite::Result<Todo> {
    conn.query_row(
        &format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = ?1"),
        params![id],
        row_to_todo,
    )
}

/// Replace the mutable fields of a todo and advance `updated_at`. Zero rows
/// surfaces as `QueryReturnedNoRows`.
pub fn update(conn: &Connection, id: i64, title: &str, is_done: bool) -> rusqlite::Result<Todo> {
    let now = Utc::now();
    conn.query_row(
        &format!(
            "UPDATE todos SET title = ?1, is_done = ?2, updated_at = ?3 \
             WHERE id = ?4 RETURNING {TODO_COLUMNS}"
        ),
        params![title, is_done, now, id],
        row_to_todo,
    )
}

/// Hard-delete a todo. Deleting an id with no row is not an error.
pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn create_assigns_ascending_ids_and_equal_timestamps() {
        let conn = test_conn();
        let first = create(&conn, "Buy milk").unwrap();
        let second = create(&conn, "Walk dog").unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.title, "Buy milk");
        assert!(!first.is_done);
        assert_eq!(first.create_at, first.updated_at);
    }

    #[test]
    fn get_returns_the_created_row() {
        let conn = test_conn();
        let created = create(&conn, "Read book").unwrap();
        let fetched = get(&conn, created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn get_missing_id_is_no_rows() {
        let conn = test_conn();
        let err = get(&conn, 9999).unwrap_err();
        assert!(matches!(err, rusqlite::Error::QueryReturnedNoRows));
    }

    #[test]
    fn update_replaces_fields_and_advances_updated_at() {
        let conn = test_conn();
        let created = create(&conn, "Draft").unwrap();

        let updated = update(&conn, created.id, "Final", true).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Final");
        assert!(updated.is_done);
        assert_eq!(updated.create_at, created.create_at);
        assert!(updated.updated_at > created.create_at);
    }

    #[test]
    fn update_missing_id_is_no_rows() {
        let conn = test_conn();
        let err = update(&conn, 9999, "Nope", false).unwrap_err();
        assert!(matches!(err, rusqlite::Error::QueryReturnedNoRows));
    }

    #[test]
    fn delete_removes_the_row() {
        let conn = test_conn();
        let created = create(&conn, "Ephemeral").unwrap();
        delete(&conn, created.id).unwrap();
        let err = get(&conn, created.id).unwrap_err();
        assert!(matches!(err, rusqlite::Error::QueryReturnedNoRows));
    }

    #[test]
    fn delete_missing_id_is_ok() {
        let conn = test_conn();
        assert!(delete(&conn, 9999).is_ok());
    }

    #[test]
    fn list_windows_by_limit_and_offset() {
        let conn = test_conn();
        for i in 0..12 {
            create(&conn, &format!("todo {i}")).unwrap();
        }

        let page = list(&conn, 10, 0).unwrap();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].title, "todo 0");

        let tail = list(&conn, 10, 10).unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].title, "todo 10");

        let window = list(&conn, 3, 4).unwrap();
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].title, "todo 4");
    }
}
