use std::sync::Arc;

use eyre::{Context, Result};
use log::info;
use rusqlite::Connection;
use tokio::{net::TcpListener, sync::Mutex};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let db_path = std::env::var("TODO_DB").unwrap_or_else(|_| "todos.db".to_string());
    let conn = Connection::open(&db_path)
        .with_context(|| format!("failed to open database at {db_path}"))?;
    todo_api::store::init_schema(&conn).context("failed to initialize schema")?;
    let db: todo_api::Db = Arc::new(Mutex::new(conn));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    todo_api::run(listener, db).await?;
    Ok(())
}
