//! HTTP service for the todo tracker.
//!
//! # Overview
//! Exposes list/create/update/delete for a single `todos` collection on one
//! path, `/api/todos`. Ids travel in the JSON body rather than the URL.
//!
//! # Design
//! - Handlers are stateless; the only shared value is the store handle.
//! - The router is generic over `TodoStore`, so tests drive the exact
//!   production routes against `MemoryStore` or an in-memory SQLite pool.
//! - Failures are flattened into fixed `{error}` messages by `AppError`.

use std::{future::Future, sync::Arc};

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;

pub use model::Todo;
pub use store::{MemoryStore, SqliteStore, StoreError, TodoStore};

pub fn app<S: TodoStore>(store: S) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(handlers::list_todos::<S>)
                .post(handlers::create_todo::<S>)
                .put(handlers::update_todo::<S>)
                .delete(handlers::delete_todo::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(store))
}

/// Serve `app(store)` on `listener` until `shutdown` resolves.
pub async fn run<S, F>(listener: TcpListener, store: S, shutdown: F) -> Result<(), std::io::Error>
where
    S: TodoStore,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}
