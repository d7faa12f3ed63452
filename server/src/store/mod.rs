//! Persistence behind the todo handlers.
//!
//! # Design
//! Handlers only see the `TodoStore` trait, so the same router runs against
//! SQLite in production and against a `HashMap` in tests. Every trait method
//! is a single store call; there are no multi-step transactions.

use std::future::Future;

use uuid::Uuid;

use crate::model::{Todo, TodoPatch};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No todo exists with the requested id.
    #[error("todo not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD operations over the single `todos` collection.
pub trait TodoStore: Send + Sync + 'static {
    /// All todos, newest first. Ties on `created_at` put the later insert first.
    fn list(&self) -> impl Future<Output = StoreResult<Vec<Todo>>> + Send;

    /// Persist a new todo with `done = false`, a fresh id and the current time.
    fn create(&self, title: String) -> impl Future<Output = StoreResult<Todo>> + Send;

    /// Apply the supplied fields of `patch` and return the stored result.
    fn update(&self, id: Uuid, patch: TodoPatch)
        -> impl Future<Output = StoreResult<Todo>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = StoreResult<()>> + Send;
}
