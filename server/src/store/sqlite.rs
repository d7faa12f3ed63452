//! SQLite-backed store.
//!
//! Ids are stored as 16-byte blobs and `created_at` as RFC 3339 text, which
//! sorts chronologically as long as every row is written in UTC.

use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use uuid::Uuid;

use super::{StoreError, StoreResult, TodoStore};
use crate::model::{Todo, TodoPatch};

const MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `url` and run migrations.
    ///
    /// In-memory databases live only as long as their connection, so they get
    /// a single connection that is never recycled.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };
        let pool = pool_options.connect_with(options).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(url, "sqlite store ready");
        Ok(Self { pool })
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

impl TodoStore for SqliteStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, title, done, created_at FROM todos \
             ORDER BY created_at DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(todos)
    }

    async fn create(&self, title: String) -> StoreResult<Todo> {
        let todo = Todo {
            id: Uuid::new_v4(),
            title,
            done: false,
            created_at: Utc::now(),
        };
        sqlx::query("INSERT INTO todos (id, title, done, created_at) VALUES (?, ?, ?, ?)")
            .bind(todo.id)
            .bind(&todo.title)
            .bind(todo.done)
            .bind(todo.created_at)
            .execute(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn update(&self, id: Uuid, patch: TodoPatch) -> StoreResult<Todo> {
        sqlx::query_as::<_, Todo>(
            "UPDATE todos SET done = COALESCE(?, done), title = COALESCE(?, title) \
             WHERE id = ? RETURNING id, title, done, created_at",
        )
        .bind(patch.done)
        .bind(patch.title)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteStore {
        SqliteStore::connect("sqlite::memory:").await.unwrap()
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://todos.db"));
    }

    #[tokio::test]
    async fn create_then_list_round_trips() {
        let store = store().await;
        let created = store.create("Buy milk".to_string()).await.unwrap();

        let todos = store.list().await.unwrap();
        assert_eq!(todos, vec![created]);
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let store = store().await;
        let first = store.create("first".to_string()).await.unwrap();
        let second = store.create("second".to_string()).await.unwrap();

        let todos = store.list().await.unwrap();
        assert_eq!(todos[0].id, second.id);
        assert_eq!(todos[1].id, first.id);
        assert!(todos[0].created_at >= todos[1].created_at);
    }

    #[tokio::test]
    async fn update_applies_patch() {
        let store = store().await;
        let created = store.create("old".to_string()).await.unwrap();

        let done = store
            .update(
                created.id,
                TodoPatch {
                    done: Some(true),
                    title: None,
                },
            )
            .await
            .unwrap();
        assert!(done.done);
        assert_eq!(done.title, "old");

        let renamed = store
            .update(
                created.id,
                TodoPatch {
                    done: None,
                    title: Some("new".to_string()),
                },
            )
            .await
            .unwrap();
        assert!(renamed.done);
        assert_eq!(renamed.title, "new");
        assert_eq!(renamed.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = store().await;
        let err = store
            .update(Uuid::new_v4(), TodoPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = store().await;
        let created = store.create("x".to_string()).await.unwrap();
        store.delete(created.id).await.unwrap();

        let err = store.delete(created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
        assert!(store.list().await.unwrap().is_empty());
    }
}
