use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, StoreResult, TodoStore};
use crate::model::{Todo, TodoPatch};

struct Entry {
    seq: u64,
    todo: Todo,
}

#[derive(Default)]
struct Inner {
    todos: HashMap<Uuid, Entry>,
    next_seq: u64,
}

/// Non-persistent store keeping every todo in a `HashMap`.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Entry> = inner.todos.values().collect();
        entries.sort_by(|a, b| {
            b.todo
                .created_at
                .cmp(&a.todo.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(entries.into_iter().map(|e| e.todo.clone()).collect())
    }

    async fn create(&self, title: String) -> StoreResult<Todo> {
        let todo = Todo {
            id: Uuid::new_v4(),
            title,
            done: false,
            created_at: Utc::now(),
        };
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.todos.insert(
            todo.id,
            Entry {
                seq,
                todo: todo.clone(),
            },
        );
        Ok(todo)
    }

    async fn update(&self, id: Uuid, patch: TodoPatch) -> StoreResult<Todo> {
        let mut inner = self.inner.write().await;
        let entry = inner.todos.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(done) = patch.done {
            entry.todo.done = done;
        }
        if let Some(title) = patch.title {
            entry.todo.title = title;
        }
        Ok(entry.todo.clone())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
