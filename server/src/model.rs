//! Persisted entity and request payloads for the `/api/todos` resource.
//!
//! Request payloads keep every field optional so that a missing `title` or
//! `id` reaches the handler and is answered with the fixed validation
//! message instead of a deserialization rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub id: Option<String>,
    pub done: Option<bool>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTodo {
    pub id: Option<String>,
}

/// Fields an update may change. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub done: Option<bool>,
    pub title: Option<String>,
}

impl UpdateTodo {
    /// Build the patch, treating an empty title as not supplied.
    pub fn patch(&self) -> TodoPatch {
        TodoPatch {
            done: self.done,
            title: self.title.clone().filter(|t| !t.is_empty()),
        }
    }
}

/// Body returned by a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Body returned by every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Read a required string field, treating an empty string as absent.
pub fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
