//! The four `/api/todos` handlers. Each performs exactly one store call.
//!
//! Bodies are read as raw bytes and decoded as JSON whatever the
//! `Content-Type` header says.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{
    AppError, CREATE_FAILED, DELETE_FAILED, ID_REQUIRED, LIST_FAILED, TITLE_REQUIRED,
    UPDATE_FAILED,
};
use crate::model::{required, CreateTodo, DeleteTodo, Message, Todo, UpdateTodo};
use crate::store::TodoStore;

const DELETED: &str = "Todo deleted";

pub async fn list_todos<S: TodoStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = store
        .list()
        .await
        .map_err(|e| AppError::from_store(e, LIST_FAILED))?;
    Ok(Json(todos))
}

pub async fn create_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    body: Bytes,
) -> Result<Json<Todo>, AppError> {
    let input: CreateTodo = parse_body(&body)?;
    let title = required(input.title.as_deref())
        .ok_or(AppError::bad_request(TITLE_REQUIRED))?
        .to_string();

    let todo = store
        .create(title)
        .await
        .map_err(|e| AppError::from_store(e, CREATE_FAILED))?;
    tracing::info!(id = %todo.id, "created todo");
    Ok(Json(todo))
}

pub async fn update_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    body: Bytes,
) -> Result<Json<Todo>, AppError> {
    let input: UpdateTodo = parse_body(&body)?;
    let raw_id = required(input.id.as_deref()).ok_or(AppError::bad_request(ID_REQUIRED))?;
    let id = parse_id(raw_id)?;

    let todo = store
        .update(id, input.patch())
        .await
        .map_err(|e| AppError::from_store(e, UPDATE_FAILED))?;
    tracing::info!(%id, done = todo.done, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    body: Bytes,
) -> Result<Json<Message>, AppError> {
    let input: DeleteTodo = parse_body(&body)?;
    let raw_id = required(input.id.as_deref()).ok_or(AppError::bad_request(ID_REQUIRED))?;
    let id = parse_id(raw_id)?;

    store
        .delete(id)
        .await
        .map_err(|e| AppError::from_store(e, DELETE_FAILED))?;
    tracing::info!(%id, "deleted todo");
    Ok(Json(Message {
        message: DELETED.to_string(),
    }))
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    Ok(serde_json::from_slice(body)?)
}

/// Ids are opaque to clients; one that is not a UUID cannot name a record.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found())
}
