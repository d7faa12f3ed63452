//! Client-side view of the todo collection.
//!
//! # Design
//! `TodoView` owns a transient copy of the list, the pending title typed into
//! the form, and a busy flag for an in-flight create. It never edits its
//! list locally: every mutation is followed by a full reload, and a failed
//! request simply leaves the previous state on screen. Failures are logged,
//! not surfaced.
//!
//! I/O stays with the host: requests go through a `Transport`, and the
//! delete confirmation through a `Confirm`.

use std::fmt::Write as _;

use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, DeleteTodo, Todo, UpdateTodo};

pub const HEADING: &str = "Todos";
pub const EMPTY_MESSAGE: &str = "No todos yet. Add the first one!";
pub const DELETE_PROMPT: &str = "Delete this todo?";
const SUBMIT_LABEL: &str = "Add";
const BUSY_LABEL: &str = "...";

/// Executes an `HttpRequest` on behalf of the view.
///
/// Any HTTP status is a successful round-trip; `Err` means no response was
/// obtained at all.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking yes/no prompt.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub struct TodoView<T> {
    client: TodoClient,
    transport: T,
    todos: Vec<Todo>,
    draft: String,
    busy: bool,
}

impl<T: Transport> TodoView<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            todos: Vec::new(),
            draft: String::new(),
            busy: false,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, title: impl Into<String>) {
        self.draft = title.into();
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Replace the held list with the server's; keep it on failure.
    pub fn load(&mut self) {
        let request = self.client.build_list_todos();
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_list_todos(response));
        match result {
            Ok(todos) => self.todos = todos,
            Err(err) => tracing::warn!(error = %err, "failed to load todos"),
        }
    }

    /// Submit the draft. Blank drafts and submissions while busy are ignored.
    pub fn add(&mut self) {
        if let Some(request) = self.begin_add() {
            let response = self.transport.execute(request);
            self.finish_add(response);
        }
    }

    /// First half of [`add`](Self::add): marks the view busy and returns the
    /// create request, or `None` when there is nothing to submit.
    ///
    /// Hosts that execute the request themselves can render in between so
    /// the busy label is visible while the create is in flight.
    pub fn begin_add(&mut self) -> Option<HttpRequest> {
        if self.busy || self.draft.trim().is_empty() {
            return None;
        }
        let input = CreateTodo {
            title: self.draft.clone(),
        };
        match self.client.build_create_todo(&input) {
            Ok(request) => {
                self.busy = true;
                Some(request)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to build create request");
                None
            }
        }
    }

    /// Second half of [`add`](Self::add). Busy is cleared whatever the outcome.
    pub fn finish_add(&mut self, result: Result<HttpResponse, ApiError>) {
        match result.and_then(|response| self.client.parse_create_todo(response)) {
            Ok(todo) => {
                tracing::debug!(id = %todo.id, "created todo");
                self.draft.clear();
                self.load();
            }
            Err(err) => tracing::warn!(error = %err, "failed to create todo"),
        }
        self.busy = false;
    }

    /// Flip `done` for a todo in the held list, then reload.
    pub fn toggle(&mut self, id: Uuid) {
        let Some(done) = self.todos.iter().find(|t| t.id == id).map(|t| t.done) else {
            tracing::debug!(%id, "toggle for todo not in view");
            return;
        };
        let input = UpdateTodo {
            id,
            done: Some(!done),
            title: None,
        };
        let updated = self.send(
            |client| client.build_update_todo(&input),
            TodoClient::parse_update_todo,
        );
        if let Err(err) = updated {
            tracing::warn!(error = %err, %id, "failed to update todo");
        }
        self.load();
    }

    /// Delete after confirmation, then reload. Declining sends nothing.
    pub fn remove(&mut self, id: Uuid, confirm: &mut impl Confirm) {
        if !confirm.confirm(DELETE_PROMPT) {
            return;
        }
        let input = DeleteTodo { id };
        let deleted = self.send(
            |client| client.build_delete_todo(&input),
            TodoClient::parse_delete_todo,
        );
        if let Err(err) = deleted {
            tracing::warn!(error = %err, %id, "failed to delete todo");
        }
        self.load();
    }

    /// Text rendering: heading, form line, then the list or the empty message.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let label = if self.busy { BUSY_LABEL } else { SUBMIT_LABEL };
        let _ = writeln!(out, "{HEADING}");
        let _ = writeln!(out, "> {} [{label}]", self.draft);
        let _ = writeln!(out);
        if self.todos.is_empty() {
            let _ = writeln!(out, "{EMPTY_MESSAGE}");
            return out;
        }
        for (index, todo) in self.todos.iter().enumerate() {
            let mark = if todo.done { 'x' } else { ' ' };
            let _ = writeln!(out, "{:>3}. [{mark}] {}", index + 1, todo.title);
        }
        out
    }

    fn send<R>(
        &mut self,
        build: impl FnOnce(&TodoClient) -> Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&TodoClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let request = build(&self.client)?;
        let response = self.transport.execute(request)?;
        parse(&self.client, response)
    }
}
