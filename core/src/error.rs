//! Error types for the todo API client.
//!
//! # Design
//! The server answers validation problems with 400 and unknown ids with 404,
//! each carrying a fixed `{error}` message, so both get their own variant.
//! Every other non-success status lands in `Http`.

/// Errors returned by `TodoClient` and the `Transport` it runs over.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the request (400), e.g. a missing title.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The server returned 404: the todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// Any other unexpected status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The host could not complete the round-trip at all.
    #[error("transport failed: {0}")]
    Transport(String),
}
