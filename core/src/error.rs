//! Error types for the Pacemaker API client.
//!
//! # Design
//! One variant per failure class so callers can tell a dead connection from
//! a rejected request from a body that did not decode. `NotFound` gets its
//! own variant because unknown user and activity ids are the most common
//! rejection.

/// Errors returned by `PacemakerClient` parse methods, transports and
/// `PacemakerApi` operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response: connection refused, DNS
    /// failure, or an I/O error while reading the body.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
