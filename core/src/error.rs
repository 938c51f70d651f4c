//! Error types for the animals API client.
//!
//! # Design
//! The two domain failures the server reports get dedicated variants:
//! `NotFound` for 404 and `DuplicateName` for the 400 name collision. Other
//! 400 responses keep the server's message in `BadRequest`. Everything else
//! lands in `HttpError` with the raw status and body for debugging.

use thiserror::Error;

/// Message the server sends with a 400 name collision.
pub const DUPLICATE_NAME_MESSAGE: &str = "Animal já existe";

/// Errors returned by `AnimalsClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: no animal has the requested id.
    #[error("animal not found")]
    NotFound,

    /// The server rejected the name because another animal already uses it.
    #[error("animal name already taken")]
    DuplicateName,

    /// The server returned 400 for any other reason.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned a status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
