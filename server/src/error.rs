//! Errors returned by store operations and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::Message;

/// The `Display` text doubles as the `message` field of the response body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No animal has the requested id.
    #[error("Animal não existe")]
    NotFound,

    /// Another animal already uses the name.
    #[error("Animal já existe")]
    DuplicateName,

    /// The request body carried no usable name.
    #[error("Nome do animal é obrigatório")]
    Validation,
}

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::DuplicateName | StoreError::Validation => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        (self.status(), Json(Message::new(self.to_string()))).into_response()
    }
}
