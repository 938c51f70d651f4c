//! Domain DTOs for the animals API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently so
//! the client does not link against Axum. The live integration test catches
//! any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single animal returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    pub id: u64,
    pub name: String,
}

/// Request payload for creating or renaming an animal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnimalInput {
    pub name: String,
}

impl AnimalInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// `{"message": ...}` body used by the server for confirmations and errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}
