//! Synchronous client core for the animals API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip, which keeps
//! this crate deterministic and testable from plain data.
//!
//! # Design
//! - `AnimalsClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` (produces the request) and
//!   `parse_*` (consumes the response).
//! - DTOs are defined independently from the server crate; the live
//!   integration test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::AnimalsClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Animal, AnimalInput, Message};
