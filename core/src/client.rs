//! Stateless request builder and response parser for the animals API.
//!
//! # Design
//! `AnimalsClient` holds only a `base_url`. Each operation has a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! the matching `HttpResponse`. The caller performs the round-trip between
//! the two.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, DUPLICATE_NAME_MESSAGE};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Animal, AnimalInput, Message};

/// Synchronous, stateless client for the animals API.
#[derive(Debug, Clone)]
pub struct AnimalsClient {
    base_url: String,
}

impl AnimalsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_animals(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, "/animals".to_string())
    }

    pub fn build_get_animal(&self, id: u64) -> HttpRequest {
        self.bodyless(HttpMethod::Get, format!("/animals/{id}"))
    }

    pub fn build_create_animal(&self, input: &AnimalInput) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/animals".to_string(), input)
    }

    pub fn build_update_animal(
        &self,
        id: u64,
        input: &AnimalInput,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, format!("/animals/{id}"), input)
    }

    pub fn build_delete_animal(&self, id: u64) -> HttpRequest {
        self.bodyless(HttpMethod::Delete, format!("/animals/{id}"))
    }

    pub fn parse_list_animals(&self, response: HttpResponse) -> Result<Vec<Animal>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    /// The server answers a lookup with a one-element array; this unwraps it.
    pub fn parse_get_animal(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        check_status(&response, 200)?;
        let animals: Vec<Animal> = decode(&response.body)?;
        animals.into_iter().next().ok_or_else(|| {
            ApiError::DeserializationError("expected one animal, got an empty array".to_string())
        })
    }

    pub fn parse_create_animal(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_update_animal(&self, response: HttpResponse) -> Result<Message, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete_animal(&self, response: HttpResponse) -> Result<Message, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    fn bodyless(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(
        &self,
        method: HttpMethod,
        path: String,
        input: &AnimalInput,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => {
            let message = serde_json::from_str::<Message>(&response.body)
                .map(|m| m.message)
                .unwrap_or_else(|_| response.body.clone());
            if message == DUPLICATE_NAME_MESSAGE {
                Err(ApiError::DuplicateName)
            } else {
                Err(ApiError::BadRequest(message))
            }
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
