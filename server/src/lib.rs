//! HTTP service over an in-memory collection of animals.
//!
//! Routes:
//! - `GET /animals`, `POST /animals`
//! - `GET /animals/{id}`, `PUT /animals/{id}`, `DELETE /animals/{id}`
//! - `GET /swagger.json`, `GET /docs` (ReDoc), `GET /docs2` (Swagger UI)

pub mod config;
pub mod docs;
pub mod error;
pub mod store;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

pub use config::ServerConfig;
pub use error::StoreError;
pub use store::{Animal, AnimalStore, Db, IdGenerator};

/// Body accepted by create and update. A missing `name` becomes empty and is
/// rejected by the store.
#[derive(Debug, Deserialize)]
pub struct AnimalInput {
    #[serde(default)]
    pub name: String,
}

/// Single-field body used for confirmations and errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    swagger: Arc<Value>,
}

/// Router over a seeded store with default configuration.
pub fn app() -> Router {
    router(AnimalStore::seeded().into_db(), &ServerConfig::default())
}

pub fn router(db: Db, config: &ServerConfig) -> Router {
    let state = AppState {
        db,
        swagger: Arc::new(docs::swagger(&config.docs_host())),
    };
    Router::new()
        .route("/animals", get(list_animals).post(create_animal))
        .route(
            "/animals/{id}",
            get(get_animal).put(update_animal).delete(delete_animal),
        )
        .route(docs::SPEC_PATH, get(swagger_json))
        .route("/docs", get(redoc))
        .route("/docs2", get(swagger_ui))
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(Message::new("Rota não encontrada")),
            )
        })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, config: ServerConfig) -> Result<(), std::io::Error> {
    let store = if config.seed {
        AnimalStore::seeded()
    } else {
        AnimalStore::new()
    };
    info!(
        addr = ?listener.local_addr().ok(),
        animals = store.len(),
        "serving animals"
    );
    axum::serve(listener, router(store.into_db(), &config)).await
}

/// Path ids that are not unsigned integers can never match a record.
fn parse_id(raw: &str) -> Result<u64, StoreError> {
    raw.trim().parse().map_err(|_| StoreError::NotFound)
}

fn input_name(input: Result<Json<AnimalInput>, JsonRejection>) -> Result<String, StoreError> {
    match input {
        Ok(Json(input)) => Ok(input.name),
        Err(rejection) => {
            debug!(%rejection, "unreadable animal body");
            Err(StoreError::Validation)
        }
    }
}

async fn list_animals(State(state): State<AppState>) -> Json<Vec<Animal>> {
    let store = state.db.read().await;
    Json(store.list().to_vec())
}

async fn create_animal(
    State(state): State<AppState>,
    input: Result<Json<AnimalInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Animal>), StoreError> {
    let name = input_name(input)?;
    let animal = state
        .db
        .write()
        .await
        .create(&name)
        .inspect_err(|e| debug!(%e, name = %name, "create rejected"))?;
    info!(id = animal.id, name = %animal.name, "created");
    Ok((StatusCode::CREATED, Json(animal)))
}

async fn get_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Animal>>, StoreError> {
    let id = parse_id(&id)?;
    let store = state.db.read().await;
    let animal = store.get(id)?;
    Ok(Json(vec![animal.clone()]))
}

async fn update_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    input: Result<Json<AnimalInput>, JsonRejection>,
) -> Result<Json<Message>, StoreError> {
    let name = input_name(input)?;
    let id = parse_id(&id)?;
    state
        .db
        .write()
        .await
        .update(id, &name)
        .inspect_err(|e| debug!(%e, id, name = %name, "update rejected"))?;
    info!(id, name = %name, "renamed");
    Ok(Json(Message::new("Alterado")))
}

async fn delete_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, StoreError> {
    let id = parse_id(&id)?;
    let removed = state
        .db
        .write()
        .await
        .delete(id)
        .inspect_err(|e| debug!(%e, id, "delete rejected"))?;
    info!(id, name = %removed.name, "removed");
    Ok(Json(Message::new("Removido")))
}

async fn swagger_json(State(state): State<AppState>) -> Json<Value> {
    Json(state.swagger.as_ref().clone())
}

async fn redoc() -> Html<&'static str> {
    Html(docs::REDOC_HTML)
}

async fn swagger_ui() -> Html<&'static str> {
    Html(docs::SWAGGER_UI_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animal_serializes_to_json() {
        let animal = Animal {
            id: 1,
            name: "panda".to_string(),
        };
        let json = serde_json::to_value(&animal).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "panda"}));
    }

    #[test]
    fn input_defaults_missing_name_to_empty() {
        let input: AnimalInput = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.name.is_empty());
    }

    #[test]
    fn input_ignores_extra_fields() {
        let input: AnimalInput =
            serde_json::from_str(r#"{"name":"lion","legs":4}"#).unwrap();
        assert_eq!(input.name, "lion");
    }

    #[test]
    fn input_rejects_non_string_name() {
        let result: Result<AnimalInput, _> = serde_json::from_str(r#"{"name":7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_id_coerces_numbers() {
        assert_eq!(parse_id("2"), Ok(2));
        assert_eq!(parse_id(" 3 "), Ok(3));
        assert_eq!(parse_id("abc"), Err(StoreError::NotFound));
        assert_eq!(parse_id("-1"), Err(StoreError::NotFound));
    }

    #[test]
    fn parse_id_rejects_non_integer_spellings() {
        for raw in ["2.0", "0x2", "1e0", ""] {
            assert_eq!(parse_id(raw), Err(StoreError::NotFound), "{raw:?}");
        }
    }
}
