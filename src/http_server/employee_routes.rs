//! Employee HTTP Routes
//!
//! | Method | Path            | Success                  |
//! |--------|-----------------|--------------------------|
//! | GET    | /employee       | 200, array of employees  |
//! | POST   | /employee       | 201, created employee    |
//! | PUT    | /employee/:id   | 201, updated employee    |
//! | DELETE | /employee/:id   | 200, `"record deleted"`  |

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::employee::{self, Employee};
use crate::store::{RecordStore, StoreError};

use super::errors::ApiError;

/// Confirmation body returned by a successful delete
pub const DELETE_CONFIRMATION: &str = "record deleted";

// ==================
// Shared State
// ==================

/// Employee route state shared across handlers
pub struct EmployeeState<S: RecordStore> {
    pub store: Arc<S>,
    pub collection: String,
}

impl<S: RecordStore> EmployeeState<S> {
    pub fn new(store: Arc<S>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }
}

type SharedState<S> = Arc<EmployeeState<S>>;

// ==================
// Employee Routes
// ==================

/// Create employee routes
pub fn employee_routes<S: RecordStore + 'static>(state: SharedState<S>) -> Router {
    Router::new()
        .route("/employee", get(list_handler::<S>).post(create_handler::<S>))
        .route(
            "/employee/:id",
            put(update_handler::<S>).delete(delete_handler::<S>),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_handler<S: RecordStore + 'static>(
    State(state): State<SharedState<S>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let documents = state
        .store
        .list_all(&state.collection)
        .await
        .map_err(ApiError::store)?;

    let employees = employee::from_documents(documents).map_err(ApiError::store)?;
    Ok(Json(employees))
}

async fn create_handler<S: RecordStore + 'static>(
    State(state): State<SharedState<S>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = employee::decode_body(&body)
        .map_err(ApiError::invalid_body)?
        .without_id();

    let document = employee::to_document(&employee).map_err(ApiError::store)?;
    let id = state
        .store
        .insert_one(&state.collection, document)
        .await
        .map_err(ApiError::store)?;

    let stored = state
        .store
        .find_by_id(&state.collection, &id)
        .await
        .map_err(ApiError::store)?;
    let created = employee::from_document(stored).map_err(ApiError::store)?;

    tracing::debug!(id = %id, "employee created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_handler<S: RecordStore + 'static>(
    State(state): State<SharedState<S>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let id = employee::parse_id(&raw_id).map_err(ApiError::invalid_id)?;
    let employee = employee::decode_body(&body).map_err(ApiError::invalid_body)?;

    let fields = employee::update_fields(&employee);
    match state
        .store
        .update_fields_by_id(&state.collection, &id, fields)
        .await
    {
        Ok(()) => {}
        Err(StoreError::NotFound) => {
            return Err(ApiError::no_match(format!("no employee with id {}", raw_id)));
        }
        Err(e) => return Err(ApiError::store(e)),
    }

    tracing::debug!(id = %id, "employee updated");
    let updated = Employee {
        id: Some(raw_id),
        ..employee
    };
    Ok((StatusCode::CREATED, Json(updated)))
}

async fn delete_handler<S: RecordStore + 'static>(
    State(state): State<SharedState<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<&'static str>, ApiError> {
    let id = employee::parse_id(&raw_id).map_err(ApiError::invalid_id)?;

    let deleted = state
        .store
        .delete_by_id(&state.collection, &id)
        .await
        .map_err(ApiError::store)?;

    if deleted < 1 {
        return Err(ApiError::NotFound(format!("no employee with id {}", raw_id)));
    }

    tracing::debug!(id = %id, "employee deleted");
    Ok(Json(DELETE_CONFIRMATION))
}
