use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use database::Visitor;
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, error::ApiError};

/// Request body for POST /visitors.
///
/// Fields absent from the JSON bind as empty strings, so a missing field
/// fails the same required-field check as an explicitly empty one (400, not
/// a deserialization rejection).
#[derive(Debug, Deserialize)]
pub struct NewVisitor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub plate: String,
}

/// # GET /ping
/// Liveness check.
pub async fn ping() -> impl IntoResponse {
    Json(json!({ "message": "pong" }))
}

/// # GET /visitors
/// Fetches every registered visitor. An empty registry is an empty array
/// with a 200, not an error.
pub async fn get_visitors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Visitor>>, ApiError> {
    let visitors = state.registry.list_visitors(None).await?;
    Ok(Json(visitors))
}

/// # GET /visitors/:plate
/// Fetches the visitors registered under an exact plate match; 404 when
/// there are none.
pub async fn get_visitors_by_plate(
    Path(plate): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Visitor>>, ApiError> {
    let visitors = state.registry.list_visitors(Some(&plate)).await?;
    if visitors.is_empty() {
        return Err(ApiError::NotFound(
            "Plate is not found in the database".to_string(),
        ));
    }
    Ok(Json(visitors))
}

/// # POST /visitors
/// Registers a new visitor. Both fields are required; duplicate plates come
/// back as 409 via the registry's atomic insert, so two concurrent creates
/// of the same plate can never both get a 201.
pub async fn add_visitor(
    State(state): State<Arc<AppState>>,
    Json(new_visitor): Json<NewVisitor>,
) -> Result<(StatusCode, Json<Visitor>), ApiError> {
    if new_visitor.name.is_empty() || new_visitor.plate.is_empty() {
        return Err(ApiError::Validation(
            "Name and plate are required".to_string(),
        ));
    }

    let visitor = Visitor {
        name: new_visitor.name,
        plate: new_visitor.plate,
    };
    state.registry.insert(&visitor).await?;
    Ok((StatusCode::CREATED, Json(visitor)))
}

/// # DELETE /visitors/:plate
/// Removes the record for a plate; deleting an unknown plate is a 404.
pub async fn remove_visitor(
    Path(plate): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let removed = state.registry.delete_by_plate(&plate).await?;
    if removed == 0 {
        tracing::info!(plate = %plate, "Tried to delete a plate that is not in the database.");
        return Err(ApiError::NotFound(
            "Plate is not found in the database".to_string(),
        ));
    }
    Ok(Json(json!({ "message": "Plate removed" })))
}
