use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use service::contact::{Contact, ContactInput};

use crate::errors::ApiError;
use crate::routes::ServerState;

/// Path ids arrive as raw strings so a malformed id yields the contract's
/// 400 JSON body instead of the framework's default rejection.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::MalformattedId)
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.contacts.find().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    let id = parse_id(&raw_id)?;
    state
        .contacts
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Contact>, ApiError> {
    let created = state.contacts.save(input).await?;
    info!(id = %created.id, name = %created.name, "created contact");
    Ok(Json(created))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Contact>, ApiError> {
    let id = parse_id(&raw_id)?;
    let updated = state.contacts.update(id, input).await?;
    info!(id = %updated.id, "updated contact");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let existed = state.contacts.delete_by_id(id).await?;
    info!(%id, existed, "deleted contact");
    Ok(StatusCode::NO_CONTENT)
}
