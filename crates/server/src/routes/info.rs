use axum::{extract::State, response::Html};
use chrono::Local;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// Diagnostic page: contact count plus the server's current time, as HTML.
pub async fn info(State(state): State<ServerState>) -> Result<Html<String>, ApiError> {
    let count = state.contacts.count().await?;
    let now = Local::now().to_rfc2822();
    Ok(Html(format!(
        "<p>Phonebook has info for {count} people</p><p>{now}</p>"
    )))
}
