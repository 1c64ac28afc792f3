use std::sync::Arc;

use axum::{
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use service::repository::ContactRepository;

use crate::request_log;

pub mod info;
pub mod persons;

/// Shared handler state: the contact collection behind its repository trait.
#[derive(Clone)]
pub struct ServerState {
    pub contacts: Arc<dyn ContactRepository>,
}

async fn unknown_endpoint() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "unknown endpoint" })),
    )
}

/// Build the full application router: JSON API, info page, static frontend.
pub fn build_router(state: ServerState, cors: CorsLayer, static_dir: &str) -> Router {
    // Static assets answer whatever no route claims; paths that match no
    // file either get the JSON 404 the API contract promises.
    let static_assets = ServeDir::new(static_dir).not_found_service(unknown_endpoint.into_service());

    Router::new()
        .route("/api/persons", get(persons::list).post(persons::create))
        .route(
            "/api/persons/:id",
            get(persons::get)
                .put(persons::update)
                .delete(persons::remove),
        )
        .route("/info", get(info::info))
        .fallback_service(static_assets)
        .with_state(state)
        .layer(axum::middleware::from_fn(request_log::log_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
