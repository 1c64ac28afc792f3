use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::routes::{self, ServerState};
use service::{file::contacts::ContactStore, repository::ContactRepository, storage::memory::MemoryStore};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;

    common::env::ensure_env(&cfg.server.static_dir, &cfg.store.path).await?;

    // Open the document store. If it cannot be opened the service keeps
    // running against a volatile in-memory collection so the API stays up,
    // it just persists nothing.
    let contacts: Arc<dyn ContactRepository> = match ContactStore::new(&cfg.store.path).await {
        Ok(store) => {
            info!(path = %cfg.store.path, "connected to contact store");
            store
        }
        Err(e) => {
            error!(
                error = %e,
                path = %cfg.store.path,
                "error connecting to contact store; continuing with in-memory store"
            );
            MemoryStore::new()
        }
    };

    let state = ServerState { contacts };
    let app: Router = routes::build_router(state, build_cors(), &cfg.server.static_dir);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting phonebook server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
