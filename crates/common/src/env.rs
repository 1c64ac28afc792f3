//! Environment/runtime helpers
//!
//! Sanity checks so the service comes up with the directories it expects.

use std::path::Path;

use tracing::warn;

/// Warn when the frontend build directory is missing and make sure the
/// store file's parent directory exists.
pub async fn ensure_env(static_dir: &str, store_path: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "frontend build directory not found; static assets may 404");
    }
    if let Some(parent) = Path::new(store_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
