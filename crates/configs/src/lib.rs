use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            worker_threads: None,
        }
    }
}

/// Location of the contact store. For the file-backed document store the
/// connection string is simply a path.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: default_store_path() }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3001 }
fn default_static_dir() -> String { "build".to_string() }
fn default_store_path() -> String { "data/persons.json".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Read config.toml when present, fall back to defaults otherwise, then
    /// apply env-var overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env()?;
        self.store.normalize_from_env();
        self.store.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize_from_env(&mut self) -> Result<()> {
        // PORT wins over the file, matching how the service is deployed.
        self.normalize_with_port_override(std::env::var("PORT").ok())
    }

    fn normalize_with_port_override(&mut self, port_override: Option<String>) -> Result<()> {
        if let Some(port) = port_override {
            self.port = port
                .parse::<u16>()
                .map_err(|_| anyhow!("PORT must be a number in 1..=65535"))?;
        }
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.static_dir.trim().is_empty() {
            self.static_dir = default_static_dir();
        }
        if let Some(0) = self.worker_threads {
            self.worker_threads = None;
        }
        Ok(())
    }
}

impl StoreConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(path) = std::env::var("STORE_PATH") {
            self.path = path;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(anyhow!(
                "store.path is empty; provide it in config.toml or via STORE_PATH"
            ));
        }
        Ok(())
    }
}
