use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub games: GamesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Side listener exposing `/healthz` and `/metrics`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AdminConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_admin_host")]
    pub host: String,
    #[serde(default = "default_admin_port")]
    pub port: u16,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self { enabled: false, host: default_admin_host(), port: default_admin_port() }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct GamesConfig {
    /// Fixed RNG seed; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8000 }
fn default_admin_host() -> String { "127.0.0.1".into() }
fn default_admin_port() -> u16 { 9000 }
fn default_log_format() -> String { "compact".into() }

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file (or defaults when it is missing), then environment
    /// overrides, then normalization.
    pub fn load_and_validate() -> Result<Self> {
        let explicit = std::env::var("CONFIG_PATH").ok();
        let mut cfg = match config_path(explicit.as_deref(), |p| std::path::Path::new(p).exists())? {
            Some(path) => load_from_file(&path)?,
            None => AppConfig::default(),
        };
        cfg.apply_env(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Apply `SERVER_HOST`-style overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port.parse().map_err(|_| anyhow!("SERVER_PORT is not a valid port: {port}"))?;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS") {
            self.server.worker_threads = Some(w.parse().map_err(|_| anyhow!("TOKIO_WORKER_THREADS is not a number: {w}"))?);
        }
        if let Some(seed) = lookup("GAMES_SEED") {
            self.games.seed = Some(seed.parse().map_err(|_| anyhow!("GAMES_SEED is not a u64: {seed}"))?);
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(enabled) = lookup("ADMIN_ENABLED") {
            self.admin.enabled = matches!(enabled.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }
        if let Some(port) = lookup("ADMIN_PORT") {
            self.admin.port = port.parse().map_err(|_| anyhow!("ADMIN_PORT is not a valid port: {port}"))?;
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.admin.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// An explicit `CONFIG_PATH` must exist; the implicit `config.toml` is optional.
fn config_path<F>(explicit: Option<&str>, exists: F) -> Result<Option<String>>
where
    F: Fn(&str) -> bool,
{
    match explicit {
        Some(path) if exists(path) => Ok(Some(path.to_string())),
        Some(path) => Err(anyhow!("CONFIG_PATH points to a missing file: {path}")),
        None if exists(DEFAULT_CONFIG_PATH) => Ok(Some(DEFAULT_CONFIG_PATH.to_string())),
        None => Ok(None),
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AdminConfig {
    fn validate(&self) -> Result<()> {
        if self.enabled && self.port == 0 {
            return Err(anyhow!("admin.port must be within 1..=65535"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        match self.format.as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("logging.format must be `compact` or `json`, got `{other}`")),
        }
    }
}
