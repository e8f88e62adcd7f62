use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub db: DbConfig,
    #[serde(default)]
    pub queries: QueriesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// PEM certificate path. TLS is served only when both `cert_file` and
    /// `key_file` are set.
    #[serde(default)]
    pub cert_file: Option<PathBuf>,
    #[serde(default)]
    pub key_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            cert_file: None,
            key_file: None,
        }
    }
}

fn default_port() -> u16 {
    7878
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./data/feedserve.sqlite")
}

#[derive(Debug, Deserialize, Clone)]
pub struct QueriesConfig {
    #[serde(default = "default_queries_dir")]
    pub dir: PathBuf,
}

impl Default for QueriesConfig {
    fn default() -> Self {
        Self {
            dir: default_queries_dir(),
        }
    }
}

fn default_queries_dir() -> PathBuf {
    PathBuf::from("./queries")
}

impl ServerConfig {
    /// TLS material, when the config carries both halves.
    pub fn tls_pair(&self) -> Option<(&Path, &Path)> {
        match (&self.cert_file, &self.key_file) {
            (Some(cert), Some(key)) => Some((cert.as_path(), key.as_path())),
            _ => None,
        }
    }
}

/// Loads configuration from a TOML file, then applies environment overrides.
///
/// A missing file is not an error: every field has a default, so the server
/// can run from environment variables alone. `PORT` overrides the listen
/// port; `SSL_CERT_FILE` and `SSL_KEY_FILE` switch the listener to TLS when
/// both are present.
pub fn load_config(path: &Path) -> Result<Config> {
    let mut config: Config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")?
    } else {
        Config::default()
    };

    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port
            .parse()
            .with_context(|| format!("PORT must be a valid port number, got '{}'", port))?;
    }
    if let Ok(cert) = std::env::var("SSL_CERT_FILE") {
        config.server.cert_file = Some(PathBuf::from(cert));
    }
    if let Ok(key) = std::env::var("SSL_KEY_FILE") {
        config.server.key_file = Some(PathBuf::from(key));
    }

    if config.server.port == 0 {
        anyhow::bail!("server.port must be > 0");
    }

    Ok(config)
}
