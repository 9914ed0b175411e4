use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    /// Directory for uploaded files
    #[serde(default = "default_uploads_dir")]
    pub dir: String,
    /// Maximum accepted file size in megabytes
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: usize,
    /// URL prefix the upload directory is served under
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_uploads_dir(),
            max_size_mb: default_max_size_mb(),
            public_prefix: default_public_prefix(),
        }
    }
}

impl UploadsConfig {
    pub fn max_size_bytes(&self) -> usize {
        self.max_size_mb.saturating_mul(1024 * 1024)
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_uploads_dir() -> String {
    "target/uploads".into()
}

fn default_max_size_mb() -> usize {
    5
}

fn default_public_prefix() -> String {
    "/uploads".into()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[server]
host = "0.0.0.0"
port = 3000

[uploads]
dir = "target/uploads"
max_size_mb = 5
public_prefix = "/uploads"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for `cargo run`)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("config.toml"));
    }

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            return read_config(&config_path);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.uploads.max_size_mb == 0 {
        anyhow::bail!("uploads.max_size_mb must be greater than zero");
    }
    Ok(config)
}

/// Resolve a configured path: absolute paths are used as is,
/// relative ones are resolved against the executable directory
pub fn resolve_path(path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(p);
        }
    }

    // Fallback: relative to current directory
    PathBuf::from(path)
}

/// Get the database file path from configuration
pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_path(&config.database.path)
}

/// Get the upload directory from configuration
pub fn get_uploads_dir(config: &Config) -> PathBuf {
    resolve_path(&config.uploads.dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.uploads.public_prefix, "/uploads");
        assert_eq!(config.uploads.max_size_bytes(), 5 * 1024 * 1024);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[database]\npath = \"/tmp/site.db\"\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.uploads.dir, "target/uploads");
        assert_eq!(get_database_path(&config), PathBuf::from("/tmp/site.db"));
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let raw = "[database]\npath = \"a.db\"\n[uploads]\nmax_size_mb = 0\n";
        assert!(parse_config(raw).is_err());
    }

    #[test]
    fn test_relative_path_is_resolved() {
        let resolved = resolve_path("target/uploads");
        assert!(resolved.ends_with("target/uploads"));
    }
}
