// src/server/config.rs
//! Configuration file parsing for the cookbook server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address, audit logging
//! - [security] - CORS origins, request body limit
//! - [registry] - Optional seed file

use crate::server::{ServerConfig, DEFAULT_MAX_BODY_BYTES};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct CookbookConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Security settings
    #[serde(default)]
    pub security: SecuritySection,

    /// Registry settings
    #[serde(default)]
    pub registry: RegistrySection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Enable audit logging
    #[serde(default = "default_true")]
    pub audit_log: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            audit_log: true,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_true() -> bool {
    true
}

/// Security configuration section
#[derive(Debug, Deserialize)]
pub struct SecuritySection {
    /// CORS allowed origins (empty = any)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Request body limit (e.g. "64KB")
    #[serde(default = "default_max_body_size")]
    pub max_body_size: String,
}

impl Default for SecuritySection {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            max_body_size: default_max_body_size(),
        }
    }
}

fn default_max_body_size() -> String {
    "64KB".to_string()
}

/// Registry configuration section
#[derive(Debug, Default, Deserialize)]
pub struct RegistrySection {
    /// JSON array of entries registered at start-up
    #[serde(default)]
    pub seed: Option<PathBuf>,
}

impl CookbookConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CookbookConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        let max_body = parse_size(&self.security.max_body_size)?;
        if max_body == 0 {
            anyhow::bail!("security.max_body_size must be greater than 0");
        }

        if let Some(ref seed) = self.registry.seed {
            if !seed.is_file() {
                anyhow::bail!("registry.seed does not exist: {}", seed.display());
            }
        }

        Ok(())
    }

    /// Parsed bind address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let max_body_bytes = usize::try_from(parse_size(&self.security.max_body_size)?)
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        Ok(ServerConfig {
            bind_addr: self.bind_addr()?,
            enable_audit_log: self.server.audit_log,
            cors_allowed_origins: self.security.cors_origins.clone(),
            max_body_bytes,
            seed_path: self.registry.seed.clone(),
        })
    }
}

/// Parse a human-readable size string (e.g., "64KB", "1MB", "512")
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024u64 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024u64 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024u64)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1u64)
    } else {
        // Assume bytes
        (s.as_str(), 1u64)
    };

    let num: f64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid size number: {}", num_str))?;

    if num < 0.0 {
        anyhow::bail!("Size cannot be negative: {}", s);
    }

    Ok((num * multiplier as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1024").unwrap(), 1024);
        assert_eq!(parse_size("1KB").unwrap(), 1024);
        assert_eq!(parse_size("64kb").unwrap(), 64 * 1024);
        assert_eq!(parse_size("1MB").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("1GB").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_size("1.5KB").unwrap(), 1536);
        assert!(parse_size("lots").is_err());
        assert!(parse_size("-1KB").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = CookbookConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind, "0.0.0.0:8080");

        let server = config.to_server_config().unwrap();
        assert_eq!(server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert!(server.enable_audit_log);
        assert!(server.seed_path.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[server]
bind = "127.0.0.1:9000"
audit_log = false

[security]
cors_origins = ["https://example.com"]
max_body_size = "1MB"
"#;
        let config: CookbookConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        let server = config.to_server_config().unwrap();
        assert_eq!(server.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert!(!server.enable_audit_log);
        assert_eq!(server.cors_allowed_origins, vec!["https://example.com"]);
        assert_eq!(server.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn test_invalid_bind() {
        let toml_str = r#"
[server]
bind = "not-an-address"
"#;
        let config: CookbookConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_body_size() {
        let toml_str = r#"
[security]
max_body_size = "0"
"#;
        let config: CookbookConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_seed_file() {
        let toml_str = r#"
[registry]
seed = "/nonexistent/cookbook-seed.json"
"#;
        let config: CookbookConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut seed = tempfile::NamedTempFile::new().unwrap();
        write!(seed, "[]").unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[registry]\nseed = {:?}\n",
            seed.path().to_str().unwrap()
        )
        .unwrap();

        let config = CookbookConfig::load(file.path()).unwrap();
        assert_eq!(config.registry.seed.as_deref(), Some(seed.path()));
    }
}
