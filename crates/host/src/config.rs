//! Configuration system for portfolio-host
//!
//! Reads config from ~/.config/portfolio/config.toml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use portfolio_core::PageConfig;
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    /// Handed to the page as `window.PORTFOLIO_CONFIG`
    pub page: PageConfig,
}

const DEFAULT_CONFIG: &str = r#"# portfolio-host configuration

[server]
bind = "127.0.0.1"
port = 8080

[page]
# max_comments = 60
# ack_duration_ms = 3000
# effects_enabled = true
"#;

impl Config {
    /// Load from `path`, logging and falling back to defaults on failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using default configuration");
                Self::default()
            }
        }
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
            .join("config.toml")
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Create default config file if it doesn't exist
    pub fn create_default_if_missing(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        std::fs::write(path, DEFAULT_CONFIG).context("Failed to write default config")?;
        Ok(())
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.page.max_comments, 60);
    }

    #[test]
    fn test_default_file_parses_to_defaults() {
        assert_eq!(Config::parse(DEFAULT_CONFIG).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse("[server]\nport = 9000\n[page]\nack_duration_ms = 1500\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.page.ack_duration_ms, 1500);
        assert_eq!(config.page.trail_max_len, 20);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::parse("[server\nport = ").is_err());
    }
}
