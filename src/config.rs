//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Site content configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Directory with host pages and static assets
    #[serde(default = "default_site_root")]
    pub root: String,

    /// Review document: a path (relative to `root`) or an http(s) URL
    #[serde(default = "default_reviews")]
    pub reviews: String,

    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    #[serde(default = "default_detail_page")]
    pub detail_page: String,

    #[serde(default = "default_home_limit")]
    pub home_limit: usize,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    #[serde(default = "default_ack_dismiss")]
    pub ack_dismiss_secs: u64,
}

fn default_site_root() -> String {
    "./site".to_string()
}

fn default_reviews() -> String {
    "reviews.json".to_string()
}

fn default_placeholder_image() -> String {
    "images/placeholder.jpg".to_string()
}

fn default_detail_page() -> String {
    "reviews.html".to_string()
}

fn default_home_limit() -> usize {
    3
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_ack_dismiss() -> u64 {
    5
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_site_root(),
            reviews: default_reviews(),
            placeholder_image: default_placeholder_image(),
            detail_page: default_detail_page(),
            home_limit: default_home_limit(),
            fetch_timeout_secs: default_fetch_timeout(),
            ack_dismiss_secs: default_ack_dismiss(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path, else default locations, else environment
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("platebook").join("config.toml")),
            Some(PathBuf::from("./platebook.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Site overrides
        if let Some(root) = lookup("PLATEBOOK_SITE_ROOT") {
            self.site.root = root;
        }
        if let Some(reviews) = lookup("PLATEBOOK_REVIEWS") {
            self.site.reviews = reviews;
        }

        // Server overrides
        if let Some(host) = lookup("PLATEBOOK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PLATEBOOK_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("PLATEBOOK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PLATEBOOK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Platebook Configuration
#
# Environment variables override these settings:
# - PLATEBOOK_SITE_ROOT
# - PLATEBOOK_REVIEWS
# - PLATEBOOK_HOST
# - PLATEBOOK_PORT
# - PLATEBOOK_LOG_LEVEL
# - PLATEBOOK_LOG_FORMAT

[site]
# Directory with host pages (*.html) and static assets
root = "./site"

# Review document: path relative to root, or an http(s) URL
reviews = "reviews.json"

# Card image for reviews without photos
placeholder_image = "images/placeholder.jpg"

# Page holding the full reviews, target of homepage links
detail_page = "reviews.html"

# Number of cards on the homepage
home_limit = 3

# Timeout for remote review documents (seconds)
fetch_timeout_secs = 10

# How long the contact acknowledgment stays visible (seconds)
ack_dismiss_secs = 5

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8080

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
