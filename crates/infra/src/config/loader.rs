//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the process environment, if one exists
//! 2. Attempts to load from environment variables
//! 3. If the required variable is missing, falls back to loading from file
//! 4. Probes multiple paths for config files
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `PROMOHUB_API_BASE_URL`: Prefix for relative API paths (required)
//! - `PROMOHUB_API_PROXY_TARGET`: Development proxy for `/api` paths
//! - `PROMOHUB_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `PROMOHUB_API_USER_AGENT`: User-Agent header value
//! - `PROMOHUB_SESSION_BACKEND`: `file`, `keychain` or `memory`
//! - `PROMOHUB_SESSION_DIR`: Directory for the file backend
//! - `PROMOHUB_SESSION_KEY`: Storage key (default `promohub.session`)
//! - `PROMOHUB_LOG_FILTER`: Default `EnvFilter` directive
//! - `PROMOHUB_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./promohub.json` or `./promohub.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use promohub_domain::{
    ApiConfig, Config, LoggingConfig, PromoHubError, Result, SessionBackend, SessionConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `PromoHubError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `PROMOHUB_API_BASE_URL` must be present; everything else is optional.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `PromoHubError::Config` if the base URL is missing or a value is
/// invalid.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("PROMOHUB_API_BASE_URL")?;
    let proxy_target = env_opt("PROMOHUB_API_PROXY_TARGET");
    let timeout_secs = env_opt("PROMOHUB_API_TIMEOUT_SECS")
        .map(|s| {
            s.parse::<u64>().map_err(|e| PromoHubError::Config(format!("Invalid timeout: {e}")))
        })
        .transpose()?;
    let user_agent = env_opt("PROMOHUB_API_USER_AGENT");

    let backend = env_opt("PROMOHUB_SESSION_BACKEND")
        .map(|s| s.parse::<SessionBackend>().map_err(PromoHubError::Config))
        .transpose()?
        .unwrap_or_default();
    let directory = env_opt("PROMOHUB_SESSION_DIR");
    let storage_key =
        env_opt("PROMOHUB_SESSION_KEY").unwrap_or_else(|| SessionConfig::default().storage_key);

    let logging_defaults = LoggingConfig::default();
    let filter = env_opt("PROMOHUB_LOG_FILTER").unwrap_or(logging_defaults.filter);
    let json = env_bool("PROMOHUB_LOG_JSON", logging_defaults.json);

    Ok(Config {
        api: ApiConfig { base_url, proxy_target, timeout_secs, user_agent },
        session: SessionConfig { backend, directory, storage_key },
        logging: LoggingConfig { filter, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `PromoHubError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PromoHubError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PromoHubError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PromoHubError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `PromoHubError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PromoHubError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PromoHubError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(PromoHubError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.json", "config.toml", "promohub.json", "promohub.toml"];
    let mut candidates = Vec::new();

    let mut push_from = |dir: &Path| {
        candidates.extend(NAMES.iter().map(|name| dir.join(name)));
        candidates.push(dir.join("../config.json"));
        candidates.push(dir.join("../config.toml"));
        candidates.push(dir.join("../../config.json"));
        candidates.push(dir.join("../../config.toml"));
    };

    if let Ok(cwd) = std::env::current_dir() {
        push_from(&cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            push_from(exe_dir);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `PromoHubError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        PromoHubError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; blank counts as unset
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
