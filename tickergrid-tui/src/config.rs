//! Client configuration — TOML file, defaults on missing or corrupt.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use tickergrid_core::api::ApiClient;

/// User-editable settings. Everything has a default, so an empty or
/// absent file is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the market-data API.
    pub api_url: String,
    /// Symbol loaded for the seasonal panel on startup.
    pub default_symbol: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: ApiClient::DEFAULT_BASE_URL.to_string(),
            default_symbol: "SPY".to_string(),
        }
    }
}

/// `~/.config/tickergrid/config.toml` (platform equivalent via `dirs`).
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tickergrid")
        .join("config.toml")
}

/// Load config from disk. Returns defaults if the file is missing or corrupt.
pub fn load(path: &Path) -> ClientConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => ClientConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_returns_defaults() {
        let config = load(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.api_url, ApiClient::DEFAULT_BASE_URL);
        assert_eq!(config.default_symbol, "SPY");
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("tickergrid_config_corrupt");
        let path = dir.join("config.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "api_url = [not toml").unwrap();

        let config = load(&path);
        assert_eq!(config.default_symbol, "SPY");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = std::env::temp_dir().join("tickergrid_config_partial");
        let path = dir.join("config.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "api_url = \"http://localhost:8080\"\n").unwrap();

        let config = load(&path);
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.default_symbol, "SPY");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
