//! Configuration loading for the advisory backend
//!
//! Settings resolve per-field in priority order:
//! 1. Environment variable (highest priority)
//! 2. TOML config file
//! 3. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Default bind address
const DEFAULT_HOST: &str = "127.0.0.1";
/// Default listen port
const DEFAULT_PORT: u16 = 3000;

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// OpenWeather API key; weather routes answer with stub data when unset
    pub openweather_api_key: Option<String>,
}

/// Raw on-disk configuration (all fields optional)
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    openweather_api_key: Option<String>,
}

impl ServiceConfig {
    /// Load configuration following the env-var / config-file / default ladder
    pub fn load() -> ServiceConfig {
        let file = load_config_file()
            .and_then(|path| {
                std::fs::read_to_string(&path)
                    .map_err(Error::Io)
                    .and_then(|content| {
                        toml::from_str::<FileConfig>(&content)
                            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
                    })
            })
            .unwrap_or_default();

        let host = std::env::var("KRISHI_HOST")
            .ok()
            .or(file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = std::env::var("KRISHI_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .or(file.port)
            .unwrap_or(DEFAULT_PORT);

        let openweather_api_key = std::env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or(file.openweather_api_key);

        ServiceConfig {
            host,
            port,
            openweather_api_key,
        }
    }

    /// Bind address string for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            openweather_api_key: None,
        }
    }
}

/// Locate the configuration file for the platform
fn load_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/krishimitra/config.toml first, then /etc/krishimitra/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("krishimitra").join("config.toml"));
        let system_config = PathBuf::from("/etc/krishimitra/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let config_path = dirs::config_dir()
        .map(|d| d.join("krishimitra").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {:?}",
            config_path
        )))
    }
}
