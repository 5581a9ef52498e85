//! Panel configuration with validation and versioning.

use crate::service::{ServiceError, ServiceResult};

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Configuration version for migration support.
/// Increment when adding new fields or changing structure.
pub const CONFIG_VERSION: u32 = 1;

const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_SERVICE_COMMAND: &str = "promptx";
const DEFAULT_SERVICE_ARGS: &[&str] = &["serve"];
const DEFAULT_STARTUP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Config file format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Managed service settings
    #[serde(default)]
    pub service: ServiceSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Command used to launch the service
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments passed to the command
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Address the service listens on; also what the copy control copies
    #[serde(default = "default_address")]
    pub address: String,

    /// How long to probe the address before giving up on a start
    #[serde(default = "default_startup_timeout")]
    pub startup_timeout_secs: u64,

    /// Grace period between the polite stop signal and the forced kill
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log directory (relative to the data directory)
    #[serde(default = "default_log_dir")]
    pub directory: String,
}

// === Default Value Functions ===

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_command() -> String {
    DEFAULT_SERVICE_COMMAND.into()
}
fn default_args() -> Vec<String> {
    DEFAULT_SERVICE_ARGS.iter().map(|s| s.to_string()).collect()
}
fn default_address() -> String {
    easycue_core::text::DEFAULT_SERVICE_ADDRESS.into()
}
fn default_startup_timeout() -> u64 {
    DEFAULT_STARTUP_TIMEOUT_SECS
}
fn default_shutdown_timeout() -> u64 {
    DEFAULT_SHUTDOWN_TIMEOUT_SECS
}
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.into()
}
fn default_log_dir() -> String {
    DEFAULT_LOG_DIR.into()
}

// === Default Implementations ===

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            service: ServiceSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
            address: default_address(),
            startup_timeout_secs: default_startup_timeout(),
            shutdown_timeout_secs: default_shutdown_timeout(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_dir(),
        }
    }
}

// === Configuration Operations ===

impl PanelConfig {
    /// Load config from file, creating default if not exists.
    pub fn load_or_create(data_dir: &Path) -> ServiceResult<Self> {
        let config_path = data_dir.join(CONFIG_FILENAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let mut config: Self =
                toml::from_str(&content).map_err(|e| ServiceError::ConfigInvalid {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            // Migrate if needed
            if config.version < CONFIG_VERSION {
                config = Self::migrate(config)?;
                config.save(data_dir)?;
            }

            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(data_dir)?;
            Ok(config)
        }
    }

    /// Save config to file atomically.
    ///
    /// Uses write-to-temp-then-rename pattern to prevent
    /// partial writes if the process is interrupted.
    pub fn save(&self, data_dir: &Path) -> ServiceResult<()> {
        let config_path = data_dir.join(CONFIG_FILENAME);
        let content = toml::to_string_pretty(self).map_err(|e| ServiceError::ConfigInvalid {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = config_path.with_extension("toml.tmp");
        std::fs::write(&temp_path, &content)?;
        std::fs::rename(&temp_path, &config_path)?;

        Ok(())
    }

    /// Migrate config from older version.
    fn migrate(mut config: Self) -> ServiceResult<Self> {
        // Pre-versioning files carry version 0; their fields are already
        // compatible, they just need the stamp.
        if config.version == 0 {
            config.version = 1;
        }

        // Future migrations go here as:
        // if config.version == 1 {
        //     // migrate to version 2
        //     config.version = 2;
        // }

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.service.command.trim().is_empty() {
            return Err(ServiceError::ConfigInvalid {
                message: "Service command must not be empty".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.service.address.starts_with("http://")
            && !self.service.address.starts_with("https://")
        {
            return Err(ServiceError::ConfigInvalid {
                message: "Service address must be an http(s) URL".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.service.startup_timeout_secs == 0 {
            return Err(ServiceError::ConfigInvalid {
                message: "Startup timeout must be > 0".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.service.shutdown_timeout_secs == 0 {
            return Err(ServiceError::ConfigInvalid {
                message: "Shutdown timeout must be > 0".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
