//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate and assembled once at startup. Each sub-module represents a
//! logical configuration section.

pub mod audit;
pub mod logging;
pub mod rbac;

use serde::{Deserialize, Serialize};

use self::audit::AuditConfig;
use self::logging::LoggingConfig;
use self::rbac::RbacConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`GRC__RBAC__MODE=persist`).
pub const ENV_PREFIX: &str = "GRC";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Role, policy, and capability settings.
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Audit trail settings.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file merged with `GRC__` environment
    /// variables.
    ///
    /// A missing file is not an error; every section has defaults.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        tracing::debug!(
            path = %path,
            rbac_mode = %loaded.rbac.normalized_mode(),
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Load configuration from a file that must exist, without environment
    /// overrides. Used by `config validate`.
    pub fn load_strict(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
