//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use grc_core::config::AppConfig;
use grc_core::error::AppError;
use grc_rbac::{CapabilityFlags, RbacMode};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the configuration in effect, environment overrides included
    Show,
    /// Validate a configuration file without environment overrides
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match AppConfig::load_strict(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                for (key, value) in summary(&config) {
                    output::print_kv(key, &value);
                }
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}

/// Key facts about a configuration for display
fn summary(config: &AppConfig) -> Vec<(&'static str, String)> {
    let flags = CapabilityFlags::from_config(&config.rbac.capabilities);
    vec![
        ("RBAC mode", RbacMode::from_config(&config.rbac).to_string()),
        ("Static roles", config.rbac.roles.len().to_string()),
        ("Policy overrides", config.rbac.policies.len().to_string()),
        ("Capabilities enabled", flags.enabled().count().to_string()),
        ("Self-audit", config.audit.enabled.to_string()),
        (
            "Logging",
            format!("{} ({})", config.logging.level, config.logging.format),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_defaults() {
        let summary = summary(&AppConfig::default());
        assert_eq!(summary[0], ("RBAC mode", "stub".to_string()));
        assert_eq!(summary[1], ("Static roles", "4".to_string()));
        assert_eq!(summary[3], ("Capabilities enabled", "4".to_string()));
        assert_eq!(summary[5], ("Logging", "info (json)".to_string()));
    }
}
