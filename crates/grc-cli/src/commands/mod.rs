//! CLI command definitions and dispatch.

pub mod audit;
pub mod capability;
pub mod check;
pub mod config;
pub mod policies;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use grc_core::config::AppConfig;
use grc_core::error::AppError;
use grc_policy_engine::Engine;
use grc_rbac::Principal;

/// grc: inspect RBAC policies and render audit events
#[derive(Debug, Parser)]
#[command(name = "grc", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a policy for a set of roles
    Check(check::CheckArgs),
    /// Evaluate a capability for a set of roles
    Capability(capability::CapabilityArgs),
    /// Show the role catalog and effective policy map
    Policies(policies::PoliciesArgs),
    /// Render and sanitize audit events
    Audit(audit::AuditArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Check(args) => check::execute(args, &self.config, self.format),
            Commands::Capability(args) => capability::execute(args, &self.config, self.format),
            Commands::Policies(args) => policies::execute(args, &self.config, self.format),
            Commands::Audit(args) => audit::execute(args, &self.config, self.format),
            Commands::Config(args) => config::execute(args, &self.config, self.format),
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: build an engine from the configuration file
pub fn load_engine(config_path: &str) -> Result<Engine, AppError> {
    Ok(Engine::from_config(load_config(config_path)?))
}

/// Helper: the subject described by `--role` / `--anonymous`
pub fn subject(roles: &[String], anonymous: bool) -> Option<Principal> {
    (!anonymous).then(|| Principal::new(roles.iter().cloned()))
}

/// Helper: read a file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String, AppError> {
    if path == Path::new("-") {
        Ok(std::io::read_to_string(std::io::stdin())?)
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            AppError::validation(format!("Failed to read '{}': {e}", path.display()))
        })
    }
}
