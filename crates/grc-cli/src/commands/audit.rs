//! Audit rendering CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde_json::Value;

use crate::output::{self, OutputFormat};
use grc_audit::EventInput;
use grc_audit::sanitize::scrub;
use grc_core::error::AppError;

/// Arguments for audit commands
#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Audit subcommand
    #[command(subcommand)]
    pub command: AuditCommand,
}

/// Audit subcommands
#[derive(Debug, Subcommand)]
pub enum AuditCommand {
    /// Build the final event for a JSON event input without persisting it
    Render {
        /// JSON file with the event input, or `-` for stdin
        input: PathBuf,
    },
    /// Scrub binary payloads from an arbitrary JSON document
    Scrub {
        /// JSON file, or `-` for stdin
        input: PathBuf,
    },
}

/// Execute audit commands
pub fn execute(args: &AuditArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        AuditCommand::Render { input } => {
            let engine = super::load_engine(config_path)?;
            let input: EventInput = serde_json::from_str(&super::read_input(input)?)?;
            let event = engine.audit().build(input)?;

            match format {
                OutputFormat::Json => output::print_json(&event, "{}"),
                OutputFormat::Table => {
                    output::print_kv("ID", &event.id.to_string());
                    output::print_kv("Occurred at", &event.occurred_at.to_rfc3339());
                    output::print_kv("Action", &event.action);
                    output::print_kv("Category", &event.category);
                    output::print_kv(
                        "Entity",
                        &format!("{} {}", event.entity_type, event.entity_id),
                    );
                    output::print_kv("Message", event.message().unwrap_or("-"));
                }
            }
        }
        AuditCommand::Scrub { input } => {
            let value: Value = serde_json::from_str(&super::read_input(input)?)?;
            output::print_json(&scrub(value), "null");
        }
    }

    Ok(())
}
