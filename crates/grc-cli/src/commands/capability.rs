//! Capability check command.

use clap::Args;

use super::check::DecisionRow;
use crate::output::{self, OutputFormat};
use grc_core::error::AppError;
use grc_core::traits::RoleHolder;

/// Arguments for the capability check
#[derive(Debug, Args)]
pub struct CapabilityArgs {
    /// Capability key to evaluate (e.g. `core.audit.export`)
    pub key: String,
    /// Role held by the subject; repeat for several
    #[arg(short, long = "role")]
    pub roles: Vec<String>,
    /// Evaluate with no subject at all
    #[arg(long, conflicts_with = "roles")]
    pub anonymous: bool,
}

/// Execute the capability check
pub fn execute(
    args: &CapabilityArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let engine = super::load_engine(config_path)?;
    let subject = super::subject(&args.roles, args.anonymous);
    let decision = engine
        .evaluator()
        .decide_capability(subject.as_ref().map(|s| s as &dyn RoleHolder), &args.key);

    let row = DecisionRow {
        key: args.key.clone(),
        mode: engine.evaluator().mode().to_string(),
        allowed: decision.allowed,
        reason: decision.reason.to_string(),
    };
    output::print_list(&[row], format);
    Ok(())
}
