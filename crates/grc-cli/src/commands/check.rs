//! Policy check command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use grc_core::error::AppError;
use grc_core::traits::RoleHolder;

/// Arguments for the policy check
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Policy key to evaluate (e.g. `core.audit.view`)
    pub policy: String,
    /// Role held by the subject; repeat for several
    #[arg(short, long = "role")]
    pub roles: Vec<String>,
    /// Evaluate with no subject at all
    #[arg(long, conflicts_with = "roles")]
    pub anonymous: bool,
}

/// Decision display row
#[derive(Debug, Serialize, Tabled)]
pub struct DecisionRow {
    /// Policy or capability key
    pub key: String,
    /// Enforcement mode
    pub mode: String,
    /// Outcome
    pub allowed: bool,
    /// Reason for the outcome
    pub reason: String,
}

/// Execute the policy check
pub fn execute(args: &CheckArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let engine = super::load_engine(config_path)?;
    let subject = super::subject(&args.roles, args.anonymous);
    let decision = engine.decide(
        subject.as_ref().map(|s| s as &dyn RoleHolder),
        &args.policy,
    );

    let row = DecisionRow {
        key: args.policy.clone(),
        mode: engine.evaluator().mode().to_string(),
        allowed: decision.allowed,
        reason: decision.reason.to_string(),
    };
    output::print_list(&[row], format);
    Ok(())
}
