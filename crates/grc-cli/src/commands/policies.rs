//! Effective policy map command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use grc_core::error::AppError;

/// Arguments for the policy listing
#[derive(Debug, Args)]
pub struct PoliciesArgs {
    /// Show only policies whose key starts with this prefix
    #[arg(short, long)]
    pub prefix: Option<String>,
}

/// Policy display row
#[derive(Debug, Serialize, Tabled)]
struct PolicyRow {
    /// Policy key
    policy: String,
    /// Allowed roles after normalization
    roles: String,
    /// Configured roles missing from the catalog
    unknown: String,
}

/// Execute the policy listing
pub fn execute(
    args: &PoliciesArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let engine = super::load_engine(config_path)?;
    let mut snapshot = engine.effective_snapshot();
    if let Some(prefix) = &args.prefix {
        snapshot.policies.retain(|key, _| key.starts_with(prefix.as_str()));
        snapshot
            .unknown_roles
            .retain(|key, _| key.starts_with(prefix.as_str()));
    }

    match format {
        OutputFormat::Json => output::print_json(&snapshot, "{}"),
        OutputFormat::Table => {
            output::print_kv("Mode", snapshot.mode.as_str());
            output::print_kv("Fingerprint", &snapshot.fingerprint);
            output::print_kv("Role catalog", &output::join_cell(&snapshot.catalog));
            println!();

            let rows: Vec<PolicyRow> = snapshot
                .policies
                .iter()
                .map(|(policy, roles)| PolicyRow {
                    policy: policy.clone(),
                    roles: output::join_cell(roles),
                    unknown: snapshot
                        .unknown_roles
                        .get(policy)
                        .map(|u| output::join_cell(u))
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
