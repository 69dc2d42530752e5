//! Print the policy answers for a role as JSON.
//!
//! Useful for checking what a panel will receive without standing up the
//! API:
//!
//! ```text
//! policy_dump --role SUP_ADM --feature admin_management
//! policy_dump --role AGENT --config policy.yaml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use oddsdesk_access::{accessible_roles, Policy, PolicyConfig, Role};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Dump access-policy answers for a role as JSON")]
struct Args {
    /// Role claim string (e.g. SUP_ADM).
    #[arg(long)]
    role: String,

    /// Optional YAML policy config; defaults to the built-in tables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also report the decision for this feature key.
    #[arg(long)]
    feature: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    let args = Args::parse();

    let policy = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            PolicyConfig::from_yaml(&raw)
                .context("failed to parse policy config")?
                .build()
                .context("invalid policy config")?
        }
        None => Policy::default(),
    };

    // Bad input to a diagnostic tool should fail loudly, unlike a request
    // path.
    let role = Role::from_claim(&args.role)?;

    let mut out = json!({
        "role": role,
        "display_name": role.display_name(),
        "hierarchy_index": role.index(),
        "accessible_roles": accessible_roles(role),
        "navigation": policy.navigation_for(role),
    });
    if let Some(key) = &args.feature {
        // Unknown feature keys fail loudly here too; only request paths
        // resolve them to a quiet deny.
        let gate = policy.gates().require(key)?;
        out["feature"] = json!({
            "key": key,
            "gate": gate,
            "allowed": policy.can_access_feature(role, key),
        });
    }

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
