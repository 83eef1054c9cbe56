//! CLI entrypoint module structure.
use std::path::Path;

use anyhow::Result;
use serde_json::json;

use crate::proxy::LaunchPlan;

pub mod args;
pub mod profile;

pub use args::LaunchArgs;
pub use profile::{resolve_config_path, LaunchProfile};

/// Format a dry-run launch plan as a pretty JSON payload.
pub fn render_plan_payload(plan: &LaunchPlan, config_path: &Path) -> Result<String> {
    let status = if plan.proxy_url.is_some() {
        "proxied"
    } else {
        "direct"
    };

    let payload = json!({
        "status": status,
        "config_path": config_path.to_string_lossy(),
        "launch": plan.summary(),
        "message": "dry-run: configuration was not saved and nothing was started"
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
