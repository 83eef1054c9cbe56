//! Telemetry initialization and launch-profile logging.

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload for logging how a launch attempt was configured.
#[derive(Debug, Serialize)]
pub struct LaunchProfileTelemetry<'a> {
    pub config_path: &'a str,
    pub executable: &'a str,
    pub dry_run: bool,
    pub continue_on_save_error: bool,
}

/// Emit the launch profile to `tracing`.
pub fn emit_launch_profile(telemetry: &LaunchProfileTelemetry<'_>) {
    info!(
        target: "warpcord::app",
        config_path = telemetry.config_path,
        executable = telemetry.executable,
        dry_run = telemetry.dry_run,
        continue_on_save_error = telemetry.continue_on_save_error,
        "Starting WarpCord"
    );
}
