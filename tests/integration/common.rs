use std::{
    path::Path,
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_warpcord");

/// Run the binary against an isolated config file.
pub fn run_warpcord(config_path: &Path, args: &[&str]) -> Result<Output> {
    Command::new(BINARY_PATH)
        .arg("--config")
        .arg(config_path)
        .args(args)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::null())
        .output()
        .context("failed to run warpcord binary")
}

/// Run the binary with an empty environment from `cwd`, without `--config`.
pub fn run_warpcord_without_env(cwd: &Path, args: &[&str]) -> Result<Output> {
    Command::new(BINARY_PATH)
        .args(args)
        .env_clear()
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .context("failed to run warpcord binary")
}

pub fn stdout_json(output: &Output) -> Result<serde_json::Value> {
    serde_json::from_slice(&output.stdout).with_context(|| {
        format!(
            "stdout is not JSON: {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
