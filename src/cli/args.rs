//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    app::SaveFailurePolicy,
    proxy::{FormInput, ProxyType, DEFAULT_EXECUTABLE},
};

use super::{resolve_config_path, LaunchProfile};

/// Command-line arguments.
///
/// Omitted form fields keep the values from the saved configuration.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Launch Vesktop through a SOCKS5 or HTTP proxy",
    long_about = None
)]
pub struct LaunchArgs {
    /// Path to config.json (defaults to $XDG_CONFIG_HOME/warpcord/config.json).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Proxy type: none, socks5, or http.
    #[arg(long = "proxy-type")]
    pub proxy_type: Option<ProxyType>,
    /// Proxy IP address or host name.
    #[arg(long)]
    pub ip: Option<String>,
    /// Proxy port (1-65535).
    #[arg(long)]
    pub port: Option<String>,
    /// Print the launch plan as JSON without saving or starting anything.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Start the application even if the preference cannot be saved.
    #[arg(long, default_value_t = false)]
    pub continue_on_save_error: bool,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let config_path = resolve_config_path(self.config_override)?;
        let save_policy = if self.continue_on_save_error {
            SaveFailurePolicy::Continue
        } else {
            SaveFailurePolicy::Abort
        };

        Ok(LaunchProfile {
            config_path,
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            input: FormInput {
                proxy_type: self.proxy_type,
                ip: self.ip,
                port: self.port,
            },
            dry_run: self.dry_run,
            save_policy,
        })
    }
}
