//! Building and starting the target application with the proxy applied.

use std::{
    collections::BTreeMap,
    env,
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use serde::Serialize;
use tracing::{info, warn};

use crate::lib::errors::LaunchError;

use super::ProxyConfig;

/// Hard-coded location of the application WarpCord starts.
pub const DEFAULT_EXECUTABLE: &str = "/usr/bin/vesktop";

/// Lower-case proxy variables honoured by the target application.
pub const PROXY_ENV_KEYS: [&str; 2] = ["http_proxy", "https_proxy"];
/// Prefix of the Chromium-style proxy flag appended to the arguments.
pub const PROXY_SERVER_FLAG: &str = "--proxy-server=";

/// Everything needed to start the child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: BTreeMap<OsString, OsString>,
    pub proxy_url: Option<String>,
}

impl LaunchPlan {
    /// Combine the parent environment and base arguments with the proxy settings.
    ///
    /// Proxy variables and `--proxy-server` are only added when the proxy URL
    /// is non-empty.
    pub fn build<I>(program: &Path, base_args: &[String], parent_env: I, config: &ProxyConfig) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut env: BTreeMap<OsString, OsString> = parent_env.into_iter().collect();
        let mut args = base_args.to_vec();

        let url = config.proxy_url();
        let proxy_url = if url.is_empty() {
            None
        } else {
            for key in PROXY_ENV_KEYS {
                env.insert(OsString::from(key), OsString::from(&url));
            }
            args.push(format!("{PROXY_SERVER_FLAG}{url}"));
            Some(url)
        };

        Self {
            program: program.to_path_buf(),
            args,
            env,
            proxy_url,
        }
    }

    /// Summary for logs and dry-run output; excludes the inherited environment.
    pub fn summary(&self) -> LaunchSummary<'_> {
        let proxy_env = match self.proxy_url {
            Some(ref url) => PROXY_ENV_KEYS
                .iter()
                .map(|key| (*key, url.as_str()))
                .collect(),
            None => BTreeMap::new(),
        };

        LaunchSummary {
            program: self.program.to_string_lossy().into_owned(),
            args: &self.args,
            proxy_url: self.proxy_url.as_deref(),
            proxy_env,
        }
    }
}

/// Serializable view of a [`LaunchPlan`].
#[derive(Debug, Serialize)]
pub struct LaunchSummary<'a> {
    pub program: String,
    pub args: &'a [String],
    pub proxy_url: Option<&'a str>,
    pub proxy_env: BTreeMap<&'static str, &'a str>,
}

/// Process-creation capability used by [`Launcher`].
pub trait ProcessSpawner {
    /// Start the process described by `plan` without waiting for it; returns its pid.
    fn spawn(&self, plan: &LaunchPlan) -> io::Result<u32>;
}

/// Starts real processes via `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, plan: &LaunchPlan) -> io::Result<u32> {
        let child = Command::new(&plan.program)
            .args(&plan.args)
            .env_clear()
            .envs(&plan.env)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        // Dropping `Child` leaves the process running.
        Ok(child.id())
    }
}

/// Result of a successful start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub pid: u32,
    pub proxy_url: Option<String>,
}

/// Starts the target application with a proxy configuration applied.
#[derive(Debug, Clone, Default)]
pub struct Launcher<S = SystemSpawner> {
    spawner: S,
    base_args: Vec<String>,
}

impl Launcher<SystemSpawner> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ProcessSpawner> Launcher<S> {
    pub fn with_spawner(spawner: S) -> Self {
        Self {
            spawner,
            base_args: Vec::new(),
        }
    }

    /// Arguments passed before the proxy flag.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.base_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Build the plan for `executable` against the current process environment.
    pub fn plan(&self, executable: &Path, config: &ProxyConfig) -> LaunchPlan {
        LaunchPlan::build(executable, &self.base_args, env::vars_os(), config)
    }

    /// Start `executable` and return as soon as the process exists.
    ///
    /// The caller must validate `config` first.
    pub fn start(&self, executable: &Path, config: &ProxyConfig) -> Result<LaunchReport, LaunchError> {
        let plan = self.plan(executable, config);
        self.start_plan(&plan)
    }

    pub fn start_plan(&self, plan: &LaunchPlan) -> Result<LaunchReport, LaunchError> {
        match self.spawner.spawn(plan) {
            Ok(pid) => {
                info!(
                    target: "warpcord::launch",
                    program = %plan.program.display(),
                    pid,
                    proxy_url = plan.proxy_url.as_deref().unwrap_or(""),
                    args = ?plan.args,
                    "Started target application"
                );
                Ok(LaunchReport {
                    pid,
                    proxy_url: plan.proxy_url.clone(),
                })
            }
            Err(source) => {
                let error = LaunchError::from_io(plan.program.clone(), source);
                warn!(
                    target: "warpcord::launch",
                    program = %plan.program.display(),
                    reason = %error,
                    "Failed to start target application"
                );
                Err(error)
            }
        }
    }
}
