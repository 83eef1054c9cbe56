//! Validate → save → start orchestration behind the presentation layer.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    lib::errors::{ConfigStoreError, LaunchError, ValidationError},
    proxy::{
        ConfigStore, FormInput, LaunchPlan, LaunchReport, Launcher, ProcessSpawner, ProxyConfig,
        SystemSpawner,
    },
};

/// What a failed save means for the launch that follows it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveFailurePolicy {
    /// Stop before starting the application.
    #[default]
    Abort,
    /// Start anyway and report the save failure as a warning.
    Continue,
}

/// Errors surfaced to the user by [`Controller::launch`].
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to save configuration: {0}")]
    Save(#[from] ConfigStoreError),
    #[error("Failed to launch: {0}")]
    Launch(#[from] LaunchError),
}

/// Successful launch, possibly with a preference that was not remembered.
#[derive(Debug)]
pub struct LaunchOutcome {
    pub report: LaunchReport,
    pub save_warning: Option<ConfigStoreError>,
}

/// Owns the in-memory preference for the lifetime of one session.
#[derive(Debug)]
pub struct Controller<S = SystemSpawner> {
    store: ConfigStore,
    launcher: Launcher<S>,
    executable: PathBuf,
    config: ProxyConfig,
    save_policy: SaveFailurePolicy,
}

impl<S: ProcessSpawner> Controller<S> {
    /// Load the saved preference from `store`; never fails.
    pub fn new(store: ConfigStore, launcher: Launcher<S>, executable: impl Into<PathBuf>) -> Self {
        let config = store.load();
        Self {
            store,
            launcher,
            executable: executable.into(),
            config,
            save_policy: SaveFailurePolicy::default(),
        }
    }

    pub fn with_save_policy(mut self, policy: SaveFailurePolicy) -> Self {
        self.save_policy = policy;
        self
    }

    /// Current preference, used to pre-fill the form.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn launcher(&self) -> &Launcher<S> {
        &self.launcher
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Apply and validate `input`, returning the plan without saving or starting.
    pub fn plan(&mut self, input: FormInput) -> Result<LaunchPlan, ControllerError> {
        self.apply_and_validate(input)?;
        Ok(self.launcher.plan(&self.executable, &self.config))
    }

    /// Apply `input`, validate, save, then start the application.
    ///
    /// On `Ok` the caller may end its session; on `Err` it should stay open.
    pub fn launch(&mut self, input: FormInput) -> Result<LaunchOutcome, ControllerError> {
        self.apply_and_validate(input)?;

        let save_warning = match self.store.save(&self.config) {
            Ok(()) => None,
            Err(err) if self.save_policy == SaveFailurePolicy::Continue => {
                warn!(
                    target: "warpcord::app",
                    reason = %err,
                    "Preference was not saved; launching anyway"
                );
                Some(err)
            }
            Err(err) => return Err(err.into()),
        };

        let report = self.launcher.start(&self.executable, &self.config)?;
        info!(
            target: "warpcord::app",
            pid = report.pid,
            proxy_type = %self.config.proxy_type,
            saved = save_warning.is_none(),
            "Launch completed"
        );
        Ok(LaunchOutcome {
            report,
            save_warning,
        })
    }

    fn apply_and_validate(&mut self, input: FormInput) -> Result<(), ValidationError> {
        self.config.apply_input(input);
        self.config.validate().map_err(|err| {
            info!(
                target: "warpcord::app",
                proxy_type = %self.config.proxy_type,
                reason = %err,
                "Rejected proxy settings"
            );
            err
        })
    }
}
