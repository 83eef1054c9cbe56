use std::process::ExitCode;

use anyhow::{Context, Error};

use crate::{
    cli::{render_plan_payload, LaunchProfile},
    lib::telemetry::{emit_launch_profile, LaunchProfileTelemetry},
    proxy::{ConfigStore, Launcher},
};

use super::{Controller, ControllerError};

// clap reserves 2 for usage errors.

/// Exit code for rejected proxy settings.
pub const EXIT_VALIDATION: u8 = 3;
/// Exit code when the preference could not be saved.
pub const EXIT_SAVE: u8 = 4;
/// Exit code when the target application could not be started.
pub const EXIT_LAUNCH: u8 = 5;

/// Bundles a user-facing error message with a process exit code.
#[derive(Debug)]
pub struct AppExit {
    message: String,
    exit_code: ExitCode,
    code: u8,
}

impl AppExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
            code: 1,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    /// Numeric form of [`AppExit::exit_code`].
    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ControllerError> for AppExit {
    fn from(err: ControllerError) -> Self {
        let code = match err {
            ControllerError::Validation(_) => EXIT_VALIDATION,
            ControllerError::Save(_) => EXIT_SAVE,
            ControllerError::Launch(_) => EXIT_LAUNCH,
        };
        Self {
            message: format!("error: {err}"),
            exit_code: ExitCode::from(code),
            code,
        }
    }
}

/// Run one launch attempt described by `profile`.
///
/// Returns only after the child has started (or, in dry-run mode, after the
/// plan was printed); the caller then ends the session.
pub fn run(profile: LaunchProfile) -> Result<(), AppExit> {
    emit_launch_profile(&LaunchProfileTelemetry {
        config_path: profile.config_path.to_string_lossy().as_ref(),
        executable: profile.executable.to_string_lossy().as_ref(),
        dry_run: profile.dry_run,
        continue_on_save_error: profile.save_policy == super::SaveFailurePolicy::Continue,
    });

    let mut controller = Controller::new(
        ConfigStore::new(profile.config_path.clone()),
        Launcher::new(),
        profile.executable.clone(),
    )
    .with_save_policy(profile.save_policy);

    if profile.dry_run {
        let plan = controller.plan(profile.input)?;
        let payload = render_plan_payload(&plan, controller.store().path())
            .context("failed to render launch plan")
            .map_err(AppExit::from_error)?;
        println!("{payload}");
        return Ok(());
    }

    let outcome = controller.launch(profile.input)?;
    if let Some(warning) = outcome.save_warning {
        eprintln!("warning: preference was not saved: {warning}");
    }
    Ok(())
}
