//! Entry point for WarpCord.
use std::process::ExitCode;

use clap::Parser;
use warpcord::{
    app::{self, AppExit},
    cli::LaunchArgs,
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), AppExit> {
    telemetry::init_tracing().map_err(AppExit::from_error)?;
    let profile = LaunchArgs::parse().build().map_err(AppExit::from_error)?;
    app::run(profile)
}
