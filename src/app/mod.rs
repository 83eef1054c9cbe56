//! Session orchestration: the part a presentation layer talks to.

pub mod controller;
pub mod startup;

pub use controller::{Controller, ControllerError, LaunchOutcome, SaveFailurePolicy};
pub use startup::{run, AppExit, EXIT_LAUNCH, EXIT_SAVE, EXIT_VALIDATION};
