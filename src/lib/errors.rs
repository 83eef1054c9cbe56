use std::{io, path::PathBuf};

use thiserror::Error;

/// User-correctable problems with the proxy form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A proxy type other than `None` was selected without an address.
    #[error("missing IP")]
    MissingIp,
    /// The port is not an integer in 1-65535.
    #[error("invalid port")]
    InvalidPort,
}

/// Errors raised while persisting the proxy preference.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    /// Failed to create the directory that holds the config file.
    #[error("Failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Failed to encode the configuration as JSON.
    #[error("Failed to serialize configuration for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write configuration file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures to start the target application.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Executable not found at {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Permission denied while starting {path}: {source}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to start {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Classify an `io::Error` returned by process creation.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Spawn { path, source },
        }
    }

    /// Path of the executable that failed to start.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Spawn { path, .. } => path,
        }
    }
}
