//! Reading and writing the persisted proxy preference.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::lib::errors::ConfigStoreError;

use super::ProxyConfig;

/// File-backed store for a single [`ProxyConfig`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved preference, falling back to the default on any failure.
    ///
    /// A missing, unreadable, or corrupt file yields `ProxyConfig::default()`.
    pub fn load(&self) -> ProxyConfig {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    target: "warpcord::store",
                    path = %self.path.display(),
                    "No saved configuration; using defaults"
                );
                return ProxyConfig::default();
            }
            Err(err) => {
                warn!(
                    target: "warpcord::store",
                    path = %self.path.display(),
                    reason = %err,
                    "Failed to read saved configuration; using defaults"
                );
                return ProxyConfig::default();
            }
        };

        match ProxyConfig::from_json(&text) {
            Ok(config) => {
                info!(
                    target: "warpcord::store",
                    path = %self.path.display(),
                    proxy_type = %config.proxy_type,
                    "Loaded saved configuration"
                );
                config
            }
            Err(err) => {
                warn!(
                    target: "warpcord::store",
                    path = %self.path.display(),
                    reason = %err,
                    "Saved configuration is corrupt; discarding it and using defaults"
                );
                ProxyConfig::default()
            }
        }
    }

    /// Persist `config`, creating the parent directory if needed.
    pub fn save(&self, config: &ProxyConfig) -> Result<(), ConfigStoreError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| ConfigStoreError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let json = config
            .to_json()
            .map_err(|source| ConfigStoreError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, json).map_err(|source| ConfigStoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(
            target: "warpcord::store",
            path = %self.path.display(),
            proxy_type = %config.proxy_type,
            "Saved configuration"
        );
        Ok(())
    }
}
