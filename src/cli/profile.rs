//! LaunchProfile and config path resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::{
    app::SaveFailurePolicy,
    lib::paths::{default_config_path, is_nonempty_absolute},
    proxy::FormInput,
};

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_path: PathBuf,
    pub executable: PathBuf,
    pub input: FormInput,
    pub dry_run: bool,
    pub save_policy: SaveFailurePolicy,
}

/// Resolve config path in the order: CLI override → per-user default.
///
/// Relative overrides are resolved against the current directory; the
/// default is used as-is and never fails.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match override_path {
        Some(path) => path,
        None => return Ok(default_config_path()),
    };

    if is_nonempty_absolute(&path) {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_override_is_used_verbatim() {
        let path = resolve_config_path(Some(PathBuf::from("/etc/warpcord.json")))
            .expect("resolution succeeds");
        assert_eq!(path, PathBuf::from("/etc/warpcord.json"));
    }

    #[test]
    fn relative_override_is_joined_to_cwd() {
        let path =
            resolve_config_path(Some(PathBuf::from("local.json"))).expect("resolution succeeds");
        assert!(path.is_absolute());
        assert!(path.ends_with("local.json"));
    }
}
