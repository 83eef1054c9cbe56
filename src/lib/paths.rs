//! Per-user location of the persisted proxy preference.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Directory name created under the user's configuration home.
pub const APP_DIR_NAME: &str = "warpcord";
/// File name of the persisted proxy preference.
pub const CONFIG_FILE_NAME: &str = "config.json";

const XDG_CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";
const HOME_ENV: &str = "HOME";

/// Resolve the default config file path from the current environment.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/warpcord/config.json` when `XDG_CONFIG_HOME` is set.
/// 2. `$HOME/.config/warpcord/config.json` when `HOME` is set.
/// 3. `.config/warpcord/config.json` relative to the working directory.
pub fn default_config_path() -> PathBuf {
    default_config_path_from(env::var_os(XDG_CONFIG_HOME_ENV), env::var_os(HOME_ENV))
}

/// Resolve the config file path from explicit environment values (testable helper).
pub fn default_config_path_from(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> PathBuf {
    if let Some(base) = xdg_config_home.filter(|value| !value.is_empty()) {
        return PathBuf::from(base).join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
    }

    let home = home
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_default();
    home.join(".config").join(APP_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}
