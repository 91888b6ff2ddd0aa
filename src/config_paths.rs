//! Where tintpad keeps its settings and logs
//!
//! `TINTPAD_CONFIG_DIR` wins when set. Otherwise the directory follows the
//! platform convention: `$XDG_CONFIG_HOME/tintpad` or `~/.config/tintpad`
//! on Unix and macOS, `%APPDATA%\tintpad` on Windows.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "tintpad";

/// Environment variable that points tintpad at a different settings directory
pub const CONFIG_DIR_ENV: &str = "TINTPAD_CONFIG_DIR";

pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(env::var_os(CONFIG_DIR_ENV).map(PathBuf::from), platform_base())
}

/// An explicit directory is used as is; a platform base gets `tintpad` appended
fn resolve_config_dir(explicit: Option<PathBuf>, base: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| base.map(|base| base.join(APP_DIR)))
}

#[cfg(target_os = "windows")]
fn platform_base() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_base() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// `config.yaml` inside the settings directory
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Daily log files go here
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path).map_err(|e| format!("Cannot create {}: {}", path.display(), e))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
