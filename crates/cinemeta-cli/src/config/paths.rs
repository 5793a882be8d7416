//! Config file location.
//!
//! Lookup order: `--dir`, then `$XDG_CONFIG_HOME/cinemeta`, then
//! `$HOME/.config/cinemeta`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// File name inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the XDG config root.
const APP_DIR_NAME: &str = "cinemeta";

/// Resolves the config file path from `--dir` or the environment.
///
/// # Errors
///
/// Returns an error if `dir` is `None` and neither `XDG_CONFIG_HOME` nor
/// `HOME` is usable.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    config_path_from(dir.map(PathBuf::as_path), |name| std::env::var_os(name))
}

fn config_path_from(
    dir: Option<&Path>,
    env: impl Fn(&str) -> Option<OsString>,
) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.join(CONFIG_FILE_NAME));
    }

    // XDG requires an absolute path; anything else is ignored.
    let xdg = env("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute());
    if let Some(root) = xdg {
        return Ok(root.join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    }

    match env("HOME").filter(|home| !home.is_empty()) {
        Some(home) => Ok(PathBuf::from(home)
            .join(".config")
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)),
        None => bail!("cannot locate config.toml: HOME is not set; pass --dir"),
    }
}
