//! `config` subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Subcommand;

use crate::config::{AppConfig, resolve_config_path};

/// Arguments for the `config` subcommand.
#[derive(Debug, clap::Args)]
pub struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Debug, Subcommand)]
enum ConfigSubcommands {
    /// Print the effective configuration with secrets masked.
    Show,
    /// Print the config file path.
    Path,
    /// Write a starter config file.
    Init(InitArgs),
}

/// Arguments for `config init`.
#[derive(Debug, clap::Args)]
struct InitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

/// Runs a `config` subcommand.
///
/// Only `show` reads the existing file, so `init --force` can replace a
/// file that no longer parses.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved, the file exists
/// on `init` without `--force`, or loading, serialization or writing fails.
pub fn run(cmd: &ConfigCommand, dir: Option<&PathBuf>, language: Option<&str>) -> Result<()> {
    match &cmd.command {
        ConfigSubcommands::Show => show(&AppConfig::load_effective(dir, language)?),
        ConfigSubcommands::Path => {
            tracing::info!("{}", resolve_config_path(dir)?.display());
            Ok(())
        }
        ConfigSubcommands::Init(args) => init(args, dir),
    }
}

fn show(config: &AppConfig) -> Result<()> {
    let masked = AppConfig {
        tmdb: config.tmdb.masked(),
    };
    let rendered = toml::to_string_pretty(&masked).context("failed to serialize config")?;
    for line in rendered.lines() {
        tracing::info!("{line}");
    }
    Ok(())
}

fn init(args: &InitArgs, dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;
    if path.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }
    AppConfig::template().save(&path)?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_path_buf();
        let path = dir_path.join("config.toml");
        std::fs::write(&path, "[tmdb]\napi_key = \"keep\"\n").unwrap();

        // Act
        let refused = init(&InitArgs { force: false }, Some(&dir_path));
        let forced = init(&InitArgs { force: true }, Some(&dir_path));

        // Assert
        assert!(refused.unwrap_err().to_string().contains("--force"));
        assert!(forced.is_ok());
        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, AppConfig::template());
    }

    #[test]
    fn test_init_force_replaces_unparsable_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_path_buf();
        let path = dir_path.join("config.toml");
        std::fs::write(&path, "[tmdb\napi_key = ").unwrap();
        let init_force = ConfigCommand {
            command: ConfigSubcommands::Init(InitArgs { force: true }),
        };
        let show = ConfigCommand {
            command: ConfigSubcommands::Show,
        };

        // Act
        let broken_show = run(&show, Some(&dir_path), None);
        let replaced = run(&init_force, Some(&dir_path), None);

        // Assert
        assert!(broken_show.unwrap_err().to_string().contains("failed to parse"));
        assert!(replaced.is_ok());
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::template());
        assert!(run(&show, Some(&dir_path), Some("ja-JP")).is_ok());
    }

    #[test]
    fn test_init_creates_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().join("fresh");

        // Act
        init(&InitArgs { force: false }, Some(&dir_path)).unwrap();

        // Assert
        assert!(dir_path.join("config.toml").exists());
    }
}
