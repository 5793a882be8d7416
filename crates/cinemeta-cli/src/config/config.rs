//! `AppConfig` struct and TOML read/write.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cinemeta_api::tmdb::Credentials;
use serde::{Deserialize, Serialize};

use super::paths::resolve_config_path;

/// Environment variable holding a v4 read access token.
pub const ENV_API_TOKEN: &str = "TMDB_API_TOKEN";

/// Environment variable holding a v3 API key.
pub const ENV_API_KEY: &str = "TMDB_API_KEY";

/// Placeholder shown instead of secrets.
const MASK: &str = "****";

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TMDB connection settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// `[tmdb]` section.
#[derive(Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct TmdbConfig {
    /// v4 read access token. Preferred over `api_key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// v3 API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Default response language (e.g. `ja-JP`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Default region (ISO 3166-1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Default adult content filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    /// API base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = self.masked();
        f.debug_struct("TmdbConfig")
            .field("api_token", &masked.api_token)
            .field("api_key", &masked.api_key)
            .field("language", &self.language)
            .field("region", &self.region)
            .field("include_adult", &self.include_adult)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl TmdbConfig {
    /// Credentials to authenticate with; the token wins over the key.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        non_blank(self.api_token.as_deref())
            .map(Credentials::Bearer)
            .or_else(|| non_blank(self.api_key.as_deref()).map(Credentials::ApiKey))
    }

    /// Copy with secrets replaced by a placeholder.
    #[must_use]
    pub fn masked(&self) -> Self {
        Self {
            api_token: self.api_token.as_ref().map(|_| String::from(MASK)),
            api_key: self.api_key.as_ref().map(|_| String::from(MASK)),
            ..self.clone()
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty()).map(String::from)
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Loads the config for `dir` with environment and `--language`
    /// overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved or the file cannot be
    /// read or parsed.
    pub fn load_effective(dir: Option<&PathBuf>, language: Option<&str>) -> Result<Self> {
        let mut config = Self::load(&resolve_config_path(dir)?)?.with_env_overrides();
        if let Some(language) = language {
            config.tmdb.language = Some(language.to_owned());
        }
        Ok(config)
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Starter config written by `config init`.
    #[must_use]
    pub fn template() -> Self {
        Self {
            tmdb: TmdbConfig {
                language: Some(String::from("en-US")),
                include_adult: Some(false),
                ..TmdbConfig::default()
            },
        }
    }

    /// Overrides credentials with non-empty values.
    #[must_use]
    pub fn with_overrides(mut self, api_token: Option<String>, api_key: Option<String>) -> Self {
        if let Some(token) = api_token.filter(|t| !t.trim().is_empty()) {
            self.tmdb.api_token = Some(token);
        }
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.tmdb.api_key = Some(key);
        }
        self
    }

    /// Applies `TMDB_API_TOKEN` / `TMDB_API_KEY` from the environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_API_TOKEN).ok(),
            std::env::var(ENV_API_KEY).ok(),
        )
    }
}
