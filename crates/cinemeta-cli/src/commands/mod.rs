//! Subcommand implementations.
//!
//! Each module owns its clap argument structs and a `run` entry point.
//! Output goes through `tracing::info!`.

pub mod catalog;
pub mod discover;
pub mod movie;
pub mod person;
pub mod search;
pub mod settings;
pub mod tv;

use std::fmt::Display;

use anyhow::{Context, Result};
use cinemeta_api::tmdb::TmdbClient;
use tracing::instrument;
use url::Url;

use crate::config::TmdbConfig;

/// Builds a `TmdbClient` from the effective `[tmdb]` settings.
///
/// # Errors
///
/// Returns an error if no credentials are configured, `base_url` does not
/// parse, or the client fails to build.
#[instrument(skip_all)]
pub fn build_client(config: &TmdbConfig) -> Result<TmdbClient> {
    let credentials = config.credentials().context(
        "no TMDB credentials: set TMDB_API_TOKEN or TMDB_API_KEY, or add them to config.toml",
    )?;

    let mut builder = TmdbClient::builder()
        .credentials(credentials)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
    if let Some(base_url) = config.base_url.as_deref() {
        let url = Url::parse(base_url).with_context(|| format!("invalid base_url: {base_url}"))?;
        builder = builder.base_url(url);
    }
    if let Some(language) = config.language.as_deref() {
        builder = builder.language(language);
    }
    if let Some(region) = config.region.as_deref() {
        builder = builder.region(region);
    }
    if let Some(include_adult) = config.include_adult {
        builder = builder.include_adult(include_adult);
    }

    builder.build().context("failed to build TMDB client")
}

/// Renders an optional value, `-` when absent.
pub fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("-"), |v| v.to_string())
}

/// Parses a comma-separated ID list (`18,53`).
///
/// # Errors
///
/// Returns an error if any element is not an unsigned integer.
pub fn parse_ids(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u64>().with_context(|| format!("invalid ID: {s}")))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_build_client_requires_credentials() {
        // Arrange
        let config = TmdbConfig::default();

        // Act
        let result = build_client(&config);

        // Assert
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no TMDB credentials"));
    }

    #[test]
    fn test_build_client_applies_base_url_and_language() {
        // Arrange
        let config = TmdbConfig {
            api_key: Some(String::from("key")),
            language: Some(String::from("ja-JP")),
            base_url: Some(String::from("http://127.0.0.1:9/3")),
            ..TmdbConfig::default()
        };

        // Act
        let client = build_client(&config).unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9/3/");
        assert_eq!(client.language(), Some("ja-JP"));
    }

    #[test]
    fn test_build_client_rejects_bad_base_url() {
        // Arrange
        let config = TmdbConfig {
            api_key: Some(String::from("key")),
            base_url: Some(String::from("not a url")),
            ..TmdbConfig::default()
        };

        // Act
        let result = build_client(&config);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_or_dash() {
        // Arrange & Act & Assert
        assert_eq!(or_dash(Some(139)), "139");
        assert_eq!(or_dash(None::<u32>), "-");
    }

    #[test]
    fn test_parse_ids() {
        // Arrange & Act
        let ids = parse_ids("18, 53,,80").unwrap();

        // Assert
        assert_eq!(ids, vec![18, 53, 80]);
        assert!(parse_ids("18,drama").is_err());
    }
}
