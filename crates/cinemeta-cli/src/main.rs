//! cinemeta - look up movies, TV series and people on TMDB.

/// Subcommand implementations.
mod commands;
/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::commands::catalog::{
    self, CollectionArgs, ConfigurationArgs, FindArgs, GenresArgs, TrendingArgs,
};
use crate::commands::discover::{self, DiscoverCommand};
use crate::commands::movie::{self, MovieCommand};
use crate::commands::person::{self, PersonCommand};
use crate::commands::search::{self, SearchCommand};
use crate::commands::settings::{self, ConfigCommand};
use crate::commands::tv::{self, TvCommand};
use crate::config::AppConfig;

/// CLI argument parser.
#[derive(Parser)]
#[command(name = "cinemeta", about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Response language for this run (e.g. "ja-JP").
    #[arg(long, global = true)]
    language: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Search movies, TV series and people.
    Search(SearchCommand),
    /// Movie lookups.
    Movie(MovieCommand),
    /// TV series lookups.
    Tv(TvCommand),
    /// Person lookups.
    Person(PersonCommand),
    /// Filter the catalog by genre, year, votes and more.
    Discover(DiscoverCommand),
    /// List trending titles and people.
    Trending(TrendingArgs),
    /// List genres.
    Genres(GenresArgs),
    /// Look up TMDB records by an external ID.
    Find(FindArgs),
    /// Show a movie collection.
    Collection(CollectionArgs),
    /// Show image CDN settings.
    Configuration(ConfigurationArgs),
    /// Manage the config file.
    Config(ConfigCommand),
    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if the config fails to load or subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "cinemeta",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    if let Commands::Config(cmd) = &cli.command {
        return settings::run(cmd, cli.dir.as_ref(), cli.language.as_deref());
    }

    let app_config = AppConfig::load_effective(cli.dir.as_ref(), cli.language.as_deref())?;
    let tmdb = &app_config.tmdb;

    match &cli.command {
        Commands::Search(cmd) => search::run(cmd, tmdb).await,
        Commands::Movie(cmd) => movie::run(cmd, tmdb).await,
        Commands::Tv(cmd) => tv::run(cmd, tmdb).await,
        Commands::Person(cmd) => person::run(cmd, tmdb).await,
        Commands::Discover(cmd) => discover::run(cmd, tmdb).await,
        Commands::Trending(args) => catalog::run_trending(args, tmdb).await,
        Commands::Genres(args) => catalog::run_genres(args, tmdb).await,
        Commands::Find(args) => catalog::run_find(args, tmdb).await,
        Commands::Collection(args) => catalog::run_collection(args, tmdb).await,
        Commands::Configuration(args) => catalog::run_configuration(args, tmdb).await,
        Commands::Config(_) | Commands::Completions { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
