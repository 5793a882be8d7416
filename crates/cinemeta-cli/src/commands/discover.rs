//! `discover` subcommands.

use anyhow::{Context, Result};
use cinemeta_api::tmdb::LocalDiscoverApi;
use cinemeta_api::tmdb::params::{
    DiscoverMovieParams, DiscoverTvParams, IdFilter, MovieSortBy, TvSortBy,
};
use clap::Subcommand;
use tracing::instrument;

use super::movie::print_movies;
use super::tv::print_series;
use super::{build_client, parse_ids};
use crate::config::TmdbConfig;

/// Arguments for the `discover` subcommand.
#[derive(Debug, clap::Args)]
pub struct DiscoverCommand {
    /// Discover subcommand to run.
    #[command(subcommand)]
    command: DiscoverSubcommands,
}

/// Available discover subcommands.
#[derive(Debug, Subcommand)]
enum DiscoverSubcommands {
    /// Discover movies by filters.
    Movie(DiscoverMovieArgs),
    /// Discover TV series by filters.
    Tv(DiscoverTvArgs),
}

/// Arguments for `discover movie`.
#[derive(Debug, clap::Args)]
struct DiscoverMovieArgs {
    /// Sort order (e.g. "popularity.desc", "primary_release_date.asc").
    #[arg(long)]
    sort_by: Option<String>,
    /// Primary release year.
    #[arg(long)]
    year: Option<u32>,
    /// Comma-separated genre IDs (e.g. "18,53").
    #[arg(long)]
    genres: Option<String>,
    /// Match any listed genre instead of all of them.
    #[arg(long)]
    any_genre: bool,
    /// Minimum vote count.
    #[arg(long)]
    min_votes: Option<u32>,
    /// Original language (ISO 639-1).
    #[arg(long)]
    original_language: Option<String>,
    /// Result page (1-500).
    #[arg(long)]
    page: Option<u32>,
}

/// Arguments for `discover tv`.
#[derive(Debug, clap::Args)]
struct DiscoverTvArgs {
    /// Sort order (e.g. "first_air_date.desc").
    #[arg(long)]
    sort_by: Option<String>,
    /// First air date year.
    #[arg(long)]
    year: Option<u32>,
    /// Comma-separated genre IDs.
    #[arg(long)]
    genres: Option<String>,
    /// Match any listed genre instead of all of them.
    #[arg(long)]
    any_genre: bool,
    /// Comma-separated network IDs (e.g. "213" for Netflix).
    #[arg(long)]
    networks: Option<String>,
    /// Result page (1-500).
    #[arg(long)]
    page: Option<u32>,
}

/// Runs a `discover` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build, filters do not parse or
/// validate, or the API request fails.
pub async fn run(cmd: &DiscoverCommand, config: &TmdbConfig) -> Result<()> {
    match &cmd.command {
        DiscoverSubcommands::Movie(args) => run_movie(args, config).await,
        DiscoverSubcommands::Tv(args) => run_tv(args, config).await,
    }
}

fn id_filter(raw: &str, any: bool) -> Result<IdFilter> {
    let ids = parse_ids(raw)?;
    Ok(if any {
        IdFilter::any(ids)
    } else {
        IdFilter::all(ids)
    })
}

fn movie_params(args: &DiscoverMovieArgs) -> Result<DiscoverMovieParams> {
    let mut params = DiscoverMovieParams::new();
    if let Some(raw) = args.sort_by.as_deref() {
        let sort_by: MovieSortBy = raw.parse().context("invalid --sort-by")?;
        params = params.sort_by(sort_by);
    }
    if let Some(year) = args.year {
        params = params.primary_release_year(year);
    }
    if let Some(raw) = args.genres.as_deref() {
        params = params.with_genres(id_filter(raw, args.any_genre)?);
    }
    if let Some(count) = args.min_votes {
        params = params.vote_count_gte(count);
    }
    if let Some(language) = args.original_language.as_deref() {
        params = params.with_original_language(language);
    }
    if let Some(page) = args.page {
        params = params.page(page);
    }
    Ok(params)
}

fn tv_params(args: &DiscoverTvArgs) -> Result<DiscoverTvParams> {
    let mut params = DiscoverTvParams::new();
    if let Some(raw) = args.sort_by.as_deref() {
        let sort_by: TvSortBy = raw.parse().context("invalid --sort-by")?;
        params = params.sort_by(sort_by);
    }
    if let Some(year) = args.year {
        params = params.first_air_date_year(year);
    }
    if let Some(raw) = args.genres.as_deref() {
        params = params.with_genres(id_filter(raw, args.any_genre)?);
    }
    if let Some(raw) = args.networks.as_deref() {
        params = params.with_networks(IdFilter::any(parse_ids(raw)?));
    }
    if let Some(page) = args.page {
        params = params.page(page);
    }
    Ok(params)
}

#[instrument(skip_all)]
async fn run_movie(args: &DiscoverMovieArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;
    let params = movie_params(args)?;

    let page = client
        .discover_movie(&params)
        .await
        .context("TMDB discover/movie request failed")?;

    tracing::info!(
        "Total results: {} (page {}/{})",
        page.total_results,
        page.page,
        page.total_pages
    );
    print_movies(&page.results);

    Ok(())
}

#[instrument(skip_all)]
async fn run_tv(args: &DiscoverTvArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;
    let params = tv_params(args)?;

    let page = client
        .discover_tv(&params)
        .await
        .context("TMDB discover/tv request failed")?;

    tracing::info!(
        "Total results: {} (page {}/{})",
        page.total_results,
        page.page,
        page.total_pages
    );
    print_series(&page.results);

    Ok(())
}
