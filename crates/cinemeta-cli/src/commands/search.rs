//! `search` subcommands.

use anyhow::{Context, Result};
use cinemeta_api::tmdb::LocalSearchApi;
use cinemeta_api::tmdb::params::{SearchMovieParams, SearchParams, SearchTvParams};
use cinemeta_api::tmdb::types::MediaItem;
use clap::Subcommand;
use tracing::instrument;

use super::{build_client, or_dash};
use crate::config::TmdbConfig;

/// Arguments for the `search` subcommand.
#[derive(Debug, clap::Args)]
pub struct SearchCommand {
    /// Search subcommand to run.
    #[command(subcommand)]
    command: SearchSubcommands,
}

/// Available search subcommands.
#[derive(Debug, Subcommand)]
enum SearchSubcommands {
    /// Search for movies.
    Movie(SearchMovieArgs),
    /// Search for TV series.
    Tv(SearchTvArgs),
    /// Search for people.
    Person(SearchTextArgs),
    /// Search movies, TV series and people at once.
    Multi(SearchTextArgs),
}

/// Arguments for `search movie`.
#[derive(Debug, clap::Args)]
struct SearchMovieArgs {
    /// Search query (e.g. "Fight Club").
    #[arg(long, required = true)]
    query: String,
    /// Filter by release year.
    #[arg(long)]
    year: Option<u32>,
    /// Result page (1-500).
    #[arg(long)]
    page: Option<u32>,
}

/// Arguments for `search tv`.
#[derive(Debug, clap::Args)]
struct SearchTvArgs {
    /// Search query (e.g. "Game of Thrones").
    #[arg(long, required = true)]
    query: String,
    /// Filter by first air date year.
    #[arg(long)]
    year: Option<u32>,
    /// Result page (1-500).
    #[arg(long)]
    page: Option<u32>,
}

/// Arguments for `search person` and `search multi`.
#[derive(Debug, clap::Args)]
struct SearchTextArgs {
    /// Search query.
    #[arg(long, required = true)]
    query: String,
    /// Result page (1-500).
    #[arg(long)]
    page: Option<u32>,
}

/// Runs a `search` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build, parameters are invalid,
/// or the API request fails.
pub async fn run(cmd: &SearchCommand, config: &TmdbConfig) -> Result<()> {
    match &cmd.command {
        SearchSubcommands::Movie(args) => run_movie(args, config).await,
        SearchSubcommands::Tv(args) => run_tv(args, config).await,
        SearchSubcommands::Person(args) => run_person(args, config).await,
        SearchSubcommands::Multi(args) => run_multi(args, config).await,
    }
}

#[instrument(skip_all)]
async fn run_movie(args: &SearchMovieArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let mut params = SearchMovieParams::new(&args.query);
    if let Some(year) = args.year {
        params = params.year(year);
    }
    if let Some(page) = args.page {
        params = params.page(page);
    }

    let response = client
        .search_movie(&params)
        .await
        .context("TMDB search/movie request failed")?;

    tracing::info!(
        "Total results: {} (page {}/{})",
        response.total_results,
        response.page,
        response.total_pages
    );
    tracing::info!("ID\tTitle\t\t\tOrigLang\tReleaseDate");
    for movie in &response.results {
        tracing::info!(
            "{}\t{}\t{}\t\t{}",
            movie.id,
            movie.title,
            movie.original_language,
            or_dash(movie.release_date),
        );
    }

    Ok(())
}

#[instrument(skip_all)]
async fn run_tv(args: &SearchTvArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let mut params = SearchTvParams::new(&args.query);
    if let Some(year) = args.year {
        params = params.year(year);
    }
    if let Some(page) = args.page {
        params = params.page(page);
    }

    let response = client
        .search_tv(&params)
        .await
        .context("TMDB search/tv request failed")?;

    tracing::info!("Total results: {}", response.total_results);
    tracing::info!("ID\tName\t\t\tOrigLang\tCountry\t\tFirstAirDate");
    for series in &response.results {
        tracing::info!(
            "{}\t{}\t{}\t\t{}\t\t{}",
            series.id,
            series.name,
            series.original_language,
            series.origin_country.join(","),
            or_dash(series.first_air_date),
        );
    }

    Ok(())
}

fn text_params(args: &SearchTextArgs) -> SearchParams {
    let params = SearchParams::new(&args.query);
    match args.page {
        Some(page) => params.page(page),
        None => params,
    }
}

#[instrument(skip_all)]
async fn run_person(args: &SearchTextArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let response = client
        .search_person(&text_params(args))
        .await
        .context("TMDB search/person request failed")?;

    tracing::info!("Total results: {}", response.total_results);
    tracing::info!("ID\tName\t\t\tDepartment\tKnownFor");
    for person in &response.results {
        let known_for: Vec<&str> = person.known_for.iter().map(MediaItem::title).collect();
        tracing::info!(
            "{}\t{}\t{}\t{}",
            person.id,
            person.name,
            person.known_for_department.as_deref().unwrap_or("-"),
            known_for.join(", "),
        );
    }

    Ok(())
}

#[instrument(skip_all)]
async fn run_multi(args: &SearchTextArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let response = client
        .search_multi(&text_params(args))
        .await
        .context("TMDB search/multi request failed")?;

    tracing::info!("Total results: {}", response.total_results);
    tracing::info!("Type\tID\tTitle\t\t\tDate");
    for item in &response.results {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            item.media_type(),
            item.id(),
            item.title(),
            or_dash(item.date()),
        );
    }

    Ok(())
}
