//! `tv` subcommands.

use anyhow::{Context, Result};
use cinemeta_api::tmdb::LocalTvApi;
use cinemeta_api::tmdb::params::{PageParams, TvAppend, TvDetailsParams};
use cinemeta_api::tmdb::types::{TvListKind, TvSummary};
use clap::{Subcommand, ValueEnum};
use tracing::instrument;

use super::{build_client, or_dash};
use crate::config::TmdbConfig;

/// Arguments for the `tv` subcommand.
#[derive(Debug, clap::Args)]
pub struct TvCommand {
    /// TV subcommand to run.
    #[command(subcommand)]
    command: TvSubcommands,
}

/// Available TV subcommands.
#[derive(Debug, Subcommand)]
enum TvSubcommands {
    /// Get series details.
    Details(TvDetailsArgs),
    /// Get a season and its episodes.
    Season(TvSeasonArgs),
    /// Get a single episode.
    Episode(TvEpisodeArgs),
    /// List popular, top rated, on the air or airing today series.
    List(TvListArgs),
}

/// Sub-resources to embed with `--append`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum AppendArg {
    /// Cast and crew.
    Credits,
    /// Posters, backdrops and logos.
    Images,
    /// Trailers and clips.
    Videos,
    /// Keywords.
    Keywords,
    /// Recommended titles.
    Recommendations,
    /// Similar titles.
    Similar,
    /// IMDb and other external IDs.
    ExternalIds,
}

impl From<AppendArg> for TvAppend {
    fn from(arg: AppendArg) -> Self {
        match arg {
            AppendArg::Credits => Self::Credits,
            AppendArg::Images => Self::Images,
            AppendArg::Videos => Self::Videos,
            AppendArg::Keywords => Self::Keywords,
            AppendArg::Recommendations => Self::Recommendations,
            AppendArg::Similar => Self::Similar,
            AppendArg::ExternalIds => Self::ExternalIds,
        }
    }
}

/// Series list endpoints.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListArg {
    /// Most popular.
    Popular,
    /// Highest rated.
    TopRated,
    /// Airing in the next 7 days.
    OnTheAir,
    /// Airing today.
    AiringToday,
}

impl From<ListArg> for TvListKind {
    fn from(arg: ListArg) -> Self {
        match arg {
            ListArg::Popular => Self::Popular,
            ListArg::TopRated => Self::TopRated,
            ListArg::OnTheAir => Self::OnTheAir,
            ListArg::AiringToday => Self::AiringToday,
        }
    }
}

/// Arguments for `tv details`.
#[derive(Debug, clap::Args)]
struct TvDetailsArgs {
    /// TMDB series ID.
    #[arg(long, required = true)]
    id: u64,
    /// Comma-separated sub-resources to embed (e.g. "credits,external-ids").
    #[arg(long, value_enum, value_delimiter = ',')]
    append: Vec<AppendArg>,
}

/// Arguments for `tv season`.
#[derive(Debug, clap::Args)]
struct TvSeasonArgs {
    /// TMDB series ID.
    #[arg(long, required = true)]
    id: u64,
    /// Season number (0 for specials).
    #[arg(long, required = true)]
    season: u32,
}

/// Arguments for `tv episode`.
#[derive(Debug, clap::Args)]
struct TvEpisodeArgs {
    /// TMDB series ID.
    #[arg(long, required = true)]
    id: u64,
    /// Season number.
    #[arg(long, required = true)]
    season: u32,
    /// Episode number.
    #[arg(long, required = true)]
    episode: u32,
}

/// Arguments for `tv list`.
#[derive(Debug, clap::Args)]
struct TvListArgs {
    /// Which list to fetch.
    #[arg(long, value_enum, default_value = "popular")]
    kind: ListArg,
    /// Result page (1-500).
    #[arg(long)]
    page: Option<u32>,
}

/// Runs a `tv` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build, parameters are invalid,
/// or the API request fails.
pub async fn run(cmd: &TvCommand, config: &TmdbConfig) -> Result<()> {
    match &cmd.command {
        TvSubcommands::Details(args) => run_details(args, config).await,
        TvSubcommands::Season(args) => run_season(args, config).await,
        TvSubcommands::Episode(args) => run_episode(args, config).await,
        TvSubcommands::List(args) => run_list(args, config).await,
    }
}

#[instrument(skip_all, fields(series_id = args.id))]
async fn run_details(args: &TvDetailsArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let params = args
        .append
        .iter()
        .fold(TvDetailsParams::new(), |params, arg| {
            params.append(TvAppend::from(*arg))
        });

    let details = client
        .tv_details(args.id, &params)
        .await
        .context("TMDB tv details request failed")?;

    let creators: Vec<&str> = details.created_by.iter().map(|c| c.name.as_str()).collect();
    let networks: Vec<&str> = details.networks.iter().map(|n| n.name.as_str()).collect();
    tracing::info!("ID: {}", details.id);
    tracing::info!("Name: {}", details.name);
    tracing::info!("Original Name: {}", details.original_name);
    tracing::info!(
        "Aired: {} .. {}",
        or_dash(details.first_air_date),
        or_dash(details.last_air_date)
    );
    tracing::info!(
        "Seasons: {} ({} episodes)",
        details.number_of_seasons,
        details.number_of_episodes
    );
    tracing::info!("Status: {}", details.status.as_deref().unwrap_or("-"));
    tracing::info!("Created By: {}", creators.join(", "));
    tracing::info!("Networks: {}", networks.join(", "));
    if let Some(next) = &details.next_episode_to_air {
        tracing::info!(
            "Next Episode: S{:02}E{:02} {} ({})",
            next.season_number,
            next.episode_number,
            next.name,
            or_dash(next.air_date)
        );
    }
    for season in &details.seasons {
        tracing::info!(
            "  S{:02}\t{}\t{} episodes\t{}",
            season.season_number,
            season.name,
            season.episode_count,
            or_dash(season.air_date)
        );
    }
    if let Some(ids) = &details.external_ids {
        tracing::info!(
            "IMDb: {}  TVDB: {}",
            ids.imdb_id.as_deref().unwrap_or("-"),
            or_dash(ids.tvdb_id)
        );
    }

    Ok(())
}

#[instrument(skip_all, fields(series_id = args.id, season = args.season))]
async fn run_season(args: &TvSeasonArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let season = client
        .tv_season(args.id, args.season, None)
        .await
        .context("TMDB tv season request failed")?;

    tracing::info!(
        "Season {}: {} ({} episodes)",
        season.season_number,
        season.name.as_deref().unwrap_or("-"),
        season.episodes.len()
    );
    tracing::info!("Ep\tAirDate\t\tRuntime\tName");
    for episode in &season.episodes {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            episode.episode_number,
            or_dash(episode.air_date),
            or_dash(episode.runtime),
            episode.name,
        );
    }

    Ok(())
}

#[instrument(
    skip_all,
    fields(series_id = args.id, season = args.season, episode = args.episode)
)]
async fn run_episode(args: &TvEpisodeArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let episode = client
        .tv_episode(args.id, args.season, args.episode, None)
        .await
        .context("TMDB tv episode request failed")?;

    tracing::info!(
        "S{:02}E{:02}: {}",
        episode.season_number,
        episode.episode_number,
        episode.name
    );
    tracing::info!("Air Date: {}", or_dash(episode.air_date));
    tracing::info!("Runtime: {} min", or_dash(episode.runtime));
    tracing::info!("Overview: {}", episode.overview.as_deref().unwrap_or("-"));
    for star in &episode.guest_stars {
        tracing::info!(
            "  Guest: {} as {}",
            star.name,
            star.character.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

#[instrument(skip_all)]
async fn run_list(args: &TvListArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let mut params = PageParams::new();
    if let Some(page) = args.page {
        params = params.page(page);
    }

    let page = client
        .tv_list(args.kind.into(), &params)
        .await
        .context("TMDB tv list request failed")?;

    tracing::info!(
        "Page {}/{} ({} results)",
        page.page,
        page.total_pages,
        page.total_results
    );
    print_series(&page.results);

    Ok(())
}

/// Logs one line per series.
pub fn print_series(series: &[TvSummary]) {
    tracing::info!("ID\tName\t\t\tFirstAirDate\tVotes");
    for item in series {
        tracing::info!(
            "{}\t{}\t{}\t{:.1} ({})",
            item.id,
            item.name,
            or_dash(item.first_air_date),
            item.vote_average,
            item.vote_count,
        );
    }
}
