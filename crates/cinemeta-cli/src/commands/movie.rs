//! `movie` subcommands.

use anyhow::{Context, Result};
use cinemeta_api::tmdb::LocalMovieApi;
use cinemeta_api::tmdb::params::{MovieAppend, MovieDetailsParams, PageParams};
use cinemeta_api::tmdb::types::{MovieListKind, MovieSummary};
use clap::{Subcommand, ValueEnum};
use tracing::instrument;

use super::{build_client, or_dash};
use crate::config::TmdbConfig;

/// Cast members shown by `movie details --append credits`.
const TOP_CAST: usize = 5;

/// Arguments for the `movie` subcommand.
#[derive(Debug, clap::Args)]
pub struct MovieCommand {
    /// Movie subcommand to run.
    #[command(subcommand)]
    command: MovieSubcommands,
}

/// Available movie subcommands.
#[derive(Debug, Subcommand)]
enum MovieSubcommands {
    /// Get movie details.
    Details(MovieDetailsArgs),
    /// Get the cast and crew of a movie.
    Credits(MovieIdArgs),
    /// List popular, top rated, now playing or upcoming movies.
    List(MovieListArgs),
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
    /// Release dates and certifications per country.
    ReleaseDates,
    /// IMDb and other external IDs.
    ExternalIds,
}

impl From<AppendArg> for MovieAppend {
    fn from(arg: AppendArg) -> Self {
        match arg {
            AppendArg::Credits => Self::Credits,
            AppendArg::Images => Self::Images,
            AppendArg::Videos => Self::Videos,
            AppendArg::Keywords => Self::Keywords,
            AppendArg::Recommendations => Self::Recommendations,
            AppendArg::Similar => Self::Similar,
            AppendArg::ReleaseDates => Self::ReleaseDates,
            AppendArg::ExternalIds => Self::ExternalIds,
        }
    }
}

/// Movie list endpoints.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListArg {
    /// Most popular.
    Popular,
    /// Highest rated.
    TopRated,
    /// In theaters now.
    NowPlaying,
    /// Releasing soon.
    Upcoming,
}

/// Arguments for `movie details`.
#[derive(Debug, clap::Args)]
struct MovieDetailsArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,
    /// Comma-separated sub-resources to embed (e.g. "credits,videos").
    #[arg(long, value_enum, value_delimiter = ',')]
    append: Vec<AppendArg>,
}

/// Arguments for `movie credits`.
#[derive(Debug, clap::Args)]
struct MovieIdArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for `movie list`.
#[derive(Debug, clap::Args)]
struct MovieListArgs {
    /// Which list to fetch.
    #[arg(long, value_enum, default_value = "popular")]
    kind: ListArg,
    /// Result page (1-500).
    #[arg(long)]
    page: Option<u32>,
}

/// Runs a `movie` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build, parameters are invalid,
/// or the API request fails.
pub async fn run(cmd: &MovieCommand, config: &TmdbConfig) -> Result<()> {
    match &cmd.command {
        MovieSubcommands::Details(args) => run_details(args, config).await,
        MovieSubcommands::Credits(args) => run_credits(args, config).await,
        MovieSubcommands::List(args) => run_list(args, config).await,
    }
}

#[instrument(skip_all, fields(movie_id = args.id))]
async fn run_details(args: &MovieDetailsArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let params = args
        .append
        .iter()
        .fold(MovieDetailsParams::new(), |params, arg| {
            params.append(MovieAppend::from(*arg))
        });

    let details = client
        .movie_details(args.id, &params)
        .await
        .context("TMDB movie details request failed")?;

    let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
    tracing::info!("ID: {}", details.id);
    tracing::info!("Title: {}", details.title);
    tracing::info!("Original Title: {}", details.original_title);
    tracing::info!("Release Date: {}", or_dash(details.release_date));
    tracing::info!("Runtime: {} min", or_dash(details.runtime));
    tracing::info!("Genres: {}", genres.join(", "));
    tracing::info!("Status: {}", details.status.as_deref().unwrap_or("-"));
    tracing::info!("Tagline: {}", details.tagline.as_deref().unwrap_or("-"));
    tracing::info!("IMDb: {}", details.imdb_id.as_deref().unwrap_or("-"));

    if let Some(credits) = &details.credits {
        let directors: Vec<&str> = credits
            .crew_with_job("Director")
            .map(|c| c.name.as_str())
            .collect();
        tracing::info!("Director: {}", directors.join(", "));
        for member in credits.cast.iter().take(TOP_CAST) {
            tracing::info!(
                "  {} as {}",
                member.name,
                member.character.as_deref().unwrap_or("-")
            );
        }
    }

    if let Some(release_dates) = &details.release_dates {
        let country = config.region.as_deref().unwrap_or("US");
        let certification = release_dates
            .for_country(country)
            .and_then(|c| c.certification());
        tracing::info!("Certification ({country}): {}", certification.unwrap_or("-"));
    }

    if let Some(videos) = &details.videos {
        for video in &videos.results {
            tracing::info!(
                "  [{}] {} {}",
                video.video_type,
                video.name,
                video.watch_url().as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}

#[instrument(skip_all, fields(movie_id = args.id))]
async fn run_credits(args: &MovieIdArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let credits = client
        .movie_credits(args.id, None)
        .await
        .context("TMDB movie credits request failed")?;

    tracing::info!("Cast ({}):", credits.cast.len());
    for member in &credits.cast {
        tracing::info!(
            "  {}\t{}\t{}",
            member.id,
            member.name,
            member.character.as_deref().unwrap_or("-")
        );
    }
    tracing::info!("Crew ({}):", credits.crew.len());
    for member in &credits.crew {
        tracing::info!(
            "  {}\t{}\t{} / {}",
            member.id,
            member.name,
            member.department,
            member.job
        );
    }

    Ok(())
}

#[instrument(skip_all)]
async fn run_list(args: &MovieListArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let mut params = PageParams::new();
    if let Some(page) = args.page {
        params = params.page(page);
    }

    let page = match args.kind {
        ListArg::Popular => client.movie_list(MovieListKind::Popular, &params).await,
        ListArg::TopRated => client.movie_list(MovieListKind::TopRated, &params).await,
        ListArg::NowPlaying => client.movie_now_playing(&params).await.map(|dated| {
            tracing::info!(
                "Window: {} .. {}",
                or_dash(dated.dates.minimum),
                or_dash(dated.dates.maximum)
            );
            dated.paged
        }),
        ListArg::Upcoming => client.movie_upcoming(&params).await.map(|dated| dated.paged),
    }
    .context("TMDB movie list request failed")?;

    tracing::info!(
        "Page {}/{} ({} results)",
        page.page,
        page.total_pages,
        page.total_results
    );
    print_movies(&page.results);

    Ok(())
}

/// Logs one line per movie.
pub fn print_movies(movies: &[MovieSummary]) {
    tracing::info!("ID\tTitle\t\t\tReleaseDate\tVotes");
    for movie in movies {
        tracing::info!(
            "{}\t{}\t{}\t{:.1} ({})",
            movie.id,
            movie.title,
            or_dash(movie.release_date),
            movie.vote_average,
            movie.vote_count,
        );
    }
}
