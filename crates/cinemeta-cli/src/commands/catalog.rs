//! Catalog lookups: `trending`, `genres`, `find`, `collection` and
//! `configuration`.

use anyhow::{Context, Result, bail};
use cinemeta_api::tmdb::LocalCatalogApi;
use cinemeta_api::tmdb::params::PageParams;
use cinemeta_api::tmdb::types::{ExternalSource, TimeWindow, TrendingTarget};
use clap::ValueEnum;
use tracing::instrument;

use super::movie::print_movies;
use super::tv::print_series;
use super::{build_client, or_dash};
use crate::config::TmdbConfig;

/// What `trending` lists.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TargetArg {
    /// Movies, series and people.
    All,
    /// Movies only.
    Movie,
    /// Series only.
    Tv,
    /// People only.
    Person,
}

impl From<TargetArg> for TrendingTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::All => Self::All,
            TargetArg::Movie => Self::Movie,
            TargetArg::Tv => Self::Tv,
            TargetArg::Person => Self::Person,
        }
    }
}

/// Trending window.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WindowArg {
    /// Last 24 hours.
    Day,
    /// Last 7 days.
    Week,
}

impl From<WindowArg> for TimeWindow {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Day => Self::Day,
            WindowArg::Week => Self::Week,
        }
    }
}

/// External ID sources accepted by `find`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SourceArg {
    /// IMDb (`tt...`, `nm...`).
    Imdb,
    /// TheTVDB.
    Tvdb,
    /// Facebook.
    Facebook,
    /// Instagram.
    Instagram,
    /// Twitter / X.
    Twitter,
    /// TikTok.
    Tiktok,
    /// Wikidata (`Q...`).
    Wikidata,
    /// YouTube.
    Youtube,
}

impl From<SourceArg> for ExternalSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Imdb => Self::Imdb,
            SourceArg::Tvdb => Self::Tvdb,
            SourceArg::Facebook => Self::Facebook,
            SourceArg::Instagram => Self::Instagram,
            SourceArg::Twitter => Self::Twitter,
            SourceArg::Tiktok => Self::Tiktok,
            SourceArg::Wikidata => Self::Wikidata,
            SourceArg::Youtube => Self::Youtube,
        }
    }
}

/// Arguments for `trending`.
#[derive(Debug, clap::Args)]
pub struct TrendingArgs {
    /// Media type to list.
    #[arg(long, value_enum, default_value = "all")]
    target: TargetArg,
    /// Trending window.
    #[arg(long, value_enum, default_value = "week")]
    window: WindowArg,
    /// Result page (1-500).
    #[arg(long)]
    page: Option<u32>,
}

/// Arguments for `genres`.
#[derive(Debug, clap::Args)]
pub struct GenresArgs {
    /// List TV genres instead of movie genres.
    #[arg(long)]
    tv: bool,
}

/// Arguments for `find`.
#[derive(Debug, clap::Args)]
pub struct FindArgs {
    /// External ID (e.g. "tt0137523").
    #[arg(long, required = true)]
    id: String,
    /// Source the ID belongs to.
    #[arg(long, value_enum, default_value = "imdb")]
    source: SourceArg,
}

/// Arguments for `collection`.
#[derive(Debug, clap::Args)]
pub struct CollectionArgs {
    /// TMDB collection ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for `configuration`.
#[derive(Debug, clap::Args)]
pub struct ConfigurationArgs {
    /// Image size for `--path` (e.g. "w500").
    #[arg(long, requires = "path")]
    size: Option<String>,
    /// Image file path to resolve (e.g. "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg").
    #[arg(long, requires = "size")]
    path: Option<String>,
}

/// Lists trending movies, series or people.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
pub async fn run_trending(args: &TrendingArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let mut params = PageParams::new();
    if let Some(page) = args.page {
        params = params.page(page);
    }

    let page = client
        .trending(args.target.into(), args.window.into(), &params)
        .await
        .context("TMDB trending request failed")?;

    tracing::info!("Page {}/{}", page.page, page.total_pages);
    tracing::info!("Type\tID\tTitle\t\t\tDate\tPopularity");
    for item in &page.results {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{:.1}",
            item.media_type(),
            item.id(),
            item.title(),
            or_dash(item.date()),
            item.popularity(),
        );
    }

    Ok(())
}

/// Lists movie or TV genres.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
pub async fn run_genres(args: &GenresArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let list = if args.tv {
        client.tv_genres(None).await
    } else {
        client.movie_genres(None).await
    }
    .context("TMDB genre list request failed")?;

    tracing::info!("ID\tName");
    for genre in &list.genres {
        tracing::info!("{}\t{}", genre.id, genre.name);
    }

    Ok(())
}

/// Looks up TMDB records by external ID.
///
/// # Errors
///
/// Returns an error if the client fails to build, the API request fails,
/// or nothing matches.
#[instrument(skip_all, fields(external_id = %args.id))]
pub async fn run_find(args: &FindArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let found = client
        .find_by_external_id(&args.id, args.source.into(), None)
        .await
        .context("TMDB find request failed")?;

    if found.is_empty() {
        bail!("no TMDB records match {}", args.id);
    }
    if !found.movie_results.is_empty() {
        print_movies(&found.movie_results);
    }
    if !found.tv_results.is_empty() {
        print_series(&found.tv_results);
    }
    for person in &found.person_results {
        tracing::info!("person\t{}\t{}", person.id, person.name);
    }
    for episode in &found.tv_episode_results {
        tracing::info!(
            "episode\t{}\tS{:02}E{:02}\t{}",
            episode.id,
            episode.season_number,
            episode.episode_number,
            episode.name
        );
    }

    Ok(())
}

/// Shows a collection and its parts in release order.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all, fields(collection_id = args.id))]
pub async fn run_collection(args: &CollectionArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let collection = client
        .collection_details(args.id, None)
        .await
        .context("TMDB collection request failed")?;

    tracing::info!("{} ({} parts)", collection.name, collection.parts.len());
    for part in collection.parts_in_release_order() {
        tracing::info!(
            "  {}\t{}\t{}",
            or_dash(part.release_date),
            part.id,
            part.title
        );
    }

    Ok(())
}

/// Shows image CDN settings, or resolves one image URL.
///
/// # Errors
///
/// Returns an error if the client fails to build, the API request fails,
/// or the image size is not offered.
#[instrument(skip_all)]
pub async fn run_configuration(args: &ConfigurationArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let configuration = client
        .configuration()
        .await
        .context("TMDB configuration request failed")?;
    let images = &configuration.images;

    if let (Some(size), Some(path)) = (args.size.as_deref(), args.path.as_deref()) {
        let url = images
            .image_url(size, path)
            .context("failed to build image URL")?;
        tracing::info!("{url}");
        return Ok(());
    }

    tracing::info!("Secure Base URL: {}", images.secure_base_url);
    tracing::info!("Poster Sizes: {}", images.poster_sizes.join(", "));
    tracing::info!("Backdrop Sizes: {}", images.backdrop_sizes.join(", "));
    tracing::info!("Profile Sizes: {}", images.profile_sizes.join(", "));
    tracing::info!("Still Sizes: {}", images.still_sizes.join(", "));
    tracing::info!("Logo Sizes: {}", images.logo_sizes.join(", "));

    Ok(())
}
