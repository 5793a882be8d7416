//! `person` subcommands.

use anyhow::{Context, Result};
use cinemeta_api::tmdb::LocalPersonApi;
use cinemeta_api::tmdb::params::{PageParams, PersonAppend, PersonDetailsParams};
use cinemeta_api::tmdb::types::MediaCredit;
use clap::Subcommand;
use tracing::instrument;

use super::{build_client, or_dash};
use crate::config::TmdbConfig;

/// Arguments for the `person` subcommand.
#[derive(Debug, clap::Args)]
pub struct PersonCommand {
    /// Person subcommand to run.
    #[command(subcommand)]
    command: PersonSubcommands,
}

/// Available person subcommands.
#[derive(Debug, Subcommand)]
enum PersonSubcommands {
    /// Get person details.
    Details(PersonDetailsArgs),
    /// Get movie and TV credits, newest first.
    Credits(PersonIdArgs),
    /// List popular people.
    Popular(PopularArgs),
}

/// Arguments for `person details`.
#[derive(Debug, clap::Args)]
struct PersonDetailsArgs {
    /// TMDB person ID.
    #[arg(long, required = true)]
    id: u64,
    /// Also fetch external IDs.
    #[arg(long)]
    external_ids: bool,
}

/// Arguments for `person credits`.
#[derive(Debug, clap::Args)]
struct PersonIdArgs {
    /// TMDB person ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for `person popular`.
#[derive(Debug, clap::Args)]
struct PopularArgs {
    /// Result page (1-500).
    #[arg(long)]
    page: Option<u32>,
}

/// Runs a `person` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build, parameters are invalid,
/// or the API request fails.
pub async fn run(cmd: &PersonCommand, config: &TmdbConfig) -> Result<()> {
    match &cmd.command {
        PersonSubcommands::Details(args) => run_details(args, config).await,
        PersonSubcommands::Credits(args) => run_credits(args, config).await,
        PersonSubcommands::Popular(args) => run_popular(args, config).await,
    }
}

#[instrument(skip_all, fields(person_id = args.id))]
async fn run_details(args: &PersonDetailsArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let mut params = PersonDetailsParams::new();
    if args.external_ids {
        params = params.append(PersonAppend::ExternalIds);
    }

    let person = client
        .person_details(args.id, &params)
        .await
        .context("TMDB person details request failed")?;

    let today = chrono::Local::now().date_naive();
    tracing::info!("ID: {}", person.id);
    tracing::info!("Name: {}", person.name);
    tracing::info!(
        "Known For: {}",
        person.known_for_department.as_deref().unwrap_or("-")
    );
    tracing::info!("Gender: {}", person.gender);
    tracing::info!(
        "Born: {} ({})",
        or_dash(person.birthday),
        person.place_of_birth.as_deref().unwrap_or("-")
    );
    if let Some(deathday) = person.deathday {
        tracing::info!("Died: {deathday}");
    }
    tracing::info!("Age: {}", or_dash(person.age_at(today)));
    if !person.also_known_as.is_empty() {
        tracing::info!("Also Known As: {}", person.also_known_as.join(", "));
    }
    if let Some(ids) = &person.external_ids {
        tracing::info!("IMDb: {}", ids.imdb_id.as_deref().unwrap_or("-"));
        tracing::info!("Wikidata: {}", ids.wikidata_id.as_deref().unwrap_or("-"));
    }

    Ok(())
}

#[instrument(skip_all, fields(person_id = args.id))]
async fn run_credits(args: &PersonIdArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let credits = client
        .person_combined_credits(args.id, None)
        .await
        .context("TMDB person credits request failed")?;

    tracing::info!("Cast ({}):", credits.cast.len());
    print_credits(&credits.cast, |c| c.role().character.as_deref());
    tracing::info!("Crew ({}):", credits.crew.len());
    print_credits(&credits.crew, |c| c.role().job.as_deref());

    Ok(())
}

/// Logs credits newest first; undated credits go last.
fn print_credits<'a>(
    credits: &'a [MediaCredit],
    role: impl Fn(&'a MediaCredit) -> Option<&'a str>,
) {
    let mut sorted: Vec<&MediaCredit> = credits.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    for credit in sorted {
        let kind = match credit {
            MediaCredit::Movie(_) => "movie",
            MediaCredit::Tv(_) => "tv",
        };
        tracing::info!(
            "  {}\t{}\t{}\t{}",
            or_dash(credit.date()),
            kind,
            credit.title(),
            role(credit).unwrap_or("-"),
        );
    }
}

#[instrument(skip_all)]
async fn run_popular(args: &PopularArgs, config: &TmdbConfig) -> Result<()> {
    let client = build_client(config)?;

    let mut params = PageParams::new();
    if let Some(page) = args.page {
        params = params.page(page);
    }

    let page = client
        .person_popular(&params)
        .await
        .context("TMDB person popular request failed")?;

    tracing::info!("Page {}/{}", page.page, page.total_pages);
    tracing::info!("ID\tName\t\t\tDepartment\tPopularity");
    for person in &page.results {
        tracing::info!(
            "{}\t{}\t{}\t{:.1}",
            person.id,
            person.name,
            person.known_for_department.as_deref().unwrap_or("-"),
            person.popularity,
        );
    }

    Ok(())
}
