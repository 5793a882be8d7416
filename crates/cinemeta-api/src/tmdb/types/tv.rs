//! TV series, season and episode response models.

use chrono::NaiveDate;
use serde::Deserialize;

use super::common::{ExternalIds, Genre, Keywords, Network, Paged, ProductionCompany};
use super::credits::{CastMember, Credits, CrewMember, Images, Videos};
use crate::tmdb::codec;

/// TV series as it appears in search results and lists.
#[derive(Debug, Clone, Deserialize)]
pub struct TvSummary {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    #[serde(default)]
    pub original_name: String,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// First air date.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub first_air_date: Option<NaiveDate>,
    /// Overview text.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Series creator.
#[derive(Debug, Clone, Deserialize)]
pub struct Creator {
    /// Person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Credit ID.
    pub credit_id: String,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Season summary within series details.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonSummary {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Number of episodes in this season.
    #[serde(default)]
    pub episode_count: u32,
    /// Air date of this season.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub air_date: Option<NaiveDate>,
    /// Season name.
    pub name: String,
    /// Season overview.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub overview: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
}

/// Episode reference in series details (`last_episode_to_air`, `next_episode_to_air`).
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeRef {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode name.
    pub name: String,
    /// Season number.
    pub season_number: u32,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Air date.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub air_date: Option<NaiveDate>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
}

/// Response of `tv/{series_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Spoken language codes (ISO 639-1).
    #[serde(default)]
    pub languages: Vec<String>,
    /// Creators.
    #[serde(default)]
    pub created_by: Vec<Creator>,
    /// First air date.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub first_air_date: Option<NaiveDate>,
    /// Last air date.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub last_air_date: Option<NaiveDate>,
    /// Typical episode runtimes in minutes.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// Total number of episodes.
    #[serde(default)]
    pub number_of_episodes: u32,
    /// Total number of seasons.
    #[serde(default)]
    pub number_of_seasons: u32,
    /// Season summaries.
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
    /// Last aired episode.
    #[serde(default)]
    pub last_episode_to_air: Option<EpisodeRef>,
    /// Next scheduled episode.
    #[serde(default)]
    pub next_episode_to_air: Option<EpisodeRef>,
    /// Status (e.g. `Returning Series`, `Ended`).
    #[serde(default)]
    pub status: Option<String>,
    /// Series type (e.g. `Scripted`, `Miniseries`).
    #[serde(default, rename = "type")]
    pub series_type: Option<String>,
    /// Tagline.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub tagline: Option<String>,
    /// Overview text.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub overview: Option<String>,
    /// Homepage URL.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub homepage: Option<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Networks.
    #[serde(default)]
    pub networks: Vec<Network>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Whether the show is still in production.
    #[serde(default)]
    pub in_production: bool,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,

    /// Appended `credits`.
    #[serde(default)]
    pub credits: Option<Credits>,
    /// Appended `images`.
    #[serde(default)]
    pub images: Option<Images>,
    /// Appended `videos`.
    #[serde(default)]
    pub videos: Option<Videos>,
    /// Appended `keywords`.
    #[serde(default)]
    pub keywords: Option<Keywords>,
    /// Appended `recommendations`.
    #[serde(default)]
    pub recommendations: Option<Paged<TvSummary>>,
    /// Appended `similar`.
    #[serde(default)]
    pub similar: Option<Paged<TvSummary>>,
    /// Appended `external_ids`.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

impl TvDetails {
    /// Season summary by number.
    #[must_use]
    pub fn season(&self, season_number: u32) -> Option<&SeasonSummary> {
        self.seasons
            .iter()
            .find(|s| s.season_number == season_number)
    }
}

// --- Seasons and episodes ---

/// Response of `tv/{series_id}/season/{season_number}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TvSeason {
    /// Internal `MongoDB` ID.
    #[serde(rename = "_id", default)]
    pub internal_id: Option<String>,
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Season name.
    #[serde(default)]
    pub name: Option<String>,
    /// Season overview.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub overview: Option<String>,
    /// Air date.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub air_date: Option<NaiveDate>,
    /// Episodes in this season.
    #[serde(default)]
    pub episodes: Vec<Episode>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
}

/// Response of `tv/{series_id}/season/{season_number}/episode/{episode_number}`,
/// and an element of `TvSeason::episodes`.
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Episode name.
    pub name: String,
    /// Episode overview.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub overview: Option<String>,
    /// Air date.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub air_date: Option<NaiveDate>,
    /// Season number.
    pub season_number: u32,
    /// Parent show ID (absent on the single-episode endpoint).
    #[serde(default)]
    pub show_id: Option<u64>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Production code.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub production_code: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Episode type (e.g. `standard`, `finale`).
    #[serde(default)]
    pub episode_type: Option<String>,
    /// Still image path.
    #[serde(default)]
    pub still_path: Option<String>,
    /// Crew for this episode.
    #[serde(default, deserialize_with = "codec::null_as_empty")]
    pub crew: Vec<CrewMember>,
    /// Guest stars.
    #[serde(default, deserialize_with = "codec::null_as_empty")]
    pub guest_stars: Vec<CastMember>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_tv_summary_from_search_result() {
        // Arrange
        let json = r#"{
            "adult": false, "backdrop_path": null, "genre_ids": [16, 35],
            "id": 120089, "origin_country": ["JP"], "original_language": "ja",
            "original_name": "SPY×FAMILY", "overview": "", "popularity": 101.5,
            "poster_path": "/3r4LYFuXrg3G8fepysr4xSLWnQL.jpg",
            "first_air_date": "2022-04-09", "name": "SPY×FAMILY",
            "vote_average": 8.5, "vote_count": 1800
        }"#;

        // Act
        let tv: TvSummary = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(tv.id, 120_089);
        assert!(tv.overview.is_none());
        assert_eq!(tv.first_air_date, NaiveDate::from_ymd_opt(2022, 4, 9));
    }

    #[test]
    fn test_episode_with_null_crew() {
        // Arrange
        let json = r#"{
            "id": 63056, "episode_number": 1, "name": "Winter Is Coming",
            "air_date": "2011-04-17", "season_number": 1, "runtime": 62,
            "crew": null, "guest_stars": []
        }"#;

        // Act
        let episode: Episode = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(episode.runtime, Some(62));
        assert!(episode.crew.is_empty());
        assert!(episode.show_id.is_none());
    }
}
