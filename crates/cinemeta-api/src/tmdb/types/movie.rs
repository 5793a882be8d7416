//! Movie response models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use super::common::{
    ExternalIds, Genre, Keywords, Paged, ProductionCompany, ProductionCountry, SpokenLanguage,
};
use super::credits::{Credits, Images, Videos};
use super::enums::ReleaseType;
use crate::tmdb::codec;

/// Movie as it appears in search results and lists.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: String,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: String,
    /// Release date.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub release_date: Option<NaiveDate>,
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
    /// Video flag.
    #[serde(default)]
    pub video: bool,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Collection reference inside movie details.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionRef {
    /// Collection ID.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response of `movie/{movie_id}`.
///
/// Sub-resources requested through `append_to_response` land in the
/// optional fields at the bottom.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub imdb_id: Option<String>,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Tagline.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub tagline: Option<String>,
    /// Overview text.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub overview: Option<String>,
    /// Release status (`Released`, `Post Production`, ...).
    #[serde(default)]
    pub status: Option<String>,
    /// Primary release date.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub release_date: Option<NaiveDate>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Budget in USD.
    #[serde(default)]
    pub budget: u64,
    /// Revenue in USD.
    #[serde(default)]
    pub revenue: u64,
    /// Homepage URL.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub homepage: Option<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Collection the movie belongs to.
    #[serde(default)]
    pub belongs_to_collection: Option<CollectionRef>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
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
    /// Video flag.
    #[serde(default)]
    pub video: bool,
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
    pub recommendations: Option<Paged<MovieSummary>>,
    /// Appended `similar`.
    #[serde(default)]
    pub similar: Option<Paged<MovieSummary>>,
    /// Appended `release_dates`.
    #[serde(default)]
    pub release_dates: Option<ReleaseDates>,
    /// Appended `external_ids`.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

// --- Release dates ---

/// Response of `movie/{movie_id}/release_dates`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseDates {
    /// Movie ID (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Releases grouped by country.
    pub results: Vec<CountryReleases>,
}

impl ReleaseDates {
    /// Releases for one country (ISO 3166-1).
    #[must_use]
    pub fn for_country(&self, iso_3166_1: &str) -> Option<&CountryReleases> {
        self.results
            .iter()
            .find(|r| r.iso_3166_1.eq_ignore_ascii_case(iso_3166_1))
    }
}

/// Releases in a single country.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryReleases {
    /// Country (ISO 3166-1).
    pub iso_3166_1: String,
    /// Individual releases.
    pub release_dates: Vec<Release>,
}

impl CountryReleases {
    /// First non-empty certification, if any.
    #[must_use]
    pub fn certification(&self) -> Option<&str> {
        self.release_dates
            .iter()
            .map(|r| r.certification.as_str())
            .find(|c| !c.is_empty())
    }
}

/// A single release.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Age certification (may be empty).
    #[serde(default)]
    pub certification: String,
    /// Language (ISO 639-1).
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub iso_639_1: Option<String>,
    /// Free-form note.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub note: Option<String>,
    /// Release timestamp.
    #[serde(default, deserialize_with = "codec::optional_rfc3339")]
    pub release_date: Option<DateTime<Utc>>,
    /// Release type.
    #[serde(rename = "type")]
    pub release_type: ReleaseType,
}

// --- Account states ---

/// Response of `movie/{id}/account_states` and `tv/{id}/account_states`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountStates {
    /// Movie or series ID.
    pub id: u64,
    /// Marked as favorite.
    #[serde(default)]
    pub favorite: bool,
    /// On the watchlist.
    #[serde(default)]
    pub watchlist: bool,
    /// Rating given by the account, if any.
    #[serde(default, deserialize_with = "rated_value")]
    pub rated: Option<f32>,
}

/// `rated` is `false` when unrated and `{"value": 8.5}` when rated.
fn rated_value<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rated {
        Flag(bool),
        Value { value: f32 },
    }

    let raw: Option<Rated> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Rated::Value { value }) => Some(value),
        Some(Rated::Flag(_)) | None => None,
    })
}
