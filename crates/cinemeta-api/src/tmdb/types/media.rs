//! Polymorphic results discriminated by `media_type`.

use chrono::NaiveDate;
use serde::Deserialize;

use super::movie::MovieSummary;
use super::person::PersonSummary;
use super::tv::TvSummary;

/// A search, trending or list result that may be a movie, series or person.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MediaItem {
    /// `"media_type": "movie"`.
    Movie(MovieSummary),
    /// `"media_type": "tv"`.
    Tv(TvSummary),
    /// `"media_type": "person"`.
    Person(PersonSummary),
}

impl MediaItem {
    /// TMDB ID of the underlying resource.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Movie(m) => m.id,
            Self::Tv(t) => t.id,
            Self::Person(p) => p.id,
        }
    }

    /// Display title (movie title, series name or person name).
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Movie(m) => &m.title,
            Self::Tv(t) => &t.name,
            Self::Person(p) => &p.name,
        }
    }

    /// Wire value of the discriminator.
    #[must_use]
    pub const fn media_type(&self) -> &'static str {
        match self {
            Self::Movie(_) => "movie",
            Self::Tv(_) => "tv",
            Self::Person(_) => "person",
        }
    }

    /// Release or first air date; `None` for people.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Movie(m) => m.release_date,
            Self::Tv(t) => t.first_air_date,
            Self::Person(_) => None,
        }
    }

    /// Popularity score.
    #[must_use]
    pub const fn popularity(&self) -> f64 {
        match self {
            Self::Movie(m) => m.popularity,
            Self::Tv(t) => t.popularity,
            Self::Person(p) => p.popularity,
        }
    }
}

/// Movie appearance in a person's combined credits.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieCredit {
    /// The movie.
    #[serde(flatten)]
    pub movie: MovieSummary,
    /// Credit details.
    #[serde(flatten)]
    pub role: CreditRole,
}

/// Series appearance in a person's combined credits.
#[derive(Debug, Clone, Deserialize)]
pub struct TvCredit {
    /// The series.
    #[serde(flatten)]
    pub tv: TvSummary,
    /// Credit details.
    #[serde(flatten)]
    pub role: CreditRole,
    /// Episodes the person is credited in.
    #[serde(default)]
    pub episode_count: Option<u32>,
}

/// Role fields shared by cast and crew credits.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditRole {
    /// Credit ID.
    pub credit_id: String,
    /// Character played (cast credits).
    #[serde(default)]
    pub character: Option<String>,
    /// Job (crew credits).
    #[serde(default)]
    pub job: Option<String>,
    /// Department (crew credits).
    #[serde(default)]
    pub department: Option<String>,
}

/// A combined credit, discriminated by `media_type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MediaCredit {
    /// Movie credit.
    Movie(MovieCredit),
    /// Series credit.
    Tv(TvCredit),
}

impl MediaCredit {
    /// Credit role.
    #[must_use]
    pub const fn role(&self) -> &CreditRole {
        match self {
            Self::Movie(m) => &m.role,
            Self::Tv(t) => &t.role,
        }
    }

    /// Title of the credited movie or series.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Movie(m) => &m.movie.title,
            Self::Tv(t) => &t.tv.name,
        }
    }

    /// Release or first air date.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Movie(m) => m.movie.release_date,
            Self::Tv(t) => t.tv.first_air_date,
        }
    }
}
