//! Enumerations shared by request and response models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gender as coded by TMDB (integer on the wire).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "u8")]
pub enum Gender {
    /// 0, and any code TMDB adds later.
    #[default]
    NotSpecified,
    /// 1.
    Female,
    /// 2.
    Male,
    /// 3.
    NonBinary,
}

impl From<u8> for Gender {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Female,
            2 => Self::Male,
            3 => Self::NonBinary,
            _ => Self::NotSpecified,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotSpecified => "not specified",
            Self::Female => "female",
            Self::Male => "male",
            Self::NonBinary => "non-binary",
        })
    }
}

/// Release type in `movie/{id}/release_dates` (integer on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum ReleaseType {
    /// 1.
    Premiere,
    /// 2.
    TheatricalLimited,
    /// 3.
    Theatrical,
    /// 4.
    Digital,
    /// 5.
    Physical,
    /// 6.
    Tv,
}

impl ReleaseType {
    /// Wire code, as used by the `with_release_type` discover filter.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Premiere => 1,
            Self::TheatricalLimited => 2,
            Self::Theatrical => 3,
            Self::Digital => 4,
            Self::Physical => 5,
            Self::Tv => 6,
        }
    }
}

impl TryFrom<u8> for ReleaseType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Premiere),
            2 => Ok(Self::TheatricalLimited),
            3 => Ok(Self::Theatrical),
            4 => Ok(Self::Digital),
            5 => Ok(Self::Physical),
            6 => Ok(Self::Tv),
            other => Err(format!("unknown release type: {other}")),
        }
    }
}

/// Media kind used in request bodies and result discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Movie.
    Movie,
    /// TV series.
    Tv,
}

impl MediaType {
    /// Path segment / wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media filter for `trending/{media_type}/{time_window}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TrendingTarget {
    /// Movies, TV series and people.
    #[default]
    All,
    /// Movies only.
    Movie,
    /// TV series only.
    Tv,
    /// People only.
    Person,
}

impl TrendingTarget {
    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Person => "person",
        }
    }
}

/// Trending window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    /// Last 24 hours.
    Day,
    /// Last 7 days.
    #[default]
    Week,
}

impl TimeWindow {
    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

/// External ID source accepted by `find/{external_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalSource {
    /// IMDb (`tt0137523`, `nm0000093`).
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
    /// Wikidata.
    Wikidata,
    /// YouTube.
    Youtube,
}

impl ExternalSource {
    /// Value of the `external_source` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Imdb => "imdb_id",
            Self::Tvdb => "tvdb_id",
            Self::Facebook => "facebook_id",
            Self::Instagram => "instagram_id",
            Self::Twitter => "twitter_id",
            Self::Tiktok => "tiktok_id",
            Self::Wikidata => "wikidata_id",
            Self::Youtube => "youtube_id",
        }
    }
}

/// Movie list endpoints under `movie/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieListKind {
    /// `movie/popular`.
    Popular,
    /// `movie/top_rated`.
    TopRated,
}

impl MovieListKind {
    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
        }
    }
}

/// TV list endpoints under `tv/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TvListKind {
    /// `tv/popular`.
    Popular,
    /// `tv/top_rated`.
    TopRated,
    /// `tv/on_the_air`.
    OnTheAir,
    /// `tv/airing_today`.
    AiringToday,
}

impl TvListKind {
    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::OnTheAir => "on_the_air",
            Self::AiringToday => "airing_today",
        }
    }
}

/// Per-account movie lists under `account/{account_id}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountListKind {
    /// `favorite/movies`.
    Favorite,
    /// `rated/movies`.
    Rated,
    /// `watchlist/movies`.
    Watchlist,
}

impl AccountListKind {
    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Favorite => "favorite",
            Self::Rated => "rated",
            Self::Watchlist => "watchlist",
        }
    }
}

/// Video hosting site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum VideoSite {
    /// `YouTube`.
    YouTube,
    /// `Vimeo`.
    Vimeo,
    /// Any other host.
    #[serde(other)]
    Other,
}
