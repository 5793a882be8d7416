//! Parameters for `discover/movie` and `discover/tv`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::tmdb::error::{Result, TmdbError};
use crate::tmdb::query::{
    ListSep, Query, check_bounds, check_page, check_range_f32, check_requires, check_year,
    non_blank,
};
use crate::tmdb::types::ReleaseType;

// --- Sorting ---

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

impl SortOrder {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A sortable discover field.
pub trait SortField: Copy + Eq + fmt::Debug + 'static {
    /// Every field, for parsing.
    const ALL: &'static [Self];

    /// Wire name.
    fn as_str(self) -> &'static str;
}

/// Sortable fields of `discover/movie`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MovieSortField {
    /// `popularity`.
    #[default]
    Popularity,
    /// `revenue`.
    Revenue,
    /// `primary_release_date`.
    PrimaryReleaseDate,
    /// `title`.
    Title,
    /// `original_title`.
    OriginalTitle,
    /// `vote_average`.
    VoteAverage,
    /// `vote_count`.
    VoteCount,
}

impl SortField for MovieSortField {
    const ALL: &'static [Self] = &[
        Self::Popularity,
        Self::Revenue,
        Self::PrimaryReleaseDate,
        Self::Title,
        Self::OriginalTitle,
        Self::VoteAverage,
        Self::VoteCount,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Revenue => "revenue",
            Self::PrimaryReleaseDate => "primary_release_date",
            Self::Title => "title",
            Self::OriginalTitle => "original_title",
            Self::VoteAverage => "vote_average",
            Self::VoteCount => "vote_count",
        }
    }
}

/// Sortable fields of `discover/tv`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TvSortField {
    /// `popularity`.
    #[default]
    Popularity,
    /// `first_air_date`.
    FirstAirDate,
    /// `name`.
    Name,
    /// `original_name`.
    OriginalName,
    /// `vote_average`.
    VoteAverage,
    /// `vote_count`.
    VoteCount,
}

impl SortField for TvSortField {
    const ALL: &'static [Self] = &[
        Self::Popularity,
        Self::FirstAirDate,
        Self::Name,
        Self::OriginalName,
        Self::VoteAverage,
        Self::VoteCount,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::FirstAirDate => "first_air_date",
            Self::Name => "name",
            Self::OriginalName => "original_name",
            Self::VoteAverage => "vote_average",
            Self::VoteCount => "vote_count",
        }
    }
}

/// A `sort_by` value such as `popularity.desc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortBy<F> {
    /// Field to sort on.
    pub field: F,
    /// Direction.
    pub order: SortOrder,
}

/// `sort_by` for `discover/movie`.
pub type MovieSortBy = SortBy<MovieSortField>;

/// `sort_by` for `discover/tv`.
pub type TvSortBy = SortBy<TvSortField>;

impl<F: SortField> SortBy<F> {
    /// Ascending sort on `field`.
    pub const fn asc(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    /// Descending sort on `field`.
    pub const fn desc(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }
}

impl<F: SortField> fmt::Display for SortBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.field.as_str(), self.order.as_str())
    }
}

impl<F: SortField> FromStr for SortBy<F> {
    type Err = TmdbError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, order) = s.split_once('.').unwrap_or((s, "desc"));
        let field = F::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| TmdbError::invalid(format!("unknown sort field: {name}")))?;
        let order = match order {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            other => {
                return Err(TmdbError::invalid(format!("unknown sort order: {other}")));
            }
        };
        Ok(Self { field, order })
    }
}

// --- Shared filter pieces ---

/// Watch-provider monetization type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Monetization {
    /// Subscription.
    Flatrate,
    /// Free.
    Free,
    /// Ad-supported.
    Ads,
    /// Rental.
    Rent,
    /// Purchase.
    Buy,
}

impl fmt::Display for Monetization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flatrate => "flatrate",
            Self::Free => "free",
            Self::Ads => "ads",
            Self::Rent => "rent",
            Self::Buy => "buy",
        })
    }
}

/// IDs joined with `,` (all must match) or `|` (any may match).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdFilter {
    /// TMDB IDs.
    pub ids: Vec<u64>,
    /// Join mode.
    pub sep: ListSep,
}

impl IdFilter {
    /// Filter matching every ID.
    pub fn all(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            sep: ListSep::And,
        }
    }

    /// Filter matching any ID.
    pub fn any(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            sep: ListSep::Or,
        }
    }
}

trait QueryExt {
    fn push_ids(&mut self, name: &'static str, filter: &IdFilter) -> &mut Self;
}

impl QueryExt for Query {
    fn push_ids(&mut self, name: &'static str, filter: &IdFilter) -> &mut Self {
        self.push_list(name, &filter.ids, filter.sep)
    }
}

fn check_vote_average(gte: Option<f32>, lte: Option<f32>) -> Result<()> {
    check_range_f32("vote_average.gte", gte, 0.0, 10.0)?;
    check_range_f32("vote_average.lte", lte, 0.0, 10.0)?;
    check_bounds("vote_average", gte.as_ref(), lte.as_ref())
}

fn check_watch_region(
    region: Option<&str>,
    providers: &IdFilter,
    monetization: &[Monetization],
) -> Result<()> {
    let has_region = non_blank(region).is_some();
    check_requires(
        "with_watch_providers",
        !providers.ids.is_empty(),
        "watch_region",
        has_region,
    )?;
    check_requires(
        "with_watch_monetization_types",
        !monetization.is_empty(),
        "watch_region",
        has_region,
    )
}

// --- Discover Movie ---

/// Parameters for `discover/movie`.
#[derive(Debug, Clone, Default)]
pub struct DiscoverMovieParams {
    /// Response language (client default when `None`).
    pub language: Option<String>,
    /// Result page (1-500).
    pub page: Option<u32>,
    /// Region used for release-date filters (ISO 3166-1).
    pub region: Option<String>,
    /// Include adult content (client default when `None`).
    pub include_adult: Option<bool>,
    /// Include video-only releases.
    pub include_video: Option<bool>,
    /// Sort order.
    pub sort_by: Option<MovieSortBy>,
    /// Country the certification filters refer to.
    pub certification_country: Option<String>,
    /// Exact certification.
    pub certification: Option<String>,
    /// Minimum certification.
    pub certification_gte: Option<String>,
    /// Maximum certification.
    pub certification_lte: Option<String>,
    /// Primary release year.
    pub primary_release_year: Option<u32>,
    /// Earliest primary release date.
    pub primary_release_date_gte: Option<NaiveDate>,
    /// Latest primary release date.
    pub primary_release_date_lte: Option<NaiveDate>,
    /// Earliest regional release date.
    pub release_date_gte: Option<NaiveDate>,
    /// Latest regional release date.
    pub release_date_lte: Option<NaiveDate>,
    /// Any release year.
    pub year: Option<u32>,
    /// Minimum vote average (0-10).
    pub vote_average_gte: Option<f32>,
    /// Maximum vote average (0-10).
    pub vote_average_lte: Option<f32>,
    /// Minimum vote count.
    pub vote_count_gte: Option<u32>,
    /// Maximum vote count.
    pub vote_count_lte: Option<u32>,
    /// Minimum runtime in minutes.
    pub with_runtime_gte: Option<u32>,
    /// Maximum runtime in minutes.
    pub with_runtime_lte: Option<u32>,
    /// Genre IDs to include.
    pub with_genres: IdFilter,
    /// Genre IDs to exclude.
    pub without_genres: IdFilter,
    /// Keyword IDs to include.
    pub with_keywords: IdFilter,
    /// Person IDs credited as cast.
    pub with_cast: IdFilter,
    /// Person IDs credited as crew.
    pub with_crew: IdFilter,
    /// Person IDs credited as cast or crew.
    pub with_people: IdFilter,
    /// Production company IDs.
    pub with_companies: IdFilter,
    /// Origin country (ISO 3166-1).
    pub with_origin_country: Option<String>,
    /// Original language (ISO 639-1).
    pub with_original_language: Option<String>,
    /// Release types; joined with `|`.
    pub with_release_type: Vec<ReleaseType>,
    /// Region the watch-provider filters refer to.
    pub watch_region: Option<String>,
    /// Watch provider IDs.
    pub with_watch_providers: IdFilter,
    /// Monetization types; joined with `|`.
    pub with_watch_monetization_types: Vec<Monetization>,
}

impl DiscoverMovieParams {
    /// Creates empty discover params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort_by(mut self, sort_by: MovieSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Sets the primary release year.
    #[must_use]
    pub const fn primary_release_year(mut self, year: u32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    /// Restricts the primary release date to `from..=to`.
    #[must_use]
    pub const fn primary_release_between(
        mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Self {
        self.primary_release_date_gte = from;
        self.primary_release_date_lte = to;
        self
    }

    /// Restricts the vote average to `min..=max`.
    #[must_use]
    pub const fn vote_average_between(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.vote_average_gte = min;
        self.vote_average_lte = max;
        self
    }

    /// Sets the minimum vote count.
    #[must_use]
    pub const fn vote_count_gte(mut self, count: u32) -> Self {
        self.vote_count_gte = Some(count);
        self
    }

    /// Sets the genre filter.
    #[must_use]
    pub fn with_genres(mut self, genres: IdFilter) -> Self {
        self.with_genres = genres;
        self
    }

    /// Sets the original language filter.
    #[must_use]
    pub fn with_original_language(mut self, language: impl Into<String>) -> Self {
        self.with_original_language = Some(language.into());
        self
    }

    /// Filters by certification in `country`.
    #[must_use]
    pub fn certification(
        mut self,
        country: impl Into<String>,
        certification: impl Into<String>,
    ) -> Self {
        self.certification_country = Some(country.into());
        self.certification = Some(certification.into());
        self
    }

    /// Filters by watch providers available in `region`.
    #[must_use]
    pub fn watch_providers(mut self, region: impl Into<String>, providers: IdFilter) -> Self {
        self.watch_region = Some(region.into());
        self.with_watch_providers = providers;
        self
    }

    /// Validates and encodes the parameters.
    pub(crate) fn to_query(&self) -> Result<Query> {
        check_page(self.page)?;
        check_year("primary_release_year", self.primary_release_year)?;
        check_year("year", self.year)?;
        check_vote_average(self.vote_average_gte, self.vote_average_lte)?;
        check_bounds(
            "vote_count",
            self.vote_count_gte.as_ref(),
            self.vote_count_lte.as_ref(),
        )?;
        check_bounds(
            "with_runtime",
            self.with_runtime_gte.as_ref(),
            self.with_runtime_lte.as_ref(),
        )?;
        check_bounds(
            "primary_release_date",
            self.primary_release_date_gte.as_ref(),
            self.primary_release_date_lte.as_ref(),
        )?;
        check_bounds(
            "release_date",
            self.release_date_gte.as_ref(),
            self.release_date_lte.as_ref(),
        )?;
        check_requires(
            "certification",
            [
                &self.certification,
                &self.certification_gte,
                &self.certification_lte,
            ]
            .iter()
            .any(|value| non_blank(value.as_deref()).is_some()),
            "certification_country",
            non_blank(self.certification_country.as_deref()).is_some(),
        )?;
        check_watch_region(
            self.watch_region.as_deref(),
            &self.with_watch_providers,
            &self.with_watch_monetization_types,
        )?;

        let release_types: Vec<u8> = self.with_release_type.iter().map(|r| r.code()).collect();

        let mut query = Query::new();
        query
            .push_str_opt("language", self.language.as_deref())
            .push_opt("page", self.page)
            .push_str_opt("region", self.region.as_deref())
            .push_opt("include_adult", self.include_adult)
            .push_opt("include_video", self.include_video)
            .push_opt("sort_by", self.sort_by)
            .push_str_opt("certification_country", self.certification_country.as_deref())
            .push_str_opt("certification", self.certification.as_deref())
            .push_str_opt("certification.gte", self.certification_gte.as_deref())
            .push_str_opt("certification.lte", self.certification_lte.as_deref())
            .push_opt("primary_release_year", self.primary_release_year)
            .push_opt("primary_release_date.gte", self.primary_release_date_gte)
            .push_opt("primary_release_date.lte", self.primary_release_date_lte)
            .push_opt("release_date.gte", self.release_date_gte)
            .push_opt("release_date.lte", self.release_date_lte)
            .push_opt("year", self.year)
            .push_opt("vote_average.gte", self.vote_average_gte)
            .push_opt("vote_average.lte", self.vote_average_lte)
            .push_opt("vote_count.gte", self.vote_count_gte)
            .push_opt("vote_count.lte", self.vote_count_lte)
            .push_opt("with_runtime.gte", self.with_runtime_gte)
            .push_opt("with_runtime.lte", self.with_runtime_lte)
            .push_ids("with_genres", &self.with_genres)
            .push_ids("without_genres", &self.without_genres)
            .push_ids("with_keywords", &self.with_keywords)
            .push_ids("with_cast", &self.with_cast)
            .push_ids("with_crew", &self.with_crew)
            .push_ids("with_people", &self.with_people)
            .push_ids("with_companies", &self.with_companies)
            .push_str_opt("with_origin_country", self.with_origin_country.as_deref())
            .push_str_opt(
                "with_original_language",
                self.with_original_language.as_deref(),
            )
            .push_list("with_release_type", &release_types, ListSep::Or)
            .push_str_opt("watch_region", self.watch_region.as_deref())
            .push_ids("with_watch_providers", &self.with_watch_providers)
            .push_list(
                "with_watch_monetization_types",
                &self.with_watch_monetization_types,
                ListSep::Or,
            );
        Ok(query)
    }
}

// --- Discover TV ---

/// Parameters for `discover/tv`.
#[derive(Debug, Clone, Default)]
pub struct DiscoverTvParams {
    /// Response language (client default when `None`).
    pub language: Option<String>,
    /// Result page (1-500).
    pub page: Option<u32>,
    /// Include adult content (client default when `None`).
    pub include_adult: Option<bool>,
    /// Include series without a first air date.
    pub include_null_first_air_dates: Option<bool>,
    /// Only series that were screened theatrically.
    pub screened_theatrically: Option<bool>,
    /// Sort order.
    pub sort_by: Option<TvSortBy>,
    /// Timezone for the air date filters.
    pub timezone: Option<String>,
    /// First air date year.
    pub first_air_date_year: Option<u32>,
    /// Earliest first air date.
    pub first_air_date_gte: Option<NaiveDate>,
    /// Latest first air date.
    pub first_air_date_lte: Option<NaiveDate>,
    /// Earliest episode air date.
    pub air_date_gte: Option<NaiveDate>,
    /// Latest episode air date.
    pub air_date_lte: Option<NaiveDate>,
    /// Minimum vote average (0-10).
    pub vote_average_gte: Option<f32>,
    /// Maximum vote average (0-10).
    pub vote_average_lte: Option<f32>,
    /// Minimum vote count.
    pub vote_count_gte: Option<u32>,
    /// Maximum vote count.
    pub vote_count_lte: Option<u32>,
    /// Minimum episode runtime in minutes.
    pub with_runtime_gte: Option<u32>,
    /// Maximum episode runtime in minutes.
    pub with_runtime_lte: Option<u32>,
    /// Genre IDs to include.
    pub with_genres: IdFilter,
    /// Genre IDs to exclude.
    pub without_genres: IdFilter,
    /// Keyword IDs to include.
    pub with_keywords: IdFilter,
    /// Network IDs.
    pub with_networks: IdFilter,
    /// Production company IDs.
    pub with_companies: IdFilter,
    /// Origin country (ISO 3166-1).
    pub with_origin_country: Option<String>,
    /// Original language (ISO 639-1).
    pub with_original_language: Option<String>,
    /// Region the watch-provider filters refer to.
    pub watch_region: Option<String>,
    /// Watch provider IDs.
    pub with_watch_providers: IdFilter,
    /// Monetization types; joined with `|`.
    pub with_watch_monetization_types: Vec<Monetization>,
}

impl DiscoverTvParams {
    /// Creates empty discover params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort_by(mut self, sort_by: TvSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Sets the first air date year.
    #[must_use]
    pub const fn first_air_date_year(mut self, year: u32) -> Self {
        self.first_air_date_year = Some(year);
        self
    }

    /// Restricts the first air date to `from..=to`.
    #[must_use]
    pub const fn first_aired_between(
        mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Self {
        self.first_air_date_gte = from;
        self.first_air_date_lte = to;
        self
    }

    /// Restricts the vote average to `min..=max`.
    #[must_use]
    pub const fn vote_average_between(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.vote_average_gte = min;
        self.vote_average_lte = max;
        self
    }

    /// Sets the genre filter.
    #[must_use]
    pub fn with_genres(mut self, genres: IdFilter) -> Self {
        self.with_genres = genres;
        self
    }

    /// Sets the network filter.
    #[must_use]
    pub fn with_networks(mut self, networks: IdFilter) -> Self {
        self.with_networks = networks;
        self
    }

    /// Sets the original language filter.
    #[must_use]
    pub fn with_original_language(mut self, language: impl Into<String>) -> Self {
        self.with_original_language = Some(language.into());
        self
    }

    /// Filters by watch providers available in `region`.
    #[must_use]
    pub fn watch_providers(mut self, region: impl Into<String>, providers: IdFilter) -> Self {
        self.watch_region = Some(region.into());
        self.with_watch_providers = providers;
        self
    }

    /// Validates and encodes the parameters.
    pub(crate) fn to_query(&self) -> Result<Query> {
        check_page(self.page)?;
        check_year("first_air_date_year", self.first_air_date_year)?;
        check_vote_average(self.vote_average_gte, self.vote_average_lte)?;
        check_bounds(
            "vote_count",
            self.vote_count_gte.as_ref(),
            self.vote_count_lte.as_ref(),
        )?;
        check_bounds(
            "with_runtime",
            self.with_runtime_gte.as_ref(),
            self.with_runtime_lte.as_ref(),
        )?;
        check_bounds(
            "first_air_date",
            self.first_air_date_gte.as_ref(),
            self.first_air_date_lte.as_ref(),
        )?;
        check_bounds(
            "air_date",
            self.air_date_gte.as_ref(),
            self.air_date_lte.as_ref(),
        )?;
        check_watch_region(
            self.watch_region.as_deref(),
            &self.with_watch_providers,
            &self.with_watch_monetization_types,
        )?;

        let mut query = Query::new();
        query
            .push_str_opt("language", self.language.as_deref())
            .push_opt("page", self.page)
            .push_opt("include_adult", self.include_adult)
            .push_opt(
                "include_null_first_air_dates",
                self.include_null_first_air_dates,
            )
            .push_opt("screened_theatrically", self.screened_theatrically)
            .push_opt("sort_by", self.sort_by)
            .push_str_opt("timezone", self.timezone.as_deref())
            .push_opt("first_air_date_year", self.first_air_date_year)
            .push_opt("first_air_date.gte", self.first_air_date_gte)
            .push_opt("first_air_date.lte", self.first_air_date_lte)
            .push_opt("air_date.gte", self.air_date_gte)
            .push_opt("air_date.lte", self.air_date_lte)
            .push_opt("vote_average.gte", self.vote_average_gte)
            .push_opt("vote_average.lte", self.vote_average_lte)
            .push_opt("vote_count.gte", self.vote_count_gte)
            .push_opt("vote_count.lte", self.vote_count_lte)
            .push_opt("with_runtime.gte", self.with_runtime_gte)
            .push_opt("with_runtime.lte", self.with_runtime_lte)
            .push_ids("with_genres", &self.with_genres)
            .push_ids("without_genres", &self.without_genres)
            .push_ids("with_keywords", &self.with_keywords)
            .push_ids("with_networks", &self.with_networks)
            .push_ids("with_companies", &self.with_companies)
            .push_str_opt("with_origin_country", self.with_origin_country.as_deref())
            .push_str_opt(
                "with_original_language",
                self.with_original_language.as_deref(),
            )
            .push_str_opt("watch_region", self.watch_region.as_deref())
            .push_ids("with_watch_providers", &self.with_watch_providers)
            .push_list(
                "with_watch_monetization_types",
                &self.with_watch_monetization_types,
                ListSep::Or,
            );
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_sort_by_display_and_parse() {
        // Arrange
        let sort = MovieSortBy::asc(MovieSortField::PrimaryReleaseDate);

        // Act
        let parsed: TvSortBy = "first_air_date.asc".parse().unwrap();
        let default_order: MovieSortBy = "vote_count".parse().unwrap();

        // Assert
        assert_eq!(sort.to_string(), "primary_release_date.asc");
        assert_eq!(parsed, TvSortBy::asc(TvSortField::FirstAirDate));
        assert_eq!(default_order.order, SortOrder::Desc);
        assert_eq!(MovieSortBy::default().to_string(), "popularity.desc");
    }

    #[test]
    fn test_sort_by_rejects_unknown_field() {
        // Arrange & Act
        let field = "budget.desc".parse::<MovieSortBy>();
        let order = "title.sideways".parse::<MovieSortBy>();
        let tv_only = "name.asc".parse::<MovieSortBy>();

        // Assert
        assert!(field.unwrap_err().to_string().contains("unknown sort field: budget"));
        assert!(order.unwrap_err().to_string().contains("unknown sort order"));
        assert!(tv_only.is_err());
    }

    #[test]
    fn test_discover_movie_encodes_filters() {
        // Arrange
        let params = DiscoverMovieParams::new()
            .sort_by(MovieSortBy::desc(MovieSortField::VoteAverage))
            .primary_release_between(Some(date("1990-01-01")), Some(date("1999-12-31")))
            .vote_average_between(Some(7.5), None)
            .vote_count_gte(1000)
            .with_genres(IdFilter::any([18, 53]))
            .certification("US", "R");

        // Act
        let query = params.to_query().unwrap();

        // Assert
        assert_eq!(query.get("sort_by"), Some("vote_average.desc"));
        assert_eq!(query.get("primary_release_date.gte"), Some("1990-01-01"));
        assert_eq!(query.get("primary_release_date.lte"), Some("1999-12-31"));
        assert_eq!(query.get("vote_average.gte"), Some("7.5"));
        assert_eq!(query.get("vote_count.gte"), Some("1000"));
        assert_eq!(query.get("with_genres"), Some("18|53"));
        assert_eq!(query.get("certification_country"), Some("US"));
        assert_eq!(query.get("certification"), Some("R"));
        assert!(!query.contains("vote_average.lte"));
    }

    #[test]
    fn test_discover_movie_release_types_are_or_joined() {
        // Arrange
        let params = DiscoverMovieParams {
            with_release_type: vec![ReleaseType::TheatricalLimited, ReleaseType::Theatrical],
            ..DiscoverMovieParams::default()
        };

        // Act
        let query = params.to_query().unwrap();

        // Assert
        assert_eq!(query.get("with_release_type"), Some("2|3"));
    }

    #[test]
    fn test_discover_movie_rejects_inverted_date_range() {
        // Arrange
        let params = DiscoverMovieParams::new()
            .primary_release_between(Some(date("2000-01-01")), Some(date("1999-01-01")));

        // Act
        let err = params.to_query().unwrap_err();

        // Assert
        assert!(err.to_string().contains("primary_release_date.gte"));
    }

    #[test]
    fn test_discover_movie_rejects_vote_average_out_of_range() {
        // Arrange
        let params = DiscoverMovieParams::new().vote_average_between(None, Some(11.0));

        // Act & Assert
        assert!(params.to_query().is_err());
    }

    #[test]
    fn test_discover_movie_certification_needs_country() {
        // Arrange
        let params = DiscoverMovieParams {
            certification_lte: Some(String::from("PG-13")),
            ..DiscoverMovieParams::default()
        };

        // Act
        let err = params.to_query().unwrap_err();

        // Assert
        assert!(err.to_string().contains("certification_country"));
    }

    #[test]
    fn test_discover_watch_providers_need_region() {
        // Arrange
        let movie = DiscoverMovieParams {
            with_watch_providers: IdFilter::any([8]),
            ..DiscoverMovieParams::default()
        };
        let tv = DiscoverTvParams {
            with_watch_monetization_types: vec![Monetization::Flatrate],
            ..DiscoverTvParams::default()
        };
        let ok = DiscoverTvParams::new().watch_providers("JP", IdFilter::any([8, 337]));

        // Act & Assert
        assert!(movie.to_query().is_err());
        assert!(tv.to_query().is_err());
        let query = ok.to_query().unwrap();
        assert_eq!(query.get("watch_region"), Some("JP"));
        assert_eq!(query.get("with_watch_providers"), Some("8|337"));
    }

    #[test]
    fn test_discover_blank_country_or_region_counts_as_missing() {
        // Arrange
        let movie = DiscoverMovieParams {
            certification_country: Some(String::from("  ")),
            certification: Some(String::from("R")),
            ..DiscoverMovieParams::default()
        };
        let tv = DiscoverTvParams {
            watch_region: Some(String::new()),
            with_watch_providers: IdFilter::any([8]),
            ..DiscoverTvParams::default()
        };
        let blank_certification = DiscoverMovieParams {
            certification: Some(String::from(" ")),
            ..DiscoverMovieParams::default()
        };

        // Act & Assert
        assert!(movie.to_query().unwrap_err().to_string().contains("certification_country"));
        assert!(tv.to_query().unwrap_err().to_string().contains("watch_region"));
        assert_eq!(blank_certification.to_query().unwrap().get("certification"), None);
    }

    #[test]
    fn test_discover_tv_encodes_filters() {
        // Arrange
        let params = DiscoverTvParams::new()
            .sort_by(TvSortBy::desc(TvSortField::Popularity))
            .first_air_date_year(2022)
            .with_networks(IdFilter::all([213]))
            .with_original_language("ja")
            .page(2);

        // Act
        let query = params.to_query().unwrap();

        // Assert
        assert_eq!(query.get("sort_by"), Some("popularity.desc"));
        assert_eq!(query.get("first_air_date_year"), Some("2022"));
        assert_eq!(query.get("with_networks"), Some("213"));
        assert_eq!(query.get("with_original_language"), Some("ja"));
        assert_eq!(query.get("page"), Some("2"));
    }

    #[test]
    fn test_discover_tv_rejects_inverted_runtime() {
        // Arrange
        let params = DiscoverTvParams {
            with_runtime_gte: Some(60),
            with_runtime_lte: Some(30),
            ..DiscoverTvParams::default()
        };

        // Act & Assert
        assert!(params.to_query().is_err());
    }
}
