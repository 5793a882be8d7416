//! Parameters for detail and list endpoints.

use std::fmt;

use crate::tmdb::error::Result;
use crate::tmdb::query::{ListSep, Query, check_page};

/// Maximum number of sub-resources TMDB accepts in `append_to_response`.
///
/// Each append enum has fewer variants than this, and `DetailsParams`
/// drops duplicates, so an encoded list never exceeds it.
pub const MAX_APPEND: usize = 20;

/// A sub-resource that can be folded into a details response.
pub trait AppendToResponse: Copy + Eq + fmt::Debug + 'static {
    /// Every sub-resource of this kind.
    const ALL: &'static [Self];

    /// Wire name of the sub-resource.
    fn as_str(self) -> &'static str;
}

const _: () = assert!(MovieAppend::ALL.len() <= MAX_APPEND);
const _: () = assert!(TvAppend::ALL.len() <= MAX_APPEND);
const _: () = assert!(PersonAppend::ALL.len() <= MAX_APPEND);

/// Sub-resources appendable to `movie/{movie_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieAppend {
    /// `credits`.
    Credits,
    /// `images`.
    Images,
    /// `videos`.
    Videos,
    /// `keywords`.
    Keywords,
    /// `recommendations`.
    Recommendations,
    /// `similar`.
    Similar,
    /// `release_dates`.
    ReleaseDates,
    /// `external_ids`.
    ExternalIds,
}

impl AppendToResponse for MovieAppend {
    const ALL: &'static [Self] = &[
        Self::Credits,
        Self::Images,
        Self::Videos,
        Self::Keywords,
        Self::Recommendations,
        Self::Similar,
        Self::ReleaseDates,
        Self::ExternalIds,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Credits => "credits",
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Keywords => "keywords",
            Self::Recommendations => "recommendations",
            Self::Similar => "similar",
            Self::ReleaseDates => "release_dates",
            Self::ExternalIds => "external_ids",
        }
    }
}

/// Sub-resources appendable to `tv/{series_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TvAppend {
    /// `credits`.
    Credits,
    /// `images`.
    Images,
    /// `videos`.
    Videos,
    /// `keywords`.
    Keywords,
    /// `recommendations`.
    Recommendations,
    /// `similar`.
    Similar,
    /// `external_ids`.
    ExternalIds,
}

impl AppendToResponse for TvAppend {
    const ALL: &'static [Self] = &[
        Self::Credits,
        Self::Images,
        Self::Videos,
        Self::Keywords,
        Self::Recommendations,
        Self::Similar,
        Self::ExternalIds,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Credits => "credits",
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Keywords => "keywords",
            Self::Recommendations => "recommendations",
            Self::Similar => "similar",
            Self::ExternalIds => "external_ids",
        }
    }
}

/// Sub-resources appendable to `person/{person_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonAppend {
    /// `combined_credits`.
    CombinedCredits,
    /// `external_ids`.
    ExternalIds,
}

impl AppendToResponse for PersonAppend {
    const ALL: &'static [Self] = &[Self::CombinedCredits, Self::ExternalIds];

    fn as_str(self) -> &'static str {
        match self {
            Self::CombinedCredits => "combined_credits",
            Self::ExternalIds => "external_ids",
        }
    }
}

/// Parameters for a details endpoint.
#[derive(Debug, Clone)]
pub struct DetailsParams<A> {
    /// Response language (client default when `None`).
    pub language: Option<String>,
    /// Sub-resources to fold into the response.
    pub append: Vec<A>,
}

impl<A> Default for DetailsParams<A> {
    fn default() -> Self {
        Self {
            language: None,
            append: Vec::new(),
        }
    }
}

/// Parameters for `movie/{movie_id}`.
pub type MovieDetailsParams = DetailsParams<MovieAppend>;

/// Parameters for `tv/{series_id}`.
pub type TvDetailsParams = DetailsParams<TvAppend>;

/// Parameters for `person/{person_id}`.
pub type PersonDetailsParams = DetailsParams<PersonAppend>;

impl<A: AppendToResponse> DetailsParams<A> {
    /// Creates empty details params.
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

    /// Appends a sub-resource. Duplicates are ignored.
    #[must_use]
    pub fn append(mut self, item: A) -> Self {
        if !self.append.contains(&item) {
            self.append.push(item);
        }
        self
    }

    /// Encodes the parameters. Repeated sub-resources are sent once.
    pub(crate) fn to_query(&self) -> Query {
        let mut names: Vec<&'static str> = Vec::with_capacity(self.append.len());
        for item in &self.append {
            let name = item.as_str();
            if !names.contains(&name) {
                names.push(name);
            }
        }

        let mut query = Query::new();
        query
            .push_str_opt("language", self.language.as_deref())
            .push_list("append_to_response", &names, ListSep::And);
        query
    }
}

/// Parameters for paginated list endpoints (`popular`, `top_rated`, ...).
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    /// Response language (client default when `None`).
    pub language: Option<String>,
    /// Result page (1-500).
    pub page: Option<u32>,
    /// Region (ISO 3166-1), for endpoints that accept it.
    pub region: Option<String>,
}

impl PageParams {
    /// Creates empty page params.
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

    /// Sets the region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Validates and encodes the parameters.
    pub(crate) fn to_query(&self) -> Result<Query> {
        check_page(self.page)?;

        let mut query = Query::new();
        query
            .push_str_opt("language", self.language.as_deref())
            .push_opt("page", self.page)
            .push_str_opt("region", self.region.as_deref());
        Ok(query)
    }
}

/// Parameters for `movie/{movie_id}/images`.
#[derive(Debug, Clone, Default)]
pub struct ImagesParams {
    /// Response language (client default when `None`).
    pub language: Option<String>,
    /// Extra image languages to include (`"null"` selects textless images).
    pub include_image_language: Vec<String>,
}

impl ImagesParams {
    /// Creates empty image params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an image language.
    #[must_use]
    pub fn include_language(mut self, language: impl Into<String>) -> Self {
        self.include_image_language.push(language.into());
        self
    }

    /// Encodes the parameters.
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_str_opt("language", self.language.as_deref())
            .push_list(
                "include_image_language",
                &self.include_image_language,
                ListSep::And,
            );
        query
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_movie_details_append_dedup() {
        // Arrange
        let params = MovieDetailsParams::new()
            .language("ja-JP")
            .append(MovieAppend::Credits)
            .append(MovieAppend::Videos)
            .append(MovieAppend::Credits);

        // Act
        let query = params.to_query();

        // Assert
        assert_eq!(query.get("language"), Some("ja-JP"));
        assert_eq!(query.get("append_to_response"), Some("credits,videos"));
    }

    #[test]
    fn test_details_without_append() {
        // Arrange
        let params = TvDetailsParams::new();

        // Act
        let query = params.to_query();

        // Assert
        assert!(query.is_empty());
    }

    #[test]
    fn test_details_collapses_repeated_append_items() {
        // Arrange
        let params = MovieDetailsParams {
            language: None,
            append: vec![MovieAppend::Credits; MAX_APPEND + 1],
        };

        // Act
        let query = params.to_query();

        // Assert
        assert_eq!(query.get("append_to_response"), Some("credits"));
    }

    #[test]
    fn test_every_movie_append_fits_in_one_request() {
        // Arrange
        let params = MovieAppend::ALL
            .iter()
            .chain(MovieAppend::ALL)
            .fold(MovieDetailsParams::new(), |params, item| params.append(*item));

        // Act
        let query = params.to_query();

        // Assert
        let sent = query.get("append_to_response").unwrap();
        assert_eq!(sent.split(',').count(), MovieAppend::ALL.len());
        assert!(sent.split(',').count() <= MAX_APPEND);
        assert!(sent.starts_with("credits,images,videos"));
        assert!(sent.ends_with("release_dates,external_ids"));
    }

    #[test]
    fn test_page_params() {
        // Arrange
        let params = PageParams::new().page(3).region("JP");

        // Act
        let query = params.to_query().unwrap();

        // Assert
        assert_eq!(query.get("page"), Some("3"));
        assert_eq!(query.get("region"), Some("JP"));
        assert!(PageParams::new().page(0).to_query().is_err());
    }

    #[test]
    fn test_images_params_include_language() {
        // Arrange
        let params = ImagesParams::new()
            .include_language("en")
            .include_language("null");

        // Act
        let query = params.to_query();

        // Assert
        assert_eq!(query.get("include_image_language"), Some("en,null"));
    }
}
