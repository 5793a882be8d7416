//! Parameters for the `search/*` endpoints.

use crate::tmdb::error::Result;
use crate::tmdb::query::{Query, check_page, check_year, require_text};

// --- Search Movie ---

/// Parameters for `search/movie`.
#[derive(Debug, Clone)]
pub struct SearchMovieParams {
    /// Search query (required).
    pub query: String,
    /// Response language (client default when `None`).
    pub language: Option<String>,
    /// Result page (1-500).
    pub page: Option<u32>,
    /// Include adult content (client default when `None`).
    pub include_adult: Option<bool>,
    /// Filter by primary release year.
    pub primary_release_year: Option<u32>,
    /// Filter by any release year.
    pub year: Option<u32>,
    /// Region filter (ISO 3166-1).
    pub region: Option<String>,
}

impl SearchMovieParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            page: None,
            include_adult: None,
            primary_release_year: None,
            year: None,
            region: None,
        }
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

    /// Sets the adult content flag.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = Some(include);
        self
    }

    /// Sets the primary release year filter.
    #[must_use]
    pub const fn primary_release_year(mut self, year: u32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Validates and encodes the parameters.
    pub(crate) fn to_query(&self) -> Result<Query> {
        require_text("query", &self.query)?;
        check_page(self.page)?;
        check_year("primary_release_year", self.primary_release_year)?;
        check_year("year", self.year)?;

        let mut query = Query::new();
        query
            .push("query", self.query.trim())
            .push_str_opt("language", self.language.as_deref())
            .push_opt("page", self.page)
            .push_opt("include_adult", self.include_adult)
            .push_opt("primary_release_year", self.primary_release_year)
            .push_opt("year", self.year)
            .push_str_opt("region", self.region.as_deref());
        Ok(query)
    }
}

// --- Search TV ---

/// Parameters for `search/tv`.
#[derive(Debug, Clone)]
pub struct SearchTvParams {
    /// Search query (required).
    pub query: String,
    /// Response language (client default when `None`).
    pub language: Option<String>,
    /// Result page (1-500).
    pub page: Option<u32>,
    /// Include adult content (client default when `None`).
    pub include_adult: Option<bool>,
    /// Filter by first air date year.
    pub first_air_date_year: Option<u32>,
    /// Filter by year (searches first air date and episode air dates).
    pub year: Option<u32>,
}

impl SearchTvParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            page: None,
            include_adult: None,
            first_air_date_year: None,
            year: None,
        }
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

    /// Sets the adult content flag.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = Some(include);
        self
    }

    /// Sets the first air date year filter.
    #[must_use]
    pub const fn first_air_date_year(mut self, year: u32) -> Self {
        self.first_air_date_year = Some(year);
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Validates and encodes the parameters.
    pub(crate) fn to_query(&self) -> Result<Query> {
        require_text("query", &self.query)?;
        check_page(self.page)?;
        check_year("first_air_date_year", self.first_air_date_year)?;
        check_year("year", self.year)?;

        let mut query = Query::new();
        query
            .push("query", self.query.trim())
            .push_str_opt("language", self.language.as_deref())
            .push_opt("page", self.page)
            .push_opt("include_adult", self.include_adult)
            .push_opt("first_air_date_year", self.first_air_date_year)
            .push_opt("year", self.year);
        Ok(query)
    }
}

// --- Search person / multi / collection / company / keyword ---

/// Parameters for `search/person`, `search/multi`, `search/collection`,
/// `search/company` and `search/keyword`.
///
/// `language` and `include_adult` are dropped for company and keyword
/// searches, which do not accept them.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Search query (required).
    pub query: String,
    /// Response language (client default when `None`).
    pub language: Option<String>,
    /// Result page (1-500).
    pub page: Option<u32>,
    /// Include adult content (client default when `None`).
    pub include_adult: Option<bool>,
}

/// Parameters for `search/person`.
pub type SearchPersonParams = SearchParams;

/// Parameters for `search/multi`.
pub type SearchMultiParams = SearchParams;

/// Parameters for `search/collection`.
pub type SearchCollectionParams = SearchParams;

/// Parameters for `search/company`.
pub type SearchCompanyParams = SearchParams;

/// Parameters for `search/keyword`.
pub type SearchKeywordParams = SearchParams;

impl SearchParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            page: None,
            include_adult: None,
        }
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

    /// Sets the adult content flag.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = Some(include);
        self
    }

    /// Validates and encodes the parameters.
    pub(crate) fn to_query(&self) -> Result<Query> {
        require_text("query", &self.query)?;
        check_page(self.page)?;

        let mut query = Query::new();
        query
            .push("query", self.query.trim())
            .push_str_opt("language", self.language.as_deref())
            .push_opt("page", self.page)
            .push_opt("include_adult", self.include_adult);
        Ok(query)
    }

    /// Encodes only `query` and `page`.
    pub(crate) fn to_bare_query(&self) -> Result<Query> {
        require_text("query", &self.query)?;
        check_page(self.page)?;

        let mut query = Query::new();
        query
            .push("query", self.query.trim())
            .push_opt("page", self.page);
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::tmdb::error::TmdbError;

    #[test]
    fn test_search_movie_query_order_and_optional_fields() {
        // Arrange
        let params = SearchMovieParams::new("  Fight Club ")
            .language("en-US")
            .year(1999)
            .region("US");

        // Act
        let query = params.to_query().unwrap();

        // Assert
        assert_eq!(
            query.pairs(),
            &[
                ("query", String::from("Fight Club")),
                ("language", String::from("en-US")),
                ("year", String::from("1999")),
                ("region", String::from("US")),
            ]
        );
    }

    #[test]
    fn test_search_movie_rejects_blank_query() {
        // Arrange
        let params = SearchMovieParams::new("   ");

        // Act
        let result = params.to_query();

        // Assert
        assert!(matches!(result, Err(TmdbError::InvalidParams(m)) if m.contains("query")));
    }

    #[test]
    fn test_search_movie_rejects_page_out_of_range() {
        // Arrange
        let params = SearchMovieParams::new("Alien").page(501);

        // Act & Assert
        assert!(params.to_query().is_err());
    }

    #[test]
    fn test_search_tv_first_air_date_year() {
        // Arrange
        let params = SearchTvParams::new("SPY×FAMILY")
            .first_air_date_year(2022)
            .include_adult(false)
            .page(2);

        // Act
        let query = params.to_query().unwrap();

        // Assert
        assert_eq!(query.get("first_air_date_year"), Some("2022"));
        assert_eq!(query.get("include_adult"), Some("false"));
        assert_eq!(query.get("page"), Some("2"));
        assert!(!query.contains("language"));
    }

    #[test]
    fn test_search_tv_rejects_bad_year() {
        // Arrange
        let params = SearchTvParams::new("Lost").year(20);

        // Act & Assert
        assert!(params.to_query().is_err());
    }

    #[test]
    fn test_search_params_bare_query_drops_language() {
        // Arrange
        let params = SearchParams::new("Pixar").language("en-US").include_adult(true);

        // Act
        let full = params.to_query().unwrap();
        let bare = params.to_bare_query().unwrap();

        // Assert
        assert!(full.contains("language"));
        assert!(full.contains("include_adult"));
        assert_eq!(bare.pairs(), &[("query", String::from("Pixar"))]);
    }
}
