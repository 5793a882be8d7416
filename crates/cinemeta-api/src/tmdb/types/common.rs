//! Response shapes shared across endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::tmdb::codec;

// --- Pagination ---

/// Paginated result list (`page`, `results`, `total_pages`, `total_results`).
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paged<T> {
    /// Current page number.
    pub page: u32,
    /// Results on this page.
    #[serde(default = "Vec::new", deserialize_with = "codec::null_as_empty")]
    pub results: Vec<T>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

impl<T> Paged<T> {
    /// Returns `true` if more pages follow this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Date window attached to `now_playing` and `upcoming` lists.
#[derive(Debug, Clone, Deserialize)]
pub struct DateWindow {
    /// Latest release date covered.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub maximum: Option<NaiveDate>,
    /// Earliest release date covered.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub minimum: Option<NaiveDate>,
}

/// Paginated list with a date window.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DatedPaged<T> {
    /// Release date window.
    pub dates: DateWindow,
    /// Page contents.
    #[serde(flatten)]
    pub paged: Paged<T>,
}

// --- Status ---

/// TMDB status object, sent on errors and as the result of write calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TmdbStatus {
    /// TMDB status code (e.g. 1 = success, 7 = invalid key, 34 = not found).
    pub status_code: u32,
    /// Human-readable message.
    pub status_message: String,
    /// Success flag. Older endpoints omit it.
    #[serde(default)]
    pub success: bool,
}

/// Bare `{"success": true}` result.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SuccessFlag {
    /// Whether the call succeeded.
    pub success: bool,
}

// --- Small shared records ---

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Localized genre name.
    pub name: String,
}

/// Response of `genre/movie/list` and `genre/tv/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenreList {
    /// Genres.
    pub genres: Vec<Genre>,
}

/// Keyword entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Keyword {
    /// Keyword ID.
    pub id: u64,
    /// Keyword text.
    pub name: String,
}

/// Keywords attached to a movie (`keywords`) or series (`results`).
#[derive(Debug, Clone, Deserialize)]
pub struct Keywords {
    /// Owning movie or series ID (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Keywords.
    #[serde(default, alias = "results")]
    pub keywords: Vec<Keyword>,
}

/// Production company.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductionCompany {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub origin_country: Option<String>,
}

/// Production country.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductionCountry {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// Country name.
    pub name: String,
}

/// Spoken language.
#[derive(Debug, Clone, Deserialize)]
pub struct SpokenLanguage {
    /// ISO 639-1 code.
    pub iso_639_1: String,
    /// English name.
    #[serde(default)]
    pub english_name: Option<String>,
    /// Native name.
    pub name: String,
}

/// TV network.
#[derive(Debug, Clone, Deserialize)]
pub struct Network {
    /// Network ID.
    pub id: u64,
    /// Network name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub origin_country: Option<String>,
}

/// External identifiers of a movie, series or person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    /// TMDB ID (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// IMDb ID.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub imdb_id: Option<String>,
    /// TheTVDB ID.
    #[serde(default)]
    pub tvdb_id: Option<u64>,
    /// Wikidata ID.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub wikidata_id: Option<String>,
    /// Facebook handle.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub facebook_id: Option<String>,
    /// Instagram handle.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub instagram_id: Option<String>,
    /// Twitter handle.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub twitter_id: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_paged_null_results_and_has_next_page() {
        // Arrange
        let json = r#"{"page":1,"results":null,"total_pages":3,"total_results":55}"#;

        // Act
        let paged: Paged<Genre> = serde_json::from_str(json).unwrap();

        // Assert
        assert!(paged.results.is_empty());
        assert!(paged.has_next_page());
    }

    fn decode_page<T: serde::de::DeserializeOwned>(json: &str) -> Paged<T> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_paged_decodes_for_any_item_type() {
        // Arrange
        let json = r#"{"page":1,"results":[{"id":28,"name":"Action"}],"total_pages":1,"total_results":1}"#;

        // Act
        let genres: Paged<Genre> = decode_page(json);
        let raw: Paged<serde_json::Value> = decode_page(json);

        // Assert
        assert_eq!(genres.results[0].name, "Action");
        assert_eq!(raw.results[0]["id"], 28);
        assert!(!raw.has_next_page());
    }

    #[test]
    fn test_dated_paged_flattens_page_fields() {
        // Arrange
        let json = r#"{
            "dates": {"maximum": "2024-05-01", "minimum": "2024-03-14"},
            "page": 2,
            "results": [{"id": 28, "name": "Action"}],
            "total_pages": 2,
            "total_results": 21
        }"#;

        // Act
        let dated: DatedPaged<Genre> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(dated.paged.page, 2);
        assert!(!dated.paged.has_next_page());
        assert_eq!(dated.paged.results.len(), 1);
        assert_eq!(dated.dates.minimum, NaiveDate::from_ymd_opt(2024, 3, 14));
    }

    #[test]
    fn test_status_without_success_flag() {
        // Arrange
        let json = r#"{"status_code":34,"status_message":"The resource you requested could not be found."}"#;

        // Act
        let status: TmdbStatus = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(status.status_code, 34);
        assert!(!status.success);
    }

    #[test]
    fn test_keywords_accepts_results_alias() {
        // Arrange
        let json = r#"{"id":1399,"results":[{"id":818,"name":"based on novel or book"}]}"#;

        // Act
        let keywords: Keywords = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(keywords.keywords.len(), 1);
        assert_eq!(keywords.keywords[0].id, 818);
    }

    #[test]
    fn test_external_ids_blank_strings() {
        // Arrange
        let json = r#"{"id":550,"imdb_id":"tt0137523","facebook_id":"","twitter_id":null}"#;

        // Act
        let ids: ExternalIds = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(ids.imdb_id.as_deref(), Some("tt0137523"));
        assert!(ids.facebook_id.is_none());
        assert!(ids.twitter_id.is_none());
    }
}
