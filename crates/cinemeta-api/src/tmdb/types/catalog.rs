//! Find, collection and company response models.

use serde::Deserialize;

use super::movie::MovieSummary;
use super::person::PersonSummary;
use super::tv::{Episode, TvSummary};
use crate::tmdb::codec;

/// Response of `find/{external_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FindResults {
    /// Matching movies.
    #[serde(default)]
    pub movie_results: Vec<MovieSummary>,
    /// Matching series.
    #[serde(default)]
    pub tv_results: Vec<TvSummary>,
    /// Matching people.
    #[serde(default)]
    pub person_results: Vec<PersonSummary>,
    /// Matching episodes.
    #[serde(default)]
    pub tv_episode_results: Vec<Episode>,
}

impl FindResults {
    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movie_results.is_empty()
            && self.tv_results.is_empty()
            && self.person_results.is_empty()
            && self.tv_episode_results.is_empty()
    }
}

/// Response of `collection/{collection_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    /// Collection ID.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Overview text.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub overview: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Movies in the collection.
    #[serde(default)]
    pub parts: Vec<MovieSummary>,
}

impl Collection {
    /// Parts ordered by release date; undated parts last.
    #[must_use]
    pub fn parts_in_release_order(&self) -> Vec<&MovieSummary> {
        let mut parts: Vec<&MovieSummary> = self.parts.iter().collect();
        parts.sort_by_key(|m| (m.release_date.is_none(), m.release_date));
        parts
    }
}

/// Collection as it appears in `search/collection`.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSummary {
    /// Collection ID.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Company as it appears in `search/company`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanySummary {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Logo image path.
    #[serde(default)]
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub origin_country: Option<String>,
}

/// Response of `company/{company_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyDetails {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Description.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub description: Option<String>,
    /// Headquarters.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub headquarters: Option<String>,
    /// Homepage URL.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub homepage: Option<String>,
    /// Logo image path.
    #[serde(default)]
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub origin_country: Option<String>,
    /// Parent company.
    #[serde(default)]
    pub parent_company: Option<CompanySummary>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_find_results_empty() {
        // Arrange
        let json = r#"{"movie_results":[],"person_results":[],"tv_results":[],"tv_episode_results":[],"tv_season_results":[]}"#;

        // Act
        let found: FindResults = serde_json::from_str(json).unwrap();

        // Assert
        assert!(found.is_empty());
    }

    #[test]
    fn test_collection_parts_in_release_order() {
        // Arrange
        let json = r#"{
            "id": 10, "name": "Star Wars Collection", "overview": "",
            "parts": [
                {"id": 3, "title": "Untitled", "release_date": ""},
                {"id": 1891, "title": "The Empire Strikes Back", "release_date": "1980-05-20"},
                {"id": 11, "title": "Star Wars", "release_date": "1977-05-25"}
            ]
        }"#;

        // Act
        let collection: Collection = serde_json::from_str(json).unwrap();
        let ids: Vec<u64> = collection
            .parts_in_release_order()
            .iter()
            .map(|m| m.id)
            .collect();

        // Assert
        assert_eq!(ids, vec![11, 1891, 3]);
        assert!(collection.overview.is_none());
    }
}
