//! Person response models.

use chrono::NaiveDate;
use serde::Deserialize;

use super::common::ExternalIds;
use super::enums::Gender;
use super::media::{MediaCredit, MediaItem};
use crate::tmdb::codec;

/// Person as it appears in search results and lists.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonSummary {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original (romanized or native) name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Department the person is known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Gender.
    #[serde(default)]
    pub gender: Gender,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Notable works (movies and series).
    #[serde(default, deserialize_with = "codec::null_as_empty")]
    pub known_for: Vec<MediaItem>,
}

/// Response of `person/{person_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Alternative spellings.
    #[serde(default)]
    pub also_known_as: Vec<String>,
    /// Biography.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub biography: Option<String>,
    /// Date of birth.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub birthday: Option<NaiveDate>,
    /// Date of death.
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub deathday: Option<NaiveDate>,
    /// Place of birth.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub place_of_birth: Option<String>,
    /// Gender.
    #[serde(default)]
    pub gender: Gender,
    /// Department the person is known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// IMDb ID.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub imdb_id: Option<String>,
    /// Homepage URL.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub homepage: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,

    /// Appended `combined_credits`.
    #[serde(default)]
    pub combined_credits: Option<CombinedCredits>,
    /// Appended `external_ids`.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

impl PersonDetails {
    /// Age in whole years at `on`, or at death if the person has died.
    #[must_use]
    pub fn age_at(&self, on: NaiveDate) -> Option<u32> {
        let birthday = self.birthday?;
        let end = self.deathday.unwrap_or(on);
        end.years_since(birthday)
    }
}

/// Response of `person/{person_id}/combined_credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct CombinedCredits {
    /// Person ID (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Acting credits in movies and series.
    #[serde(default)]
    pub cast: Vec<MediaCredit>,
    /// Crew credits in movies and series.
    #[serde(default)]
    pub crew: Vec<MediaCredit>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_person_age_at() {
        // Arrange
        let json = r#"{"id":287,"name":"Brad Pitt","birthday":"1963-12-18","deathday":null,"gender":2}"#;
        let person: PersonDetails = serde_json::from_str(json).unwrap();

        // Act
        let age = person.age_at(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        // Assert
        assert_eq!(age, Some(60));
        assert_eq!(person.gender, Gender::Male);
    }

    #[test]
    fn test_person_age_stops_at_deathday() {
        // Arrange
        let json = r#"{"id":1,"name":"Someone","birthday":"1900-01-01","deathday":"1950-06-30"}"#;
        let person: PersonDetails = serde_json::from_str(json).unwrap();

        // Act
        let age = person.age_at(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        // Assert
        assert_eq!(age, Some(50));
    }

    #[test]
    fn test_person_summary_known_for_is_polymorphic() {
        // Arrange
        let json = r#"{
            "id": 287, "name": "Brad Pitt", "known_for_department": "Acting", "gender": 2,
            "known_for": [
                {"media_type": "movie", "id": 550, "title": "Fight Club"},
                {"media_type": "tv", "id": 1399, "name": "Game of Thrones"}
            ]
        }"#;

        // Act
        let person: PersonSummary = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(person.known_for.len(), 2);
        assert!(matches!(person.known_for.first(), Some(MediaItem::Movie(m)) if m.id == 550));
        assert!(matches!(person.known_for.get(1), Some(MediaItem::Tv(t)) if t.id == 1399));
    }
}
