//! Credits, images and videos attached to movies and series.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::enums::{Gender, VideoSite};
use crate::tmdb::codec;

// --- Credits ---

/// Response of `movie/{id}/credits` and `tv/{id}/credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct Credits {
    /// Owning movie or series ID (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Cast, in billing order.
    #[serde(default, deserialize_with = "codec::null_as_empty")]
    pub cast: Vec<CastMember>,
    /// Crew.
    #[serde(default, deserialize_with = "codec::null_as_empty")]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// Crew members with the given job (e.g. `"Director"`).
    pub fn crew_with_job<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a CrewMember> {
        self.crew.iter().filter(move |c| c.job == job)
    }
}

/// A cast credit.
#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Character played.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub character: Option<String>,
    /// Credit ID.
    pub credit_id: String,
    /// Billing order.
    #[serde(default)]
    pub order: Option<u32>,
    /// Gender.
    #[serde(default)]
    pub gender: Gender,
    /// Department the person is known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// A crew credit.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Job title.
    pub job: String,
    /// Department.
    pub department: String,
    /// Credit ID.
    pub credit_id: String,
    /// Gender.
    #[serde(default)]
    pub gender: Gender,
    /// Profile image path.
    pub profile_path: Option<String>,
}

// --- Images ---

/// Response of `movie/{id}/images`.
#[derive(Debug, Clone, Deserialize)]
pub struct Images {
    /// Owning movie or series ID (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Backdrops.
    #[serde(default)]
    pub backdrops: Vec<ImageInfo>,
    /// Logos.
    #[serde(default)]
    pub logos: Vec<ImageInfo>,
    /// Posters.
    #[serde(default)]
    pub posters: Vec<ImageInfo>,
}

/// Image metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageInfo {
    /// Relative file path.
    pub file_path: String,
    /// Aspect ratio.
    pub aspect_ratio: f64,
    /// Height in pixels.
    pub height: u32,
    /// Width in pixels.
    pub width: u32,
    /// Image language (ISO 639-1), `None` for textless images.
    pub iso_639_1: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
}

// --- Videos ---

/// Response of `movie/{id}/videos`.
#[derive(Debug, Clone, Deserialize)]
pub struct Videos {
    /// Owning movie or series ID (absent when appended).
    #[serde(default)]
    pub id: Option<u64>,
    /// Videos.
    #[serde(default)]
    pub results: Vec<Video>,
}

/// A trailer, teaser, clip or featurette.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    /// Video ID.
    pub id: String,
    /// Title.
    pub name: String,
    /// Site-specific key (e.g. the `YouTube` video ID).
    pub key: String,
    /// Hosting site.
    pub site: VideoSite,
    /// Video type (`Trailer`, `Teaser`, `Clip`, ...).
    #[serde(rename = "type")]
    pub video_type: String,
    /// Vertical resolution.
    #[serde(default)]
    pub size: Option<u32>,
    /// Official upload by the studio.
    #[serde(default)]
    pub official: bool,
    /// Language (ISO 639-1).
    pub iso_639_1: String,
    /// Country (ISO 3166-1).
    pub iso_3166_1: String,
    /// Publication time.
    #[serde(default, deserialize_with = "codec::optional_rfc3339")]
    pub published_at: Option<DateTime<Utc>>,
}

impl Video {
    /// Watch URL for the known hosting sites.
    #[must_use]
    pub fn watch_url(&self) -> Option<String> {
        match self.site {
            VideoSite::YouTube => Some(format!("https://www.youtube.com/watch?v={}", self.key)),
            VideoSite::Vimeo => Some(format!("https://vimeo.com/{}", self.key)),
            VideoSite::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_credits_crew_with_job() {
        // Arrange
        let json = r#"{
            "id": 550,
            "cast": [{"id": 819, "name": "Edward Norton", "character": "Narrator",
                      "credit_id": "52fe4250c3a36847f80149f3", "order": 0, "gender": 2,
                      "known_for_department": "Acting", "profile_path": null}],
            "crew": [
                {"id": 7467, "name": "David Fincher", "job": "Director", "department": "Directing",
                 "credit_id": "52fe4250c3a36847f8014a11", "gender": 2, "profile_path": null},
                {"id": 7474, "name": "Ross Grayson Bell", "job": "Producer", "department": "Production",
                 "credit_id": "52fe4250c3a36847f8014a17", "gender": 2, "profile_path": null}
            ]
        }"#;

        // Act
        let credits: Credits = serde_json::from_str(json).unwrap();
        let directors: Vec<_> = credits.crew_with_job("Director").collect();

        // Assert
        assert_eq!(credits.cast[0].character.as_deref(), Some("Narrator"));
        assert_eq!(credits.cast[0].gender, Gender::Male);
        assert_eq!(directors.len(), 1);
        assert_eq!(directors[0].name, "David Fincher");
    }

    #[test]
    fn test_video_watch_url() {
        // Arrange
        let json = r#"{
            "id": "639d5326be6d88007f170f44", "name": "Official Trailer", "key": "O-b2VfmmbyA",
            "site": "YouTube", "type": "Trailer", "size": 1080, "official": true,
            "iso_639_1": "en", "iso_3166_1": "US", "published_at": "2022-12-16T17:00:09.000Z"
        }"#;

        // Act
        let video: Video = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(video.video_type, "Trailer");
        assert!(video.published_at.is_some());
        assert_eq!(
            video.watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=O-b2VfmmbyA")
        );
    }
}
