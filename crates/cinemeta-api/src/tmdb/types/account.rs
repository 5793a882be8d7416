//! Authentication, account and user list response models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::media::MediaItem;
use crate::tmdb::codec;

// --- Authentication ---

/// Response of `authentication/token/new` and `token/validate_with_login`.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestToken {
    /// Whether the call succeeded.
    pub success: bool,
    /// Token expiry.
    #[serde(deserialize_with = "codec::auth_timestamp")]
    pub expires_at: DateTime<Utc>,
    /// The request token.
    pub request_token: String,
}

impl RequestToken {
    /// Page where the user approves this token.
    #[must_use]
    pub fn approval_url(&self) -> String {
        format!(
            "https://www.themoviedb.org/authenticate/{}",
            self.request_token
        )
    }
}

/// Response of `authentication/session/new`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSession {
    /// Whether the call succeeded.
    pub success: bool,
    /// The new session ID.
    pub session_id: String,
}

/// Response of `authentication/guest_session/new`.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestSession {
    /// Whether the call succeeded.
    pub success: bool,
    /// The guest session ID.
    pub guest_session_id: String,
    /// Session expiry.
    #[serde(deserialize_with = "codec::auth_timestamp")]
    pub expires_at: DateTime<Utc>,
}

// --- Account ---

/// Response of `account`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountDetails {
    /// Account ID.
    pub id: u64,
    /// Display name.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub name: Option<String>,
    /// Username.
    pub username: String,
    /// Preferred language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Preferred country (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    /// Adult content preference.
    #[serde(default)]
    pub include_adult: bool,
    /// Avatar hashes.
    #[serde(default)]
    pub avatar: Option<Avatar>,
}

/// Account avatar sources.
#[derive(Debug, Clone, Deserialize)]
pub struct Avatar {
    /// Gravatar.
    #[serde(default)]
    pub gravatar: Option<Gravatar>,
    /// TMDB-hosted avatar.
    #[serde(default)]
    pub tmdb: Option<TmdbAvatar>,
}

/// Gravatar hash.
#[derive(Debug, Clone, Deserialize)]
pub struct Gravatar {
    /// MD5 hash.
    #[serde(default)]
    pub hash: Option<String>,
}

/// TMDB-hosted avatar.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbAvatar {
    /// Image path.
    #[serde(default)]
    pub avatar_path: Option<String>,
}

// --- Lists ---

/// Response of `list/{list_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDetails {
    /// List ID (TMDB sends it as a string).
    pub id: String,
    /// List name.
    pub name: String,
    /// Description.
    #[serde(default, deserialize_with = "codec::empty_string_as_none")]
    pub description: Option<String>,
    /// Creator's username.
    #[serde(default)]
    pub created_by: Option<String>,
    /// Language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Number of items.
    #[serde(default)]
    pub item_count: u32,
    /// Number of favorites.
    #[serde(default)]
    pub favorite_count: u32,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Items on the list.
    #[serde(default, deserialize_with = "codec::null_as_empty")]
    pub items: Vec<MediaItem>,
}

/// Response of `list` (create).
#[derive(Debug, Clone, Deserialize)]
pub struct ListCreated {
    /// TMDB status code.
    pub status_code: u32,
    /// Status message.
    pub status_message: String,
    /// Whether the call succeeded.
    #[serde(default)]
    pub success: bool,
    /// ID of the new list.
    pub list_id: u64,
}

/// Response of `list/{list_id}/item_status`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListItemStatus {
    /// List ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Whether the movie is on the list.
    pub item_present: bool,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::Datelike;

    use super::*;

    #[test]
    fn test_request_token_approval_url() {
        // Arrange
        let json = r#"{"success":true,"expires_at":"2016-08-26 17:04:39 UTC","request_token":"ff5c7eeb5a8870efe3cd7fc5c282cffd26800ecd"}"#;

        // Act
        let token: RequestToken = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(token.expires_at.month(), 8);
        assert_eq!(
            token.approval_url(),
            "https://www.themoviedb.org/authenticate/ff5c7eeb5a8870efe3cd7fc5c282cffd26800ecd"
        );
    }

    #[test]
    fn test_account_details_nested_avatar() {
        // Arrange
        let json = r#"{
            "avatar": {"gravatar": {"hash": "c9e9fc152ee756a900db85757c29815d"}, "tmdb": {"avatar_path": null}},
            "id": 548, "iso_639_1": "en", "iso_3166_1": "CA", "name": "",
            "include_adult": false, "username": "travisbell"
        }"#;

        // Act
        let account: AccountDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(account.id, 548);
        assert!(account.name.is_none());
        let hash = account.avatar.unwrap().gravatar.unwrap().hash;
        assert_eq!(hash.as_deref(), Some("c9e9fc152ee756a900db85757c29815d"));
    }

    #[test]
    fn test_list_details_items() {
        // Arrange
        let json = r#"{
            "created_by": "travisbell", "description": "", "favorite_count": 0,
            "id": "1", "iso_639_1": "en", "item_count": 1, "name": "The Marvel Universe",
            "poster_path": null,
            "items": [{"media_type": "movie", "id": 1726, "title": "Iron Man", "release_date": "2008-04-30"}]
        }"#;

        // Act
        let list: ListDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(list.item_count, 1);
        assert!(list.description.is_none());
        assert_eq!(list.items.first().map(MediaItem::id), Some(1726));
    }
}
