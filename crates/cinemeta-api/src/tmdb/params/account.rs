//! Session selection, account list parameters and JSON request bodies.

use serde::Serialize;

use crate::tmdb::error::{Result, TmdbError};
use crate::tmdb::query::{Query, check_page, require_text};
use crate::tmdb::types::MediaType;

/// Lowest accepted rating.
pub const MIN_RATING: f32 = 0.5;

/// Highest accepted rating.
pub const MAX_RATING: f32 = 10.0;

/// Session a user-scoped call runs under.
#[derive(Clone, PartialEq, Eq)]
pub enum Session {
    /// Session created from an approved request token.
    User(String),
    /// Guest session.
    Guest(String),
}

impl Session {
    /// Adds the session query parameter.
    pub(crate) fn apply(&self, query: &mut Query) -> Result<()> {
        match self {
            Self::User(id) => {
                require_text("session_id", id)?;
                query.push("session_id", id.trim());
            }
            Self::Guest(id) => {
                require_text("guest_session_id", id)?;
                query.push("guest_session_id", id.trim());
            }
        }
        Ok(())
    }

    /// Extracts the user session, rejecting guest sessions.
    pub(crate) fn require_user(&self) -> Result<&str> {
        match self {
            Self::User(id) => {
                require_text("session_id", id)?;
                Ok(id.trim())
            }
            Self::Guest(_) => Err(TmdbError::invalid(
                "this endpoint requires a user session, not a guest session",
            )),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(_) => f.write_str("Session::User(****)"),
            Self::Guest(_) => f.write_str("Session::Guest(****)"),
        }
    }
}

/// Parameters for `account/{account_id}/{favorite,rated,watchlist}/movies`.
#[derive(Debug, Clone, Default)]
pub struct AccountListParams {
    /// Response language (client default when `None`).
    pub language: Option<String>,
    /// Result page (1-500).
    pub page: Option<u32>,
    /// `created_at.asc` or `created_at.desc`.
    pub newest_first: Option<bool>,
}

impl AccountListParams {
    /// Creates empty params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Orders by the time the entry was added.
    #[must_use]
    pub const fn newest_first(mut self, newest_first: bool) -> Self {
        self.newest_first = Some(newest_first);
        self
    }

    pub(crate) fn to_query(&self) -> Result<Query> {
        check_page(self.page)?;

        let sort_by = self.newest_first.map(|newest| {
            if newest {
                "created_at.desc"
            } else {
                "created_at.asc"
            }
        });

        let mut query = Query::new();
        query
            .push_str_opt("language", self.language.as_deref())
            .push_opt("page", self.page)
            .push_opt("sort_by", sort_by);
        Ok(query)
    }
}

// --- Bodies ---

/// Body of `movie/{id}/rating` and `tv/{id}/rating`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingBody {
    value: f32,
}

impl RatingBody {
    /// Creates a rating.
    ///
    /// # Errors
    ///
    /// Returns `TmdbError::InvalidParams` unless `value` is in `0.5..=10.0`
    /// and a multiple of `0.5`.
    pub fn new(value: f32) -> Result<Self> {
        let halves = value * 2.0;
        if !(MIN_RATING..=MAX_RATING).contains(&value) || (halves - halves.round()).abs() > 1e-6 {
            return Err(TmdbError::invalid(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING} in steps of 0.5, got {value}"
            )));
        }
        Ok(Self { value })
    }

    /// Rating value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }
}

/// Body of `account/{account_id}/favorite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FavoriteBody {
    /// Movie or series.
    pub media_type: MediaType,
    /// Movie or series ID.
    pub media_id: u64,
    /// `true` to add, `false` to remove.
    pub favorite: bool,
}

/// Body of `account/{account_id}/watchlist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WatchlistBody {
    /// Movie or series.
    pub media_type: MediaType,
    /// Movie or series ID.
    pub media_id: u64,
    /// `true` to add, `false` to remove.
    pub watchlist: bool,
}

/// Body of `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateListBody {
    /// List name.
    pub name: String,
    /// List description.
    pub description: String,
    /// List language (ISO 639-1).
    pub language: String,
}

impl CreateListBody {
    /// Creates a list body with an empty description.
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            language: language.into(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("language", &self.language)
    }
}

/// Body of `list/{list_id}/add_item` and `list/{list_id}/remove_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListItemBody {
    /// Movie ID.
    pub media_id: u64,
}

/// Body of `authentication/session/new`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RequestTokenBody {
    /// Approved request token.
    pub request_token: String,
}

/// Body of `authentication/token/validate_with_login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginBody {
    /// TMDB username.
    pub username: String,
    /// TMDB password.
    pub password: String,
    /// Unapproved request token.
    pub request_token: String,
}

/// Body of `DELETE authentication/session`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SessionBody {
    /// Session to delete.
    pub session_id: String,
}
