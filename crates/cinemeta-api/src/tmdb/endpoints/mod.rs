//! `TmdbClient` implementations of the resource API traits.

use super::error::Result;
use super::params::Session;
use super::query::Query;

mod account;
mod auth;
mod catalog;
mod discover;
mod lists;
mod movies;
mod people;
mod search;
mod tv;

/// Query holding only `language`, if given.
fn language_query(language: Option<&str>) -> Query {
    let mut query = Query::new();
    query.push_str_opt("language", language);
    query
}

/// Query holding only the session parameter.
fn session_query(session: &Session) -> Result<Query> {
    let mut query = Query::new();
    session.apply(&mut query)?;
    Ok(query)
}

/// Query with the user session ID; guest sessions are rejected.
fn user_session_query(session: &Session) -> Result<Query> {
    let mut query = Query::new();
    query.push("session_id", session.require_user()?);
    Ok(query)
}

#[cfg(test)]
pub(crate) mod test_support {
    #![allow(clippy::unwrap_used)]

    use crate::tmdb::client::TmdbClient;

    /// Client pointed at a wiremock server's `/3/` prefix.
    pub(crate) fn client_for(mock_server: &wiremock::MockServer) -> TmdbClient {
        let base_url = format!("{}/3/", mock_server.uri());
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_token("test-token")
            .user_agent("test/0.0.0")
            .build()
            .unwrap()
    }

    /// Same as `client_for`, with default language, region and adult flag.
    pub(crate) fn localized_client_for(mock_server: &wiremock::MockServer) -> TmdbClient {
        let base_url = format!("{}/3/", mock_server.uri());
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_token("test-token")
            .user_agent("test/0.0.0")
            .language("ja-JP")
            .region("JP")
            .include_adult(false)
            .build()
            .unwrap()
    }
}
