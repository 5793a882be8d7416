use tracing::instrument;

use super::user_session_query;
use crate::tmdb::api::LocalAccountApi;
use crate::tmdb::client::{ApiRequest, TmdbClient};
use crate::tmdb::error::Result;
use crate::tmdb::params::{AccountListParams, FavoriteBody, Session, WatchlistBody};
use crate::tmdb::types::{AccountDetails, AccountListKind, MovieSummary, Paged, TmdbStatus};

impl LocalAccountApi for TmdbClient {
    #[instrument(skip_all)]
    async fn account_details(&self, session: &Session) -> Result<AccountDetails> {
        let request = ApiRequest::get("account").query(user_session_query(session)?);
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(account_id = account_id))]
    async fn mark_favorite(
        &self,
        account_id: u64,
        session: &Session,
        body: &FavoriteBody,
    ) -> Result<TmdbStatus> {
        let request = ApiRequest::post(format!("account/{account_id}/favorite"))
            .query(user_session_query(session)?)
            .json(body)?;
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(account_id = account_id))]
    async fn add_to_watchlist(
        &self,
        account_id: u64,
        session: &Session,
        body: &WatchlistBody,
    ) -> Result<TmdbStatus> {
        let request = ApiRequest::post(format!("account/{account_id}/watchlist"))
            .query(user_session_query(session)?)
            .json(body)?;
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(account_id = account_id, kind = kind.as_str()))]
    async fn account_movies(
        &self,
        account_id: u64,
        kind: AccountListKind,
        session: &Session,
        params: &AccountListParams,
    ) -> Result<Paged<MovieSummary>> {
        let mut query = user_session_query(session)?;
        for (name, value) in params.to_query()?.pairs() {
            query.push(*name, value);
        }
        let request =
            ApiRequest::get(format!("account/{account_id}/{}/movies", kind.as_str()))
                .query(query)
                .localized();
        self.execute_json(request).await
    }
}
