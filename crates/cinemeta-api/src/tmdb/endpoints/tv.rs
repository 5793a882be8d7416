use tracing::instrument;

use super::{language_query, session_query};
use crate::tmdb::api::LocalTvApi;
use crate::tmdb::client::{ApiRequest, TmdbClient};
use crate::tmdb::error::Result;
use crate::tmdb::params::{PageParams, RatingBody, Session, TvDetailsParams};
use crate::tmdb::types::{
    Credits, Episode, ExternalIds, Paged, TmdbStatus, TvDetails, TvListKind, TvSeason, TvSummary,
};

impl LocalTvApi for TmdbClient {
    #[instrument(skip_all, fields(series_id = series_id))]
    async fn tv_details(&self, series_id: u64, params: &TvDetailsParams) -> Result<TvDetails> {
        let request = ApiRequest::get(format!("tv/{series_id}"))
            .query(params.to_query())
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(series_id = series_id, season_number = season_number))]
    async fn tv_season(
        &self,
        series_id: u64,
        season_number: u32,
        language: Option<&str>,
    ) -> Result<TvSeason> {
        let request = ApiRequest::get(format!("tv/{series_id}/season/{season_number}"))
            .query(language_query(language))
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(series_id = series_id, season_number = season_number))]
    async fn tv_episode(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        language: Option<&str>,
    ) -> Result<Episode> {
        let request = ApiRequest::get(format!(
            "tv/{series_id}/season/{season_number}/episode/{episode_number}"
        ))
        .query(language_query(language))
        .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(series_id = series_id))]
    async fn tv_credits(&self, series_id: u64, language: Option<&str>) -> Result<Credits> {
        let request = ApiRequest::get(format!("tv/{series_id}/credits"))
            .query(language_query(language))
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(series_id = series_id))]
    async fn tv_external_ids(&self, series_id: u64) -> Result<ExternalIds> {
        self.execute_json(ApiRequest::get(format!("tv/{series_id}/external_ids")))
            .await
    }

    #[instrument(skip_all, fields(kind = kind.as_str()))]
    async fn tv_list(&self, kind: TvListKind, params: &PageParams) -> Result<Paged<TvSummary>> {
        let request = ApiRequest::get(format!("tv/{}", kind.as_str()))
            .query(params.to_query()?)
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(series_id = series_id))]
    async fn rate_tv(
        &self,
        series_id: u64,
        rating: RatingBody,
        session: &Session,
    ) -> Result<TmdbStatus> {
        let request = ApiRequest::post(format!("tv/{series_id}/rating"))
            .query(session_query(session)?)
            .json(&rating)?;
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(series_id = series_id))]
    async fn delete_tv_rating(&self, series_id: u64, session: &Session) -> Result<TmdbStatus> {
        let request = ApiRequest::delete(format!("tv/{series_id}/rating"))
            .query(session_query(session)?);
        self.execute_json(request).await
    }
}
