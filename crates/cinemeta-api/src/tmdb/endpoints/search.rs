use tracing::instrument;

use crate::tmdb::api::LocalSearchApi;
use crate::tmdb::client::{ApiRequest, TmdbClient};
use crate::tmdb::error::Result;
use crate::tmdb::params::{
    SearchCollectionParams, SearchCompanyParams, SearchKeywordParams, SearchMovieParams,
    SearchMultiParams, SearchPersonParams, SearchTvParams,
};
use crate::tmdb::types::{
    CollectionSummary, CompanySummary, Keyword, MediaItem, MovieSummary, Paged, PersonSummary,
    TvSummary,
};

impl LocalSearchApi for TmdbClient {
    #[instrument(skip_all)]
    async fn search_movie(&self, params: &SearchMovieParams) -> Result<Paged<MovieSummary>> {
        let request = ApiRequest::get("search/movie")
            .query(params.to_query()?)
            .localized()
            .regional()
            .adult_filtered();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn search_tv(&self, params: &SearchTvParams) -> Result<Paged<TvSummary>> {
        let request = ApiRequest::get("search/tv")
            .query(params.to_query()?)
            .localized()
            .adult_filtered();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn search_person(&self, params: &SearchPersonParams) -> Result<Paged<PersonSummary>> {
        let request = ApiRequest::get("search/person")
            .query(params.to_query()?)
            .localized()
            .adult_filtered();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn search_multi(&self, params: &SearchMultiParams) -> Result<Paged<MediaItem>> {
        let request = ApiRequest::get("search/multi")
            .query(params.to_query()?)
            .localized()
            .adult_filtered();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn search_company(
        &self,
        params: &SearchCompanyParams,
    ) -> Result<Paged<CompanySummary>> {
        let request = ApiRequest::get("search/company").query(params.to_bare_query()?);
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn search_collection(
        &self,
        params: &SearchCollectionParams,
    ) -> Result<Paged<CollectionSummary>> {
        let request = ApiRequest::get("search/collection")
            .query(params.to_query()?)
            .localized()
            .adult_filtered();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn search_keyword(&self, params: &SearchKeywordParams) -> Result<Paged<Keyword>> {
        let request = ApiRequest::get("search/keyword").query(params.to_bare_query()?);
        self.execute_json(request).await
    }
}
