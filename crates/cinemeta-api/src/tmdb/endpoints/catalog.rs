use tracing::instrument;

use super::language_query;
use crate::tmdb::api::LocalCatalogApi;
use crate::tmdb::client::{ApiRequest, TmdbClient};
use crate::tmdb::error::{Result, TmdbError};
use crate::tmdb::params::PageParams;
use crate::tmdb::query::{Query, require_text};
use crate::tmdb::types::{
    Collection, CompanyDetails, Configuration, ExternalSource, FindResults, GenreList, Keyword,
    MediaItem, Paged, TimeWindow, TrendingTarget,
};

impl LocalCatalogApi for TmdbClient {
    #[instrument(skip_all)]
    async fn configuration(&self) -> Result<Configuration> {
        self.execute_json(ApiRequest::get("configuration")).await
    }

    #[instrument(skip_all)]
    async fn movie_genres(&self, language: Option<&str>) -> Result<GenreList> {
        let request = ApiRequest::get("genre/movie/list")
            .query(language_query(language))
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn tv_genres(&self, language: Option<&str>) -> Result<GenreList> {
        let request = ApiRequest::get("genre/tv/list")
            .query(language_query(language))
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(target = target.as_str(), window = window.as_str()))]
    async fn trending(
        &self,
        target: TrendingTarget,
        window: TimeWindow,
        params: &PageParams,
    ) -> Result<Paged<MediaItem>> {
        let request = ApiRequest::get(format!(
            "trending/{}/{}",
            target.as_str(),
            window.as_str()
        ))
        .query(params.to_query()?)
        .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(source = source.as_str()))]
    async fn find_by_external_id(
        &self,
        external_id: &str,
        source: ExternalSource,
        language: Option<&str>,
    ) -> Result<FindResults> {
        require_text("external_id", external_id)?;
        let external_id = external_id.trim();
        if matches!(external_id, "." | "..") {
            return Err(TmdbError::invalid(format!(
                "external_id must not be {external_id:?}"
            )));
        }

        let mut query = Query::new();
        query
            .push("external_source", source.as_str())
            .push_str_opt("language", language);
        let request = ApiRequest::get("find")
            .segment(external_id)
            .query(query)
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(collection_id = collection_id))]
    async fn collection_details(
        &self,
        collection_id: u64,
        language: Option<&str>,
    ) -> Result<Collection> {
        let request = ApiRequest::get(format!("collection/{collection_id}"))
            .query(language_query(language))
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(company_id = company_id))]
    async fn company_details(&self, company_id: u64) -> Result<CompanyDetails> {
        self.execute_json(ApiRequest::get(format!("company/{company_id}")))
            .await
    }

    #[instrument(skip_all, fields(keyword_id = keyword_id))]
    async fn keyword_details(&self, keyword_id: u64) -> Result<Keyword> {
        self.execute_json(ApiRequest::get(format!("keyword/{keyword_id}")))
            .await
    }
}
