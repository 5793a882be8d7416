use tracing::instrument;

use super::language_query;
use crate::tmdb::api::LocalPersonApi;
use crate::tmdb::client::{ApiRequest, TmdbClient};
use crate::tmdb::error::Result;
use crate::tmdb::params::{PageParams, PersonDetailsParams};
use crate::tmdb::types::{CombinedCredits, Paged, PersonDetails, PersonSummary};

impl LocalPersonApi for TmdbClient {
    #[instrument(skip_all, fields(person_id = person_id))]
    async fn person_details(
        &self,
        person_id: u64,
        params: &PersonDetailsParams,
    ) -> Result<PersonDetails> {
        let request = ApiRequest::get(format!("person/{person_id}"))
            .query(params.to_query())
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(person_id = person_id))]
    async fn person_combined_credits(
        &self,
        person_id: u64,
        language: Option<&str>,
    ) -> Result<CombinedCredits> {
        let request = ApiRequest::get(format!("person/{person_id}/combined_credits"))
            .query(language_query(language))
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn person_popular(&self, params: &PageParams) -> Result<Paged<PersonSummary>> {
        let request = ApiRequest::get("person/popular")
            .query(params.to_query()?)
            .localized();
        self.execute_json(request).await
    }
}
