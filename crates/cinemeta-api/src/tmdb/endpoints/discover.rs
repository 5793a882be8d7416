use tracing::instrument;

use crate::tmdb::api::LocalDiscoverApi;
use crate::tmdb::client::{ApiRequest, TmdbClient};
use crate::tmdb::error::Result;
use crate::tmdb::params::{DiscoverMovieParams, DiscoverTvParams};
use crate::tmdb::types::{MovieSummary, Paged, TvSummary};

impl LocalDiscoverApi for TmdbClient {
    #[instrument(skip_all)]
    async fn discover_movie(&self, params: &DiscoverMovieParams) -> Result<Paged<MovieSummary>> {
        let request = ApiRequest::get("discover/movie")
            .query(params.to_query()?)
            .localized()
            .regional()
            .adult_filtered();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn discover_tv(&self, params: &DiscoverTvParams) -> Result<Paged<TvSummary>> {
        let request = ApiRequest::get("discover/tv")
            .query(params.to_query()?)
            .localized()
            .adult_filtered();
        self.execute_json(request).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::tmdb::endpoints::test_support::client_for;
    use crate::tmdb::error::TmdbError;
    use crate::tmdb::params::{IdFilter, MovieSortBy, MovieSortField, TvSortBy, TvSortField};

    #[tokio::test]
    async fn test_discover_movie_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/discover_movie.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/discover/movie"))
            .and(wiremock::matchers::query_param("sort_by", "vote_average.desc"))
            .and(wiremock::matchers::query_param("with_genres", "18,53"))
            .and(wiremock::matchers::query_param("vote_count.gte", "1000"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let params = DiscoverMovieParams::new()
            .sort_by(MovieSortBy::desc(MovieSortField::VoteAverage))
            .with_genres(IdFilter::all([18, 53]))
            .vote_count_gte(1000);

        // Act
        let page = client.discover_movie(&params).await.unwrap();

        // Assert
        assert_eq!(page.total_results, 3);
        assert_eq!(page.results[0].title, "The Shawshank Redemption");
        assert_eq!(page.results[0].genre_ids, vec![18, 80]);
    }

    #[tokio::test]
    async fn test_discover_movie_invalid_filters_send_nothing() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let client = client_for(&mock_server);
        let params = DiscoverMovieParams {
            certification: Some(String::from("R")),
            ..DiscoverMovieParams::default()
        };

        // Act
        let result = client.discover_movie(&params).await;

        // Assert
        assert!(matches!(result, Err(TmdbError::InvalidParams(_))));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discover_tv_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/search_tv_game_of_thrones.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/discover/tv"))
            .and(wiremock::matchers::query_param("with_networks", "49"))
            .and(wiremock::matchers::query_param("sort_by", "first_air_date.asc"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let params = DiscoverTvParams::new()
            .with_networks(IdFilter::all([49]))
            .sort_by(TvSortBy::asc(TvSortField::FirstAirDate));

        // Act
        let page = client.discover_tv(&params).await.unwrap();

        // Assert
        assert_eq!(page.results[0].name, "Game of Thrones");
    }
}
