use tracing::instrument;

use super::{language_query, session_query};
use crate::tmdb::api::LocalMovieApi;
use crate::tmdb::client::{ApiRequest, TmdbClient};
use crate::tmdb::error::Result;
use crate::tmdb::params::{ImagesParams, MovieDetailsParams, PageParams, RatingBody, Session};
use crate::tmdb::types::{
    AccountStates, Credits, DatedPaged, ExternalIds, Images, Keywords, MovieDetails,
    MovieListKind, MovieSummary, Paged, ReleaseDates, TmdbStatus, Videos,
};

impl LocalMovieApi for TmdbClient {
    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_details(
        &self,
        movie_id: u64,
        params: &MovieDetailsParams,
    ) -> Result<MovieDetails> {
        let request = ApiRequest::get(format!("movie/{movie_id}"))
            .query(params.to_query())
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_credits(&self, movie_id: u64, language: Option<&str>) -> Result<Credits> {
        let request = ApiRequest::get(format!("movie/{movie_id}/credits"))
            .query(language_query(language))
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_images(&self, movie_id: u64, params: &ImagesParams) -> Result<Images> {
        let request = ApiRequest::get(format!("movie/{movie_id}/images")).query(params.to_query());
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_videos(&self, movie_id: u64, language: Option<&str>) -> Result<Videos> {
        let request = ApiRequest::get(format!("movie/{movie_id}/videos"))
            .query(language_query(language))
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_keywords(&self, movie_id: u64) -> Result<Keywords> {
        self.execute_json(ApiRequest::get(format!("movie/{movie_id}/keywords")))
            .await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_recommendations(
        &self,
        movie_id: u64,
        params: &PageParams,
    ) -> Result<Paged<MovieSummary>> {
        let request = ApiRequest::get(format!("movie/{movie_id}/recommendations"))
            .query(params.to_query()?)
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_similar(
        &self,
        movie_id: u64,
        params: &PageParams,
    ) -> Result<Paged<MovieSummary>> {
        let request = ApiRequest::get(format!("movie/{movie_id}/similar"))
            .query(params.to_query()?)
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_release_dates(&self, movie_id: u64) -> Result<ReleaseDates> {
        self.execute_json(ApiRequest::get(format!("movie/{movie_id}/release_dates")))
            .await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_external_ids(&self, movie_id: u64) -> Result<ExternalIds> {
        self.execute_json(ApiRequest::get(format!("movie/{movie_id}/external_ids")))
            .await
    }

    #[instrument(skip_all, fields(kind = kind.as_str()))]
    async fn movie_list(
        &self,
        kind: MovieListKind,
        params: &PageParams,
    ) -> Result<Paged<MovieSummary>> {
        let request = ApiRequest::get(format!("movie/{}", kind.as_str()))
            .query(params.to_query()?)
            .localized()
            .regional();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn movie_now_playing(&self, params: &PageParams) -> Result<DatedPaged<MovieSummary>> {
        let request = ApiRequest::get("movie/now_playing")
            .query(params.to_query()?)
            .localized()
            .regional();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn movie_upcoming(&self, params: &PageParams) -> Result<DatedPaged<MovieSummary>> {
        let request = ApiRequest::get("movie/upcoming")
            .query(params.to_query()?)
            .localized()
            .regional();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn movie_latest(&self) -> Result<MovieDetails> {
        self.execute_json(ApiRequest::get("movie/latest").localized())
            .await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_account_states(
        &self,
        movie_id: u64,
        session: &Session,
    ) -> Result<AccountStates> {
        let request = ApiRequest::get(format!("movie/{movie_id}/account_states"))
            .query(session_query(session)?);
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn rate_movie(
        &self,
        movie_id: u64,
        rating: RatingBody,
        session: &Session,
    ) -> Result<TmdbStatus> {
        let request = ApiRequest::post(format!("movie/{movie_id}/rating"))
            .query(session_query(session)?)
            .json(&rating)?;
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn delete_movie_rating(&self, movie_id: u64, session: &Session) -> Result<TmdbStatus> {
        let request = ApiRequest::delete(format!("movie/{movie_id}/rating"))
            .query(session_query(session)?);
        self.execute_json(request).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::tmdb::endpoints::test_support::{client_for, localized_client_for};
    use crate::tmdb::params::MovieAppend;
    use crate::tmdb::types::{ReleaseType, VideoSite};

    #[test]
    fn test_parse_movie_details_fixture() {
        // Arrange
        let json = include_str!("../../../../../fixtures/tmdb/movie_details_550.json");

        // Act
        let details: MovieDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(details.id, 550);
        assert_eq!(details.title, "Fight Club");
        assert_eq!(details.runtime, Some(139));
        assert_eq!(details.imdb_id.as_deref(), Some("tt0137523"));
        let credits = details.credits.as_ref().unwrap();
        assert_eq!(credits.crew_with_job("Director").next().unwrap().name, "David Fincher");
        let videos = details.videos.as_ref().unwrap();
        assert_eq!(videos.results[0].site, VideoSite::YouTube);
        let us = details.release_dates.as_ref().unwrap().for_country("US").unwrap();
        assert_eq!(us.certification(), Some("R"));
        assert_eq!(us.release_dates[0].release_type, ReleaseType::Theatrical);
    }

    #[tokio::test]
    async fn test_movie_details_with_append_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/movie_details_550.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/550"))
            .and(wiremock::matchers::query_param(
                "append_to_response",
                "credits,videos,release_dates",
            ))
            .and(wiremock::matchers::query_param("language", "ja-JP"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = localized_client_for(&mock_server);
        let params = MovieDetailsParams::new()
            .append(MovieAppend::Credits)
            .append(MovieAppend::Videos)
            .append(MovieAppend::ReleaseDates);

        // Act
        let details = client.movie_details(550, &params).await.unwrap();

        // Assert
        assert_eq!(details.id, 550);
        assert!(details.credits.is_some());
    }

    #[tokio::test]
    async fn test_movie_details_not_found() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let error_body = include_str!("../../../../../fixtures/tmdb/error_not_found.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/999999999"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string(error_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let err = client
            .movie_details(999_999_999, &MovieDetailsParams::new())
            .await
            .unwrap_err();

        // Assert
        assert!(err.is_not_found());
        assert_eq!(err.tmdb_status().unwrap().status_code, 34);
    }

    #[tokio::test]
    async fn test_movie_credits_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = r#"{"id":550,"cast":[{"id":819,"name":"Edward Norton","character":"Narrator","credit_id":"52fe4250c3a36847f80149f3","order":0,"gender":2}],"crew":[]}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/550/credits"))
            .and(wiremock::matchers::query_param("language", "en-US"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = localized_client_for(&mock_server);

        // Act
        let credits = client.movie_credits(550, Some("en-US")).await.unwrap();

        // Assert
        assert_eq!(credits.cast[0].name, "Edward Norton");
    }

    #[tokio::test]
    async fn test_movie_list_paths() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/search_movie_fight_club.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/top_rated"))
            .and(wiremock::matchers::query_param("page", "2"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let page = client
            .movie_list(MovieListKind::TopRated, &PageParams::new().page(2))
            .await
            .unwrap();

        // Assert
        assert!(!page.results.is_empty());
    }

    #[tokio::test]
    async fn test_movie_now_playing_has_date_window() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/movie_now_playing.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/now_playing"))
            .and(wiremock::matchers::query_param("region", "JP"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = localized_client_for(&mock_server);

        // Act
        let page = client.movie_now_playing(&PageParams::new()).await.unwrap();

        // Assert
        assert_eq!(page.dates.minimum.unwrap().to_string(), "2024-05-01");
        assert_eq!(page.dates.maximum.unwrap().to_string(), "2024-06-12");
        assert_eq!(page.paged.page, 1);
        assert!(page.paged.has_next_page());
    }

    #[tokio::test]
    async fn test_movie_account_states_rated_object() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = r#"{"id":550,"favorite":false,"rated":{"value":8.5},"watchlist":true}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/550/account_states"))
            .and(wiremock::matchers::query_param("session_id", "sess-1"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let states = client
            .movie_account_states(550, &Session::User(String::from("sess-1")))
            .await
            .unwrap();

        // Assert
        assert_eq!(states.rated, Some(8.5));
        assert!(states.watchlist);
    }

    #[tokio::test]
    async fn test_rate_movie_with_guest_session() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/status_created.json");

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/3/movie/550/rating"))
            .and(wiremock::matchers::query_param("guest_session_id", "guest-1"))
            .and(wiremock::matchers::body_json(serde_json::json!({"value": 9.0})))
            .respond_with(wiremock::ResponseTemplate::new(201).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let rating = RatingBody::new(9.0).unwrap();

        // Act
        let status = client
            .rate_movie(550, rating, &Session::Guest(String::from("guest-1")))
            .await
            .unwrap();

        // Assert
        assert!(status.success);
    }

    #[tokio::test]
    async fn test_delete_movie_rating_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/status_deleted.json");

        wiremock::Mock::given(wiremock::matchers::method("DELETE"))
            .and(wiremock::matchers::path("/3/movie/550/rating"))
            .and(wiremock::matchers::query_param("session_id", "sess-1"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let status = client
            .delete_movie_rating(550, &Session::User(String::from("sess-1")))
            .await
            .unwrap();

        // Assert
        assert_eq!(status.status_code, 13);
    }

    #[tokio::test]
    async fn test_movie_sub_resources_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let keywords = r#"{"id":550,"keywords":[{"id":825,"name":"support group"}]}"#;
        let external_ids = r#"{"id":550,"imdb_id":"tt0137523","wikidata_id":"Q190050","facebook_id":"FightClub","instagram_id":null,"twitter_id":null}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/550/keywords"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(keywords))
            .mount(&mock_server)
            .await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/550/external_ids"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(external_ids))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let found_keywords = client.movie_keywords(550).await.unwrap();
        let ids = client.movie_external_ids(550).await.unwrap();

        // Assert
        assert_eq!(found_keywords.keywords[0].name, "support group");
        assert_eq!(ids.imdb_id.as_deref(), Some("tt0137523"));
    }
}
