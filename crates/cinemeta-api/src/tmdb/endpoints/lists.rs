use tracing::instrument;

use super::user_session_query;
use crate::tmdb::api::LocalListApi;
use crate::tmdb::client::{ApiRequest, TmdbClient};
use crate::tmdb::error::{Result, TmdbError};
use crate::tmdb::params::{CreateListBody, ListItemBody, PageParams, Session};
use crate::tmdb::query::Query;
use crate::tmdb::types::{ListCreated, ListDetails, ListItemStatus, TmdbStatus};

impl LocalListApi for TmdbClient {
    #[instrument(skip_all, fields(list_id = list_id))]
    async fn list_details(&self, list_id: u64, params: &PageParams) -> Result<ListDetails> {
        let request = ApiRequest::get(format!("list/{list_id}"))
            .query(params.to_query()?)
            .localized();
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn create_list(&self, session: &Session, body: &CreateListBody) -> Result<ListCreated> {
        body.validate()?;

        let request = ApiRequest::post("list")
            .query(user_session_query(session)?)
            .json(body)?;
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(list_id = list_id, media_id = media_id))]
    async fn add_list_item(
        &self,
        list_id: u64,
        session: &Session,
        media_id: u64,
    ) -> Result<TmdbStatus> {
        let request = ApiRequest::post(format!("list/{list_id}/add_item"))
            .query(user_session_query(session)?)
            .json(&ListItemBody { media_id })?;
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(list_id = list_id, media_id = media_id))]
    async fn remove_list_item(
        &self,
        list_id: u64,
        session: &Session,
        media_id: u64,
    ) -> Result<TmdbStatus> {
        let request = ApiRequest::post(format!("list/{list_id}/remove_item"))
            .query(user_session_query(session)?)
            .json(&ListItemBody { media_id })?;
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(list_id = list_id, movie_id = movie_id))]
    async fn list_item_status(&self, list_id: u64, movie_id: u64) -> Result<ListItemStatus> {
        let mut query = Query::new();
        query.push("movie_id", movie_id);
        let request = ApiRequest::get(format!("list/{list_id}/item_status")).query(query);
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(list_id = list_id))]
    async fn clear_list(
        &self,
        list_id: u64,
        session: &Session,
        confirm: bool,
    ) -> Result<TmdbStatus> {
        if !confirm {
            return Err(TmdbError::invalid(
                "clearing a list removes every item and must be confirmed",
            ));
        }

        let mut query = user_session_query(session)?;
        query.push_bool("confirm", true);
        let request = ApiRequest::post(format!("list/{list_id}/clear")).query(query);
        self.execute_json(request).await
    }

    #[instrument(skip_all, fields(list_id = list_id))]
    async fn delete_list(&self, list_id: u64, session: &Session) -> Result<TmdbStatus> {
        let request =
            ApiRequest::delete(format!("list/{list_id}")).query(user_session_query(session)?);
        self.execute_json(request).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::tmdb::endpoints::test_support::client_for;
    use crate::tmdb::types::MediaItem;

    fn user() -> Session {
        Session::User(String::from("sess-1"))
    }

    #[test]
    fn test_parse_list_details_fixture() {
        // Arrange
        let json = include_str!("../../../../../fixtures/tmdb/list_details.json");

        // Act
        let list: ListDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(list.id, "8202478");
        assert_eq!(list.item_count, 2);
        assert_eq!(list.items.len(), 2);
        assert!(matches!(list.items[0], MediaItem::Movie(_)));
        assert!(matches!(list.items[1], MediaItem::Tv(_)));
        assert!(list.description.is_none());
    }

    #[tokio::test]
    async fn test_list_details_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/list_details.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/list/8202478"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let list = client.list_details(8_202_478, &PageParams::new()).await.unwrap();

        // Assert
        assert_eq!(list.name, "Weekend picks");
    }

    #[tokio::test]
    async fn test_create_list_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/3/list"))
            .and(wiremock::matchers::query_param("session_id", "sess-1"))
            .and(wiremock::matchers::body_json(serde_json::json!({
                "name": "Weekend picks",
                "description": "",
                "language": "en",
            })))
            .respond_with(wiremock::ResponseTemplate::new(201).set_body_string(
                r#"{"status_message":"The item/record was created successfully.","success":true,"status_code":1,"list_id":8202478}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let body = CreateListBody::new("Weekend picks", "en");

        // Act
        let created = client.create_list(&user(), &body).await.unwrap();

        // Assert
        assert!(created.success);
        assert_eq!(created.list_id, 8_202_478);
    }

    #[tokio::test]
    async fn test_create_list_rejects_blank_name() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let client = client_for(&mock_server);
        let body = CreateListBody::new("  ", "en");

        // Act
        let result = client.create_list(&user(), &body).await;

        // Assert
        assert!(matches!(result, Err(TmdbError::InvalidParams(_))));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_and_remove_list_item() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let added = r#"{"status_code":12,"status_message":"The item/record was updated successfully.","success":true}"#;
        let removed = r#"{"status_code":13,"status_message":"The item/record was deleted successfully.","success":true}"#;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/3/list/8202478/add_item"))
            .and(wiremock::matchers::body_json(serde_json::json!({"media_id": 550})))
            .respond_with(wiremock::ResponseTemplate::new(201).set_body_string(added))
            .expect(1)
            .mount(&mock_server)
            .await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/3/list/8202478/remove_item"))
            .and(wiremock::matchers::body_json(serde_json::json!({"media_id": 550})))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(removed))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let add = client.add_list_item(8_202_478, &user(), 550).await.unwrap();
        let remove = client.remove_list_item(8_202_478, &user(), 550).await.unwrap();

        // Assert
        assert_eq!(add.status_code, 12);
        assert_eq!(remove.status_code, 13);
    }

    #[tokio::test]
    async fn test_list_item_status_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/list/8202478/item_status"))
            .and(wiremock::matchers::query_param("movie_id", "550"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_string(r#"{"id":"8202478","item_present":true}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let status = client.list_item_status(8_202_478, 550).await.unwrap();

        // Assert
        assert!(status.item_present);
    }

    #[tokio::test]
    async fn test_clear_list_requires_confirmation() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let client = client_for(&mock_server);

        // Act
        let result = client.clear_list(8_202_478, &user(), false).await;

        // Assert
        assert!(matches!(result, Err(TmdbError::InvalidParams(_))));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_and_delete_list() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let cleared = r#"{"status_code":12,"status_message":"The item/record was updated successfully.","success":true}"#;
        let deleted = include_str!("../../../../../fixtures/tmdb/status_deleted.json");

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/3/list/8202478/clear"))
            .and(wiremock::matchers::query_param("confirm", "true"))
            .and(wiremock::matchers::query_param("session_id", "sess-1"))
            .respond_with(wiremock::ResponseTemplate::new(201).set_body_string(cleared))
            .expect(1)
            .mount(&mock_server)
            .await;
        wiremock::Mock::given(wiremock::matchers::method("DELETE"))
            .and(wiremock::matchers::path("/3/list/8202478"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(deleted))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let clear = client.clear_list(8_202_478, &user(), true).await.unwrap();
        let delete = client.delete_list(8_202_478, &user()).await.unwrap();

        // Assert
        assert_eq!(clear.status_code, 12);
        assert_eq!(delete.status_code, 13);
    }
}
