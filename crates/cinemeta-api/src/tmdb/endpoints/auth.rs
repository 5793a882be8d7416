use tracing::instrument;

use crate::tmdb::api::LocalAuthApi;
use crate::tmdb::client::{ApiRequest, TmdbClient};
use crate::tmdb::error::Result;
use crate::tmdb::params::{LoginBody, RequestTokenBody, SessionBody};
use crate::tmdb::query::require_text;
use crate::tmdb::types::{GuestSession, NewSession, RequestToken, SuccessFlag};

impl LocalAuthApi for TmdbClient {
    #[instrument(skip_all)]
    async fn create_request_token(&self) -> Result<RequestToken> {
        self.execute_json(ApiRequest::get("authentication/token/new"))
            .await
    }

    #[instrument(skip_all)]
    async fn validate_with_login(&self, login: &LoginBody) -> Result<RequestToken> {
        require_text("username", &login.username)?;
        require_text("request_token", &login.request_token)?;

        let request =
            ApiRequest::post("authentication/token/validate_with_login").json(login)?;
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn create_session(&self, request_token: &str) -> Result<NewSession> {
        require_text("request_token", request_token)?;

        let body = RequestTokenBody {
            request_token: request_token.trim().to_owned(),
        };
        let request = ApiRequest::post("authentication/session/new").json(&body)?;
        self.execute_json(request).await
    }

    #[instrument(skip_all)]
    async fn create_guest_session(&self) -> Result<GuestSession> {
        self.execute_json(ApiRequest::get("authentication/guest_session/new"))
            .await
    }

    #[instrument(skip_all)]
    async fn delete_session(&self, session_id: &str) -> Result<SuccessFlag> {
        require_text("session_id", session_id)?;

        let body = SessionBody {
            session_id: session_id.trim().to_owned(),
        };
        let request = ApiRequest::delete("authentication/session").json(&body)?;
        self.execute_json(request).await
    }
}
