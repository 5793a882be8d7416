//! `TmdbClient` - TMDB API client implementation.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::error::{Result, TmdbError};
use super::query::Query;
use super::response::{ResponseClass, classify, error_for};

/// Default base URL for TMDB API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Placeholder for secrets in logs and `Debug` output.
const REDACTED: &str = "****";

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// v4 read access token, sent as `Authorization: Bearer ...`.
    Bearer(String),
    /// v3 API key, sent as the `api_key` query parameter.
    ApiKey(String),
}

impl Credentials {
    fn secret(&self) -> &str {
        match self {
            Self::Bearer(s) | Self::ApiKey(s) => s,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => write!(f, "Bearer({REDACTED})"),
            Self::ApiKey(_) => write!(f, "ApiKey({REDACTED})"),
        }
    }
}

/// One API call: method, path relative to the base URL, query and body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    segment: Option<String>,
    query: Query,
    body: Option<serde_json::Value>,
    localized: bool,
    regional: bool,
    adult_filtered: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            segment: None,
            query: Query::new(),
            body: None,
            localized: false,
            regional: false,
            adult_filtered: false,
        }
    }

    /// `GET path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST path`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `DELETE path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends `value` to the path as one percent-encoded segment.
    ///
    /// `/`, `?` and `#` in `value` are encoded rather than interpreted.
    #[must_use]
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segment = Some(value.into());
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Sets a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `TmdbError::InvalidParams` if `body` cannot be serialized.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| TmdbError::invalid(format!("request body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Endpoint accepts `language`; the client default fills it in.
    #[must_use]
    pub const fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    /// Endpoint accepts `region`; the client default fills it in.
    #[must_use]
    pub const fn regional(mut self) -> Self {
        self.regional = true;
        self
    }

    /// Endpoint accepts `include_adult`; the client default fills it in.
    #[must_use]
    pub const fn adult_filtered(mut self) -> Self {
        self.adult_filtered = true;
        self
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// TMDB API client.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer token or API key.
    credentials: Credentials,
    /// Default `language` for localized endpoints.
    language: Option<String>,
    /// Default `region` for region-aware endpoints.
    region: Option<String>,
    /// Default `include_adult` for endpoints that filter adult content.
    include_adult: Option<bool>,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    credentials: Option<Credentials>,
    user_agent: Option<String>,
    language: Option<String>,
    region: Option<String>,
    include_adult: Option<bool>,
    timeout: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            credentials: None,
            user_agent: None,
            language: None,
            region: None,
            include_adult: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the credentials.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Authenticates with a v4 read access token.
    #[must_use]
    pub fn api_token(self, token: impl Into<String>) -> Self {
        self.credentials(Credentials::Bearer(token.into()))
    }

    /// Authenticates with a v3 API key.
    #[must_use]
    pub fn api_key(self, key: impl Into<String>) -> Self {
        self.credentials(Credentials::ApiKey(key.into()))
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the default response language (e.g. `ja-JP`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the default region (ISO 3166-1).
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the default adult content flag.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = Some(include);
        self
    }

    /// Sets the overall request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - credentials are not set or blank.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| TmdbError::Config(String::from("api_token or api_key is required")))?;
        if credentials.secret().trim().is_empty() {
            return Err(TmdbError::Config(String::from("credentials must not be blank")));
        }
        let user_agent = self
            .user_agent
            .ok_or_else(|| TmdbError::Config(String::from("user_agent is required")))?;

        let mut base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut http_builder = Client::builder().user_agent(&user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }
        let http_client = http_builder.build()?;

        Ok(TmdbClient {
            http_client,
            base_url,
            credentials,
            language: self.language.filter(|s| !s.trim().is_empty()),
            region: self.region.filter(|s| !s.trim().is_empty()),
            include_adult: self.include_adult,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Base URL requests are joined onto.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default response language.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Request query with client defaults applied.
    fn effective_query(&self, request: &ApiRequest) -> Query {
        let mut query = request.query.clone();
        if request.localized && !query.contains("language") {
            query.push_str_opt("language", self.language.as_deref());
        }
        if request.regional && !query.contains("region") {
            query.push_str_opt("region", self.region.as_deref());
        }
        if request.adult_filtered && !query.contains("include_adult") {
            query.push_opt("include_adult", self.include_adult);
        }
        query
    }

    /// Sends one request and hands a successful body to `parse`.
    ///
    /// The request is never retried. A 429 surfaces as
    /// `TmdbError::Throttled` carrying the `Retry-After` hint.
    ///
    /// # Errors
    ///
    /// - the path cannot be joined onto the base URL.
    /// - the transport fails.
    /// - the response is not 2xx.
    /// - `parse` fails.
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    pub async fn execute<T, F>(&self, request: ApiRequest, parse: F) -> Result<T>
    where
        F: FnOnce(&str) -> Result<T>,
    {
        let mut url = self.base_url.join(&request.path)?;
        if let Some(segment) = &request.segment {
            url.path_segments_mut()
                .map_err(|()| TmdbError::Config(String::from("base URL cannot take a path")))?
                .pop_if_empty()
                .push(segment);
        }
        let query = self.effective_query(&request);

        let mut builder = self
            .http_client
            .request(request.method.clone(), url)
            .query(query.pairs());
        builder = match &self.credentials {
            Credentials::Bearer(token) => builder.bearer_auth(token),
            Credentials::ApiKey(key) => builder.query(&[("api_key", key)]),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let http_request = builder.build()?;

        tracing::debug!(
            method = %http_request.method(),
            url = %redacted_url(http_request.url()),
            "TMDB API request"
        );

        let response = self.http_client.execute(http_request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        tracing::debug!(%status, body_len = body.len(), "TMDB API response");

        let class = classify(status);
        if class != ResponseClass::Success {
            let err = error_for(class, status, &headers, body);
            if let TmdbError::Throttled { retry_after, .. } = &err {
                warn_throttled(&request.path, *retry_after);
            }
            return Err(err);
        }

        parse(&body)
    }

    /// `execute` with JSON decoding into `T`.
    ///
    /// # Errors
    ///
    /// As `execute`, plus `TmdbError::Decode` when the body does not match `T`.
    pub async fn execute_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let path = request.path.clone();
        self.execute(request, |body| {
            serde_json::from_str(body).map_err(|source| TmdbError::Decode { path, source })
        })
        .await
    }
}

fn warn_throttled(path: &str, retry_after: Option<Duration>) {
    match retry_after {
        Some(delay) => tracing::warn!(
            %path,
            retry_after_secs = delay.as_secs(),
            "TMDB API rate limited (429)"
        ),
        None => tracing::warn!(%path, "TMDB API rate limited (429)"),
    }
}

/// Query parameters whose values never reach the log.
const SECRET_PARAMS: &[&str] = &["api_key", "session_id", "guest_session_id"];

/// URL with credential and session values masked.
fn redacted_url(url: &Url) -> String {
    if !url
        .query_pairs()
        .any(|(k, _)| SECRET_PARAMS.contains(&k.as_ref()))
    {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if SECRET_PARAMS.contains(&k.as_ref()) {
                String::from(REDACTED)
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();
    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
