//! TMDB API v3 client module.
//!
//! Builds validated requests, sends them through a single transport that
//! classifies every response, and decodes bodies into typed records.

mod api;
mod client;
pub mod codec;
mod endpoints;
mod error;
pub mod params;
pub mod query;
mod response;
pub mod types;

pub use api::{
    AccountApi, AuthApi, CatalogApi, DiscoverApi, ListApi, LocalAccountApi, LocalAuthApi,
    LocalCatalogApi, LocalDiscoverApi, LocalListApi, LocalMovieApi, LocalPersonApi,
    LocalSearchApi, LocalTvApi, MovieApi, PersonApi, SearchApi, TvApi,
};
#[allow(clippy::module_name_repetitions)]
pub use client::{ApiRequest, Credentials, DEFAULT_BASE_URL, TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::{Result, TmdbError};
pub use query::{ListSep, Query};
pub use response::{ResponseClass, classify, parse_retry_after};
