//! Typed client library for the TMDB (The Movie Database) v3 REST API.
//!
//! Request parameters are validated before any network I/O. HTTP failures
//! are classified into [`tmdb::TmdbError`] variants.

/// TMDB API client.
pub mod tmdb;
