//! Request parameter models.
//!
//! Every parameter struct validates itself before a request is built, so
//! invalid combinations fail with `TmdbError::InvalidParams` without any
//! network I/O.

mod account;
mod details;
mod discover;
mod search;

pub use account::{
    AccountListParams, CreateListBody, FavoriteBody, ListItemBody, LoginBody, MAX_RATING,
    MIN_RATING, RatingBody, RequestTokenBody, Session, SessionBody, WatchlistBody,
};
pub use details::{
    AppendToResponse, DetailsParams, ImagesParams, MAX_APPEND, MovieAppend, MovieDetailsParams,
    PageParams, PersonAppend, PersonDetailsParams, TvAppend, TvDetailsParams,
};
pub use discover::{
    DiscoverMovieParams, DiscoverTvParams, IdFilter, Monetization, MovieSortBy, MovieSortField,
    SortBy, SortField, SortOrder, TvSortBy, TvSortField,
};
pub use search::{
    SearchCollectionParams, SearchCompanyParams, SearchKeywordParams, SearchMovieParams,
    SearchMultiParams, SearchParams, SearchPersonParams, SearchTvParams,
};
