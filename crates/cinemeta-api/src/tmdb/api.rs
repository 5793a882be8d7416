//! Resource API traits.
//!
//! Each resource group is a `trait_variant`-generated pair: `LocalXApi` for
//! single-threaded callers and `XApi: Send` for multi-threaded runtimes.
//! `TmdbClient` implements all of them; tests substitute mocks.
//!
//! Every operation issues exactly one HTTP request. Parameter validation
//! failures return `TmdbError::InvalidParams` before anything is sent.
#![allow(clippy::future_not_send)]

use super::error::Result;
use super::params::{
    AccountListParams, CreateListBody, DiscoverMovieParams, DiscoverTvParams, FavoriteBody,
    ImagesParams, LoginBody, MovieDetailsParams, PageParams, PersonDetailsParams, RatingBody,
    SearchCollectionParams, SearchCompanyParams, SearchKeywordParams, SearchMovieParams,
    SearchMultiParams, SearchPersonParams, SearchTvParams, Session, TvDetailsParams,
    WatchlistBody,
};
use super::types::{
    AccountDetails, AccountListKind, AccountStates, Collection, CollectionSummary,
    CombinedCredits, CompanyDetails, CompanySummary, Configuration, Credits, DatedPaged, Episode,
    ExternalIds, ExternalSource, FindResults, GenreList, GuestSession, Images, Keyword, Keywords,
    ListCreated, ListDetails, ListItemStatus, MediaItem, MovieDetails, MovieListKind,
    MovieSummary, NewSession, Paged, PersonDetails, PersonSummary, ReleaseDates, RequestToken,
    SuccessFlag, TimeWindow, TmdbStatus, TrendingTarget, TvDetails, TvListKind, TvSeason,
    TvSummary, Videos,
};

/// `search/*` endpoints.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(SearchApi: Send)]
pub trait LocalSearchApi {
    /// Searches for movies.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn search_movie(&self, params: &SearchMovieParams) -> Result<Paged<MovieSummary>>;

    /// Searches for TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn search_tv(&self, params: &SearchTvParams) -> Result<Paged<TvSummary>>;

    /// Searches for people.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn search_person(&self, params: &SearchPersonParams) -> Result<Paged<PersonSummary>>;

    /// Searches movies, series and people in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn search_multi(&self, params: &SearchMultiParams) -> Result<Paged<MediaItem>>;

    /// Searches for production companies.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn search_company(&self, params: &SearchCompanyParams)
    -> Result<Paged<CompanySummary>>;

    /// Searches for collections.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn search_collection(
        &self,
        params: &SearchCollectionParams,
    ) -> Result<Paged<CollectionSummary>>;

    /// Searches for keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn search_keyword(&self, params: &SearchKeywordParams) -> Result<Paged<Keyword>>;
}

/// `movie/*` endpoints.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Fetches movie details, with optional appended sub-resources.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn movie_details(&self, movie_id: u64, params: &MovieDetailsParams)
    -> Result<MovieDetails>;

    /// Fetches cast and crew.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_credits(&self, movie_id: u64, language: Option<&str>) -> Result<Credits>;

    /// Fetches posters, backdrops and logos.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_images(&self, movie_id: u64, params: &ImagesParams) -> Result<Images>;

    /// Fetches trailers and other videos.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_videos(&self, movie_id: u64, language: Option<&str>) -> Result<Videos>;

    /// Fetches keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_keywords(&self, movie_id: u64) -> Result<Keywords>;

    /// Fetches recommended movies.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn movie_recommendations(
        &self,
        movie_id: u64,
        params: &PageParams,
    ) -> Result<Paged<MovieSummary>>;

    /// Fetches similar movies.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn movie_similar(&self, movie_id: u64, params: &PageParams)
    -> Result<Paged<MovieSummary>>;

    /// Fetches release dates and certifications by country.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_release_dates(&self, movie_id: u64) -> Result<ReleaseDates>;

    /// Fetches IMDb, Wikidata and social IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_external_ids(&self, movie_id: u64) -> Result<ExternalIds>;

    /// Fetches the popular or top rated list.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn movie_list(
        &self,
        kind: MovieListKind,
        params: &PageParams,
    ) -> Result<Paged<MovieSummary>>;

    /// Fetches movies now in theatres.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn movie_now_playing(&self, params: &PageParams) -> Result<DatedPaged<MovieSummary>>;

    /// Fetches upcoming movies.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn movie_upcoming(&self, params: &PageParams) -> Result<DatedPaged<MovieSummary>>;

    /// Fetches the most recently added movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_latest(&self) -> Result<MovieDetails>;

    /// Fetches the rating, favorite and watchlist state for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_account_states(&self, movie_id: u64, session: &Session)
    -> Result<AccountStates>;

    /// Rates a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn rate_movie(
        &self,
        movie_id: u64,
        rating: RatingBody,
        session: &Session,
    ) -> Result<TmdbStatus>;

    /// Removes a movie rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn delete_movie_rating(&self, movie_id: u64, session: &Session) -> Result<TmdbStatus>;
}

/// `tv/*` endpoints.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TvApi: Send)]
pub trait LocalTvApi {
    /// Fetches series details including the season list.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn tv_details(&self, series_id: u64, params: &TvDetailsParams) -> Result<TvDetails>;

    /// Fetches a season including its episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_season(
        &self,
        series_id: u64,
        season_number: u32,
        language: Option<&str>,
    ) -> Result<TvSeason>;

    /// Fetches a single episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_episode(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        language: Option<&str>,
    ) -> Result<Episode>;

    /// Fetches cast and crew of the latest season.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_credits(&self, series_id: u64, language: Option<&str>) -> Result<Credits>;

    /// Fetches IMDb, TheTVDB and social IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_external_ids(&self, series_id: u64) -> Result<ExternalIds>;

    /// Fetches a series list (popular, top rated, on the air, airing today).
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn tv_list(&self, kind: TvListKind, params: &PageParams) -> Result<Paged<TvSummary>>;

    /// Rates a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn rate_tv(
        &self,
        series_id: u64,
        rating: RatingBody,
        session: &Session,
    ) -> Result<TmdbStatus>;

    /// Removes a series rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn delete_tv_rating(&self, series_id: u64, session: &Session) -> Result<TmdbStatus>;
}

/// `person/*` endpoints.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(PersonApi: Send)]
pub trait LocalPersonApi {
    /// Fetches person details.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn person_details(
        &self,
        person_id: u64,
        params: &PersonDetailsParams,
    ) -> Result<PersonDetails>;

    /// Fetches movie and TV credits in one list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn person_combined_credits(
        &self,
        person_id: u64,
        language: Option<&str>,
    ) -> Result<CombinedCredits>;

    /// Fetches popular people.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn person_popular(&self, params: &PageParams) -> Result<Paged<PersonSummary>>;
}

/// `discover/*` endpoints.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(DiscoverApi: Send)]
pub trait LocalDiscoverApi {
    /// Finds movies by filter.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn discover_movie(&self, params: &DiscoverMovieParams) -> Result<Paged<MovieSummary>>;

    /// Finds series by filter.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn discover_tv(&self, params: &DiscoverTvParams) -> Result<Paged<TvSummary>>;
}

/// Configuration, genres, trending, find and small catalog lookups.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CatalogApi: Send)]
pub trait LocalCatalogApi {
    /// Fetches image base URLs and sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn configuration(&self) -> Result<Configuration>;

    /// Fetches movie genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_genres(&self, language: Option<&str>) -> Result<GenreList>;

    /// Fetches TV genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_genres(&self, language: Option<&str>) -> Result<GenreList>;

    /// Fetches trending movies, series or people.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn trending(
        &self,
        target: TrendingTarget,
        window: TimeWindow,
        params: &PageParams,
    ) -> Result<Paged<MediaItem>>;

    /// Looks up TMDB records by an external ID.
    ///
    /// # Errors
    ///
    /// Returns an error if `external_id` is blank, or the HTTP request or
    /// JSON parsing fails.
    async fn find_by_external_id(
        &self,
        external_id: &str,
        source: ExternalSource,
        language: Option<&str>,
    ) -> Result<FindResults>;

    /// Fetches a collection and its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn collection_details(
        &self,
        collection_id: u64,
        language: Option<&str>,
    ) -> Result<Collection>;

    /// Fetches a production company.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn company_details(&self, company_id: u64) -> Result<CompanyDetails>;

    /// Fetches a keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn keyword_details(&self, keyword_id: u64) -> Result<Keyword>;
}

/// `authentication/*` endpoints.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(AuthApi: Send)]
pub trait LocalAuthApi {
    /// Creates an unapproved request token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn create_request_token(&self) -> Result<RequestToken>;

    /// Approves a request token with username and password.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn validate_with_login(&self, login: &LoginBody) -> Result<RequestToken>;

    /// Exchanges an approved request token for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is blank, or the HTTP request or JSON
    /// parsing fails.
    async fn create_session(&self, request_token: &str) -> Result<NewSession>;

    /// Creates a guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn create_guest_session(&self) -> Result<GuestSession>;

    /// Invalidates a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session ID is blank, or the HTTP request or
    /// JSON parsing fails.
    async fn delete_session(&self, session_id: &str) -> Result<SuccessFlag>;
}

/// `account/*` endpoints. All require a user session.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(AccountApi: Send)]
pub trait LocalAccountApi {
    /// Fetches the account behind a session.
    ///
    /// # Errors
    ///
    /// Returns an error for a guest session, or if the HTTP request or JSON
    /// parsing fails.
    async fn account_details(&self, session: &Session) -> Result<AccountDetails>;

    /// Adds or removes a favorite.
    ///
    /// # Errors
    ///
    /// Returns an error for a guest session, or if the HTTP request or JSON
    /// parsing fails.
    async fn mark_favorite(
        &self,
        account_id: u64,
        session: &Session,
        body: &FavoriteBody,
    ) -> Result<TmdbStatus>;

    /// Adds or removes a watchlist entry.
    ///
    /// # Errors
    ///
    /// Returns an error for a guest session, or if the HTTP request or JSON
    /// parsing fails.
    async fn add_to_watchlist(
        &self,
        account_id: u64,
        session: &Session,
        body: &WatchlistBody,
    ) -> Result<TmdbStatus>;

    /// Fetches favorite, rated or watchlisted movies.
    ///
    /// # Errors
    ///
    /// Returns an error for a guest session, or if validation, the HTTP
    /// request or JSON parsing fails.
    async fn account_movies(
        &self,
        account_id: u64,
        kind: AccountListKind,
        session: &Session,
        params: &AccountListParams,
    ) -> Result<Paged<MovieSummary>>;
}

/// `list/*` endpoints (v3 user lists).
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(ListApi: Send)]
pub trait LocalListApi {
    /// Fetches a list and its items.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn list_details(&self, list_id: u64, params: &PageParams) -> Result<ListDetails>;

    /// Creates a list.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the HTTP request or JSON parsing fails.
    async fn create_list(&self, session: &Session, body: &CreateListBody) -> Result<ListCreated>;

    /// Adds a movie to a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn add_list_item(
        &self,
        list_id: u64,
        session: &Session,
        media_id: u64,
    ) -> Result<TmdbStatus>;

    /// Removes a movie from a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn remove_list_item(
        &self,
        list_id: u64,
        session: &Session,
        media_id: u64,
    ) -> Result<TmdbStatus>;

    /// Checks whether a movie is on a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn list_item_status(&self, list_id: u64, movie_id: u64) -> Result<ListItemStatus>;

    /// Removes every item from a list.
    ///
    /// # Errors
    ///
    /// Returns an error if `confirm` is `false`, or the HTTP request or JSON
    /// parsing fails.
    async fn clear_list(&self, list_id: u64, session: &Session, confirm: bool)
    -> Result<TmdbStatus>;

    /// Deletes a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn delete_list(&self, list_id: u64, session: &Session) -> Result<TmdbStatus>;
}
