//! TMDB API response models.

mod account;
mod catalog;
mod common;
mod configuration;
mod credits;
mod enums;
mod media;
mod movie;
mod person;
mod tv;

pub use account::{
    AccountDetails, Avatar, Gravatar, GuestSession, ListCreated, ListDetails, ListItemStatus,
    NewSession, RequestToken, TmdbAvatar,
};
pub use catalog::{Collection, CollectionSummary, CompanyDetails, CompanySummary, FindResults};
pub use common::{
    DateWindow, DatedPaged, ExternalIds, Genre, GenreList, Keyword, Keywords, Network, Paged,
    ProductionCompany, ProductionCountry, SpokenLanguage, SuccessFlag, TmdbStatus,
};
pub use configuration::{Configuration, ImagesConfiguration};
pub use credits::{CastMember, Credits, CrewMember, ImageInfo, Images, Video, Videos};
pub use enums::{
    AccountListKind, ExternalSource, Gender, MediaType, MovieListKind, ReleaseType,
    TimeWindow, TrendingTarget, TvListKind, VideoSite,
};
pub use media::{CreditRole, MediaCredit, MediaItem, MovieCredit, TvCredit};
pub use movie::{
    AccountStates, CollectionRef, CountryReleases, MovieDetails, MovieSummary, Release,
    ReleaseDates,
};
pub use person::{CombinedCredits, PersonDetails, PersonSummary};
pub use tv::{Creator, Episode, EpisodeRef, SeasonSummary, TvDetails, TvSeason, TvSummary};
