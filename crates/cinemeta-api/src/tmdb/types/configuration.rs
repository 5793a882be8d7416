//! `configuration` response and image URL construction.

use serde::Deserialize;
use url::Url;

use crate::tmdb::error::{Result, TmdbError};

/// Response of `configuration`.
#[derive(Debug, Clone, Deserialize)]
pub struct Configuration {
    /// Image CDN settings.
    pub images: ImagesConfiguration,
    /// Keys tracked by the change feeds.
    #[serde(default)]
    pub change_keys: Vec<String>,
}

/// Image CDN base URLs and the sizes each image kind is available in.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfiguration {
    /// Plain HTTP base URL.
    pub base_url: String,
    /// HTTPS base URL.
    pub secure_base_url: String,
    /// Backdrop sizes (`w300`, `w780`, `w1280`, `original`).
    #[serde(default)]
    pub backdrop_sizes: Vec<String>,
    /// Logo sizes.
    #[serde(default)]
    pub logo_sizes: Vec<String>,
    /// Poster sizes.
    #[serde(default)]
    pub poster_sizes: Vec<String>,
    /// Profile sizes.
    #[serde(default)]
    pub profile_sizes: Vec<String>,
    /// Still sizes.
    #[serde(default)]
    pub still_sizes: Vec<String>,
}

impl ImagesConfiguration {
    /// Builds an HTTPS image URL from a size and a `*_path` value.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not offered for any image kind,
    /// `file_path` is blank, or the resulting URL does not parse.
    pub fn image_url(&self, size: &str, file_path: &str) -> Result<Url> {
        if !self.offers_size(size) {
            return Err(TmdbError::invalid(format!("unknown image size: {size}")));
        }
        let path = file_path.trim().trim_start_matches('/');
        if path.is_empty() {
            return Err(TmdbError::invalid("image file path is empty"));
        }
        let base = self.secure_base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{size}/{path}"))?)
    }

    /// Returns `true` if any image kind is offered in `size`.
    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        [
            &self.backdrop_sizes,
            &self.logo_sizes,
            &self.poster_sizes,
            &self.profile_sizes,
            &self.still_sizes,
        ]
        .iter()
        .any(|sizes| sizes.iter().any(|s| s == size))
    }
}
