//! Query string assembly and shared parameter validation.

use std::fmt::Display;

use super::error::{Result, TmdbError};

/// Highest page number TMDB serves.
pub const MAX_PAGE: u32 = 500;

/// Earliest year accepted by year filters.
const MIN_YEAR: u32 = 1800;

/// Latest year accepted by year filters.
const MAX_YEAR: u32 = 9999;

/// Separator for list filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListSep {
    /// `,` - every value must match.
    #[default]
    And,
    /// `|` - any value may match.
    Or,
}

impl ListSep {
    const fn as_str(self) -> &'static str {
        match self {
            Self::And => ",",
            Self::Or => "|",
        }
    }
}

/// Ordered query parameters for one request.
///
/// Optional values that are `None` and empty lists are never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a parameter.
    pub fn push(&mut self, name: &'static str, value: impl Display) -> &mut Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    /// Appends a parameter if `value` is `Some`.
    pub fn push_opt<T: Display>(&mut self, name: &'static str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.push(name, v);
        }
        self
    }

    /// Appends `true` / `false`.
    pub fn push_bool(&mut self, name: &'static str, value: bool) -> &mut Self {
        self.push(name, value)
    }

    /// Appends a non-blank string parameter.
    pub fn push_str_opt(&mut self, name: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(v) = non_blank(value) {
            self.push(name, v);
        }
        self
    }

    /// Appends a joined list parameter if `values` is non-empty.
    pub fn push_list<T: Display>(
        &mut self,
        name: &'static str,
        values: &[T],
        sep: ListSep,
    ) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(sep.as_str());
            self.push(name, joined);
        }
        self
    }

    /// Returns `true` if `name` is already present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == name)
    }

    /// Value of the first `name` parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Parameter pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Returns `true` if no parameters were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// --- Validation ---

/// Trimmed `value`, or `None` when it is missing or blank.
///
/// `push_str_opt` sends exactly the values this returns.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Rejects a blank search query.
pub(crate) fn require_text(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TmdbError::invalid(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Rejects a page outside `1..=500`.
pub(crate) fn check_page(page: Option<u32>) -> Result<()> {
    match page {
        Some(p) if p == 0 || p > MAX_PAGE => Err(TmdbError::invalid(format!(
            "page must be between 1 and {MAX_PAGE}, got {p}"
        ))),
        _ => Ok(()),
    }
}

/// Rejects a year outside `1800..=9999`.
pub(crate) fn check_year(name: &str, year: Option<u32>) -> Result<()> {
    match year {
        Some(y) if !(MIN_YEAR..=MAX_YEAR).contains(&y) => Err(TmdbError::invalid(format!(
            "{name} must be between {MIN_YEAR} and {MAX_YEAR}, got {y}"
        ))),
        _ => Ok(()),
    }
}

/// Rejects a value outside `min..=max`.
pub(crate) fn check_range_f32(name: &str, value: Option<f32>, min: f32, max: f32) -> Result<()> {
    match value {
        Some(v) if !(min..=max).contains(&v) => Err(TmdbError::invalid(format!(
            "{name} must be between {min} and {max}, got {v}"
        ))),
        _ => Ok(()),
    }
}

/// Rejects `gte > lte` when both bounds are set.
pub(crate) fn check_bounds<T: PartialOrd + Display>(
    name: &str,
    gte: Option<&T>,
    lte: Option<&T>,
) -> Result<()> {
    if let (Some(lo), Some(hi)) = (gte, lte)
        && lo > hi
    {
        return Err(TmdbError::invalid(format!(
            "{name}.gte ({lo}) must not be after {name}.lte ({hi})"
        )));
    }
    Ok(())
}

/// Rejects `dependent` without `required`.
pub(crate) fn check_requires(
    dependent: &str,
    has_dependent: bool,
    required: &str,
    has_required: bool,
) -> Result<()> {
    if has_dependent && !has_required {
        return Err(TmdbError::invalid(format!(
            "{dependent} requires {required} to be set"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_push_skips_none_and_empty() {
        // Arrange
        let mut query = Query::new();
        let empty: [u32; 0] = [];

        // Act
        query
            .push("query", "Fight Club")
            .push_opt("year", None::<u32>)
            .push_opt("page", Some(2))
            .push_str_opt("region", Some("  "))
            .push_list("with_genres", &empty, ListSep::And);

        // Assert
        assert_eq!(
            query.pairs(),
            &[("query", String::from("Fight Club")), ("page", String::from("2"))]
        );
        assert!(query.contains("page"));
        assert!(!query.contains("year"));
    }

    #[test]
    fn test_push_list_separators() {
        // Arrange
        let mut query = Query::new();

        // Act
        query
            .push_list("with_genres", &[28, 12], ListSep::And)
            .push_list("with_release_type", &[2, 3], ListSep::Or);

        // Assert
        assert_eq!(query.get("with_genres"), Some("28,12"));
        assert_eq!(query.get("with_release_type"), Some("2|3"));
    }

    #[test]
    fn test_check_page() {
        // Arrange & Act & Assert
        assert!(check_page(None).is_ok());
        assert!(check_page(Some(1)).is_ok());
        assert!(check_page(Some(500)).is_ok());
        assert!(check_page(Some(0)).is_err());
        assert!(check_page(Some(501)).is_err());
    }

    #[test]
    fn test_check_year() {
        // Arrange & Act & Assert
        assert!(check_year("year", Some(1999)).is_ok());
        assert!(check_year("year", Some(99)).is_err());
    }

    #[test]
    fn test_check_bounds() {
        // Arrange & Act & Assert
        assert!(check_bounds("vote_average", Some(&5.0), Some(&8.0)).is_ok());
        assert!(check_bounds::<f32>("vote_average", Some(&5.0), None).is_ok());
        let err = check_bounds("with_runtime", Some(&120), Some(&90)).unwrap_err();
        assert!(err.to_string().contains("with_runtime.gte (120)"));
    }

    #[test]
    fn test_check_requires() {
        // Arrange & Act & Assert
        assert!(check_requires("certification", true, "certification_country", true).is_ok());
        assert!(check_requires("certification", false, "certification_country", false).is_ok());
        assert!(check_requires("certification", true, "certification_country", false).is_err());
    }

    #[test]
    fn test_non_blank_matches_what_push_str_opt_sends() {
        // Arrange
        let mut query = Query::new();

        // Act
        query
            .push_str_opt("a", Some("  "))
            .push_str_opt("b", Some(" JP "))
            .push_str_opt("c", None);

        // Assert
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some(" JP ")), Some("JP"));
        assert_eq!(query.pairs(), &[("b", String::from("JP"))]);
    }

    #[test]
    fn test_require_text() {
        // Arrange & Act & Assert
        assert!(require_text("query", "Alien").is_ok());
        assert!(require_text("query", " \t").is_err());
    }
}
