//! Movie catalog constants, validators, and the listing sort allow-list.
//!
//! All validation happens here, before any storage call. Callers pass
//! plain field values; a failure is always a [`CoreError::Validation`]
//! and never reaches the database.

use chrono::Datelike;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Lowest accepted rating value.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating value.
pub const MAX_RATING: i32 = 5;

/// First year a film could plausibly have been released.
pub const MIN_YEAR: i32 = 1888;

/// Default page size for movie listing.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size for movie listing. Bounds result size regardless
/// of what the caller asks for.
pub const MAX_PAGE_SIZE: i64 = 25;

/// Sort field names accepted by the listing endpoint.
pub const VALID_SORT_FIELDS: &[&str] = &[SORT_FIELD_TITLE, SORT_FIELD_YEAR];

/// Sort by movie title.
pub const SORT_FIELD_TITLE: &str = "title";

/// Sort by year of release.
pub const SORT_FIELD_YEAR: &str = "year";

// ---------------------------------------------------------------------------
// Sort allow-list
// ---------------------------------------------------------------------------

/// Allow-listed sort fields for movie listing.
///
/// Caller-supplied sort text is parsed into this enum and the storage
/// layer maps each variant to a fixed column reference. Raw input never
/// reaches the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Year,
}

impl SortField {
    /// Parse from a request string, returning an error for unknown fields.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            SORT_FIELD_TITLE => Ok(Self::Title),
            SORT_FIELD_YEAR => Ok(Self::Year),
            other => Err(CoreError::Validation(format!(
                "Unknown sort field: '{other}'. Valid fields: {}",
                VALID_SORT_FIELDS.join(", ")
            ))),
        }
    }
}

/// Sort direction for movie listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Parse a `sort_by` request value into field and direction.
///
/// A leading `-` requests descending order (`"-year"`); a bare field
/// name or a leading `+` requests ascending.
pub fn parse_sort_by(raw: &str) -> Result<(SortField, SortOrder), CoreError> {
    let (order, field) = match raw.strip_prefix('-') {
        Some(rest) => (SortOrder::Descending, rest),
        None => (SortOrder::Ascending, raw.strip_prefix('+').unwrap_or(raw)),
    };
    Ok((SortField::from_str(field)?, order))
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validate the scalar and genre fields of a movie write.
///
/// Rules: non-empty title, plausible release year (1888 up to next
/// year, so announced releases can be catalogued), at least one genre,
/// and no empty genre names.
pub fn validate_movie(title: &str, year_of_release: i32, genres: &[String]) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }

    let max_year = chrono::Utc::now().year() + 1;
    if year_of_release < MIN_YEAR || year_of_release > max_year {
        return Err(CoreError::Validation(format!(
            "Year of release must be between {MIN_YEAR} and {max_year}"
        )));
    }

    if genres.is_empty() {
        return Err(CoreError::Validation(
            "At least one genre is required".into(),
        ));
    }
    if genres.iter().any(|g| g.trim().is_empty()) {
        return Err(CoreError::Validation(
            "Genre names must not be empty".into(),
        ));
    }

    Ok(())
}

/// Validate a rating value against the accepted range.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(())
}

/// Validate pagination inputs: page >= 1 and page size in [1, MAX_PAGE_SIZE].
pub fn validate_page(page: i64, page_size: i64) -> Result<(), CoreError> {
    if page < 1 {
        return Err(CoreError::Validation("Page must be at least 1".into()));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(CoreError::Validation(format!(
            "Page size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_parses_known_fields() {
        assert_eq!(SortField::from_str("title").unwrap(), SortField::Title);
        assert_eq!(SortField::from_str("year").unwrap(), SortField::Year);
    }

    #[test]
    fn sort_field_rejects_unknown_field() {
        let err = SortField::from_str("slug; drop table movies").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn parse_sort_by_handles_direction_prefix() {
        assert_eq!(
            parse_sort_by("title").unwrap(),
            (SortField::Title, SortOrder::Ascending)
        );
        assert_eq!(
            parse_sort_by("-year").unwrap(),
            (SortField::Year, SortOrder::Descending)
        );
        assert_eq!(
            parse_sort_by("+title").unwrap(),
            (SortField::Title, SortOrder::Ascending)
        );
    }

    #[test]
    fn validate_movie_rejects_empty_title() {
        let err = validate_movie("  ", 2010, &["Drama".into()]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn validate_movie_rejects_implausible_year() {
        assert!(validate_movie("Ok", 1500, &["Drama".into()]).is_err());
        assert!(validate_movie("Ok", 9999, &["Drama".into()]).is_err());
        assert!(validate_movie("Ok", 2010, &["Drama".into()]).is_ok());
    }

    #[test]
    fn validate_movie_rejects_missing_or_empty_genres() {
        assert!(validate_movie("Ok", 2010, &[]).is_err());
        assert!(validate_movie("Ok", 2010, &["".into()]).is_err());
    }

    #[test]
    fn validate_rating_enforces_range() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
    }

    #[test]
    fn validate_page_enforces_bounds() {
        assert!(validate_page(0, 10).is_err());
        assert!(validate_page(1, 0).is_err());
        assert!(validate_page(1, MAX_PAGE_SIZE + 1).is_err());
        assert!(validate_page(1, MAX_PAGE_SIZE).is_ok());
    }
}
