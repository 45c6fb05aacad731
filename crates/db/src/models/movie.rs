//! Movie models and DTOs.

use reelbase_core::movies::{SortField, SortOrder, DEFAULT_PAGE_SIZE};
use reelbase_core::types::{MovieId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (query results)
// ---------------------------------------------------------------------------

/// A movie as returned by lookups and listing: the base row joined with
/// its genre set, the aggregate rating over all users, and (when the
/// request carries a user identity) that user's own rating.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub slug: String,
    pub title: String,
    pub year_of_release: i32,
    /// Genre names, aggregated in the same query (no per-movie round-trip).
    pub genres: Vec<String>,
    /// Mean of all ratings, rounded to two decimals. `None` when unrated.
    pub rating: Option<f64>,
    /// The requesting user's own rating. `None` for anonymous reads or
    /// when the user has not rated this movie.
    pub user_rating: Option<i32>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request payload for creating a movie. The id and slug are assigned
/// by the service, not the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub year_of_release: i32,
    pub genres: Vec<String>,
}

/// Request payload for updating a movie. Updates are full replacements:
/// every field is required and the genre set is swapped wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub title: String,
    pub year_of_release: i32,
    pub genres: Vec<String>,
}

/// The complete set of fields the repository writes for a movie.
/// Built by the service layer, which derives the slug.
#[derive(Debug, Clone)]
pub struct MovieWrite {
    pub id: MovieId,
    pub slug: String,
    pub title: String,
    pub year_of_release: i32,
    pub genres: Vec<String>,
}

/// Validated filter/sort/page options for movie listing.
///
/// Constructed by the service layer after validation; the repository
/// trusts `page`/`page_size` to be positive and bounded and the sort
/// field to come from the allow-list.
#[derive(Debug, Clone)]
pub struct ListMoviesOptions {
    /// Case-insensitive title substring filter.
    pub title: Option<String>,
    /// Exact-match year filter.
    pub year_of_release: Option<i32>,
    /// `None` sorts by movie id for stable pagination.
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
    pub page: i64,
    pub page_size: i64,
    /// When present, each returned movie carries this user's own rating.
    pub user_id: Option<UserId>,
}

impl Default for ListMoviesOptions {
    fn default() -> Self {
        Self {
            title: None,
            year_of_release: None,
            sort_field: None,
            sort_order: SortOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            user_id: None,
        }
    }
}
