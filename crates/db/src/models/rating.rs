//! Rating models.

use reelbase_core::types::MovieId;
use serde::Serialize;
use sqlx::FromRow;

/// One of a user's ratings, joined with the movie slug so reporting
/// consumers can link back to the movie.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieRating {
    pub movie_id: MovieId,
    pub slug: String,
    pub rating: i32,
}

/// Aggregate rating plus the requesting user's own rating for one
/// movie, computed in a single consistent read.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct RatingSummary {
    /// Mean over all ratings, rounded to two decimals. `None` when unrated.
    pub rating: Option<f64>,
    /// The given user's rating, if they have rated the movie.
    pub user_rating: Option<i32>,
}
