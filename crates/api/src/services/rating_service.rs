//! Rating orchestration.

use futures::TryStreamExt;
use reelbase_core::movies::validate_rating;
use reelbase_core::types::{MovieId, UserId};
use reelbase_db::models::rating::MovieRating;
use reelbase_db::repositories::{MovieRepo, RatingRepo};
use reelbase_db::DbPool;

use crate::error::AppResult;

/// Orchestrates rating submission and removal.
#[derive(Clone)]
pub struct RatingService {
    pool: DbPool,
}

impl RatingService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Upsert the user's rating for a movie.
    ///
    /// An out-of-range value fails validation before any storage call.
    /// Returns `false` when the movie does not exist, `true` when a row
    /// now holds the given value.
    pub async fn rate(
        &self,
        movie_id: MovieId,
        rating: i32,
        user_id: UserId,
    ) -> AppResult<bool> {
        validate_rating(rating)?;

        if !MovieRepo::exists_by_id(&self.pool, movie_id).await? {
            return Ok(false);
        }

        let stored = RatingRepo::upsert(&self.pool, movie_id, user_id, rating).await?;
        tracing::info!(movie_id = %movie_id, user_id = %user_id, rating, "Movie rated");
        Ok(stored)
    }

    /// Remove the user's rating. Returns `false` when none existed.
    pub async fn delete_rating(&self, movie_id: MovieId, user_id: UserId) -> AppResult<bool> {
        Ok(RatingRepo::delete(&self.pool, movie_id, user_id).await?)
    }

    /// All of the user's ratings, drained from the repository's
    /// single-pass stream.
    pub async fn ratings_for_user(&self, user_id: UserId) -> AppResult<Vec<MovieRating>> {
        let ratings = RatingRepo::stream_for_user(&self.pool, user_id)
            .try_collect()
            .await?;
        Ok(ratings)
    }
}
