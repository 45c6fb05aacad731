//! Repository for the `ratings` table.
//!
//! One rating per (movie, user) pair, enforced by the
//! `uq_ratings_movie_user` constraint. The upsert rides on that
//! constraint with a single `ON CONFLICT` statement, so two concurrent
//! first-time ratings from the same user cannot race into two rows.

use futures::stream::BoxStream;
use reelbase_core::types::{MovieId, UserId};
use sqlx::PgPool;

use crate::models::rating::{MovieRating, RatingSummary};

/// Provides rating upsert, aggregate reads, and per-user reads.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert or replace the user's rating for a movie in one atomic
    /// statement. The value must already be range-validated by the
    /// caller. Returns whether a row now holds the given value.
    pub async fn upsert(
        pool: &PgPool,
        movie_id: MovieId,
        user_id: UserId,
        rating: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO ratings (movie_id, user_id, rating) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (movie_id, user_id) \
             DO UPDATE SET rating = EXCLUDED.rating, updated_at = now()",
        )
        .bind(movie_id)
        .bind(user_id)
        .bind(rating)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Mean of all ratings for a movie, rounded to two decimal places.
    /// `None` when the movie has no ratings.
    pub async fn aggregate_for_movie(
        pool: &PgPool,
        movie_id: MovieId,
    ) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<f64>>(
            "SELECT ROUND(AVG(rating)::numeric, 2)::float8 \
             FROM ratings WHERE movie_id = $1",
        )
        .bind(movie_id)
        .fetch_one(pool)
        .await
    }

    /// The aggregate rating plus the given user's own rating, computed
    /// in one consistent read.
    pub async fn aggregate_and_user_rating(
        pool: &PgPool,
        movie_id: MovieId,
        user_id: UserId,
    ) -> Result<RatingSummary, sqlx::Error> {
        sqlx::query_as::<_, RatingSummary>(
            "SELECT ROUND(AVG(rating)::numeric, 2)::float8 AS rating, \
             (SELECT rating FROM ratings \
              WHERE movie_id = $1 AND user_id = $2) AS user_rating \
             FROM ratings WHERE movie_id = $1",
        )
        .bind(movie_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Remove the user's rating for a movie. Returns `false` when no
    /// rating existed.
    pub async fn delete(
        pool: &PgPool,
        movie_id: MovieId,
        user_id: UserId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ratings WHERE movie_id = $1 AND user_id = $2")
            .bind(movie_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Stream all of a user's ratings joined with the movie slug.
    ///
    /// Lazy, single-pass read intended for reporting consumers; rows
    /// are decoded as the caller pulls them rather than buffered.
    pub fn stream_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> BoxStream<'_, Result<MovieRating, sqlx::Error>> {
        sqlx::query_as::<_, MovieRating>(
            "SELECT r.movie_id, m.slug, r.rating \
             FROM ratings r \
             INNER JOIN movies m ON m.id = r.movie_id \
             WHERE r.user_id = $1 \
             ORDER BY m.slug",
        )
        .bind(user_id)
        .fetch(pool)
    }
}
