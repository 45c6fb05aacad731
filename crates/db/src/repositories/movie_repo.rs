//! Repository for the `movies` and `genres` tables.
//!
//! A movie and its genre set form one logical unit: create, update, and
//! delete always touch both tables inside a single transaction, so a
//! partially written movie is never observable. Reads join the genre
//! set, the aggregate rating, and the optional per-user rating in one
//! query per call.

use reelbase_core::movies::{SortField, SortOrder};
use reelbase_core::types::{MovieId, UserId};
use sqlx::PgPool;

use crate::models::movie::{ListMoviesOptions, Movie, MovieWrite};

/// Provides CRUD, lookup, and listing for movies.
pub struct MovieRepo;

impl MovieRepo {
    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Insert a movie row and its genre rows as one atomic unit.
    ///
    /// Returns `false` without writing anything when a movie with the
    /// same id already exists. A failure inserting genres rolls back
    /// the movie row as well.
    pub async fn create(pool: &PgPool, movie: &MovieWrite) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO movies (id, slug, title, year_of_release) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(movie.id)
        .bind(&movie.slug)
        .bind(&movie.title)
        .bind(movie.year_of_release)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            // Duplicate identity. Dropping the transaction rolls back.
            return Ok(false);
        }

        for genre in &movie.genres {
            sqlx::query("INSERT INTO genres (movie_id, name) VALUES ($1, $2)")
                .bind(movie.id)
                .bind(genre)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Update a movie's scalar fields and replace its genre set, atomically.
    ///
    /// Returns `false` when no row matched the id; callers that need to
    /// distinguish not-found from no-op should probe [`Self::exists_by_id`]
    /// first.
    pub async fn update(pool: &PgPool, movie: &MovieWrite) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE movies \
             SET slug = $2, title = $3, year_of_release = $4, updated_at = now() \
             WHERE id = $1",
        )
        .bind(movie.id)
        .bind(&movie.slug)
        .bind(&movie.title)
        .bind(movie.year_of_release)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        // Full replacement of the genre set: delete-all then insert-all
        // within the same transaction.
        sqlx::query("DELETE FROM genres WHERE movie_id = $1")
            .bind(movie.id)
            .execute(&mut *tx)
            .await?;

        for genre in &movie.genres {
            sqlx::query("INSERT INTO genres (movie_id, name) VALUES ($1, $2)")
                .bind(movie.id)
                .bind(genre)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Delete a movie together with its genre and rating rows.
    ///
    /// Returns `false` when the movie did not exist.
    pub async fn delete_by_id(pool: &PgPool, id: MovieId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM genres WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM ratings WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Find a movie by id, enriched with genres and rating data.
    pub async fn find_by_id(
        pool: &PgPool,
        id: MovieId,
        user_id: Option<UserId>,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {select} FROM movies m WHERE m.id = $1",
            select = movie_select("$2"),
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by slug, enriched with genres and rating data.
    ///
    /// Slug is not guaranteed unique; this returns the first match in
    /// id order so repeated lookups are deterministic.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
        user_id: Option<UserId>,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {select} FROM movies m WHERE m.slug = $1 ORDER BY m.id LIMIT 1",
            select = movie_select("$2"),
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(slug)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Cheap existence probe, used as a precondition for update and
    /// rate operations. Touches only the `movies` table.
    pub async fn exists_by_id(pool: &PgPool, id: MovieId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    /// List movies matching the given options, ordered deterministically.
    ///
    /// The sort clause is resolved from the allow-listed [`SortField`]
    /// enum to a fixed column reference; caller text never reaches the
    /// query. The movie id is always the final sort key so pagination
    /// is stable across calls even with ties on the requested field.
    pub async fn list(
        pool: &PgPool,
        options: &ListMoviesOptions,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let order_clause = match (options.sort_field, options.sort_order) {
            (None, _) => "m.id ASC",
            (Some(SortField::Title), SortOrder::Ascending) => "m.title ASC, m.id ASC",
            (Some(SortField::Title), SortOrder::Descending) => "m.title DESC, m.id ASC",
            (Some(SortField::Year), SortOrder::Ascending) => "m.year_of_release ASC, m.id ASC",
            (Some(SortField::Year), SortOrder::Descending) => "m.year_of_release DESC, m.id ASC",
        };

        let query = format!(
            "SELECT {select} FROM movies m \
             WHERE ($1::text IS NULL OR m.title ILIKE '%' || $1 || '%') \
             AND ($2::int4 IS NULL OR m.year_of_release = $2) \
             ORDER BY {order_clause} \
             LIMIT $4 OFFSET $5",
            select = movie_select("$3"),
        );

        sqlx::query_as::<_, Movie>(&query)
            .bind(&options.title)
            .bind(options.year_of_release)
            .bind(options.user_id)
            .bind(options.page_size)
            .bind((options.page - 1) * options.page_size)
            .fetch_all(pool)
            .await
    }

    /// Count movies matching the same filter predicate as [`Self::list`],
    /// independent of pagination. Used for total-pages metadata.
    pub async fn count(
        pool: &PgPool,
        title: Option<&str>,
        year_of_release: Option<i32>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM movies \
             WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%') \
             AND ($2::int4 IS NULL OR year_of_release = $2)",
        )
        .bind(title)
        .bind(year_of_release)
        .fetch_one(pool)
        .await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Select list shared by every movie read.
///
/// Genres are aggregated with `array_agg` and rating data comes from
/// scalar subqueries, so each read returns exactly one row per movie
/// regardless of rating-row fan-out and without a per-movie round-trip.
/// `user_bind` is the placeholder holding the optional requesting-user
/// id (its position differs between lookup and listing queries).
fn movie_select(user_bind: &str) -> String {
    format!(
        "m.id, m.slug, m.title, m.year_of_release, \
         COALESCE((SELECT array_agg(g.name ORDER BY g.name) \
                   FROM genres g WHERE g.movie_id = m.id), '{{}}') AS genres, \
         (SELECT ROUND(AVG(r.rating)::numeric, 2)::float8 \
          FROM ratings r WHERE r.movie_id = m.id) AS rating, \
         (SELECT r.rating FROM ratings r \
          WHERE r.movie_id = m.id AND r.user_id = {user_bind}) AS user_rating"
    )
}
