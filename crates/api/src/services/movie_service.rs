//! Movie catalog orchestration.

use reelbase_core::error::CoreError;
use reelbase_core::movies::{self, parse_sort_by, SortOrder, DEFAULT_PAGE_SIZE};
use reelbase_core::slug::slugify;
use reelbase_core::types::{MovieId, UserId};
use reelbase_db::models::movie::{
    CreateMovie, ListMoviesOptions, Movie, MovieWrite, UpdateMovie,
};
use reelbase_db::repositories::{MovieRepo, RatingRepo};
use reelbase_db::DbPool;
use serde::Deserialize;

use crate::error::AppResult;

/// Raw, unvalidated listing parameters as they arrive from the caller.
///
/// `sort_by` is a field name from the allow-list, optionally prefixed
/// with `-` for descending order (e.g. `"-year"`). The service parses
/// and validates everything before it reaches the repository.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMoviesRequest {
    pub title: Option<String>,
    pub year_of_release: Option<i32>,
    pub sort_by: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Orchestrates movie CRUD and listing across the movie and rating
/// repositories.
#[derive(Clone)]
pub struct MovieService {
    pool: DbPool,
}

impl MovieService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Validate and create a movie, assigning its id and slug.
    ///
    /// A validation failure prevents any storage call. The returned
    /// entity carries no rating data; a new movie is unrated by
    /// definition.
    pub async fn create(&self, input: CreateMovie) -> AppResult<Movie> {
        movies::validate_movie(&input.title, input.year_of_release, &input.genres)?;

        let write = MovieWrite {
            id: MovieId::new_v4(),
            slug: slugify(&input.title, input.year_of_release),
            title: input.title,
            year_of_release: input.year_of_release,
            genres: input.genres,
        };

        let created = MovieRepo::create(&self.pool, &write).await?;
        if !created {
            return Err(CoreError::Conflict(format!("Movie {} already exists", write.id)).into());
        }

        tracing::info!(movie_id = %write.id, slug = %write.slug, "Movie created");

        Ok(Movie {
            id: write.id,
            slug: write.slug,
            title: write.title,
            year_of_release: write.year_of_release,
            genres: write.genres,
            rating: None,
            user_rating: None,
        })
    }

    /// Look up a movie by id. An absent result is a valid not-found
    /// outcome, not an error.
    pub async fn get_by_id(
        &self,
        id: MovieId,
        user_id: Option<UserId>,
    ) -> AppResult<Option<Movie>> {
        Ok(MovieRepo::find_by_id(&self.pool, id, user_id).await?)
    }

    /// Look up a movie by slug.
    pub async fn get_by_slug(
        &self,
        slug: &str,
        user_id: Option<UserId>,
    ) -> AppResult<Option<Movie>> {
        Ok(MovieRepo::find_by_slug(&self.pool, slug, user_id).await?)
    }

    /// Validate listing options, then return the requested page and the
    /// total count over the same filter predicate.
    pub async fn list(
        &self,
        request: &ListMoviesRequest,
        user_id: Option<UserId>,
    ) -> AppResult<(Vec<Movie>, i64)> {
        let page = request.page.unwrap_or(1);
        let page_size = request.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        movies::validate_page(page, page_size)?;

        let (sort_field, sort_order) = match request.sort_by.as_deref() {
            Some(raw) => {
                let (field, order) = parse_sort_by(raw)?;
                (Some(field), order)
            }
            None => (None, SortOrder::default()),
        };

        let options = ListMoviesOptions {
            title: request.title.clone(),
            year_of_release: request.year_of_release,
            sort_field,
            sort_order,
            page,
            page_size,
            user_id,
        };

        let items = MovieRepo::list(&self.pool, &options).await?;
        let total =
            MovieRepo::count(&self.pool, options.title.as_deref(), options.year_of_release)
                .await?;

        Ok((items, total))
    }

    /// Validate and update a movie as a full replacement, then return
    /// the complete entity with rating data re-attached.
    ///
    /// The update itself never touches ratings, so the aggregate (and,
    /// when a user id is supplied, that user's own rating) is read back
    /// from the rating store afterwards.
    pub async fn update(
        &self,
        id: MovieId,
        input: UpdateMovie,
        user_id: Option<UserId>,
    ) -> AppResult<Movie> {
        movies::validate_movie(&input.title, input.year_of_release, &input.genres)?;

        if !MovieRepo::exists_by_id(&self.pool, id).await? {
            return Err(CoreError::NotFound { entity: "Movie", id }.into());
        }

        let write = MovieWrite {
            id,
            slug: slugify(&input.title, input.year_of_release),
            title: input.title,
            year_of_release: input.year_of_release,
            genres: input.genres,
        };
        MovieRepo::update(&self.pool, &write).await?;

        let (rating, user_rating) = match user_id {
            None => (RatingRepo::aggregate_for_movie(&self.pool, id).await?, None),
            Some(uid) => {
                let summary = RatingRepo::aggregate_and_user_rating(&self.pool, id, uid).await?;
                (summary.rating, summary.user_rating)
            }
        };

        tracing::info!(movie_id = %id, slug = %write.slug, "Movie updated");

        Ok(Movie {
            id,
            slug: write.slug,
            title: write.title,
            year_of_release: write.year_of_release,
            genres: write.genres,
            rating,
            user_rating,
        })
    }

    /// Delete a movie and everything it owns. Returns `false` when the
    /// movie did not exist.
    pub async fn delete_by_id(&self, id: MovieId) -> AppResult<bool> {
        let deleted = MovieRepo::delete_by_id(&self.pool, id).await?;
        if deleted {
            tracing::info!(movie_id = %id, "Movie deleted");
        }
        Ok(deleted)
    }
}
