//! Handlers for rating submission, removal, and per-user reporting.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reelbase_core::error::CoreError;
use reelbase_core::types::MovieId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::RequestUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `PUT /movies/{id}/ratings`.
#[derive(Debug, Deserialize)]
pub struct RateMovieRequest {
    pub rating: i32,
}

/// PUT /api/v1/movies/{id}/ratings
///
/// Upsert the caller's rating. 404 when the movie does not exist.
pub async fn rate_movie(
    user: RequestUser,
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
    Json(input): Json<RateMovieRequest>,
) -> AppResult<impl IntoResponse> {
    let user_id = user.require()?;

    let rated = state.ratings.rate(id, input.rating, user_id).await?;
    if !rated {
        return Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }));
    }

    Ok(StatusCode::OK)
}

/// DELETE /api/v1/movies/{id}/ratings
///
/// Remove the caller's rating. 404 when no rating existed.
pub async fn delete_rating(
    user: RequestUser,
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<impl IntoResponse> {
    let user_id = user.require()?;

    let deleted = state.ratings.delete_rating(id, user_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!(
            "No rating for movie {id} by this user"
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/ratings/me
///
/// All of the caller's ratings with movie slugs, for reporting.
pub async fn my_ratings(
    user: RequestUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user_id = user.require()?;

    let ratings = state.ratings.ratings_for_user(user_id).await?;

    Ok(Json(DataResponse { data: ratings }))
}
