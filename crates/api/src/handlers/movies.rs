//! Handlers for movie CRUD and listing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reelbase_core::error::CoreError;
use reelbase_core::types::MovieId;
use reelbase_db::models::movie::{CreateMovie, UpdateMovie};

use crate::error::{AppError, AppResult};
use crate::extract::RequestUser;
use crate::response::{DataResponse, PagedResponse};
use crate::services::movie_service::ListMoviesRequest;
use crate::state::AppState;

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    let movie = state.movies.create(input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// GET /api/v1/movies/{id_or_slug}
///
/// The path segment is an id when it parses as a UUID, otherwise a slug.
pub async fn get(
    user: RequestUser,
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let movie = match id_or_slug.parse::<MovieId>() {
        Ok(id) => state.movies.get_by_id(id, user.0).await?,
        Err(_) => state.movies.get_by_slug(&id_or_slug, user.0).await?,
    };

    let movie =
        movie.ok_or_else(|| AppError::NotFound(format!("Movie not found: {id_or_slug}")))?;

    Ok(Json(DataResponse { data: movie }))
}

/// GET /api/v1/movies
pub async fn list(
    user: RequestUser,
    State(state): State<AppState>,
    Query(params): Query<ListMoviesRequest>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1);
    let page_size = params
        .page_size
        .unwrap_or(reelbase_core::movies::DEFAULT_PAGE_SIZE);

    let (movies, total) = state.movies.list(&params, user.0).await?;

    Ok(Json(PagedResponse {
        data: movies,
        total,
        page,
        page_size,
    }))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    user: RequestUser,
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    let id = parse_movie_id(&id_or_slug)?;
    let movie = state.movies.update(id, input, user.0).await?;

    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_movie_id(&id_or_slug)?;
    let deleted = state.movies.delete_by_id(id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Parse a path segment that must be a movie id (mutations do not
/// accept slugs).
fn parse_movie_id(raw: &str) -> Result<MovieId, AppError> {
    raw.parse::<MovieId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid movie id: {raw}")))
}
