pub mod health;

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                      create (POST), list (GET)
/// /movies/{id_or_slug}         get (GET), update (PUT), delete (DELETE)
/// /movies/{id}/ratings         rate (PUT), delete rating (DELETE)
/// /ratings/me                  the caller's ratings (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            post(handlers::movies::create).get(handlers::movies::list),
        )
        .route(
            "/movies/{id_or_slug}",
            get(handlers::movies::get)
                .put(handlers::movies::update)
                .delete(handlers::movies::delete),
        )
        .route(
            "/movies/{id_or_slug}/ratings",
            put(handlers::ratings::rate_movie).delete(handlers::ratings::delete_rating),
        )
        .route("/ratings/me", get(handlers::ratings::my_ratings))
}
