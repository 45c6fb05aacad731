//! Integration tests for movie CRUD against a real database.
//!
//! Exercises the repository layer: create/get round-trips, atomic
//! genre replacement, duplicate-identity handling, existence probes,
//! and delete cascading over genre and rating rows.

use reelbase_core::slug::slugify;
use reelbase_db::models::movie::MovieWrite;
use reelbase_db::repositories::{MovieRepo, RatingRepo};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str, year: i32, genres: &[&str]) -> MovieWrite {
    MovieWrite {
        id: Uuid::new_v4(),
        slug: slugify(title, year),
        title: title.to_string(),
        year_of_release: year,
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

fn sorted(mut genres: Vec<String>) -> Vec<String> {
    genres.sort();
    genres
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_get_round_trips(pool: PgPool) {
    let movie = new_movie("Inception", 2010, &["Sci-Fi", "Action"]);

    let created = MovieRepo::create(&pool, &movie).await.unwrap();
    assert!(created);

    let found = MovieRepo::find_by_id(&pool, movie.id, None)
        .await
        .unwrap()
        .expect("movie should exist");

    assert_eq!(found.id, movie.id);
    assert_eq!(found.title, "Inception");
    assert_eq!(found.year_of_release, 2010);
    assert_eq!(found.slug, "inception-2010");
    // Genre equality is order-independent.
    assert_eq!(
        sorted(found.genres),
        sorted(vec!["Sci-Fi".into(), "Action".into()])
    );
    // A fresh movie has no rating data.
    assert_eq!(found.rating, None);
    assert_eq!(found.user_rating, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_duplicate_id_returns_false_without_writing(pool: PgPool) {
    let movie = new_movie("Heat", 1995, &["Crime"]);
    assert!(MovieRepo::create(&pool, &movie).await.unwrap());

    // Second create with the same id but different genres must not
    // touch the stored row or its genre set.
    let mut duplicate = movie.clone();
    duplicate.genres = vec!["Thriller".to_string()];
    let created = MovieRepo::create(&pool, &duplicate).await.unwrap();
    assert!(!created);

    let found = MovieRepo::find_by_id(&pool, movie.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.genres, vec!["Crime".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_slug_matches_id_lookup(pool: PgPool) {
    let movie = new_movie("The Dark Knight", 2008, &["Action"]);
    MovieRepo::create(&pool, &movie).await.unwrap();

    let found = MovieRepo::find_by_slug(&pool, "the-dark-knight-2008", None)
        .await
        .unwrap()
        .expect("slug lookup should find the movie");
    assert_eq!(found.id, movie.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_movie_returns_none_not_error(pool: PgPool) {
    let by_id = MovieRepo::find_by_id(&pool, Uuid::new_v4(), None).await.unwrap();
    assert!(by_id.is_none());

    let by_slug = MovieRepo::find_by_slug(&pool, "no-such-movie-1999", None)
        .await
        .unwrap();
    assert!(by_slug.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn exists_probe_reflects_presence(pool: PgPool) {
    let movie = new_movie("Alien", 1979, &["Horror"]);

    assert!(!MovieRepo::exists_by_id(&pool, movie.id).await.unwrap());
    MovieRepo::create(&pool, &movie).await.unwrap();
    assert!(MovieRepo::exists_by_id(&pool, movie.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_scalars_and_genre_set(pool: PgPool) {
    let movie = new_movie("Blade Runer", 1982, &["Sci-Fi", "Drama"]);
    MovieRepo::create(&pool, &movie).await.unwrap();

    // Fix the typo; the genre set is swapped wholesale.
    let corrected = MovieWrite {
        id: movie.id,
        slug: slugify("Blade Runner", 1982),
        title: "Blade Runner".to_string(),
        year_of_release: 1982,
        genres: vec!["Sci-Fi".to_string(), "Noir".to_string()],
    };
    let updated = MovieRepo::update(&pool, &corrected).await.unwrap();
    assert!(updated);

    let found = MovieRepo::find_by_id(&pool, movie.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.title, "Blade Runner");
    assert_eq!(found.slug, "blade-runner-1982");
    assert_eq!(
        sorted(found.genres),
        sorted(vec!["Sci-Fi".into(), "Noir".into()])
    );

    // The old slug no longer resolves.
    assert!(MovieRepo::find_by_slug(&pool, "blade-runer-1982", None)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_movie_returns_false(pool: PgPool) {
    let ghost = new_movie("Ghost", 1990, &["Romance"]);
    let updated = MovieRepo::update(&pool, &ghost).await.unwrap();
    assert!(!updated);

    // The rolled-back update must not have left genre rows behind.
    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphans, 0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_movie_genres_and_ratings(pool: PgPool) {
    let movie = new_movie("Memento", 2000, &["Thriller", "Mystery"]);
    MovieRepo::create(&pool, &movie).await.unwrap();
    RatingRepo::upsert(&pool, movie.id, Uuid::new_v4(), 5)
        .await
        .unwrap();

    let deleted = MovieRepo::delete_by_id(&pool, movie.id).await.unwrap();
    assert!(deleted);

    assert!(MovieRepo::find_by_id(&pool, movie.id, None)
        .await
        .unwrap()
        .is_none());

    let genre_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
        .fetch_one(&pool)
        .await
        .unwrap();
    let rating_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(genre_rows, 0);
    assert_eq!(rating_rows, 0);

    // Deleting again reports not-found.
    assert!(!MovieRepo::delete_by_id(&pool, movie.id).await.unwrap());
}
