//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Mutations touching more than
//! one relation run inside a single transaction; an error on any
//! statement drops the transaction and rolls the whole operation back.

pub mod movie_repo;
pub mod rating_repo;

pub use movie_repo::MovieRepo;
pub use rating_repo::RatingRepo;
