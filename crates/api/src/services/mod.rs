//! Orchestration services.
//!
//! The services compose the repositories: they validate input before
//! any storage call, enforce existence preconditions, and merge rating
//! data into returned entities. Handlers stay thin and delegate here.
//! Operations take plain data; cancellation is the caller dropping the
//! future, which aborts the in-flight statement and rolls back any
//! uncommitted transaction.

pub mod movie_service;
pub mod rating_service;

pub use movie_service::MovieService;
pub use rating_service::RatingService;
