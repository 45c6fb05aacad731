//! Request handlers.
//!
//! Handlers parse path/query/body input, delegate to the services in
//! [`crate::services`], and map absent results to 404 via
//! [`crate::error::AppError`].

pub mod movies;
pub mod ratings;
