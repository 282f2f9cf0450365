mod client;
mod error;
mod movie;
mod search;
pub mod models;

pub use client::{ApiKey, TmdbClient};
pub use error::TmdbError;
pub use models::{Genre, MovieDetail, MovieSummary, PaginatedResponse};

pub type Result<T> = std::result::Result<T, TmdbError>;
