//! Use-case trait definitions

use async_trait::async_trait;

use tmdb::MovieDetail;

use crate::{ApiError, MoviePage};

/// Movie fetch operations used by the home and detail screens.
#[async_trait]
pub trait MovieUseCases: Send + Sync {
    /// Fetch one page of the top rated movie list.
    async fn top_rated(&self, page: i64) -> Result<MoviePage, ApiError>;

    /// Fetch the full record for a single movie.
    ///
    /// Fetched lazily per detail view, never cached.
    async fn detail(&self, id: i64) -> Result<MovieDetail, ApiError>;
}

/// Search operations used by the home screen.
#[async_trait]
pub trait SearchUseCases: Send + Sync {
    /// Search movies by title, one page at a time.
    async fn search(&self, query: &str, page: i64) -> Result<MoviePage, ApiError>;
}
