//! TMDB-backed use-case implementations

use std::sync::Arc;

use async_trait::async_trait;

use tmdb::{MovieDetail, TmdbClient};

use crate::{ApiError, MoviePage, MovieUseCases, SearchUseCases};

/// Movie use-cases served by TMDB.
pub struct TmdbMovies {
    client: Arc<TmdbClient>,
}

impl TmdbMovies {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MovieUseCases for TmdbMovies {
    async fn top_rated(&self, page: i64) -> Result<MoviePage, ApiError> {
        let response = self.client.top_rated(page).await?;
        Ok(response.into())
    }

    async fn detail(&self, id: i64) -> Result<MovieDetail, ApiError> {
        Ok(self.client.movie_detail(id).await?)
    }
}

/// Search use-cases served by TMDB.
pub struct TmdbSearch {
    client: Arc<TmdbClient>,
}

impl TmdbSearch {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchUseCases for TmdbSearch {
    async fn search(&self, query: &str, page: i64) -> Result<MoviePage, ApiError> {
        let response = self.client.search_movies(query, page).await?;
        Ok(response.into())
    }
}
