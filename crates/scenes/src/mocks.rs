//! Mock use-case implementations for coordinator tests.
//!
//! Responses are stubbed per page (or per query/page pair) and calls are
//! recorded for verification. A gated mock holds every response until
//! `release` is called, which lets tests line up overlapping requests
//! deterministically.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use movies::{ApiError, MovieDetail, MoviePage, MovieSummary, MovieUseCases, SearchUseCases};
use tokio::sync::Semaphore;

/// Mock implementation of `MovieUseCases`.
#[derive(Clone, Default)]
pub struct MockMovieUseCases {
    top_rated_calls: Arc<Mutex<Vec<i64>>>,
    detail_calls: Arc<Mutex<Vec<i64>>>,
    top_rated_responses: Arc<Mutex<HashMap<i64, Result<MoviePage, ApiError>>>>,
    detail_responses: Arc<Mutex<HashMap<i64, Result<MovieDetail, ApiError>>>>,
    gate: Option<Arc<Semaphore>>,
}

impl MockMovieUseCases {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that parks every call until [`release`](Self::release).
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::default()
        }
    }

    /// Let one parked call through.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Stub the response for `top_rated(page)`.
    pub fn stub_top_rated(&self, page: i64, response: Result<MoviePage, ApiError>) {
        self.top_rated_responses
            .lock()
            .unwrap()
            .insert(page, response);
    }

    /// Stub the response for `detail(id)`.
    pub fn stub_detail(&self, id: i64, response: Result<MovieDetail, ApiError>) {
        self.detail_responses.lock().unwrap().insert(id, response);
    }

    /// Pages `top_rated` was called with, in order.
    pub fn top_rated_calls(&self) -> Vec<i64> {
        self.top_rated_calls.lock().unwrap().clone()
    }

    /// Ids `detail` was called with, in order.
    pub fn detail_calls(&self) -> Vec<i64> {
        self.detail_calls.lock().unwrap().clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }
    }
}

#[async_trait]
impl MovieUseCases for MockMovieUseCases {
    async fn top_rated(&self, page: i64) -> Result<MoviePage, ApiError> {
        self.top_rated_calls.lock().unwrap().push(page);
        self.wait_for_gate().await;
        self.top_rated_responses
            .lock()
            .unwrap()
            .get(&page)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::Unknown(format!("no stub for page {}", page))))
    }

    async fn detail(&self, id: i64) -> Result<MovieDetail, ApiError> {
        self.detail_calls.lock().unwrap().push(id);
        self.wait_for_gate().await;
        self.detail_responses
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::Unknown(format!("no stub for movie {}", id))))
    }
}

/// Mock implementation of `SearchUseCases`.
#[derive(Clone, Default)]
pub struct MockSearchUseCases {
    search_calls: Arc<Mutex<Vec<(String, i64)>>>,
    responses: Arc<Mutex<HashMap<(String, i64), Result<MoviePage, ApiError>>>>,
    gate: Option<Arc<Semaphore>>,
}

impl MockSearchUseCases {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that parks every call until [`release`](Self::release).
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::default()
        }
    }

    /// Let one parked call through.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Stub the response for `search(query, page)`.
    pub fn stub(&self, query: &str, page: i64, response: Result<MoviePage, ApiError>) {
        self.responses
            .lock()
            .unwrap()
            .insert((query.to_string(), page), response);
    }

    /// (query, page) pairs `search` was called with, in order.
    pub fn search_calls(&self) -> Vec<(String, i64)> {
        self.search_calls.lock().unwrap().clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }
    }
}

#[async_trait]
impl SearchUseCases for MockSearchUseCases {
    async fn search(&self, query: &str, page: i64) -> Result<MoviePage, ApiError> {
        self.search_calls
            .lock()
            .unwrap()
            .push((query.to_string(), page));
        self.wait_for_gate().await;
        self.responses
            .lock()
            .unwrap()
            .get(&(query.to_string(), page))
            .cloned()
            .unwrap_or_else(|| {
                Err(ApiError::Unknown(format!(
                    "no stub for query '{}' page {}",
                    query, page
                )))
            })
    }
}

/// Build a [`MovieSummary`] fixture with the given identity.
pub fn sample_movie(id: i64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        original_title: title.to_string(),
        overview: String::new(),
        poster_path: None,
        backdrop_path: None,
        release_date: None,
        vote_average: 0.0,
        vote_count: 0,
        popularity: 0.0,
        genre_ids: vec![],
        original_language: "en".to_string(),
        adult: false,
        video: false,
    }
}

/// Build a [`MoviePage`] fixture.
pub fn sample_page(movies: Vec<MovieSummary>, total_pages: i64) -> MoviePage {
    MoviePage {
        movies,
        total_pages,
    }
}

/// Build a [`MovieDetail`] fixture.
pub fn sample_detail(id: i64, imdb_id: Option<&str>) -> MovieDetail {
    MovieDetail {
        id,
        title: format!("Movie {}", id),
        original_title: format!("Movie {}", id),
        overview: String::new(),
        poster_path: None,
        backdrop_path: None,
        release_date: None,
        vote_average: 0.0,
        vote_count: 0,
        popularity: 0.0,
        genres: vec![],
        original_language: "en".to_string(),
        adult: false,
        video: false,
        runtime: None,
        status: None,
        tagline: None,
        budget: None,
        revenue: None,
        imdb_id: imdb_id.map(|s| s.to_string()),
        homepage: None,
    }
}
