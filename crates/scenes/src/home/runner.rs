use std::sync::Arc;

use movies::{MovieSummary, MovieUseCases, SearchUseCases};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::messages::{FetchOutcome, HomeEvent, HomeIntent, HomeMessage};

/// The one outstanding request, if any.
struct InFlight {
    generation: u64,
    task: JoinHandle<()>,
}

/// Home screen coordinator.
///
/// Owns the accumulated result list and the page cursor. Intents and fetch
/// completions arrive on the same mailbox, so state is only ever touched
/// from this task.
pub(super) struct HomeCoordinator {
    movie_cases: Arc<dyn MovieUseCases>,
    search_cases: Arc<dyn SearchUseCases>,

    // Weak so the mailbox closes once every handle is gone. In-flight
    // fetch tasks hold a strong sender until their completion is delivered.
    sender: mpsc::WeakUnboundedSender<HomeMessage>,
    receiver: mpsc::UnboundedReceiver<HomeMessage>,
    events: mpsc::UnboundedSender<HomeEvent>,

    results: Vec<MovieSummary>,
    current_page: i64,
    has_more_pages: bool,
    active_query: Option<String>,

    in_flight: Option<InFlight>,
    generation: u64,
}

impl HomeCoordinator {
    pub(super) fn new(
        movie_cases: Arc<dyn MovieUseCases>,
        search_cases: Arc<dyn SearchUseCases>,
        sender: mpsc::UnboundedSender<HomeMessage>,
        receiver: mpsc::UnboundedReceiver<HomeMessage>,
        events: mpsc::UnboundedSender<HomeEvent>,
    ) -> Self {
        Self {
            movie_cases,
            search_cases,
            sender: sender.downgrade(),
            receiver,
            events,
            results: Vec::new(),
            current_page: 1,
            has_more_pages: true,
            active_query: None,
            in_flight: None,
            generation: 0,
        }
    }

    pub(super) async fn run(mut self) {
        while let Some(message) = self.receiver.recv().await {
            match message {
                HomeMessage::Intent(intent) => self.handle_intent(intent),
                HomeMessage::Completed(outcome) => self.handle_completion(outcome),
            }
        }
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
    }

    fn handle_intent(&mut self, intent: HomeIntent) {
        match intent {
            HomeIntent::LoadInitial | HomeIntent::ClearSearch => {
                self.active_query = None;
                self.current_page = 1;
                self.issue_fetch(1);
            }
            HomeIntent::Search(text) => {
                self.active_query = Some(text);
                self.current_page = 1;
                self.issue_fetch(1);
            }
            HomeIntent::LoadMore => {
                if self.in_flight.is_some() || !self.has_more_pages {
                    tracing::debug!("load more dropped: fetch outstanding or list exhausted");
                    return;
                }
                self.issue_fetch(self.current_page + 1);
            }
            HomeIntent::Select(index) => match self.results.get(index) {
                Some(movie) => self.emit(HomeEvent::NavigateToDetail(movie.id)),
                None => tracing::debug!(index, "selection out of bounds"),
            },
        }
    }

    /// Issue a fetch for `page` against the current query.
    ///
    /// Page-1 requests supersede: an outstanding request is aborted and
    /// replaced. Later pages only get here once the `LoadMore` guard has
    /// passed, so there is nothing to abort.
    fn issue_fetch(&mut self, page: i64) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }

        let Some(sender) = self.sender.upgrade() else {
            return;
        };

        self.generation += 1;
        let generation = self.generation;
        let query = self.active_query.clone();

        self.emit(HomeEvent::LoadingStarted);

        let movie_cases = Arc::clone(&self.movie_cases);
        let search_cases = Arc::clone(&self.search_cases);
        let task = tokio::spawn(async move {
            let result = match &query {
                Some(text) => search_cases.search(text, page).await,
                None => movie_cases.top_rated(page).await,
            };
            let _ = sender.send(HomeMessage::Completed(FetchOutcome {
                generation,
                page,
                query,
                result,
            }));
        });

        self.in_flight = Some(InFlight { generation, task });
    }

    fn handle_completion(&mut self, outcome: FetchOutcome) {
        let matches_in_flight = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.generation == outcome.generation);
        if !matches_in_flight || outcome.query != self.active_query {
            tracing::debug!(
                generation = outcome.generation,
                "stale fetch result discarded"
            );
            return;
        }
        self.in_flight = None;

        match outcome.result {
            Ok(page) => {
                self.has_more_pages = page.total_pages > outcome.page;
                self.current_page = outcome.page;
                if outcome.page == 1 {
                    self.results = page.movies;
                } else {
                    self.results.extend(page.movies);
                }
                self.emit(HomeEvent::DataUpdated(self.results.clone()));
            }
            Err(error) => {
                tracing::warn!(%error, page = outcome.page, "fetch failed");
                self.emit(HomeEvent::ErrorOccurred(error.to_string()));
            }
        }
        self.emit(HomeEvent::LoadingStopped);
    }

    fn emit(&self, event: HomeEvent) {
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::home::{self, HomeEvent};
    use crate::mocks::{sample_movie, sample_page, MockMovieUseCases, MockSearchUseCases};
    use movies::ApiError;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    async fn next_event(events: &mut mpsc::UnboundedReceiver<HomeEvent>) -> HomeEvent {
        tokio::time::timeout(Duration::from_secs(5), events.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event stream closed")
    }

    async fn expect_ids(events: &mut mpsc::UnboundedReceiver<HomeEvent>, ids: &[i64]) {
        match next_event(events).await {
            HomeEvent::DataUpdated(movies) => {
                let got: Vec<i64> = movies.iter().map(|m| m.id).collect();
                assert_eq!(got, ids);
            }
            other => panic!("expected DataUpdated, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_initial_load_populates_results() {
        let movie_cases = MockMovieUseCases::new();
        movie_cases.stub_top_rated(
            1,
            Ok(sample_page(
                vec![sample_movie(1, "A"), sample_movie(2, "B")],
                3,
            )),
        );
        let search_cases = MockSearchUseCases::new();

        let (handle, mut events) =
            home::spawn(Arc::new(movie_cases.clone()), Arc::new(search_cases));
        handle.load_initial();

        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[1, 2]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);
        assert_eq!(movie_cases.top_rated_calls(), vec![1]);
    }

    #[tokio::test]
    async fn test_pages_accumulate_in_order() {
        let movie_cases = MockMovieUseCases::new();
        movie_cases.stub_top_rated(
            1,
            Ok(sample_page(
                vec![sample_movie(1, "A"), sample_movie(2, "B")],
                3,
            )),
        );
        movie_cases.stub_top_rated(2, Ok(sample_page(vec![sample_movie(3, "C")], 3)));
        movie_cases.stub_top_rated(3, Ok(sample_page(vec![sample_movie(4, "D")], 3)));
        let search_cases = MockSearchUseCases::new();

        let (handle, mut events) =
            home::spawn(Arc::new(movie_cases.clone()), Arc::new(search_cases));

        handle.load_initial();
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[1, 2]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        handle.load_more();
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[1, 2, 3]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        handle.load_more();
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[1, 2, 3, 4]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        // Page 3 of 3: exhausted, further load-more intents are no-ops.
        handle.load_more();
        handle.select(0);
        assert_eq!(
            next_event(&mut events).await,
            HomeEvent::NavigateToDetail(1)
        );
        assert_eq!(movie_cases.top_rated_calls(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_overlapping_load_more_collapses_to_one_request() {
        let movie_cases = MockMovieUseCases::gated();
        movie_cases.stub_top_rated(1, Ok(sample_page(vec![sample_movie(1, "A")], 3)));
        let search_cases = MockSearchUseCases::new();

        let (handle, mut events) =
            home::spawn(Arc::new(movie_cases.clone()), Arc::new(search_cases));

        handle.load_initial();
        handle.load_more();
        handle.load_more();
        handle.load_more();
        movie_cases.release();

        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[1]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);
        assert_eq!(movie_cases.top_rated_calls(), vec![1]);
    }

    #[tokio::test]
    async fn test_single_page_list_is_exhausted() {
        let movie_cases = MockMovieUseCases::new();
        movie_cases.stub_top_rated(1, Ok(sample_page(vec![sample_movie(7, "Only")], 1)));
        let search_cases = MockSearchUseCases::new();

        let (handle, mut events) =
            home::spawn(Arc::new(movie_cases.clone()), Arc::new(search_cases));

        handle.load_initial();
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[7]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        handle.load_more();
        handle.select(0);
        assert_eq!(
            next_event(&mut events).await,
            HomeEvent::NavigateToDetail(7)
        );
        assert_eq!(movie_cases.top_rated_calls(), vec![1]);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_state_untouched() {
        let movie_cases = MockMovieUseCases::new();
        movie_cases.stub_top_rated(
            1,
            Ok(sample_page(
                vec![sample_movie(1, "A"), sample_movie(2, "B")],
                3,
            )),
        );
        movie_cases.stub_top_rated(2, Err(ApiError::Unknown("network down".to_string())));
        let search_cases = MockSearchUseCases::new();

        let (handle, mut events) =
            home::spawn(Arc::new(movie_cases.clone()), Arc::new(search_cases));

        handle.load_initial();
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[1, 2]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        handle.load_more();
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        match next_event(&mut events).await {
            HomeEvent::ErrorOccurred(message) => assert_eq!(message, "network down"),
            other => panic!("expected ErrorOccurred, got {:?}", other),
        }
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        // Cursor and exhaustion flag are untouched: retrying load-more
        // requests page 2 again and appends.
        movie_cases.stub_top_rated(2, Ok(sample_page(vec![sample_movie(3, "C")], 3)));
        handle.load_more();
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[1, 2, 3]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);
        assert_eq!(movie_cases.top_rated_calls(), vec![1, 2, 2]);
    }

    #[tokio::test]
    async fn test_new_search_supersedes_inflight_search() {
        let movie_cases = MockMovieUseCases::new();
        let search_cases = MockSearchUseCases::gated();
        search_cases.stub("x", 1, Ok(sample_page(vec![sample_movie(10, "X")], 1)));
        search_cases.stub("y", 1, Ok(sample_page(vec![sample_movie(20, "Y")], 1)));

        let (handle, mut events) =
            home::spawn(Arc::new(movie_cases), Arc::new(search_cases.clone()));

        handle.search("x");
        handle.search("y");
        search_cases.release();
        search_cases.release();

        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[20]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        // Late results for "x" must never surface.
        handle.select(0);
        assert_eq!(
            next_event(&mut events).await,
            HomeEvent::NavigateToDetail(20)
        );
    }

    #[tokio::test]
    async fn test_stale_browse_response_rejected_after_search() {
        let movie_cases = MockMovieUseCases::gated();
        movie_cases.stub_top_rated(1, Ok(sample_page(vec![sample_movie(1, "Browse")], 5)));
        let search_cases = MockSearchUseCases::new();
        search_cases.stub("s", 1, Ok(sample_page(vec![sample_movie(9, "Hit")], 1)));

        let (handle, mut events) =
            home::spawn(Arc::new(movie_cases.clone()), Arc::new(search_cases));

        handle.load_initial();
        handle.search("s");
        movie_cases.release();

        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[9]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        handle.select(0);
        assert_eq!(
            next_event(&mut events).await,
            HomeEvent::NavigateToDetail(9)
        );
    }

    #[tokio::test]
    async fn test_clear_search_resets_to_browse_page_one() {
        let movie_cases = MockMovieUseCases::new();
        movie_cases.stub_top_rated(1, Ok(sample_page(vec![sample_movie(1, "A")], 5)));
        let search_cases = MockSearchUseCases::new();
        search_cases.stub("x", 1, Ok(sample_page(vec![sample_movie(10, "X")], 1)));

        let (handle, mut events) =
            home::spawn(Arc::new(movie_cases.clone()), Arc::new(search_cases.clone()));

        handle.load_initial();
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[1]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        // Search replaces the browse results wholesale and exhausts.
        handle.search("x");
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[10]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        // Clearing the search is a page-1 browse request even though the
        // search result set was exhausted.
        handle.clear_search();
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[1]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        assert_eq!(movie_cases.top_rated_calls(), vec![1, 1]);
        assert_eq!(search_cases.search_calls(), vec![("x".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_select_out_of_bounds_is_dropped() {
        let movie_cases = MockMovieUseCases::new();
        movie_cases.stub_top_rated(1, Ok(sample_page(vec![sample_movie(1, "A")], 1)));
        let search_cases = MockSearchUseCases::new();

        let (handle, mut events) =
            home::spawn(Arc::new(movie_cases), Arc::new(search_cases));

        handle.load_initial();
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStarted);
        expect_ids(&mut events, &[1]).await;
        assert_eq!(next_event(&mut events).await, HomeEvent::LoadingStopped);

        handle.select(5);
        handle.select(0);
        assert_eq!(
            next_event(&mut events).await,
            HomeEvent::NavigateToDetail(1)
        );
    }
}
