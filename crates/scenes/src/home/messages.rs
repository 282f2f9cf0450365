use movies::{ApiError, MoviePage, MovieSummary};

/// Intents the presentation layer drives the home screen with.
#[derive(Debug, Clone)]
pub enum HomeIntent {
    /// Load page 1 of the top rated list, leaving search mode.
    LoadInitial,
    /// Load the next page of the current list.
    LoadMore,
    /// Switch to search mode and load page 1 for the query.
    Search(String),
    /// Leave search mode and reload the top rated list.
    ClearSearch,
    /// Select the row at the given index.
    Select(usize),
}

/// Events emitted back to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeEvent {
    LoadingStarted,
    LoadingStopped,
    /// The result list changed; carries a snapshot in display order.
    DataUpdated(Vec<MovieSummary>),
    /// Navigate to the detail screen for the selected movie.
    NavigateToDetail(i64),
    /// A fetch failed; the message is user-presentable.
    ErrorOccurred(String),
}

/// Mailbox message: an external intent or an internal fetch completion.
pub(super) enum HomeMessage {
    Intent(HomeIntent),
    Completed(FetchOutcome),
}

/// Completion of one issued fetch, routed back through the mailbox.
///
/// Carries everything needed to reject a stale response: the generation
/// stamp of the request and the (page, query) it was issued for.
pub(super) struct FetchOutcome {
    pub generation: u64,
    pub page: i64,
    pub query: Option<String>,
    pub result: Result<MoviePage, ApiError>,
}
