use movies::{ApiError, MovieDetail};

/// Intents the presentation layer drives the detail screen with.
#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Fetch the movie record.
    Load,
    /// Open the movie's IMDB page, when the loaded record has one.
    OpenImdb,
}

/// Events emitted back to the presentation layer.
#[derive(Debug, Clone)]
pub enum DetailEvent {
    LoadingStarted,
    LoadingStopped,
    /// The detail record arrived.
    DataUpdated(MovieDetail),
    /// Navigate to the IMDB page with this external id.
    NavigateToImdb(String),
    /// The fetch failed; the message is user-presentable.
    ErrorOccurred(String),
}

/// Mailbox message: an external intent or the fetch completion.
pub(super) enum DetailMessage {
    Intent(DetailIntent),
    Completed(Result<MovieDetail, ApiError>),
}
