use std::sync::Arc;

use movies::{ApiError, MovieDetail, MovieUseCases};
use tokio::sync::mpsc;

use super::messages::{DetailEvent, DetailIntent, DetailMessage};

/// Detail screen coordinator for a single movie id.
pub(super) struct DetailCoordinator {
    movie_cases: Arc<dyn MovieUseCases>,
    movie_id: i64,

    // Weak so the mailbox closes once every handle is gone; the fetch task
    // holds a strong sender until its completion is delivered.
    sender: mpsc::WeakUnboundedSender<DetailMessage>,
    receiver: mpsc::UnboundedReceiver<DetailMessage>,
    events: mpsc::UnboundedSender<DetailEvent>,

    detail: Option<MovieDetail>,
    is_fetching: bool,
}

impl DetailCoordinator {
    pub(super) fn new(
        movie_cases: Arc<dyn MovieUseCases>,
        movie_id: i64,
        sender: mpsc::UnboundedSender<DetailMessage>,
        receiver: mpsc::UnboundedReceiver<DetailMessage>,
        events: mpsc::UnboundedSender<DetailEvent>,
    ) -> Self {
        Self {
            movie_cases,
            movie_id,
            sender: sender.downgrade(),
            receiver,
            events,
            detail: None,
            is_fetching: false,
        }
    }

    pub(super) async fn run(mut self) {
        while let Some(message) = self.receiver.recv().await {
            match message {
                DetailMessage::Intent(intent) => self.handle_intent(intent),
                DetailMessage::Completed(result) => self.handle_completion(result),
            }
        }
    }

    fn handle_intent(&mut self, intent: DetailIntent) {
        match intent {
            DetailIntent::Load => {
                if self.is_fetching {
                    tracing::debug!(movie_id = self.movie_id, "load dropped: fetch outstanding");
                    return;
                }
                let Some(sender) = self.sender.upgrade() else {
                    return;
                };

                self.is_fetching = true;
                self.emit(DetailEvent::LoadingStarted);

                let movie_cases = Arc::clone(&self.movie_cases);
                let movie_id = self.movie_id;
                tokio::spawn(async move {
                    let result = movie_cases.detail(movie_id).await;
                    let _ = sender.send(DetailMessage::Completed(result));
                });
            }
            DetailIntent::OpenImdb => {
                match self.detail.as_ref().and_then(|d| d.imdb_id.clone()) {
                    Some(imdb_id) => self.emit(DetailEvent::NavigateToImdb(imdb_id)),
                    None => tracing::debug!(movie_id = self.movie_id, "no imdb id to open"),
                }
            }
        }
    }

    fn handle_completion(&mut self, result: Result<MovieDetail, ApiError>) {
        self.is_fetching = false;
        match result {
            Ok(detail) => {
                self.detail = Some(detail.clone());
                self.emit(DetailEvent::DataUpdated(detail));
            }
            Err(error) => {
                tracing::warn!(%error, movie_id = self.movie_id, "detail fetch failed");
                self.emit(DetailEvent::ErrorOccurred(error.to_string()));
            }
        }
        self.emit(DetailEvent::LoadingStopped);
    }

    fn emit(&self, event: DetailEvent) {
        let _ = self.events.send(event);
    }
}
