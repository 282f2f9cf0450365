use tokio::sync::mpsc;

use super::messages::{HomeIntent, HomeMessage};

/// Intent-submitting interface to the home coordinator.
///
/// All methods are fire-and-forget: sends never block, and intents are
/// delivered in submission order. Sends after the coordinator has stopped
/// are dropped.
#[derive(Clone)]
pub struct HomeHandle {
    sender: mpsc::UnboundedSender<HomeMessage>,
}

impl HomeHandle {
    pub(super) fn new(sender: mpsc::UnboundedSender<HomeMessage>) -> Self {
        Self { sender }
    }

    /// Load page 1 of the top rated list.
    pub fn load_initial(&self) {
        self.send(HomeIntent::LoadInitial);
    }

    /// Load the next page for the current query.
    pub fn load_more(&self) {
        self.send(HomeIntent::LoadMore);
    }

    /// Search movies by title, starting from page 1.
    pub fn search(&self, query: impl Into<String>) {
        self.send(HomeIntent::Search(query.into()));
    }

    /// Drop the active search and return to the top rated list.
    pub fn clear_search(&self) {
        self.send(HomeIntent::ClearSearch);
    }

    /// Select the movie at `index` in the current list.
    pub fn select(&self, index: usize) {
        self.send(HomeIntent::Select(index));
    }

    fn send(&self, intent: HomeIntent) {
        let _ = self.sender.send(HomeMessage::Intent(intent));
    }
}
