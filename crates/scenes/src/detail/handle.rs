use tokio::sync::mpsc;

use super::messages::{DetailIntent, DetailMessage};

/// Intent-submitting interface to the detail coordinator.
///
/// All methods are fire-and-forget; sends never block and are delivered
/// in submission order.
#[derive(Clone)]
pub struct DetailHandle {
    sender: mpsc::UnboundedSender<DetailMessage>,
}

impl DetailHandle {
    pub(super) fn new(sender: mpsc::UnboundedSender<DetailMessage>) -> Self {
        Self { sender }
    }

    /// Fetch the movie record.
    pub fn load(&self) {
        self.send(DetailIntent::Load);
    }

    /// Open the movie's IMDB page.
    pub fn open_imdb(&self) {
        self.send(DetailIntent::OpenImdb);
    }

    fn send(&self, intent: DetailIntent) {
        let _ = self.sender.send(DetailMessage::Intent(intent));
    }
}
