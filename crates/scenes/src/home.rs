mod handle;
mod messages;
mod runner;

pub use handle::HomeHandle;
pub use messages::{HomeEvent, HomeIntent};
use runner::HomeCoordinator;

use std::sync::Arc;

use movies::{MovieUseCases, SearchUseCases};
use tokio::sync::mpsc;

/// Spawn the home screen coordinator.
///
/// Returns the handle the presentation layer submits intents through and
/// the stream of events it renders from. The coordinator stops when the
/// handle and every clone of it are dropped.
pub fn spawn(
    movie_cases: Arc<dyn MovieUseCases>,
    search_cases: Arc<dyn SearchUseCases>,
) -> (HomeHandle, mpsc::UnboundedReceiver<HomeEvent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let (events, event_stream) = mpsc::unbounded_channel();

    let coordinator =
        HomeCoordinator::new(movie_cases, search_cases, sender.clone(), receiver, events);
    tokio::spawn(coordinator.run());

    (HomeHandle::new(sender), event_stream)
}
