mod handle;
mod messages;
mod runner;

pub use handle::DetailHandle;
pub use messages::{DetailEvent, DetailIntent};
use runner::DetailCoordinator;

use std::sync::Arc;

use movies::MovieUseCases;
use tokio::sync::mpsc;

/// Spawn the detail screen coordinator for one movie.
///
/// The detail record is fetched lazily on the first `load` intent and is
/// never shared between coordinators.
pub fn spawn(
    movie_cases: Arc<dyn MovieUseCases>,
    movie_id: i64,
) -> (DetailHandle, mpsc::UnboundedReceiver<DetailEvent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let (events, event_stream) = mpsc::unbounded_channel();

    let coordinator =
        DetailCoordinator::new(movie_cases, movie_id, sender.clone(), receiver, events);
    tokio::spawn(coordinator.run());

    (DetailHandle::new(sender), event_stream)
}
