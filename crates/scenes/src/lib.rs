//! Screen coordinators for the movie browsing client.
//!
//! Each screen is driven the same way: intents go in through a cloneable
//! handle, events come back on a channel returned at spawn time. All state
//! lives inside one spawned task per screen, so fetch completions never
//! race intents.

pub mod detail;
pub mod home;
pub mod mocks;
mod occurrence;

pub use detail::{DetailEvent, DetailHandle, DetailIntent};
pub use home::{HomeEvent, HomeHandle, HomeIntent};
pub use occurrence::{title_occurrences, CharOccurrence};
