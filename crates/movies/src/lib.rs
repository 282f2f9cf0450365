//! Fetch use-cases over the TMDB client.
//!
//! This crate is the boundary between the transport layer and the screen
//! coordinators: it exposes the two fetch operations as traits, maps wire
//! pages into [`MoviePage`], and collapses the transport error taxonomy
//! into the single [`ApiError`] the presentation side branches on.

mod adapters;
mod error;
mod models;
mod usecases;

pub use adapters::{TmdbMovies, TmdbSearch};
pub use error::ApiError;
pub use models::MoviePage;
pub use usecases::{MovieUseCases, SearchUseCases};

pub use tmdb::{MovieDetail, MovieSummary};
