//! Reelbox Database Library
//!
//! Persistence layer for video metadata. The [`VideoStore`] trait is the seam
//! handlers depend on; [`PgVideoStore`] is the Postgres implementation.

mod videos;

pub use videos::{PgVideoStore, VideoStore};
