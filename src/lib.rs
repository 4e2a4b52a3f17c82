//! Matchmaker - compatibility matching over a pool of dating profiles
//!
//! This library scores every candidate against a querying user, sorts the
//! scores and reduces the top tie group into a single best-match result.
//! Two scoring models are available: a discrete answer-equality count and
//! a continuous weighted distance over folded preference values.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::Matchmaker;
pub use error::{MatchmakerError, Result};
pub use models::{
    DiscreteInput, MatchReport, Profile, ResultGroup, ScoredEntry, ScoringModel, WeightedInput,
};
