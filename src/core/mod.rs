// Core algorithm exports
pub mod folding;
pub mod mapper;
pub mod matcher;
pub mod reducer;
pub mod scoring;
pub mod sorter;

pub use folding::{fold, fold_preferences};
pub use mapper::map_candidates;
pub use matcher::Matchmaker;
pub use reducer::{merge_tier, reduce, score_tiers};
pub use scoring::{equality_count, partial_score, weighted_distance_score};
pub use sorter::sort_by_score;
