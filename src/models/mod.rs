// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Importance, Preferences, Profile, ProfileSnapshot, ResultGroup, ScoredEntry, ScoringModel,
    DIMENSION_LABELS,
};
pub use requests::{DiscreteInput, WeightedInput};
pub use responses::MatchReport;
