use crate::models::{Profile, ScoringModel};

/// Highest score of the discrete model: all four answers equal
pub const DISCRETE_MAX_SCORE: f64 = 4.0;
/// Highest score of the weighted model: all four folded values equal
pub const WEIGHTED_MAX_SCORE: f64 = 100.0;
/// Weighted scores are kept to this many steps per point, so candidates
/// with the same distances in a different order compare equal
const SCORE_STEPS_PER_POINT: f64 = 1_000_000.0;

impl ScoringModel {
    /// Score a candidate against the user under this model
    ///
    /// Pure and deterministic. Any pair of profiles can be scored; values
    /// outside the usual domains just score lower.
    #[inline]
    pub fn score(&self, user: &Profile, candidate: &Profile) -> f64 {
        match self {
            ScoringModel::Discrete => f64::from(equality_count(user, candidate)),
            ScoringModel::Weighted => weighted_distance_score(user, candidate),
        }
    }

    pub fn max_score(&self) -> f64 {
        match self {
            ScoringModel::Discrete => DISCRETE_MAX_SCORE,
            ScoringModel::Weighted => WEIGHTED_MAX_SCORE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScoringModel::Discrete => "discrete",
            ScoringModel::Weighted => "weighted",
        }
    }
}

/// Number of dimensions on which both profiles gave the same answer
#[inline]
pub fn equality_count(user: &Profile, candidate: &Profile) -> u8 {
    user.preferences
        .values()
        .iter()
        .zip(candidate.preferences.values())
        .filter(|(a, b)| **a == *b)
        .count() as u8
}

/// Closeness of two folded values: 100 when equal, 0 one step apart
///
/// Goes negative beyond one step; that marks strongly incompatible values
/// and is kept as is.
#[inline]
pub fn partial_score(user_value: f64, candidate_value: f64) -> f64 {
    100.0 * (1.0 - (user_value - candidate_value).abs())
}

/// Mean of the four per-dimension partial scores, rounded to a fixed
/// precision
#[inline]
pub fn weighted_distance_score(user: &Profile, candidate: &Profile) -> f64 {
    let partials: f64 = user
        .preferences
        .values()
        .iter()
        .zip(candidate.preferences.values())
        .map(|(a, b)| partial_score(*a, b))
        .sum();

    round_score(partials / 4.0)
}

/// Snap a score onto a fixed grid; NaN and infinities pass through
#[inline]
fn round_score(score: f64) -> f64 {
    (score * SCORE_STEPS_PER_POINT).round() / SCORE_STEPS_PER_POINT
}
