use crate::models::ScoredEntry;

/// Sort entries by score, highest first
///
/// `sort_by` is stable: tied entries keep their mapped order, which keeps
/// tie groups reproducible for the reducer. The order is total, with NaN
/// scores ranked below every other score.
pub fn sort_by_score(entries: &mut [ScoredEntry]) {
    entries.sort_by(|a, b| sort_key(b.score).total_cmp(&sort_key(a.score)));
}

#[inline]
fn sort_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        // -0.0 and 0.0 rank together
        score + 0.0
    }
}
