use crate::core::{mapper::map_candidates, reducer::reduce, sorter::sort_by_score};
use crate::models::{Profile, ResultGroup, ScoringModel};

/// Map/sort/reduce matching driver
///
/// # Pipeline Stages
/// 1. Map: score every candidate against the user
/// 2. Sort: order entries by score, highest first, stably
/// 3. Reduce: merge the top-scoring tie group into one result
///
/// Holds nothing but its scoring model, so repeated runs over the same
/// input give the same output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matchmaker {
    model: ScoringModel,
}

impl Matchmaker {
    pub fn new(model: ScoringModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> ScoringModel {
        self.model
    }

    /// Find the best match group for a user among the candidates
    ///
    /// # Arguments
    /// * `user` - The querying user's profile
    /// * `candidates` - The candidate pool, in generation order
    ///
    /// # Returns
    /// One group holding every candidate tied at the highest score, or an
    /// empty vector when the pool is empty
    pub fn run(&self, user: &Profile, candidates: &[Profile]) -> Vec<ResultGroup> {
        let mut entries = map_candidates(self.model, user, candidates);
        tracing::debug!(model = self.model.name(), entries = entries.len(), "Mapped candidates");

        sort_by_score(&mut entries);

        let groups = reduce(&entries, self.model);
        tracing::debug!(groups = groups.len(), "Pipeline finished");

        groups
    }
}
