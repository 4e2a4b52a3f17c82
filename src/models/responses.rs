use serde::{Deserialize, Serialize};
use crate::models::domain::{Profile, ResultGroup, ScoringModel};

/// JSON envelope printed by the CLI for one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub model: ScoringModel,
    pub user: Profile,
    pub total_candidates: usize,
    pub matches: Vec<ResultGroup>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
