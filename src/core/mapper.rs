use crate::models::{Profile, ProfileSnapshot, ScoredEntry, ScoringModel};

/// Score every candidate against the user, keeping pool order
///
/// No candidate is filtered out. Weighted entries also carry a snapshot
/// of the candidate's values for reporting.
pub fn map_candidates(
    model: ScoringModel,
    user: &Profile,
    candidates: &[Profile],
) -> Vec<ScoredEntry> {
    candidates
        .iter()
        .map(|candidate| ScoredEntry {
            score: model.score(user, candidate),
            profile_id: candidate.id,
            name: candidate.name.clone(),
            snapshot: match model {
                ScoringModel::Discrete => None,
                ScoringModel::Weighted => Some(ProfileSnapshot {
                    preferences: candidate.preferences,
                    importance: candidate.importance,
                }),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Preferences;

    fn create_candidate(id: u32, name: &str, political_view: f64) -> Profile {
        Profile {
            id,
            name: name.to_string(),
            preferences: Preferences {
                political_view,
                children_preference: 1.0,
                monogamy: 1.0,
                serious_dating: 1.0,
            },
            importance: None,
        }
    }

    #[test]
    fn test_one_entry_per_candidate_in_order() {
        let user = create_candidate(0, "user", 1.0);
        let candidates = vec![
            create_candidate(1, "Sam", 3.0),
            create_candidate(2, "Sam", 1.0),
            create_candidate(3, "Ivy", 2.0),
        ];

        let entries = map_candidates(ScoringModel::Discrete, &user, &candidates);

        let ids: Vec<u32> = entries.iter().map(|e| e.profile_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(entries[0].score, 3.0);
        assert_eq!(entries[1].score, 4.0);
        assert!(entries.iter().all(|e| e.snapshot.is_none()));
    }

    #[test]
    fn test_weighted_entries_carry_snapshot() {
        let user = create_candidate(0, "user", 1.0);
        let candidates = vec![create_candidate(1, "Nova", 2.5)];

        let entries = map_candidates(ScoringModel::Weighted, &user, &candidates);

        let snapshot = entries[0].snapshot.expect("weighted snapshot");
        assert_eq!(snapshot.preferences.political_view, 2.5);
    }

    #[test]
    fn test_empty_pool_maps_to_nothing() {
        let user = create_candidate(0, "user", 1.0);
        assert!(map_candidates(ScoringModel::Weighted, &user, &[]).is_empty());
    }
}
