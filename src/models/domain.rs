use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::folding::{
    fold_preferences, CHILDREN_MIDPOINT, MONOGAMY_MIDPOINT, POLITICAL_MIDPOINT, SERIOUS_MIDPOINT,
};
use crate::error::Result;
use crate::models::requests::{DiscreteInput, WeightedInput};

/// Display labels for the four preference dimensions, in scoring order
pub const DIMENSION_LABELS: [&str; 4] = [
    "Political view",
    "Children preference",
    "Monogamy",
    "Serious dating",
];

/// The four preference values of a profile
///
/// Discrete profiles hold the raw answer codes; weighted profiles hold
/// the folded values produced by [`fold_preferences`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub political_view: f64,
    pub children_preference: f64,
    pub monogamy: f64,
    pub serious_dating: f64,
}

impl Preferences {
    #[inline]
    pub fn values(&self) -> [f64; 4] {
        [
            self.political_view,
            self.children_preference,
            self.monogamy,
            self.serious_dating,
        ]
    }
}

/// Per-dimension importance (0-10), kept for display once folded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Importance {
    pub political_view: u8,
    pub children_preference: u8,
    pub monogamy: u8,
    pub serious_dating: u8,
}

impl Importance {
    #[inline]
    pub fn values(&self) -> [u8; 4] {
        [
            self.political_view,
            self.children_preference,
            self.monogamy,
            self.serious_dating,
        ]
    }
}

/// A person taking part in matching, either the querying user or a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub preferences: Preferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
}

impl Profile {
    /// Build a discrete profile from raw answer codes
    ///
    /// Fails if any code lies outside its answer domain.
    pub fn from_discrete(id: u32, input: DiscreteInput) -> Result<Self> {
        input.validate()?;

        Ok(Self {
            id,
            name: input.name,
            preferences: Preferences {
                political_view: f64::from(input.political_view),
                children_preference: f64::from(input.children_preference),
                monogamy: f64::from(input.monogamy),
                serious_dating: f64::from(input.serious_dating),
            },
            importance: None,
        })
    }

    /// Build a weighted profile, folding each (code, importance) pair
    pub fn from_weighted(id: u32, input: WeightedInput) -> Result<Self> {
        input.validate()?;

        let importance = Importance {
            political_view: input.political_importance,
            children_preference: input.children_importance,
            monogamy: input.monogamy_importance,
            serious_dating: input.serious_importance,
        };
        let raw = [
            (input.political_view, POLITICAL_MIDPOINT),
            (input.children_preference, CHILDREN_MIDPOINT),
            (input.monogamy, MONOGAMY_MIDPOINT),
            (input.serious_dating, SERIOUS_MIDPOINT),
        ];

        Ok(Self {
            id,
            name: input.name,
            preferences: fold_preferences(raw, importance),
            importance: Some(importance),
        })
    }
}

/// Which compatibility function the pipeline runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringModel {
    /// Count of dimensions with identical answers (0-4)
    #[default]
    Discrete,
    /// Mean of `100 * (1 - |delta|)` over the folded values
    Weighted,
}

/// Preference values captured for reporting alongside a weighted score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub preferences: Preferences,
    pub importance: Option<Importance>,
}

/// One candidate's score against the user, as produced by the mapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredEntry {
    pub score: f64,
    pub profile_id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<ProfileSnapshot>,
}

/// All candidates tied at one score, merged into a single result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultGroup {
    pub score: f64,
    pub names: Vec<String>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchmakerError;

    fn discrete_input(pv: u8, cp: u8, m: u8, sd: u8) -> DiscreteInput {
        DiscreteInput {
            name: "Alex".to_string(),
            political_view: pv,
            children_preference: cp,
            monogamy: m,
            serious_dating: sd,
        }
    }

    #[test]
    fn test_discrete_profile_keeps_codes() {
        let profile = Profile::from_discrete(1, discrete_input(3, 2, 1, 2)).unwrap();

        assert_eq!(profile.preferences.values(), [3.0, 2.0, 1.0, 2.0]);
        assert!(profile.importance.is_none());
    }

    #[test]
    fn test_discrete_profile_rejects_out_of_domain() {
        let err = Profile::from_discrete(1, discrete_input(4, 1, 1, 1)).unwrap_err();
        assert!(matches!(err, MatchmakerError::Validation(_)));

        let err = Profile::from_discrete(1, discrete_input(1, 1, 3, 1)).unwrap_err();
        assert!(matches!(err, MatchmakerError::Validation(_)));
    }

    #[test]
    fn test_weighted_profile_folds_values() {
        let input = WeightedInput {
            name: "Jordan".to_string(),
            political_view: 5,
            political_importance: 10,
            children_preference: 2,
            children_importance: 5,
            monogamy: 1,
            monogamy_importance: 10,
            serious_dating: 3,
            serious_importance: 0,
        };

        let profile = Profile::from_weighted(2, input).unwrap();

        assert_eq!(profile.preferences.values(), [1.0, 2.5, 1.0, 1.0]);
        assert_eq!(profile.importance.unwrap().values(), [10, 5, 10, 0]);
    }

    #[test]
    fn test_scoring_model_deserializes_lowercase() {
        let model: ScoringModel = serde_json::from_str("\"weighted\"").unwrap();
        assert_eq!(model, ScoringModel::Weighted);
        assert_eq!(ScoringModel::default(), ScoringModel::Discrete);
    }
}
