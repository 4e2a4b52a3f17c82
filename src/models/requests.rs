use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw questionnaire answers for the discrete model
///
/// Political view: 1 liberal, 2 moderate, 3 conservative.
/// Children: 1 wants kids, 2 no kids, 3 undecided.
/// Monogamy: 1 monogamous, 2 polyamorous.
/// Serious dating: 1 serious, 2 casual.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DiscreteInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1, max = 3))]
    pub political_view: u8,
    #[validate(range(min = 1, max = 3))]
    pub children_preference: u8,
    #[validate(range(min = 1, max = 2))]
    pub monogamy: u8,
    #[validate(range(min = 1, max = 2))]
    pub serious_dating: u8,
}

/// Raw questionnaire answers for the weighted model
///
/// Codes above the midpoint (3, or 2 for the two short scales) are the
/// reflected end of the scale; each answer carries an importance of 0-10.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeightedInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1, max = 5))]
    pub political_view: u8,
    #[validate(range(max = 10))]
    pub political_importance: u8,
    #[validate(range(min = 1, max = 5))]
    pub children_preference: u8,
    #[validate(range(max = 10))]
    pub children_importance: u8,
    #[validate(range(min = 1, max = 3))]
    pub monogamy: u8,
    #[validate(range(max = 10))]
    pub monogamy_importance: u8,
    #[validate(range(min = 1, max = 3))]
    pub serious_dating: u8,
    #[validate(range(max = 10))]
    pub serious_importance: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_input_rejects_importance_above_ten() {
        let input = WeightedInput {
            name: "Casey".to_string(),
            political_view: 1,
            political_importance: 11,
            children_preference: 1,
            children_importance: 0,
            monogamy: 1,
            monogamy_importance: 0,
            serious_dating: 1,
            serious_importance: 0,
        };

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("political_importance"));
    }

    #[test]
    fn test_discrete_input_rejects_empty_name() {
        let input = DiscreteInput {
            name: String::new(),
            political_view: 1,
            children_preference: 1,
            monogamy: 1,
            serious_dating: 1,
        };

        assert!(input.validate().is_err());
    }
}
