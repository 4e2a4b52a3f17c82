use crate::models::{Importance, Preferences};

/// Midpoint of the five-point political scale
pub const POLITICAL_MIDPOINT: u8 = 3;
/// Midpoint of the five-point children scale
pub const CHILDREN_MIDPOINT: u8 = 3;
/// Midpoint of the three-point monogamy scale
pub const MONOGAMY_MIDPOINT: u8 = 2;
/// Midpoint of the three-point seriousness scale
pub const SERIOUS_MIDPOINT: u8 = 2;

/// Fold a raw answer code and its importance into one continuous value
///
/// Codes above the midpoint are reflected onto the low side of the scale
/// (`2 * midpoint - raw`), so 5 and 1 fold together, as do 4 and 2.
/// Reflection ignores importance.
///
/// Codes at or below the midpoint are pushed up by their unimportance
/// (`raw + (1 - importance / 10)`). A preference the person does not care
/// about drifts toward neutral and becomes easier to match.
#[inline]
pub fn fold(raw: u8, importance: u8, midpoint: u8) -> f64 {
    if raw > midpoint {
        f64::from(2 * midpoint) - f64::from(raw)
    } else {
        f64::from(raw) + (1.0 - f64::from(importance) / 10.0)
    }
}

/// Fold all four dimensions, given `(raw, midpoint)` pairs in scoring order
pub fn fold_preferences(raw: [(u8, u8); 4], importance: Importance) -> Preferences {
    let weights = importance.values();
    let [political_view, children_preference, monogamy, serious_dating] =
        std::array::from_fn(|i| fold(raw[i].0, weights[i], raw[i].1));

    Preferences {
        political_view,
        children_preference,
        monogamy,
        serious_dating,
    }
}
