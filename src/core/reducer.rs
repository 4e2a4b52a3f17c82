use crate::models::{ResultGroup, ScoredEntry, ScoringModel, DIMENSION_LABELS};

/// Partition score-sorted entries into maximal runs of equal score
#[inline]
pub fn score_tiers(entries: &[ScoredEntry]) -> impl Iterator<Item = &[ScoredEntry]> {
    entries.chunk_by(|a, b| a.score == b.score)
}

/// Collapse the leading tier of sorted entries into the best-match group
///
/// Only the top tier is returned. Lower tiers are counted for logging and
/// otherwise dropped. An empty input gives an empty result rather than a
/// placeholder score.
pub fn reduce(entries: &[ScoredEntry], model: ScoringModel) -> Vec<ResultGroup> {
    let mut tiers = score_tiers(entries);

    let Some(best) = tiers.next() else {
        tracing::debug!("No entries to reduce");
        return Vec::new();
    };

    tracing::debug!(
        best_score = best[0].score,
        tied = best.len(),
        discarded_tiers = tiers.count(),
        "Reduced to best tier"
    );

    vec![merge_tier(best, model)]
}

/// Merge one run of equally scored entries into a single result group
pub fn merge_tier(tier: &[ScoredEntry], model: ScoringModel) -> ResultGroup {
    let mut body = String::new();

    for entry in tier {
        match model {
            ScoringModel::Discrete => {
                if !body.is_empty() {
                    body.push(' ');
                }
                body.push_str(&entry.name);
            }
            ScoringModel::Weighted => body.push_str(&describe_entry(entry)),
        }
    }

    ResultGroup {
        score: tier.first().map_or(0.0, |e| e.score),
        names: tier.iter().map(|e| e.name.clone()).collect(),
        body,
    }
}

/// Render one weighted entry: its name, four values with their importance,
/// and the score to two decimals
fn describe_entry(entry: &ScoredEntry) -> String {
    let mut block = format!("{}\n", entry.name);

    if let Some(snapshot) = &entry.snapshot {
        let values = snapshot.preferences.values();
        let importance = snapshot.importance.map(|i| i.values());

        for (i, label) in DIMENSION_LABELS.iter().enumerate() {
            let weight = match importance {
                Some(weights) => weights[i].to_string(),
                None => "n/a".to_string(),
            };
            block.push_str(&format!(
                "    {:<20} {:.2} (importance {})\n",
                format!("{}:", label),
                values[i],
                weight
            ));
        }
    }

    block.push_str(&format!("    {:<20} {:.2}\n", "Score:", entry.score));
    block
}
