use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{MatchmakerError, Result};
use crate::models::{DiscreteInput, Profile, ScoringModel, WeightedInput};

/// Read a name list, one name per line, skipping blank lines
pub fn load_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| MatchmakerError::NameList {
        path: path.to_path_buf(),
        source,
    })?;

    let names: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(MatchmakerError::EmptyNameList {
            path: path.to_path_buf(),
        });
    }

    debug!("Loaded {} names from {}", names.len(), path.display());
    Ok(names)
}

/// Generates synthetic candidate profiles with random answers
///
/// Names are drawn with replacement, so a pool may hold several people
/// with the same name.
pub struct ProfileGenerator {
    names: Vec<String>,
    rng: StdRng,
}

impl ProfileGenerator {
    /// Create a generator; a fixed `seed` makes the pool reproducible
    pub fn new(names: Vec<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { names, rng }
    }

    /// Generate `count` candidates with ids `1..=count`
    ///
    /// Returns an empty pool when there are no names to draw from, and an
    /// error when `count` does not fit in a profile id.
    pub fn generate(&mut self, model: ScoringModel, count: usize) -> Result<Vec<Profile>> {
        if self.names.is_empty() {
            return Ok(Vec::new());
        }

        let count = u32::try_from(count).map_err(|_| MatchmakerError::PoolTooLarge(count))?;

        let profiles = (1..=count)
            .map(|id| {
                let name = self.names[self.rng.random_range(0..self.names.len())].clone();
                match model {
                    ScoringModel::Discrete => {
                        Profile::from_discrete(id, self.discrete_answers(name))
                    }
                    ScoringModel::Weighted => {
                        Profile::from_weighted(id, self.weighted_answers(name))
                    }
                }
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Generated {} {} candidate profiles", profiles.len(), model.name());
        Ok(profiles)
    }

    fn discrete_answers(&mut self, name: String) -> DiscreteInput {
        DiscreteInput {
            name,
            political_view: self.rng.random_range(1..=3),
            children_preference: self.rng.random_range(1..=3),
            monogamy: self.rng.random_range(1..=2),
            serious_dating: self.rng.random_range(1..=2),
        }
    }

    fn weighted_answers(&mut self, name: String) -> WeightedInput {
        WeightedInput {
            name,
            political_view: self.rng.random_range(1..=5),
            political_importance: self.rng.random_range(0..=10),
            children_preference: self.rng.random_range(1..=5),
            children_importance: self.rng.random_range(0..=10),
            monogamy: self.rng.random_range(1..=3),
            monogamy_importance: self.rng.random_range(0..=10),
            serious_dating: self.rng.random_range(1..=3),
            serious_importance: self.rng.random_range(0..=10),
        }
    }
}
