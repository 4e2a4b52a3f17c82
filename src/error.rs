use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatchmakerError>;

/// Errors raised outside the scoring pipeline itself
///
/// The pipeline never fails on ordinary data; these cover profile
/// construction, configuration and the console/name-list collaborators.
#[derive(Error, Debug)]
pub enum MatchmakerError {
    #[error("Invalid profile: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid answer for {field}: {value:?}")]
    InvalidAnswer { field: &'static str, value: String },

    #[error("Failed to read name list {}: {source}", path.display())]
    NameList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No names found in {}", path.display())]
    EmptyNameList { path: PathBuf },

    #[error("Pool size {0} exceeds the largest profile id")]
    PoolTooLarge(usize),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
