// Collaborators outside the matching core
pub mod generator;
pub mod prompt;

pub use generator::{load_names, ProfileGenerator};
pub use prompt::Questionnaire;
