//! Error types for scenario loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading or validating a scenario file
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario TOML")]
    ParseToml(#[from] toml::de::Error),

    #[error("party slot {slot} is out of range")]
    SlotOutOfRange { slot: usize },

    #[error("party slot {slot} is listed twice")]
    DuplicateSlot { slot: usize },

    #[error("actor {actor_id} is listed twice")]
    DuplicateActor { actor_id: u64 },

    #[error("unknown status name '{name}'")]
    UnknownStatus { name: String },

    #[error("unknown action name '{name}'")]
    UnknownAction { name: String },
}
