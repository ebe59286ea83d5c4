//! Error types for configuration operations

use thiserror::Error;

/// Errors during configuration load/save
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("failed to locate configuration file")]
    Path(#[source] confy::ConfyError),
}
