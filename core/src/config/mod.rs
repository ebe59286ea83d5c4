//! Application configuration
//!
//! This module re-exports shared types from wavecannon-types and provides
//! persistence for AppConfig and party-aware resolution of group assignments.

mod assignments;
mod error;

// Re-export all shared types
pub use wavecannon_types::{
    AppConfig, Color, MonitorAssignments, PARTY_POSITION_COUNT, PartyPosition,
    SafeSpotOverlayConfig, overlay_colors,
};

pub use assignments::MonitorAssignmentsExt;
pub use error::ConfigError;

use std::path::PathBuf;

const APP_NAME: &str = "wavecannon";
const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    /// Load the stored config, falling back to defaults if it is missing or unreadable
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn path() -> Result<PathBuf, ConfigError>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        let config: AppConfig = confy::load(APP_NAME, CONFIG_NAME)?;
        if !config.monitor_assignments.is_valid() {
            tracing::warn!(
                groups = ?config.monitor_assignments.groups,
                "Monitor assignments are not a permutation of groups, ordering will be skipped"
            );
        }
        Ok(config)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Path)
    }
}
