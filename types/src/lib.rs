//! Shared configuration types for the wave cannon overlay
//!
//! This crate contains serializable configuration types that are shared between
//! the mechanic core (wavecannon-core) and any front end that edits settings.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Color Type
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color as [r, g, b, a] bytes
pub type Color = [u8; 4];

/// Default colors for arena drawing
pub mod overlay_colors {
    use super::Color;

    /// Highlight for the spot the local player should stand on
    pub const SAFE: Color = [0, 255, 0, 255];
    /// No explicit color; renderers substitute their default outline color
    pub const UNSET: Color = [0, 0, 0, 0];
}

// ─────────────────────────────────────────────────────────────────────────────
// Party Positions
// ─────────────────────────────────────────────────────────────────────────────

/// Number of assignable party positions (one full light party pair)
pub const PARTY_POSITION_COUNT: usize = 8;

/// Raid position a player has been given by the operator.
///
/// Group assignments are keyed by position rather than by roster slot so the
/// same configuration keeps working when the party order in the client changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartyPosition {
    MT,
    OT,
    H1,
    H2,
    M1,
    M2,
    R1,
    R2,
}

impl PartyPosition {
    pub const ALL: [PartyPosition; PARTY_POSITION_COUNT] = [
        Self::MT,
        Self::OT,
        Self::H1,
        Self::H2,
        Self::M1,
        Self::M2,
        Self::R1,
        Self::R2,
    ];

    /// Index into per-position tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MT => "MT",
            Self::OT => "OT",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::M1 => "M1",
            Self::M2 => "M2",
            Self::R1 => "R1",
            Self::R2 => "R2",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Monitor Assignments
// ─────────────────────────────────────────────────────────────────────────────

/// Operator-configured ordering used to rank players once the monitors are out.
///
/// `groups[position.index()]` is the group number for that position. Every group
/// number must be in `0..PARTY_POSITION_COUNT` and used exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorAssignments {
    #[serde(default = "default_monitor_groups")]
    pub groups: [u8; PARTY_POSITION_COUNT],
}

impl Default for MonitorAssignments {
    fn default() -> Self {
        Self {
            groups: default_monitor_groups(),
        }
    }
}

impl MonitorAssignments {
    /// Group number configured for a position
    pub fn group_of(&self, position: PartyPosition) -> u8 {
        self.groups[position.index()]
    }

    /// Returns true if every group number is in range and used only once
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; PARTY_POSITION_COUNT];
        for &group in &self.groups {
            let Some(used) = seen.get_mut(group as usize) else {
                return false;
            };
            if *used {
                return false;
            }
            *used = true;
        }
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlay Appearance
// ─────────────────────────────────────────────────────────────────────────────

/// Appearance of the safe-spot circles drawn on the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeSpotOverlayConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f32,
    #[serde(default = "default_safe_color")]
    pub safe_color: Color,
}

impl Default for SafeSpotOverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            circle_radius: default_circle_radius(),
            safe_color: default_safe_color(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Config
// ─────────────────────────────────────────────────────────────────────────────

/// Root configuration persisted between sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub monitor_assignments: MonitorAssignments,
    #[serde(default)]
    pub overlay: SafeSpotOverlayConfig,
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_circle_radius() -> f32 {
    1.0
}
fn default_safe_color() -> Color {
    overlay_colors::SAFE
}
fn default_monitor_groups() -> [u8; PARTY_POSITION_COUNT] {
    [0, 1, 2, 3, 4, 5, 6, 7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_assignments_are_valid() {
        assert!(MonitorAssignments::default().is_valid());
    }

    #[test]
    fn duplicate_group_is_invalid() {
        let assignments = MonitorAssignments {
            groups: [0, 1, 2, 3, 4, 5, 6, 6],
        };
        assert!(!assignments.is_valid());
    }

    #[test]
    fn out_of_range_group_is_invalid() {
        let assignments = MonitorAssignments {
            groups: [0, 1, 2, 3, 4, 5, 6, 8],
        };
        assert!(!assignments.is_valid());
    }

    #[test]
    fn group_of_reads_by_position() {
        let assignments = MonitorAssignments {
            groups: [7, 6, 5, 4, 3, 2, 1, 0],
        };
        assert_eq!(assignments.group_of(PartyPosition::MT), 7);
        assert_eq!(assignments.group_of(PartyPosition::R2), 0);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.overlay.circle_radius, 1.0);
        assert_eq!(config.overlay.safe_color, overlay_colors::SAFE);
    }

    #[test]
    fn partial_overlay_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [overlay]
            circle_radius = 1.5
            "#,
        )
        .unwrap();
        assert_eq!(config.overlay.circle_radius, 1.5);
        assert!(config.overlay.enabled);
        assert_eq!(config.monitor_assignments, MonitorAssignments::default());
    }
}
