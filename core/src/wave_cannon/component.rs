//! Arena component for the monitor safe spots

use wavecannon_types::{AppConfig, MonitorAssignments, SafeSpotOverlayConfig, overlay_colors};

use crate::arena::ArenaDraw;
use crate::boss::BossState;
use crate::config::MonitorAssignmentsExt;
use crate::party::{Party, Roster, Slot};
use crate::signals::{MechanicSignal, SignalHandler};

use super::markers::{MarkerGain, StatusTracker};
use super::order::PlayerOrder;
use super::safe_spots::{self, SafeSpot, UnresolvedSpot};

/// Per-pull state for the monitor mechanic.
///
/// Owned by the encounter session; call [`reset`](Self::reset) at pull start.
#[derive(Debug, Clone, Default)]
pub struct OversampledWaveCannonSafe {
    markers: StatusTracker,
    order: PlayerOrder,
    assignments: MonitorAssignments,
    overlay: SafeSpotOverlayConfig,
    unresolved: Vec<UnresolvedSpot>,
}

impl OversampledWaveCannonSafe {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            assignments: config.monitor_assignments.clone(),
            overlay: config.overlay.clone(),
            ..Self::default()
        }
    }

    /// Marker-gain hook. Never fails; irrelevant notifications are dropped.
    pub fn on_status_gain(&mut self, roster: &impl Roster, actor_id: u64, status_id: u32) {
        let gain = self.markers.on_status_gain(roster, actor_id, status_id);
        if gain.completes_set() {
            self.report_unresolved_layout(roster);
            self.assign_player_order(roster);
        } else if let MarkerGain::Recorded { count, .. } = gain {
            tracing::trace!(count, "Waiting for remaining monitors");
        }
    }

    /// Monitor placement is fixed once all monitors are out, so layout gaps are
    /// reported here once per pull instead of on every frame.
    fn report_unresolved_layout(&mut self, roster: &impl Roster) {
        self.unresolved = safe_spots::unresolved_layout(roster, &self.markers);
        for spot in &self.unresolved {
            tracing::warn!(
                group = spot.group.label(),
                monitor_count = spot.monitor_count,
                index = spot.index,
                slot = spot.slot,
                "No safe spot defined for this layout, using center"
            );
        }
    }

    fn assign_player_order(&mut self, roster: &impl Roster) {
        let assignments = self.assignments.resolve(roster);
        if assignments.is_empty() {
            tracing::warn!(
                "Monitor assignments do not cover the current party, order not assigned"
            );
        }
        self.order = PlayerOrder::assign(&assignments, &self.markers);
        tracing::debug!(order = ?self.order, "Monitor order assigned");
    }

    /// Placements for this frame, or nothing while the mechanic is not ready
    pub fn safe_spots(
        &self,
        roster: &impl Roster,
        boss: &impl BossState,
        slot: Slot,
    ) -> Vec<SafeSpot> {
        if !self.markers.is_ready() || boss.reference_angle().is_none() {
            return Vec::new();
        }
        safe_spots::resolve(roster, &self.markers, slot)
    }

    /// Per-frame draw hook: outline every spot, highlighting the player's own
    pub fn draw_arena_foreground(
        &self,
        roster: &impl Roster,
        boss: &impl BossState,
        pc_slot: Slot,
        arena: &mut impl ArenaDraw,
    ) {
        if !self.overlay.enabled {
            return;
        }
        for spot in self.safe_spots(roster, boss, pc_slot) {
            let color = if spot.is_mine {
                self.overlay.safe_color
            } else {
                overlay_colors::UNSET
            };
            arena.add_circle(spot.position.pos(), self.overlay.circle_radius, color);
        }
    }

    pub fn markers(&self) -> &StatusTracker {
        &self.markers
    }

    pub fn player_order(&self) -> &PlayerOrder {
        &self.order
    }

    /// Members placed at `Center` because the layout has no cell for them,
    /// as reported when the last monitor went out
    pub fn unresolved_layout(&self) -> &[UnresolvedSpot] {
        &self.unresolved
    }

    /// Clear markers and order; configuration is kept
    pub fn reset(&mut self) {
        self.markers.reset();
        self.order = PlayerOrder::default();
        self.unresolved.clear();
    }
}

impl SignalHandler for OversampledWaveCannonSafe {
    fn handle_signal(&mut self, signal: &MechanicSignal, party: &Party) {
        match signal {
            MechanicSignal::StatusGained {
                actor_id,
                status_id,
            } => self.on_status_gain(party, *actor_id, *status_id),
            MechanicSignal::CastStarted { .. } => {}
            MechanicSignal::PullReset => self.reset(),
        }
    }

    fn on_pull_reset(&mut self) {
        self.reset();
    }
}
