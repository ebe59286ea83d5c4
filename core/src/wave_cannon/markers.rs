//! Monitor status tracking
//!
//! Turns "player gained a loading status" notifications into a per-slot marker
//! and keeps the running monitor count for the pull.

use crate::arena::Angle;
use crate::game_data::status_id;
use crate::party::{MAX_PARTY_SIZE, Roster, Slot};

/// Number of monitors handed out by one cast
pub const MONITOR_COUNT: usize = 3;

/// Direction a monitor faces relative to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn angle(self) -> Angle {
        match self {
            Side::Left => Angle::from_degrees(90.0),
            Side::Right => Angle::from_degrees(-90.0),
        }
    }
}

/// Marker held by one roster slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerState {
    #[default]
    Absent,
    Marked(Side),
}

impl MarkerState {
    pub fn is_marked(self) -> bool {
        matches!(self, MarkerState::Marked(_))
    }

    pub fn side(self) -> Option<Side> {
        match self {
            MarkerState::Marked(side) => Some(side),
            MarkerState::Absent => None,
        }
    }
}

/// Classification of a raw status id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    LoadingLeft,
    LoadingRight,
    Unrelated(u32),
}

impl StatusKind {
    pub fn from_id(id: u32) -> Self {
        match id {
            status_id::LOADING_LEFT => StatusKind::LoadingLeft,
            status_id::LOADING_RIGHT => StatusKind::LoadingRight,
            other => StatusKind::Unrelated(other),
        }
    }

    /// Monitor side carried by this status, if it is a monitor at all
    pub fn side(self) -> Option<Side> {
        match self {
            StatusKind::LoadingLeft => Some(Side::Left),
            StatusKind::LoadingRight => Some(Side::Right),
            StatusKind::Unrelated(_) => None,
        }
    }
}

/// Result of feeding one status notification to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerGain {
    /// Not a monitor, unknown actor, or slot already marked
    Ignored,
    Recorded { slot: Slot, count: usize },
}

impl MarkerGain {
    /// True only for the notification that brought the count to `MONITOR_COUNT`
    pub fn completes_set(self) -> bool {
        matches!(self, MarkerGain::Recorded { count, .. } if count == MONITOR_COUNT)
    }
}

/// Per-pull monitor state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTracker {
    markers: [MarkerState; MAX_PARTY_SIZE],
    count: usize,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a status gain on `actor_id`.
    ///
    /// Unknown actors and unrelated statuses are dropped without error so a
    /// roster glitch never blocks the rest of the mechanic.
    pub fn on_status_gain(
        &mut self,
        roster: &impl Roster,
        actor_id: u64,
        status_id: u32,
    ) -> MarkerGain {
        let side = match StatusKind::from_id(status_id).side() {
            Some(side) => side,
            None => {
                tracing::trace!(actor_id, status_id, "Ignoring unrelated status");
                return MarkerGain::Ignored;
            }
        };

        let Some(slot) = roster.find_slot(actor_id).filter(|&s| s < MAX_PARTY_SIZE) else {
            tracing::debug!(actor_id, ?side, "Monitor on actor outside the party");
            return MarkerGain::Ignored;
        };

        if let MarkerState::Marked(existing) = self.markers[slot] {
            tracing::debug!(slot, ?existing, ?side, "Slot already carries a monitor");
            return MarkerGain::Ignored;
        }

        self.markers[slot] = MarkerState::Marked(side);
        self.count += 1;
        tracing::debug!(slot, ?side, count = self.count, "Monitor recorded");

        MarkerGain::Recorded {
            slot,
            count: self.count,
        }
    }

    pub fn marker(&self, slot: Slot) -> MarkerState {
        self.markers.get(slot).copied().unwrap_or_default()
    }

    pub fn is_monitor(&self, slot: Slot) -> bool {
        self.marker(slot).is_marked()
    }

    /// Monitors recorded this pull
    pub fn count(&self) -> usize {
        self.count
    }

    /// All monitors have been handed out
    pub fn is_ready(&self) -> bool {
        self.count >= MONITOR_COUNT
    }

    /// Marked slots in ascending order
    pub fn marked_slots(&self) -> impl Iterator<Item = (Slot, Side)> + '_ {
        self.markers
            .iter()
            .enumerate()
            .filter_map(|(slot, m)| m.side().map(|side| (slot, side)))
    }

    pub fn reset(&mut self) {
        self.markers = [MarkerState::Absent; MAX_PARTY_SIZE];
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::{Party, PartyMember, Role};

    fn party() -> Party {
        let mut party = Party::new();
        for slot in 0..MAX_PARTY_SIZE {
            party.insert(slot, PartyMember::new(100 + slot as u64, format!("P{slot}"), Role::Tank));
        }
        party
    }

    #[test]
    fn status_ids_classify() {
        assert_eq!(StatusKind::from_id(status_id::LOADING_LEFT), StatusKind::LoadingLeft);
        assert_eq!(StatusKind::from_id(status_id::LOADING_RIGHT), StatusKind::LoadingRight);
        assert_eq!(StatusKind::from_id(1), StatusKind::Unrelated(1));
        assert_eq!(StatusKind::Unrelated(1).side(), None);
    }

    #[test]
    fn side_angles() {
        assert!((Side::Left.angle().deg() - 90.0).abs() < 1e-4);
        assert!((Side::Right.angle().deg() + 90.0).abs() < 1e-4);
    }

    #[test]
    fn left_and_right_are_recorded() {
        let party = party();
        let mut tracker = StatusTracker::new();

        tracker.on_status_gain(&party, 100, status_id::LOADING_LEFT);
        tracker.on_status_gain(&party, 103, status_id::LOADING_RIGHT);

        assert_eq!(tracker.marker(0), MarkerState::Marked(Side::Left));
        assert_eq!(tracker.marker(3), MarkerState::Marked(Side::Right));
        assert_eq!(tracker.marker(1), MarkerState::Absent);
        assert_eq!(tracker.count(), 2);
        assert!(!tracker.is_ready());
    }

    #[test]
    fn unrelated_status_is_ignored() {
        let party = party();
        let mut tracker = StatusTracker::new();

        let gain = tracker.on_status_gain(&party, 100, 42);

        assert_eq!(gain, MarkerGain::Ignored);
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn recorded_side_follows_status_kind() {
        let party = party();
        let mut tracker = StatusTracker::new();

        for (slot, id) in [status_id::LOADING_LEFT, status_id::LOADING_RIGHT, 42]
            .into_iter()
            .enumerate()
        {
            tracker.on_status_gain(&party, 100 + slot as u64, id);
            assert_eq!(tracker.marker(slot).side(), StatusKind::from_id(id).side());
        }
    }

    #[test]
    fn unknown_actor_is_ignored() {
        let party = party();
        let mut tracker = StatusTracker::new();

        let gain = tracker.on_status_gain(&party, 9999, status_id::LOADING_LEFT);

        assert_eq!(gain, MarkerGain::Ignored);
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn duplicate_gain_does_not_inflate_count() {
        let party = party();
        let mut tracker = StatusTracker::new();

        tracker.on_status_gain(&party, 100, status_id::LOADING_LEFT);
        let gain = tracker.on_status_gain(&party, 100, status_id::LOADING_RIGHT);

        assert_eq!(gain, MarkerGain::Ignored);
        assert_eq!(tracker.count(), 1);
        assert_eq!(tracker.marker(0), MarkerState::Marked(Side::Left));
    }

    #[test]
    fn third_monitor_completes_the_set_once() {
        let party = party();
        let mut tracker = StatusTracker::new();

        let gains: Vec<MarkerGain> = [104, 101, 107, 102]
            .into_iter()
            .map(|actor| tracker.on_status_gain(&party, actor, status_id::LOADING_LEFT))
            .collect();

        let completions: Vec<bool> = gains.iter().map(|g| g.completes_set()).collect();
        assert_eq!(completions, vec![false, false, true, false]);
        assert!(tracker.is_ready());
    }

    #[test]
    fn reset_clears_everything() {
        let party = party();
        let mut tracker = StatusTracker::new();
        tracker.on_status_gain(&party, 100, status_id::LOADING_LEFT);

        tracker.reset();

        assert_eq!(tracker, StatusTracker::new());
        assert_eq!(tracker.marked_slots().count(), 0);
    }
}
