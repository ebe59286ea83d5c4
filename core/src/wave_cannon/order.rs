//! Player ordering once all monitors are out
//!
//! Walks the configured (slot, group) list in group order and numbers monitors
//! and non-monitors independently, both starting at 1.

use crate::party::{MAX_PARTY_SIZE, Slot};

use super::markers::StatusTracker;

/// Position of a player within its own kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderRank {
    Monitor(u8),
    NonMonitor(u8),
}

impl OrderRank {
    pub fn number(self) -> u8 {
        match self {
            OrderRank::Monitor(n) | OrderRank::NonMonitor(n) => n,
        }
    }
}

/// Rank per roster slot; `None` for slots not covered by the assignment list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerOrder {
    ranks: [Option<OrderRank>; MAX_PARTY_SIZE],
}

impl PlayerOrder {
    /// Number every slot in `assignments` (sorted by group, ties keep input order)
    pub fn assign(assignments: &[(Slot, u8)], markers: &StatusTracker) -> Self {
        let mut sorted = assignments.to_vec();
        sorted.sort_by_key(|&(_, group)| group);

        let mut order = Self::default();
        let (mut monitors, mut others) = (0u8, 0u8);
        for (slot, group) in sorted {
            let Some(rank) = order.ranks.get_mut(slot) else {
                tracing::warn!(slot, group, "Assignment references a slot outside the party");
                continue;
            };
            *rank = Some(if markers.is_monitor(slot) {
                monitors += 1;
                OrderRank::Monitor(monitors)
            } else {
                others += 1;
                OrderRank::NonMonitor(others)
            });
        }
        order
    }

    pub fn rank(&self, slot: Slot) -> Option<OrderRank> {
        self.ranks.get(slot).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.iter().all(Option::is_none)
    }

    /// Ranked slots in ascending slot order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, OrderRank)> + '_ {
        self.ranks
            .iter()
            .enumerate()
            .filter_map(|(slot, rank)| rank.map(|r| (slot, r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::status_id;
    use crate::party::{Party, PartyMember, Role};

    fn tracker_with_monitors(slots: &[Slot]) -> StatusTracker {
        let mut party = Party::new();
        for slot in 0..MAX_PARTY_SIZE {
            party.insert(slot, PartyMember::new(slot as u64, format!("P{slot}"), Role::Melee));
        }
        let mut tracker = StatusTracker::new();
        for &slot in slots {
            tracker.on_status_gain(&party, slot as u64, status_id::LOADING_LEFT);
        }
        tracker
    }

    #[test]
    fn monitors_and_others_are_numbered_independently() {
        let markers = tracker_with_monitors(&[1, 4, 6]);
        let assignments: Vec<(Slot, u8)> = (0..8).map(|s| (s, s as u8)).collect();

        let order = PlayerOrder::assign(&assignments, &markers);

        assert_eq!(order.rank(0), Some(OrderRank::NonMonitor(1)));
        assert_eq!(order.rank(1), Some(OrderRank::Monitor(1)));
        assert_eq!(order.rank(2), Some(OrderRank::NonMonitor(2)));
        assert_eq!(order.rank(3), Some(OrderRank::NonMonitor(3)));
        assert_eq!(order.rank(4), Some(OrderRank::Monitor(2)));
        assert_eq!(order.rank(5), Some(OrderRank::NonMonitor(4)));
        assert_eq!(order.rank(6), Some(OrderRank::Monitor(3)));
        assert_eq!(order.rank(7), Some(OrderRank::NonMonitor(5)));
    }

    #[test]
    fn group_order_drives_numbering_not_slot_order() {
        let markers = tracker_with_monitors(&[0, 7, 3]);
        // slot 7 is group 0, slot 0 is group 7
        let assignments: Vec<(Slot, u8)> = (0..8).map(|s| (s, 7 - s as u8)).collect();

        let order = PlayerOrder::assign(&assignments, &markers);

        assert_eq!(order.rank(7), Some(OrderRank::Monitor(1)));
        assert_eq!(order.rank(3), Some(OrderRank::Monitor(2)));
        assert_eq!(order.rank(0), Some(OrderRank::Monitor(3)));
        assert_eq!(order.rank(6), Some(OrderRank::NonMonitor(1)));
        assert_eq!(order.rank(1), Some(OrderRank::NonMonitor(5)));
    }

    #[test]
    fn assignment_is_deterministic() {
        let markers = tracker_with_monitors(&[2, 3, 5]);
        let assignments = vec![(4, 1), (2, 0), (3, 2), (5, 1), (0, 3)];

        let first = PlayerOrder::assign(&assignments, &markers);
        let second = PlayerOrder::assign(&assignments, &markers);

        assert_eq!(first, second);
        // equal groups keep input order: slot 4 before slot 5
        assert_eq!(first.rank(4), Some(OrderRank::NonMonitor(1)));
        assert_eq!(first.rank(5), Some(OrderRank::Monitor(2)));
    }

    #[test]
    fn slots_missing_from_assignments_stay_unranked() {
        let markers = tracker_with_monitors(&[0, 1, 2]);
        let order = PlayerOrder::assign(&[(0, 0), (9, 1)], &markers);

        assert_eq!(order.rank(0), Some(OrderRank::Monitor(1)));
        assert_eq!(order.rank(1), None);
        assert_eq!(order.iter().count(), 1);
    }

    #[test]
    fn empty_assignments_give_empty_order() {
        let markers = tracker_with_monitors(&[0, 1, 2]);
        assert!(PlayerOrder::assign(&[], &markers).is_empty());
    }
}
