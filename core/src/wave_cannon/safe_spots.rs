//! Safe-spot placement
//!
//! Each role group is laid out on its own: the number of monitors inside the
//! group picks a row of the layout table and the member's index within the
//! group (ascending slot order) picks the column.

use std::fmt;

use crate::arena::WPos;
use crate::party::{RoleGroup, Roster, Slot};

use super::markers::StatusTracker;

/// Named arena coordinates used by the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedPosition {
    Center,
    NorthNear,
    NorthFar,
    SouthNear,
    SouthFar,
    EastNear,
    EastFar,
    WestNear,
    WestFar,
}

impl FixedPosition {
    pub const ALL: [FixedPosition; 9] = [
        Self::Center,
        Self::NorthNear,
        Self::NorthFar,
        Self::SouthNear,
        Self::SouthFar,
        Self::EastNear,
        Self::EastFar,
        Self::WestNear,
        Self::WestFar,
    ];

    /// Arena coordinate; the arena center is (100, 100)
    pub const fn pos(self) -> WPos {
        match self {
            Self::Center => WPos::new(100.0, 100.0),
            Self::NorthNear => WPos::new(100.0, 90.5),
            Self::NorthFar => WPos::new(100.0, 81.0),
            Self::SouthNear => WPos::new(100.0, 109.5),
            Self::SouthFar => WPos::new(100.0, 119.0),
            Self::EastNear => WPos::new(109.5, 100.0),
            Self::EastFar => WPos::new(119.0, 100.0),
            Self::WestNear => WPos::new(90.5, 100.0),
            Self::WestFar => WPos::new(81.0, 100.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Center => "Center",
            Self::NorthNear => "NorthNear",
            Self::NorthFar => "NorthFar",
            Self::SouthNear => "SouthNear",
            Self::SouthFar => "SouthFar",
            Self::EastNear => "EastNear",
            Self::EastFar => "EastFar",
            Self::WestNear => "WestNear",
            Self::WestFar => "WestFar",
        }
    }
}

impl fmt::Display for FixedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One placement for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeSpot {
    pub slot: Slot,
    pub position: FixedPosition,
    /// Spot belongs to the queried player
    pub is_mine: bool,
}

/// Layout table lookup. `None` for combinations the layout does not cover.
pub fn spot_for(monitor_count: usize, index: usize) -> Option<FixedPosition> {
    use FixedPosition::*;

    match (monitor_count, index) {
        (0, _) => Some(Center),
        (1, 0) => Some(WestNear),
        (1, _) => Some(EastNear),
        (2, 0) => Some(WestNear),
        (2, 1) => Some(NorthNear),
        (3, 0) => Some(WestNear),
        (3, 1) => Some(EastNear),
        (3, 2) => Some(NorthFar),
        _ => None,
    }
}

/// Grouped member whose layout cell is undefined; placed at `Center`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnresolvedSpot {
    pub group: RoleGroup,
    pub slot: Slot,
    pub monitor_count: usize,
    pub index: usize,
}

/// Compute placements for every grouped party member, support group first.
///
/// Pure function of the roster and marker state; callers gate on readiness.
/// Members without a layout cell get `Center` (see [`unresolved_layout`]).
pub fn resolve(roster: &impl Roster, markers: &StatusTracker, queried: Slot) -> Vec<SafeSpot> {
    RoleGroup::ALL
        .into_iter()
        .flat_map(|group| {
            let (members, monitor_count) = group_members(roster, markers, group);
            members.into_iter().enumerate().map(move |(index, slot)| SafeSpot {
                slot,
                position: spot_for(monitor_count, index).unwrap_or(FixedPosition::Center),
                is_mine: slot == queried,
            })
        })
        .collect()
}

/// Members `resolve` places at `Center` because the layout has no cell for them
pub fn unresolved_layout(roster: &impl Roster, markers: &StatusTracker) -> Vec<UnresolvedSpot> {
    RoleGroup::ALL
        .into_iter()
        .flat_map(|group| {
            let (members, monitor_count) = group_members(roster, markers, group);
            members
                .into_iter()
                .enumerate()
                .filter(move |&(index, _)| spot_for(monitor_count, index).is_none())
                .map(move |(index, slot)| UnresolvedSpot {
                    group,
                    slot,
                    monitor_count,
                    index,
                })
        })
        .collect()
}

/// Group members in ascending slot order, plus how many of them carry a monitor
fn group_members(
    roster: &impl Roster,
    markers: &StatusTracker,
    group: RoleGroup,
) -> (Vec<Slot>, usize) {
    let members: Vec<Slot> = roster
        .members()
        .filter(|(_, m)| m.role.group() == Some(group))
        .map(|(slot, _)| slot)
        .collect();
    let monitor_count = members.iter().filter(|&&s| markers.is_monitor(s)).count();
    (members, monitor_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::status_id;
    use crate::party::{Party, PartyMember, Role};

    const ROLES: [Role; 8] = [
        Role::Tank,
        Role::Tank,
        Role::Healer,
        Role::Healer,
        Role::Melee,
        Role::Melee,
        Role::Ranged,
        Role::Ranged,
    ];

    fn party(roles: &[Role]) -> Party {
        let mut party = Party::new();
        for (slot, &role) in roles.iter().enumerate() {
            party.insert(slot, PartyMember::new(slot as u64, format!("P{slot}"), role));
        }
        party
    }

    fn mark(party: &Party, slots: &[Slot]) -> StatusTracker {
        let mut tracker = StatusTracker::new();
        for &slot in slots {
            tracker.on_status_gain(party, slot as u64, status_id::LOADING_RIGHT);
        }
        tracker
    }

    fn positions(spots: &[SafeSpot]) -> Vec<FixedPosition> {
        spots.iter().map(|s| s.position).collect()
    }

    #[test]
    fn table_rows() {
        use FixedPosition::*;
        assert_eq!(spot_for(0, 5), Some(Center));
        assert_eq!(spot_for(1, 0), Some(WestNear));
        assert_eq!(spot_for(1, 3), Some(EastNear));
        assert_eq!(spot_for(2, 1), Some(NorthNear));
        assert_eq!(spot_for(2, 2), None);
        assert_eq!(spot_for(3, 2), Some(NorthFar));
        assert_eq!(spot_for(3, 3), None);
        assert_eq!(spot_for(4, 0), None);
    }

    #[test]
    fn fixed_positions_are_distinct() {
        for (i, a) in FixedPosition::ALL.iter().enumerate() {
            for b in &FixedPosition::ALL[i + 1..] {
                assert_ne!(a.pos(), b.pos(), "{a} and {b} share a coordinate");
            }
        }
    }

    #[test]
    fn group_without_monitors_stays_center() {
        use FixedPosition::*;
        let party = party(&ROLES);
        let markers = mark(&party, &[4, 5, 6]);

        let spots = resolve(&party, &markers, 0);

        assert_eq!(&positions(&spots)[..4], &[Center, Center, Center, Center]);
    }

    #[test]
    fn three_monitors_in_three_member_group() {
        use FixedPosition::*;
        let party = party(&[Role::Tank, Role::Healer, Role::Healer, Role::Melee]);
        let markers = mark(&party, &[0, 1, 2]);

        let spots = resolve(&party, &markers, 3);

        assert_eq!(positions(&spots), vec![WestNear, EastNear, NorthFar, Center]);
    }

    #[test]
    fn single_monitor_splits_west_then_east() {
        use FixedPosition::*;
        let party = party(&[Role::Tank, Role::Healer, Role::Ranged]);
        let markers = mark(&party, &[0]);

        let spots = resolve(&party, &markers, 1);

        assert_eq!(
            spots[..2],
            [
                SafeSpot {
                    slot: 0,
                    position: WestNear,
                    is_mine: false,
                },
                SafeSpot {
                    slot: 1,
                    position: EastNear,
                    is_mine: true,
                },
            ]
        );
    }

    #[test]
    fn two_monitors_beyond_second_member_fall_back_to_center() {
        use FixedPosition::*;
        let party = party(&ROLES);
        let markers = mark(&party, &[0, 3, 6]);

        let spots = resolve(&party, &markers, 0);

        assert_eq!(&positions(&spots)[..4], &[WestNear, NorthNear, Center, Center]);
        // one dps monitor
        assert_eq!(&positions(&spots)[4..], &[WestNear, EastNear, EastNear, EastNear]);
    }

    #[test]
    fn groups_follow_slot_order_not_role_order() {
        use FixedPosition::*;
        let party = party(&[Role::Melee, Role::Healer, Role::Ranged, Role::Tank]);
        let markers = mark(&party, &[2, 1, 0]);

        let spots = resolve(&party, &markers, 3);

        let slots: Vec<Slot> = spots.iter().map(|s| s.slot).collect();
        assert_eq!(slots, vec![1, 3, 0, 2]);
        assert_eq!(positions(&spots), vec![WestNear, EastNear, WestNear, NorthNear]);
    }

    #[test]
    fn exactly_one_spot_is_mine_for_grouped_slot() {
        let party = party(&ROLES);
        let markers = mark(&party, &[1, 2, 7]);

        for queried in 0..8 {
            let spots = resolve(&party, &markers, queried);
            assert_eq!(spots.iter().filter(|s| s.is_mine).count(), 1, "slot {queried}");
        }
    }

    #[test]
    fn ungrouped_slot_owns_no_spot() {
        let party = party(&[Role::Tank, Role::Unknown, Role::Melee]);
        let markers = mark(&party, &[0, 1, 2]);

        let spots = resolve(&party, &markers, 1);

        assert_eq!(spots.len(), 2);
        assert!(spots.iter().all(|s| !s.is_mine));
    }

    #[test]
    fn unresolved_layout_lists_center_fallbacks() {
        let party = party(&ROLES);
        let markers = mark(&party, &[0, 3, 6]);

        let unresolved = unresolved_layout(&party, &markers);

        assert_eq!(
            unresolved,
            vec![
                UnresolvedSpot {
                    group: RoleGroup::Support,
                    slot: 2,
                    monitor_count: 2,
                    index: 2,
                },
                UnresolvedSpot {
                    group: RoleGroup::Support,
                    slot: 3,
                    monitor_count: 2,
                    index: 3,
                },
            ]
        );
        let spots = resolve(&party, &markers, 0);
        assert!(
            unresolved
                .iter()
                .all(|u| spots[u.slot].position == FixedPosition::Center)
        );
    }

    #[test]
    fn fully_covered_layout_has_no_fallbacks() {
        let party = party(&[Role::Tank, Role::Healer, Role::Healer, Role::Melee]);
        let markers = mark(&party, &[0, 1, 2]);

        assert!(unresolved_layout(&party, &markers).is_empty());
    }
}
