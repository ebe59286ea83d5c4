//! Party roster
//!
//! Slot-indexed view of the party for the current pull. Slots are stable for
//! the whole encounter; the mechanic code only ever refers to players by slot.

use serde::{Deserialize, Serialize};

use wavecannon_types::PartyPosition;

/// Maximum number of party members tracked by a component
pub const MAX_PARTY_SIZE: usize = 8;

/// Roster slot in `0..MAX_PARTY_SIZE`
pub type Slot = usize;

/// Combat role as reported by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tank,
    Healer,
    Melee,
    Ranged,
    #[default]
    Unknown,
}

impl Role {
    /// Coarse group used by positional mechanics, if the role has one
    pub fn group(self) -> Option<RoleGroup> {
        match self {
            Role::Tank | Role::Healer => Some(RoleGroup::Support),
            Role::Melee | Role::Ranged => Some(RoleGroup::Dps),
            Role::Unknown => None,
        }
    }
}

/// Tanks and healers versus damage dealers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleGroup {
    /// Tank + Healer
    Support,
    /// Melee + Ranged
    Dps,
}

impl RoleGroup {
    /// Order in which groups are emitted
    pub const ALL: [RoleGroup; 2] = [RoleGroup::Support, RoleGroup::Dps];

    pub fn label(self) -> &'static str {
        match self {
            RoleGroup::Support => "TH",
            RoleGroup::Dps => "DPS",
        }
    }
}

/// One occupied roster slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyMember {
    /// Game-side instance id used by status and cast notifications
    pub actor_id: u64,
    pub name: String,
    pub role: Role,
    /// Operator-assigned raid position, if configured for this player
    pub position: Option<PartyPosition>,
}

impl PartyMember {
    pub fn new(actor_id: u64, name: impl Into<String>, role: Role) -> Self {
        Self {
            actor_id,
            name: name.into(),
            role,
            position: None,
        }
    }

    pub fn with_position(mut self, position: PartyPosition) -> Self {
        self.position = Some(position);
        self
    }
}

/// Read access to the party for mechanic components
pub trait Roster {
    /// Member in a slot, if occupied
    fn member(&self, slot: Slot) -> Option<&PartyMember>;

    /// Resolve a game actor to its roster slot
    fn find_slot(&self, actor_id: u64) -> Option<Slot>;

    /// Occupied slots in ascending slot order
    fn members(&self) -> impl Iterator<Item = (Slot, &PartyMember)>;

    fn role(&self, slot: Slot) -> Option<Role> {
        self.member(slot).map(|m| m.role)
    }
}

/// Fixed-size party roster
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Party {
    slots: [Option<PartyMember>; MAX_PARTY_SIZE],
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a member in a slot, replacing any previous occupant.
    /// Returns false (and leaves the roster unchanged) if the slot is out of range.
    pub fn insert(&mut self, slot: Slot, member: PartyMember) -> bool {
        match self.slots.get_mut(slot) {
            Some(entry) => {
                *entry = Some(member);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, slot: Slot) -> Option<PartyMember> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Roster for Party {
    fn member(&self, slot: Slot) -> Option<&PartyMember> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn find_slot(&self, actor_id: u64) -> Option<Slot> {
        self.members()
            .find(|(_, m)| m.actor_id == actor_id)
            .map(|(slot, _)| slot)
    }

    fn members(&self) -> impl Iterator<Item = (Slot, &PartyMember)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, m)| m.as_ref().map(|m| (slot, m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_map_to_groups() {
        assert_eq!(Role::Tank.group(), Some(RoleGroup::Support));
        assert_eq!(Role::Healer.group(), Some(RoleGroup::Support));
        assert_eq!(Role::Melee.group(), Some(RoleGroup::Dps));
        assert_eq!(Role::Ranged.group(), Some(RoleGroup::Dps));
        assert_eq!(Role::Unknown.group(), None);
    }

    #[test]
    fn find_slot_by_actor_id() {
        let mut party = Party::new();
        party.insert(0, PartyMember::new(100, "Tank", Role::Tank));
        party.insert(5, PartyMember::new(105, "Dancer", Role::Ranged));

        assert_eq!(party.find_slot(105), Some(5));
        assert_eq!(party.find_slot(999), None);
        assert_eq!(party.role(5), Some(Role::Ranged));
        assert_eq!(party.role(3), None);
    }

    #[test]
    fn members_iterate_in_slot_order() {
        let mut party = Party::new();
        party.insert(6, PartyMember::new(6, "Six", Role::Melee));
        party.insert(1, PartyMember::new(1, "One", Role::Healer));
        party.insert(3, PartyMember::new(3, "Three", Role::Tank));

        let slots: Vec<Slot> = party.members().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![1, 3, 6]);
        assert_eq!(party.len(), 3);
    }

    #[test]
    fn insert_out_of_range_is_rejected() {
        let mut party = Party::new();
        assert!(!party.insert(MAX_PARTY_SIZE, PartyMember::new(1, "Extra", Role::Tank)));
        assert!(party.is_empty());
    }
}
