//! Resolution of position-keyed group assignments against the live party

use wavecannon_types::{MonitorAssignments, PARTY_POSITION_COUNT};

use crate::party::{Roster, Slot};

/// Extension trait turning configured groups into a slot list
pub trait MonitorAssignmentsExt {
    /// `(slot, group)` for every party member, in slot order.
    ///
    /// Empty if the assignments are invalid, a member has no position, or two
    /// members share a position; partial orderings are never produced.
    fn resolve(&self, roster: &impl Roster) -> Vec<(Slot, u8)>;
}

impl MonitorAssignmentsExt for MonitorAssignments {
    fn resolve(&self, roster: &impl Roster) -> Vec<(Slot, u8)> {
        if !self.is_valid() {
            return Vec::new();
        }

        let mut taken = [false; PARTY_POSITION_COUNT];
        let mut resolved = Vec::new();
        for (slot, member) in roster.members() {
            let Some(position) = member.position else {
                tracing::debug!(slot, name = %member.name, "Party member has no assigned position");
                return Vec::new();
            };
            if std::mem::replace(&mut taken[position.index()], true) {
                tracing::debug!(slot, position = position.label(), "Position assigned twice");
                return Vec::new();
            }
            resolved.push((slot, self.group_of(position)));
        }
        resolved
    }
}
