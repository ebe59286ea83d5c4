/// Notifications delivered by the host's event feed, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanicSignal {
    /// A party member (or any other actor) gained a status
    StatusGained { actor_id: u64, status_id: u32 },

    /// An actor started casting an action
    CastStarted { caster_id: u64, action_id: u32 },

    /// The encounter component was reset for a new pull
    PullReset,
}
