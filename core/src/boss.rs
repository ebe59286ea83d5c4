//! Boss state seen by mechanic components
//!
//! Components only need to know whether the boss has committed to a side;
//! the tracker here learns that from the boss's wave cannon cast.

use crate::arena::Angle;
use crate::game_data::action_id;
use crate::party::Party;
use crate::signals::{MechanicSignal, SignalHandler};

/// Read access to boss state
pub trait BossState {
    /// Direction the boss cleaves relative to its facing, once known
    fn reference_angle(&self) -> Option<Angle>;
}

/// Fixed angle, for hosts that track the boss themselves
impl BossState for Option<Angle> {
    fn reference_angle(&self) -> Option<Angle> {
        *self
    }
}

/// Learns the boss reference angle from the wave cannon cast
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveCannonCastTracker {
    angle: Option<Angle>,
    caster_id: Option<u64>,
}

impl WaveCannonCastTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_cast_started(&mut self, caster_id: u64, action: u32) {
        let angle = match action {
            action_id::WAVE_CANNON_LEFT => Angle::from_degrees(90.0),
            action_id::WAVE_CANNON_RIGHT => Angle::from_degrees(-90.0),
            _ => return,
        };
        tracing::debug!(caster_id, %angle, "Wave cannon side known");
        self.angle = Some(angle);
        self.caster_id = Some(caster_id);
    }

    /// Actor that cast the wave cannon this pull
    pub fn caster_id(&self) -> Option<u64> {
        self.caster_id
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl BossState for WaveCannonCastTracker {
    fn reference_angle(&self) -> Option<Angle> {
        self.angle
    }
}

impl SignalHandler for WaveCannonCastTracker {
    fn handle_signal(&mut self, signal: &MechanicSignal, _party: &Party) {
        match signal {
            MechanicSignal::CastStarted {
                caster_id,
                action_id,
            } => self.on_cast_started(*caster_id, *action_id),
            MechanicSignal::PullReset => self.reset(),
            MechanicSignal::StatusGained { .. } => {}
        }
    }

    fn on_pull_reset(&mut self) {
        self.reset();
    }
}
