//! Encounter session
//!
//! Owns everything that lives for one pull: the party roster, boss state and
//! the monitor component. The host loop feeds signals in and asks for draw
//! calls every frame.

use wavecannon_types::AppConfig;

use crate::arena::{Angle, ArenaDraw};
use crate::boss::{BossState, WaveCannonCastTracker};
use crate::party::{Party, Slot};
use crate::signals::{MechanicSignal, SignalHandler};
use crate::wave_cannon::{OversampledWaveCannonSafe, PlayerOrder, SafeSpot, StatusTracker};

#[derive(Debug, Clone)]
pub struct Encounter {
    party: Party,
    boss: WaveCannonCastTracker,
    wave_cannon: OversampledWaveCannonSafe,
    /// Pulls started since the session was created (first pull is 1)
    pull: u32,
}

impl Encounter {
    pub fn new(party: Party, config: &AppConfig) -> Self {
        Self {
            party,
            boss: WaveCannonCastTracker::new(),
            wave_cannon: OversampledWaveCannonSafe::new(config),
            pull: 1,
        }
    }

    /// Route one signal to every component
    pub fn handle_signal(&mut self, signal: &MechanicSignal) {
        if let MechanicSignal::PullReset = signal {
            self.reset();
            return;
        }
        self.boss.handle_signal(signal, &self.party);
        self.wave_cannon.handle_signal(signal, &self.party);
    }

    pub fn handle_signals(&mut self, signals: &[MechanicSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }

    /// Start a new pull: all mechanic state is cleared, the roster is kept
    pub fn reset(&mut self) {
        self.boss.on_pull_reset();
        self.wave_cannon.on_pull_reset();
        self.pull += 1;
        tracing::debug!(pull = self.pull, "Encounter reset");
    }

    /// Swap the roster; mechanic state from the old roster is meaningless so it is reset
    pub fn set_party(&mut self, party: Party) {
        self.party = party;
        self.reset();
    }

    pub fn safe_spots(&self, slot: Slot) -> Vec<SafeSpot> {
        self.wave_cannon.safe_spots(&self.party, &self.boss, slot)
    }

    /// Per-frame draw hook for the local player in `pc_slot`
    pub fn draw_foreground(&self, pc_slot: Slot, arena: &mut impl ArenaDraw) {
        self.wave_cannon
            .draw_arena_foreground(&self.party, &self.boss, pc_slot, arena);
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn markers(&self) -> &StatusTracker {
        self.wave_cannon.markers()
    }

    pub fn player_order(&self) -> &PlayerOrder {
        self.wave_cannon.player_order()
    }

    pub fn boss_angle(&self) -> Option<Angle> {
        self.boss.reference_angle()
    }

    pub fn pull(&self) -> u32 {
        self.pull
    }
}
