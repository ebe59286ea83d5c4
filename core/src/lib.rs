pub mod arena;
pub mod boss;
pub mod config;
pub mod encounter;
pub mod game_data;
pub mod party;
pub mod scenario;
pub mod signals;
pub mod wave_cannon;

// Re-exports for convenience
pub use arena::{Angle, ArenaDraw, CircleDraw, WPos};
pub use boss::{BossState, WaveCannonCastTracker};
pub use config::{AppConfig, AppConfigExt, ConfigError, MonitorAssignmentsExt};
pub use encounter::Encounter;
pub use party::{MAX_PARTY_SIZE, Party, PartyMember, Role, RoleGroup, Roster, Slot};
pub use scenario::{IdOrName, Scenario, ScenarioError};
pub use signals::{MechanicSignal, SignalHandler};
pub use wave_cannon::{
    FixedPosition, MarkerState, OrderRank, OversampledWaveCannonSafe, PlayerOrder, SafeSpot,
    Side, StatusKind, StatusTracker,
};
