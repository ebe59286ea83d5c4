//! Oversampled Wave Cannon safe spots
//!
//! This module provides:
//! - **StatusTracker**: which slots carry a monitor, and how many are out
//! - **PlayerOrder**: monitor / non-monitor numbering from the configured groups
//! - **Safe spots**: per-frame placement of every party member
//!
//! # Flow
//!
//! ```text
//!   status gained ──► StatusTracker ──(3rd monitor)──► PlayerOrder
//!                          │
//!   every frame ───────────┴──► safe_spots::resolve ──► ArenaDraw
//! ```

mod component;
mod markers;
mod order;
mod safe_spots;


pub use component::OversampledWaveCannonSafe;
pub use markers::{MONITOR_COUNT, MarkerGain, MarkerState, Side, StatusKind, StatusTracker};
pub use order::{OrderRank, PlayerOrder};
pub use safe_spots::{
    FixedPosition, SafeSpot, UnresolvedSpot, resolve, spot_for, unresolved_layout,
};
