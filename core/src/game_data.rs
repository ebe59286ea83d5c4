//! Static game ids used by the Oversampled Wave Cannon mechanic

use phf::phf_map;

/// Status ids applied to players
pub mod status_id {
    /// Monitor pointing to the player's left
    pub const LOADING_LEFT: u32 = 3452;
    /// Monitor pointing to the player's right
    pub const LOADING_RIGHT: u32 = 3453;
}

/// Boss action ids
pub mod action_id {
    /// Boss cleaves its left side
    pub const WAVE_CANNON_LEFT: u32 = 31595;
    /// Boss cleaves its right side
    pub const WAVE_CANNON_RIGHT: u32 = 31596;
}

/// Status ids by scenario name
pub static STATUS_BY_NAME: phf::Map<&'static str, u32> = phf_map! {
    "loading_left" => status_id::LOADING_LEFT,
    "loading_right" => status_id::LOADING_RIGHT,
};

/// Action ids by scenario name
pub static ACTION_BY_NAME: phf::Map<&'static str, u32> = phf_map! {
    "wave_cannon_left" => action_id::WAVE_CANNON_LEFT,
    "wave_cannon_right" => action_id::WAVE_CANNON_RIGHT,
};
