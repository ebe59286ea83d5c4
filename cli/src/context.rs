use wavecannon_core::{AppConfig, AppConfigExt, Encounter, MechanicSignal, Slot};

/// Holds all state for the CLI application.
/// This is a lightweight container - logic lives in the core types.
pub struct CliContext {
    pub config: AppConfig,
    /// The loaded encounter. None until a scenario is loaded.
    pub encounter: Option<Encounter>,
    /// Signals from the loaded scenario not yet applied (see `step`)
    pub pending: Vec<MechanicSignal>,
    /// Slot used for `spots` when none is given
    pub local_slot: Slot,
}

impl CliContext {
    pub fn new() -> Self {
        Self::with_config(AppConfig::load())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            encounter: None,
            pending: Vec::new(),
            local_slot: 0,
        }
    }

    pub fn encounter_mut(&mut self) -> Result<&mut Encounter, String> {
        self.encounter
            .as_mut()
            .ok_or_else(|| "no scenario loaded (use `load --path <file>`)".to_string())
    }

    pub fn encounter(&self) -> Result<&Encounter, String> {
        self.encounter
            .as_ref()
            .ok_or_else(|| "no scenario loaded (use `load --path <file>`)".to_string())
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
