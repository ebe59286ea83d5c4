//! Scenario files
//!
//! A scenario is a TOML description of a party plus the ordered notifications
//! of one pull. It lets a pull be replayed without a game client attached.
//!
//! ```toml
//! name = "Two support monitors"
//! local_slot = 1
//!
//! [[party]]
//! slot = 0
//! actor_id = 1001
//! name = "Tank One"
//! role = "tank"
//! position = "MT"
//!
//! [[signals]]
//! kind = "status"
//! actor_id = 1001
//! status = "loading_left"
//!
//! [[signals]]
//! kind = "cast"
//! caster_id = 4000
//! action = 31595
//! ```

mod error;

pub use error::ScenarioError;

use std::path::Path;

use serde::Deserialize;
use wavecannon_types::{AppConfig, PartyPosition};

use crate::encounter::Encounter;
use crate::game_data::{ACTION_BY_NAME, STATUS_BY_NAME};
use crate::party::{MAX_PARTY_SIZE, Party, PartyMember, Role, Roster, Slot};
use crate::signals::MechanicSignal;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    /// Slot viewed by default when printing spots
    #[serde(default)]
    pub local_slot: Option<Slot>,
    #[serde(default)]
    pub party: Vec<ScenarioMember>,
    #[serde(default)]
    pub signals: Vec<ScenarioSignal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioMember {
    pub slot: Slot,
    pub actor_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub position: Option<PartyPosition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioSignal {
    Status { actor_id: u64, status: IdOrName },
    Cast { caster_id: u64, action: IdOrName },
    Reset,
}

/// Game id, written either as a number or as a known name.
/// Uses untagged serde: numbers as IDs, strings as names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdOrName {
    Id(u32),
    Name(String),
}

impl IdOrName {
    /// Returns the display string for this id
    pub fn display(&self) -> String {
        match self {
            IdOrName::Id(id) => id.to_string(),
            IdOrName::Name(name) => name.clone(),
        }
    }

    /// Parse from user input - tries ID first, falls back to name.
    pub fn from_input(input: &str) -> Self {
        match input.trim().parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(input.trim().to_string()),
        }
    }

    pub fn status_id(&self) -> Option<u32> {
        self.resolve(&STATUS_BY_NAME)
    }

    pub fn action_id(&self) -> Option<u32> {
        self.resolve(&ACTION_BY_NAME)
    }

    fn resolve(&self, table: &phf::Map<&'static str, u32>) -> Option<u32> {
        match self {
            IdOrName::Id(id) => Some(*id),
            IdOrName::Name(name) => table.get(name.as_str()).copied(),
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the roster, rejecting out-of-range slots and repeated slots or actors
    pub fn party(&self) -> Result<Party, ScenarioError> {
        let mut party = Party::new();
        let mut seen = [false; MAX_PARTY_SIZE];
        for member in &self.party {
            let slot = member.slot;
            let Some(taken) = seen.get_mut(slot) else {
                return Err(ScenarioError::SlotOutOfRange { slot });
            };
            if std::mem::replace(taken, true) {
                return Err(ScenarioError::DuplicateSlot { slot });
            }
            if party.find_slot(member.actor_id).is_some() {
                return Err(ScenarioError::DuplicateActor {
                    actor_id: member.actor_id,
                });
            }

            let name = if member.name.is_empty() {
                format!("Slot {slot}")
            } else {
                member.name.clone()
            };
            let mut entry = PartyMember::new(member.actor_id, name, member.role);
            entry.position = member.position;
            party.insert(slot, entry);
        }
        Ok(party)
    }

    /// Resolve named ids into signals, in file order
    pub fn signals(&self) -> Result<Vec<MechanicSignal>, ScenarioError> {
        self.signals
            .iter()
            .map(|signal| match signal {
                ScenarioSignal::Status { actor_id, status } => {
                    let status_id = status.status_id().ok_or_else(|| {
                        ScenarioError::UnknownStatus {
                            name: status.display(),
                        }
                    })?;
                    Ok(MechanicSignal::StatusGained {
                        actor_id: *actor_id,
                        status_id,
                    })
                }
                ScenarioSignal::Cast { caster_id, action } => {
                    let action_id = action.action_id().ok_or_else(|| {
                        ScenarioError::UnknownAction {
                            name: action.display(),
                        }
                    })?;
                    Ok(MechanicSignal::CastStarted {
                        caster_id: *caster_id,
                        action_id,
                    })
                }
                ScenarioSignal::Reset => Ok(MechanicSignal::PullReset),
            })
            .collect()
    }

    /// Fresh encounter for this scenario's party (no signals applied)
    pub fn encounter(&self, config: &AppConfig) -> Result<Encounter, ScenarioError> {
        Ok(Encounter::new(self.party()?, config))
    }
}
