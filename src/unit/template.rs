//! Immutable unit templates
//!
//! A template describes a unit type as it sits in the catalog. Assigning a
//! template to a side copies it into a `UnitInstance`; templates themselves
//! are never mutated by the battle engine.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::error::{Result, SkirmishError};

/// An immutable unit definition
///
/// `weakness` names the unit type this unit is vulnerable to: an attacker
/// with that name deals bonus damage to this unit. External data may spell
/// "no weakness" as an absent field, an empty string, or the sentinel
/// `"None"`; all three normalize to `Option::None` on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub name: String,
    pub attack: u32,
    pub health: u32,
    #[serde(default, deserialize_with = "deserialize_weakness")]
    pub weakness: Option<String>,
}

impl UnitTemplate {
    pub fn new(name: impl Into<String>, attack: u32, health: u32) -> Self {
        Self {
            name: name.into(),
            attack,
            health,
            weakness: None,
        }
    }

    pub fn with_weakness(mut self, weakness: impl Into<String>) -> Self {
        self.weakness = Some(weakness.into());
        self
    }

    /// Check the template invariants: non-empty name, positive attack and
    /// health. Run at roster-build and catalog-add time so a battle never
    /// begins with an invalid unit.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SkirmishError::InvalidUnit {
                name: self.name.clone(),
                reason: "name must not be empty".into(),
            });
        }
        if self.attack == 0 {
            return Err(SkirmishError::InvalidUnit {
                name: self.name.clone(),
                reason: "attack must be positive".into(),
            });
        }
        if self.health == 0 {
            return Err(SkirmishError::InvalidUnit {
                name: self.name.clone(),
                reason: "health must be positive".into(),
            });
        }
        Ok(())
    }
}

fn deserialize_weakness<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty() && s != "None"))
}
