//! Mutable battle instances derived from templates

use serde::{Deserialize, Serialize};

use crate::core::types::InstanceId;
use crate::unit::template::UnitTemplate;

/// A unit fighting in a battle
///
/// Created by copying a `UnitTemplate` when it is assigned to a side, which
/// decouples the instance from the catalog: damaging an instance never
/// touches the template it came from. Invariant: `0.0 <= current_health <=
/// health` at all times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitInstance {
    pub id: InstanceId,
    pub name: String,
    pub attack: u32,
    pub health: u32,
    pub weakness: Option<String>,
    pub current_health: f64,
}

impl UnitInstance {
    pub fn from_template(template: &UnitTemplate) -> Self {
        Self {
            id: InstanceId::new(),
            name: template.name.clone(),
            attack: template.attack,
            health: template.health,
            weakness: template.weakness.clone(),
            current_health: f64::from(template.health),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0.0
    }

    /// Below half of maximum health, where the attack penalty kicks in
    pub fn is_wounded(&self) -> bool {
        self.current_health < f64::from(self.health) / 2.0
    }

    pub fn snapshot(&self) -> HealthSnapshot {
        HealthSnapshot {
            name: self.name.clone(),
            current_health: self.current_health,
            health: self.health,
        }
    }
}

/// Per-unit health record handed to the display collaborator each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub name: String,
    pub current_health: f64,
    pub health: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_copies_template_at_full_health() {
        let template = UnitTemplate::new("Knight", 10, 20).with_weakness("Archer");
        let knight = UnitInstance::from_template(&template);

        assert_eq!(knight.name, "Knight");
        assert_eq!(knight.attack, 10);
        assert_eq!(knight.health, 20);
        assert_eq!(knight.weakness.as_deref(), Some("Archer"));
        assert_eq!(knight.current_health, 20.0);
        assert!(knight.is_alive());
    }

    #[test]
    fn test_instances_are_decoupled_from_each_other() {
        let template = UnitTemplate::new("Knight", 10, 20);
        let mut first = UnitInstance::from_template(&template);
        let second = UnitInstance::from_template(&template);

        first.current_health = 3.0;
        assert_eq!(second.current_health, 20.0);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_wounded_threshold_is_strict() {
        let template = UnitTemplate::new("Knight", 10, 20);
        let mut knight = UnitInstance::from_template(&template);

        knight.current_health = 10.0;
        assert!(!knight.is_wounded());

        knight.current_health = 9.9;
        assert!(knight.is_wounded());
    }

    #[test]
    fn test_snapshot_reflects_current_state() {
        let template = UnitTemplate::new("Archer", 8, 15);
        let mut archer = UnitInstance::from_template(&template);
        archer.current_health = 7.5;

        let snap = archer.snapshot();
        assert_eq!(snap.name, "Archer");
        assert_eq!(snap.current_health, 7.5);
        assert_eq!(snap.health, 15);
    }
}
