//! Rosters - the ordered unit collection fielded by one side

use serde::{Deserialize, Serialize};

use crate::unit::instance::{HealthSnapshot, UnitInstance};
use crate::unit::template::UnitTemplate;

/// Ordered sequence of unit instances belonging to one side
///
/// Insertion order is the unit's position in the roster; targeting scans it
/// front to back, but all living units on both sides act once per tick, so
/// position carries no initiative meaning. A roster is empty exactly when
/// its side has lost.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    units: Vec<UnitInstance>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a template into the roster as a fresh full-health instance
    pub fn enlist(&mut self, template: &UnitTemplate) {
        self.units.push(UnitInstance::from_template(template));
    }

    pub fn units(&self) -> &[UnitInstance] {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut [UnitInstance] {
        &mut self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of units still standing
    pub fn living_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_alive()).count()
    }

    pub fn has_living(&self) -> bool {
        self.units.iter().any(|u| u.is_alive())
    }

    /// Drop every unit whose health reached zero, preserving order
    pub fn remove_defeated(&mut self) {
        self.units.retain(|u| u.is_alive());
    }

    /// Health records for the display collaborator
    pub fn snapshots(&self) -> Vec<HealthSnapshot> {
        self.units.iter().map(|u| u.snapshot()).collect()
    }
}
