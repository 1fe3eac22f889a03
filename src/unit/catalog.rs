//! Unit catalog - the storage collaborator that supplies templates
//!
//! The battle engine never owns the catalog; it only receives copies of
//! templates at roster-build time. Catalogs load from TOML files shaped as:
//!
//! ```toml
//! [[units]]
//! name = "Knight"
//! attack = 10
//! health = 20
//! weakness = "Archer"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SkirmishError};
use crate::unit::template::UnitTemplate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitCatalog {
    units: Vec<UnitTemplate>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template, validating its invariants first
    ///
    /// Duplicate names are rejected: weakness matching is by name, so two
    /// templates sharing a name would make targeting ambiguous.
    pub fn add(&mut self, template: UnitTemplate) -> Result<()> {
        template.validate()?;
        if self.units.iter().any(|u| u.name == template.name) {
            return Err(SkirmishError::InvalidUnit {
                name: template.name.clone(),
                reason: "a unit with this name already exists".into(),
            });
        }
        self.units.push(template);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&UnitTemplate> {
        self.units.iter().find(|u| u.name == name)
    }

    /// Look up a template by name, erroring when it is missing
    pub fn require(&self, name: &str) -> Result<&UnitTemplate> {
        self.get(name)
            .ok_or_else(|| SkirmishError::UnknownUnit(name.to_string()))
    }

    pub fn units(&self) -> &[UnitTemplate] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Load a catalog from a TOML file, validating every template
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let raw: UnitCatalog = toml::from_str(contents)?;
        let mut catalog = UnitCatalog::new();
        for template in raw.units {
            catalog.add(template)?;
        }
        Ok(catalog)
    }
}
