//! Unit model: immutable templates, mutable battle instances, and the
//! catalog collaborator that supplies templates for roster building.

pub mod catalog;
pub mod instance;
pub mod template;

pub use catalog::UnitCatalog;
pub use instance::{HealthSnapshot, UnitInstance};
pub use template::UnitTemplate;
