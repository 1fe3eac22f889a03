pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::BattleConfig;
pub use error::{Result, SkirmishError};
pub use types::{InstanceId, Side, Tick};
