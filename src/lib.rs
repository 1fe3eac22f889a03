//! Skirmish - Automated Battle Resolution Engine

pub mod battle;
pub mod core;
pub mod unit;
