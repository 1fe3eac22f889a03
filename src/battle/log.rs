//! Battle log - append-only record of battle events
//!
//! Consumed by the presentation layer; the engine never reads it back to
//! make decisions. Entries are never edited or reordered after append.

use serde::{Deserialize, Serialize};

use crate::core::types::{Side, Tick};

/// One logged battle event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleEvent {
    pub tick: Tick,
    pub kind: BattleEventKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEventKind {
    AttackResolved { attacker: String, defender: String },
    BattleRejected,
    BattleEnded { winner: Option<Side> },
    BattleAborted,
}

/// Append-only ordered event log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleLog {
    events: Vec<BattleEvent>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: BattleEventKind, text: String, tick: Tick) {
        self.events.push(BattleEvent { tick, kind, text });
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Ordered display strings, oldest first
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
