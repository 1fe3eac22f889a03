//! Battle resolution engine
//!
//! Two rosters fight in discrete ticks until one side is eliminated.
//! Each tick: every living Side 1 unit attacks, then every still-living
//! Side 2 unit attacks against the already-mutated state, then the dead
//! are removed and the termination check runs. The Side-1-before-Side-2
//! ordering is load-bearing: Side 2 reacts within the same tick to damage
//! Side 1 just caused, and must not be reordered.

pub mod damage;
pub mod log;
pub mod roster;
pub mod state;
pub mod targeting;

// Re-exports for convenient access
pub use damage::{resolve_attack, AttackReport};
pub use log::{BattleEvent, BattleEventKind, BattleLog};
pub use roster::Roster;
pub use state::{BattleOutcome, BattlePhase, BattleState};
pub use targeting::select_target;
