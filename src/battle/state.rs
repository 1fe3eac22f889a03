//! Battle state machine and tick execution
//!
//! Each tick: Side 1 attacks -> Side 2 attacks -> remove the dead ->
//! termination check

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::battle::damage::resolve_attack;
use crate::battle::log::{BattleEvent, BattleEventKind, BattleLog};
use crate::battle::roster::Roster;
use crate::battle::targeting::select_target;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::{Side, Tick};
use crate::unit::instance::HealthSnapshot;
use crate::unit::template::UnitTemplate;

/// Battle lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    NotStarted, // Rosters still assignable
    InProgress, // Ticks executing
    Finished,   // Battle over
}

/// Battle outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Undecided,
    SideWon(Side),
    Draw,
    Aborted,
}

impl Default for BattleOutcome {
    fn default() -> Self {
        Self::Undecided
    }
}

/// Complete battle state
///
/// Exclusively owns both rosters, the log, and the RNG. Units are copied in
/// at enlist time and nothing outside the tick function mutates them once
/// the battle starts; the two sides cannot race because a tick is a single
/// sequential pass.
#[derive(Debug, Clone)]
pub struct BattleState {
    side_one: Roster,
    side_two: Roster,

    tick: Tick,
    phase: BattlePhase,
    outcome: BattleOutcome,
    abort_requested: bool,

    log: BattleLog,
    rng: ChaCha8Rng,
}

impl BattleState {
    /// Create a battle with a fixed default seed (deterministic for tests)
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    /// Create with a specific RNG seed for reproducible target selection
    pub fn with_seed(seed: u64) -> Self {
        Self {
            side_one: Roster::new(),
            side_two: Roster::new(),
            tick: 0,
            phase: BattlePhase::NotStarted,
            outcome: BattleOutcome::Undecided,
            abort_requested: false,
            log: BattleLog::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, BattlePhase::Finished)
    }

    /// The winning side, if the battle ended with one
    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            BattleOutcome::SideWon(side) => Some(side),
            _ => None,
        }
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::One => &self.side_one,
            Side::Two => &self.side_two,
        }
    }

    /// Health records for one side, for per-tick display
    pub fn snapshots(&self, side: Side) -> Vec<HealthSnapshot> {
        self.roster(side).snapshots()
    }

    /// Copy a template into a side's roster
    ///
    /// Validates the template, and refuses once the battle has started: the
    /// rosters belong to the tick function from `start()` onward.
    pub fn enlist(&mut self, side: Side, template: &UnitTemplate) -> Result<()> {
        if !matches!(self.phase, BattlePhase::NotStarted) {
            return Err(SkirmishError::RosterLocked);
        }
        template.validate()?;
        match side {
            Side::One => self.side_one.enlist(template),
            Side::Two => self.side_two.enlist(template),
        }
        Ok(())
    }

    /// Begin the battle
    ///
    /// Fails with `EmptyRoster` when either side has no units, leaving only
    /// an explanatory log entry and executing zero ticks.
    pub fn start(&mut self) -> Result<()> {
        if !matches!(self.phase, BattlePhase::NotStarted) {
            return Ok(());
        }

        for (side, roster) in [(Side::One, &self.side_one), (Side::Two, &self.side_two)] {
            if roster.is_empty() {
                self.log.push(
                    BattleEventKind::BattleRejected,
                    format!("Battle cannot begin: {} has no units!", side),
                    self.tick,
                );
                return Err(SkirmishError::EmptyRoster(side));
            }
        }

        self.phase = BattlePhase::InProgress;
        tracing::info!(
            side_one = self.side_one.len(),
            side_two = self.side_two.len(),
            "battle started"
        );
        Ok(())
    }

    /// Request cancellation; honored before the next tick begins
    pub fn abort(&mut self) {
        self.abort_requested = true;
    }

    /// Execute one tick, returning the events it appended
    ///
    /// Ordering contract: all of Side 1 attacks first, fully mutating
    /// Side 2, then the still-living Side 2 units attack using the state
    /// both steps left behind. Defeated units are removed afterwards, so a
    /// unit downed mid-tick never acts in a later tick.
    pub fn run_tick(&mut self) -> &[BattleEvent] {
        let log_start = self.log.len();

        if !matches!(self.phase, BattlePhase::InProgress) {
            return &self.log.events()[log_start..];
        }

        if self.abort_requested {
            self.finish(BattleOutcome::Aborted);
            return &self.log.events()[log_start..];
        }

        self.tick += 1;

        // Side 1 attacks Side 2
        for attacker_idx in 0..self.side_one.len() {
            if !self.side_one.units()[attacker_idx].is_alive() {
                continue;
            }
            let target = select_target(
                &self.side_one.units()[attacker_idx],
                &self.side_two,
                &mut self.rng,
            );
            if let Some(defender_idx) = target {
                let report = resolve_attack(
                    &self.side_one.units()[attacker_idx],
                    &mut self.side_two.units_mut()[defender_idx],
                );
                self.log.push(
                    BattleEventKind::AttackResolved {
                        attacker: self.side_one.units()[attacker_idx].name.clone(),
                        defender: self.side_two.units()[defender_idx].name.clone(),
                    },
                    report.text,
                    self.tick,
                );
            }
        }

        // Side 2 answers with whatever is still standing
        for attacker_idx in 0..self.side_two.len() {
            if !self.side_two.units()[attacker_idx].is_alive() {
                continue;
            }
            let target = select_target(
                &self.side_two.units()[attacker_idx],
                &self.side_one,
                &mut self.rng,
            );
            if let Some(defender_idx) = target {
                let report = resolve_attack(
                    &self.side_two.units()[attacker_idx],
                    &mut self.side_one.units_mut()[defender_idx],
                );
                self.log.push(
                    BattleEventKind::AttackResolved {
                        attacker: self.side_two.units()[attacker_idx].name.clone(),
                        defender: self.side_one.units()[defender_idx].name.clone(),
                    },
                    report.text,
                    self.tick,
                );
            }
        }

        self.side_one.remove_defeated();
        self.side_two.remove_defeated();

        tracing::debug!(
            tick = self.tick,
            side_one_living = self.side_one.len(),
            side_two_living = self.side_two.len(),
            "tick resolved"
        );

        match (self.side_one.is_empty(), self.side_two.is_empty()) {
            (true, true) => self.finish(BattleOutcome::Draw),
            (false, true) => self.finish(BattleOutcome::SideWon(Side::One)),
            (true, false) => self.finish(BattleOutcome::SideWon(Side::Two)),
            (false, false) => {}
        }

        &self.log.events()[log_start..]
    }

    /// Step synchronously until the battle finishes or the tick cap is hit
    ///
    /// The cap converts a stalled battle into a draw; without it two sides
    /// that can no longer hurt each other would tick forever.
    pub fn run_to_completion(&mut self, max_ticks: u64) -> BattleOutcome {
        while matches!(self.phase, BattlePhase::InProgress) && self.tick < max_ticks {
            self.run_tick();
        }
        if matches!(self.phase, BattlePhase::InProgress) {
            self.finish(BattleOutcome::Draw);
        }
        self.outcome
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        self.phase = BattlePhase::Finished;
        self.outcome = outcome;

        match outcome {
            BattleOutcome::SideWon(side) => {
                self.log.push(
                    BattleEventKind::BattleEnded { winner: Some(side) },
                    format!("Battle Over! {} Wins!", side),
                    self.tick,
                );
            }
            BattleOutcome::Draw => {
                self.log.push(
                    BattleEventKind::BattleEnded { winner: None },
                    "Battle Over! It's a Draw!".to_string(),
                    self.tick,
                );
            }
            BattleOutcome::Aborted => {
                self.log.push(
                    BattleEventKind::BattleAborted,
                    "Battle aborted!".to_string(),
                    self.tick,
                );
            }
            BattleOutcome::Undecided => {}
        }

        tracing::info!(outcome = ?outcome, ticks = self.tick, "battle finished");
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new()
    }
}
