//! Battle configuration with documented values

use crate::core::constants::{BATTLE_TICK_MS, DEFAULT_MAX_BATTLE_TICKS};

/// Configuration for a battle run
///
/// Owned by whoever drives the battle (interactive loop, headless runner,
/// or a test harness) and handed to `BattleState` at construction.
#[derive(Debug, Clone)]
pub struct BattleConfig {
    /// Seed for the target-selection RNG
    ///
    /// Identical seeds with identical rosters replay identically, which is
    /// what the headless runner and the integration tests rely on.
    pub seed: u64,

    /// Maximum number of ticks before the battle is called a draw
    ///
    /// Guards against stalled battles where neither side can deal damage
    /// (possible under the low-health penalty).
    pub max_ticks: u64,

    /// Pacing for timer-driven ticking, in milliseconds
    ///
    /// Only consulted by real-time drivers; synchronous stepping ignores it.
    pub tick_interval_ms: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_ticks: DEFAULT_MAX_BATTLE_TICKS,
            tick_interval_ms: BATTLE_TICK_MS,
        }
    }
}

impl BattleConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.max_ticks == 0 {
            return Err("max_ticks must be at least 1".into());
        }
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BattleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tick_cap_rejected() {
        let config = BattleConfig {
            max_ticks: 0,
            ..BattleConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
