//! Combat constants - all tunable values in one place

// Damage formula
/// Bonus multiplier when the defender's weakness names the attacker.
/// Applied after the low-health penalty, never before.
pub const WEAKNESS_DAMAGE_MULTIPLIER: f64 = 1.5;
/// Attack power divisor while the attacker is below half health
/// (integer division, so the penalized value rounds toward zero).
pub const LOW_HEALTH_DIVISOR: u32 = 2;

// Time
/// Reference cadence: one tick per second
pub const BATTLE_TICK_MS: u64 = 1000;
/// Tick cap converting a stalled battle into a draw. A 1-attack unit
/// below half health deals floor(1/2) = 0 damage, so battles can stall.
pub const DEFAULT_MAX_BATTLE_TICKS: u64 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weakness_multiplier_is_a_bonus() {
        assert!(WEAKNESS_DAMAGE_MULTIPLIER > 1.0);
    }

    #[test]
    fn test_tick_cap_positive() {
        assert!(DEFAULT_MAX_BATTLE_TICKS > 0);
    }
}
