//! Damage resolution
//!
//! Fixed pipeline: base attack, then the low-health penalty (halved,
//! rounding toward zero), then the 1.5x weakness bonus on the penalized
//! value. The order is part of the contract; swapping penalty and bonus
//! changes numeric outcomes.
//!
//! The bonus can leave a fractional value. It is kept as-is and subtracted
//! from the defender's health directly; the log text trims a trailing `.0`
//! so whole amounts print as integers.

use crate::core::constants::{LOW_HEALTH_DIVISOR, WEAKNESS_DAMAGE_MULTIPLIER};
use crate::unit::instance::UnitInstance;

/// Outcome of a single resolved attack
#[derive(Debug, Clone, PartialEq)]
pub struct AttackReport {
    pub damage: f64,
    pub text: String,
}

/// Damage `attacker` would deal to `defender`, without applying it
pub fn compute_damage(attacker: &UnitInstance, defender: &UnitInstance) -> f64 {
    let mut power = attacker.attack;
    if attacker.is_wounded() {
        power /= LOW_HEALTH_DIVISOR;
    }

    let mut damage = f64::from(power);
    if defender.weakness.as_deref() == Some(attacker.name.as_str()) {
        damage *= WEAKNESS_DAMAGE_MULTIPLIER;
    }
    damage
}

/// Resolve one attack, decrementing the defender's health (clamped at zero)
pub fn resolve_attack(attacker: &UnitInstance, defender: &mut UnitInstance) -> AttackReport {
    let damage = compute_damage(attacker, defender);
    defender.current_health = (defender.current_health - damage).max(0.0);

    AttackReport {
        damage,
        text: format!(
            "{} attacks {} for {} damage!",
            attacker.name,
            defender.name,
            format_damage(damage)
        ),
    }
}

/// Render damage the way the log expects: `15`, not `15.0`; `4.5` stays
fn format_damage(damage: f64) -> String {
    if damage.fract() == 0.0 {
        format!("{:.0}", damage)
    } else {
        format!("{}", damage)
    }
}
