//! Target selection
//!
//! An attacker prefers the first enemy it is strong against; failing that
//! it picks a living enemy uniformly at random. The random source is
//! injected so battles replay deterministically under a fixed seed.

use rand::Rng;

use crate::battle::roster::Roster;
use crate::unit::instance::UnitInstance;

/// Pick a defender index for `attacker` from the enemy roster
///
/// Returns the first living enemy whose `weakness` equals the attacker's
/// name (that enemy takes bonus damage from this attacker), otherwise a
/// uniformly random living enemy. `None` when no living enemy exists; the
/// attacker simply skips this tick.
///
/// Pure read: each call draws from the RNG independently, so across a tick
/// a given enemy may be targeted zero or several times.
pub fn select_target(
    attacker: &UnitInstance,
    enemies: &Roster,
    rng: &mut impl Rng,
) -> Option<usize> {
    let living: Vec<usize> = enemies
        .units()
        .iter()
        .enumerate()
        .filter(|(_, u)| u.is_alive())
        .map(|(i, _)| i)
        .collect();

    if living.is_empty() {
        return None;
    }

    let preferred = living
        .iter()
        .copied()
        .find(|&i| enemies.units()[i].weakness.as_deref() == Some(attacker.name.as_str()));

    preferred.or_else(|| Some(living[rng.gen_range(0..living.len())]))
}
