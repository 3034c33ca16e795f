//! Catch odds
//!
//! A throw rolls uniformly in `[0, base_experience)` and succeeds when the roll
//! lands above half the base experience.

use rand::Rng;

/// Rolls one Pokeball throw against a creature with `base_experience`.
///
/// Returns true if the creature is caught. A creature with no base experience
/// offers no resistance.
pub fn throw_ball<R: Rng + ?Sized>(rng: &mut R, base_experience: Option<u32>) -> bool {
    match base_experience {
        None | Some(0) => true,
        Some(experience) => rng.gen_range(0..experience) > experience / 2,
    }
}
