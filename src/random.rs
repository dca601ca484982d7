//! Seedable RNG construction.
//!
//! All randomness in the crate flows through an explicit `Rng` handle so a
//! seeded run is fully reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// The same seed always yields the same sequence.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
