//! Seed generation for the option framework's seed-defaulting policy.

use rand::Rng;

/// Sentinel meaning "seed not yet set by the user".
pub const UNSET_SEED: i64 = -1;

/// Generates a fresh seed for the downstream random number generator.
///
/// Guaranteed never to return [`UNSET_SEED`], so a generated seed is always
/// distinguishable from the sentinel.
pub fn generate_seed() -> i64 {
    let mut rng = rand::thread_rng();
    loop {
        let seed: i64 = rng.gen();
        if seed != UNSET_SEED {
            return seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_seed_never_collides_with_sentinel() {
        for _ in 0..1000 {
            assert_ne!(generate_seed(), UNSET_SEED);
        }
    }
}
