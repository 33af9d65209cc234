//! Seeded catalog generation for reproducible benchmarks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::INTEREST_POOL;
use crate::{InterestSet, Site, Tags};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Generate `count` uniquely named sites with random fees, positions and
/// categories drawn from [`INTEREST_POOL`].
pub fn generate_catalog(count: usize, seed: u64) -> Vec<Site> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|index| {
            let tags: Tags = INTEREST_POOL
                .iter()
                .filter(|_| rng.gen_bool(0.35))
                .map(|tag| (*tag).to_owned())
                .collect();
            Site::new(
                format!("site-{index}"),
                rng.gen_range(27.60..27.80),
                rng.gen_range(85.20..85.45),
                rng.gen_range(0..=800),
                tags,
            )
        })
        .collect()
}

/// Interests used by every benchmark request.
pub fn benchmark_interests() -> InterestSet {
    ["culture", "heritage", "nature"].into_iter().collect()
}
