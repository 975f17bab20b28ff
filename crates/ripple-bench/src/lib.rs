//! Benchmark profiles and utilities for the Ripple simulation workspace.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 100x100 pool (10K cells), undamped, c² = 1
//! - [`stress_profile`]: 316x316 pool (~100K cells), same law
//! - [`rain_schedule`]: deterministic drop positions via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ripple_engine::SimConfig;
use ripple_propagators::WaveLaw;

/// Build a reference benchmark profile: 100x100 pool (10K cells).
///
/// c² = 1.0 at the fixed step of 0.5, inside the bound of c² ≤ 2.
pub fn reference_profile() -> SimConfig<WaveLaw> {
    pool(100, 100)
}

/// Build a stress benchmark profile: 316x316 pool (~100K cells).
///
/// Same law as [`reference_profile`] at 10x the cell count.
pub fn stress_profile() -> SimConfig<WaveLaw> {
    pool(316, 316)
}

fn pool(width: u32, height: u32) -> SimConfig<WaveLaw> {
    let law = WaveLaw::builder()
        .celerity_sq(1.0)
        .build()
        .expect("constant law parameters are valid");
    SimConfig::new(width, height, law)
}

/// Generate `n` deterministic drop centres inside a `width * height` pool.
///
/// Uses a simple LCG step on the seed so that repeated runs submit the
/// same perturbations in the same order.
pub fn rain_schedule(width: u32, height: u32, n: usize, seed: u64) -> Vec<(i32, i32)> {
    let width = u64::from(width.max(1));
    let height = u64::from(height.max(1));
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let x = (state >> 33) % width;
            let y = (state >> 11) % height;
            (x as i32, y as i32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        let config = reference_profile();
        config.validate().unwrap();
        assert_eq!((config.width, config.height), (100, 100));
        assert_eq!(config.exceeded_bound(), None);
    }

    #[test]
    fn stress_profile_validates() {
        let config = stress_profile();
        config.validate().unwrap();
        assert_eq!(config.width * config.height, 99_856);
    }

    #[test]
    fn rain_schedule_in_bounds() {
        let drops = rain_schedule(37, 11, 500, 42);
        assert_eq!(drops.len(), 500);
        for &(x, y) in &drops {
            assert!((0..37).contains(&x), "x {x} out of bounds");
            assert!((0..11).contains(&y), "y {y} out of bounds");
        }
    }

    #[test]
    fn rain_schedule_deterministic() {
        assert_eq!(rain_schedule(100, 100, 20, 7), rain_schedule(100, 100, 20, 7));
        assert_ne!(rain_schedule(100, 100, 20, 7), rain_schedule(100, 100, 20, 8));
    }
}
