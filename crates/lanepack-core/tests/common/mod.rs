//! Shared utilities for integration tests

#![allow(dead_code)]

use lanepack_core::Pack;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const SEED: u64 = 0x1a9e_9ac4;

/// Deterministic generator so failures reproduce
pub fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(SEED)
}

/// Special floating-point values for edge case testing
pub fn special_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        std::f64::consts::PI,
        1e-308, // Near underflow
        1e308,  // Near overflow
    ]
}

/// Random `f32` pack with lanes in `[-range, range)`
pub fn random_f32<const N: usize>(rng: &mut ChaCha8Rng, range: f32) -> Pack<f32, N>
where
    lanepack_core::LaneCount<N>: lanepack_core::SupportedLaneCount,
{
    Pack::from_fn(|_| rng.gen_range(-range..range))
}

/// Random `f64` pack with lanes in `[-range, range)`
pub fn random_f64<const N: usize>(rng: &mut ChaCha8Rng, range: f64) -> Pack<f64, N>
where
    lanepack_core::LaneCount<N>: lanepack_core::SupportedLaneCount,
{
    Pack::from_fn(|_| rng.gen_range(-range..range))
}

/// Bitwise lane equality, so NaN lanes compare equal to themselves
pub fn assert_bits_eq_f64<const N: usize>(actual: Pack<f64, N>, expected: Pack<f64, N>, context: &str)
where
    lanepack_core::LaneCount<N>: lanepack_core::SupportedLaneCount,
{
    for i in 0..N {
        assert_eq!(
            actual[i].to_bits(),
            expected[i].to_bits(),
            "{context}: lane {i} differs ({} vs {})",
            actual[i],
            expected[i]
        );
    }
}

pub fn assert_bits_eq_f32<const N: usize>(actual: Pack<f32, N>, expected: Pack<f32, N>, context: &str)
where
    lanepack_core::LaneCount<N>: lanepack_core::SupportedLaneCount,
{
    for i in 0..N {
        assert_eq!(
            actual[i].to_bits(),
            expected[i].to_bits(),
            "{context}: lane {i} differs ({} vs {})",
            actual[i],
            expected[i]
        );
    }
}
