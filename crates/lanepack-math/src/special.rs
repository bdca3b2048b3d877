//! Error and gamma functions
//!
//! Lanes are widened to `f64`, evaluated with `statrs`, and rounded back to the
//! lane type.

use num_traits::AsPrimitive;
use statrs::function::erf as statrs_erf;
use statrs::function::gamma as statrs_gamma;

use lanepack_core::{FloatLane, LaneCount, Pack, SupportedLaneCount};

#[inline]
fn via_f64<T, const N: usize>(p: Pack<T, N>, f: fn(f64) -> f64) -> Pack<T, N>
where
    T: FloatLane,
    LaneCount<N>: SupportedLaneCount,
{
    p.map(|x| T::from_f64_lossy(f(x.as_())))
}

/// Error function
#[inline]
pub fn erf<T, const N: usize>(p: Pack<T, N>) -> Pack<T, N>
where
    T: FloatLane,
    LaneCount<N>: SupportedLaneCount,
{
    via_f64(p, statrs_erf::erf)
}

/// Complementary error function `1 - erf(x)`, accurate for large `x`
#[inline]
pub fn erfc<T, const N: usize>(p: Pack<T, N>) -> Pack<T, N>
where
    T: FloatLane,
    LaneCount<N>: SupportedLaneCount,
{
    via_f64(p, statrs_erf::erfc)
}

/// Gamma function
#[inline]
pub fn gamma<T, const N: usize>(p: Pack<T, N>) -> Pack<T, N>
where
    T: FloatLane,
    LaneCount<N>: SupportedLaneCount,
{
    via_f64(p, statrs_gamma::gamma)
}

/// Natural logarithm of the gamma function
#[inline]
pub fn ln_gamma<T, const N: usize>(p: Pack<T, N>) -> Pack<T, N>
where
    T: FloatLane,
    LaneCount<N>: SupportedLaneCount,
{
    via_f64(p, statrs_gamma::ln_gamma)
}
