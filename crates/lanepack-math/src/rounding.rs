//! Rounding, absolute value and lane-wise ordering

use lanepack_core::{map, map2, FloatLane, LaneCount, Operand, Pack, SupportedLaneCount};

lanewise_unary! {
    /// Round half away from zero
    round,
    floor,
    ceil,
    /// Round toward zero
    trunc,
    /// `x - trunc(x)`, carrying the sign of `x`
    fract,
    abs,
}

/// Lane-wise IEEE minNum: a NaN lane loses to a number
#[inline]
pub fn min_lanes<T, B, const N: usize>(a: Pack<T, N>, b: B) -> Pack<T, N>
where
    T: FloatLane,
    B: Operand<N, Lane = T>,
    LaneCount<N>: SupportedLaneCount,
{
    map2(<T as num_traits::Float>::min, a, b.into_pack())
}

/// Lane-wise IEEE maxNum: a NaN lane loses to a number
#[inline]
pub fn max_lanes<T, B, const N: usize>(a: Pack<T, N>, b: B) -> Pack<T, N>
where
    T: FloatLane,
    B: Operand<N, Lane = T>,
    LaneCount<N>: SupportedLaneCount,
{
    map2(<T as num_traits::Float>::max, a, b.into_pack())
}

/// Restrict every lane to `[lo, hi]`; NaN lanes stay NaN
///
/// Bounds are packs or broadcast scalars. Lanes where `lo > hi` yield `lo`
/// for inputs below `lo` and `hi` otherwise.
#[inline]
pub fn clamp<T, L, H, const N: usize>(p: Pack<T, N>, lo: L, hi: H) -> Pack<T, N>
where
    T: FloatLane,
    L: Operand<N, Lane = T>,
    H: Operand<N, Lane = T>,
    LaneCount<N>: SupportedLaneCount,
{
    let lo = lo.into_pack();
    let hi = hi.into_pack();
    Pack::from_fn(|i| {
        let x = p[i];
        if x < lo[i] {
            lo[i]
        } else if x > hi[i] {
            hi[i]
        } else {
            x
        }
    })
}
