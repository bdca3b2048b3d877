//! Roots, powers and fused multiply-add

use lanepack_core::{map, map2, FloatLane, LaneCount, Operand, Pack, SupportedLaneCount};

lanewise_unary! {
    /// Square root; NaN for negative lanes, `-0.0` stays `-0.0`
    sqrt,
    cbrt,
}

lanewise_binary! {
    /// `a[i]` raised to the power `b[i]`
    powf,
    /// `sqrt(a[i]^2 + b[i]^2)` without intermediate overflow
    hypot,
}

/// Every lane raised to the same integer power
#[inline]
pub fn powi<T, const N: usize>(p: Pack<T, N>, n: i32) -> Pack<T, N>
where
    T: FloatLane,
    LaneCount<N>: SupportedLaneCount,
{
    map(|x: T| x.powi(n), p)
}

/// `a[i] * b[i] + c[i]` with a single rounding
#[inline]
pub fn mul_add<T, B, C, const N: usize>(a: Pack<T, N>, b: B, c: C) -> Pack<T, N>
where
    T: FloatLane,
    B: Operand<N, Lane = T>,
    C: Operand<N, Lane = T>,
    LaneCount<N>: SupportedLaneCount,
{
    let b = b.into_pack();
    let c = c.into_pack();
    Pack::from_fn(|i| a[i].mul_add(b[i], c[i]))
}
