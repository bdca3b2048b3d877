//! Horizontal folds and lane-wise application
//!
//! Every fold is a strict left-to-right pass starting at lane 0. Floating
//! results therefore depend only on the lane values, never on the backend or
//! the pack width the operation was compiled for.

use crate::lane::Lane;
use crate::lane_count::{LaneCount, SupportedLaneCount};
use crate::pack::Pack;

impl<T: Lane, const N: usize> Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Whether any lane is truthy
    #[inline]
    pub fn any(&self) -> bool {
        self.iter().any(|lane| lane.is_truthy())
    }

    /// Whether every lane is truthy
    #[inline]
    pub fn all(&self) -> bool {
        self.iter().all(|lane| lane.is_truthy())
    }

    /// `((p[0] + p[1]) + p[2]) + ...`
    #[inline]
    pub fn sum(&self) -> T {
        self.reduce_lanes(Lane::lane_add)
    }

    /// `((p[0] * p[1]) * p[2]) * ...`
    #[inline]
    pub fn prod(&self) -> T {
        self.reduce_lanes(Lane::lane_mul)
    }

    /// Largest lane; the running maximum is replaced only by a strictly
    /// greater lane, so NaN lanes after lane 0 are skipped
    #[inline]
    pub fn reduce_max(&self) -> T {
        self.reduce_lanes(|acc, x| if x > acc { x } else { acc })
    }

    /// Smallest lane; the running minimum is replaced only by a strictly
    /// smaller lane
    #[inline]
    pub fn reduce_min(&self) -> T {
        self.reduce_lanes(|acc, x| if x < acc { x } else { acc })
    }

    /// Left fold seeded with `init`
    #[inline]
    pub fn fold<R, F>(&self, init: R, f: F) -> R
    where
        F: FnMut(R, T) -> R,
    {
        self.iter().copied().fold(init, f)
    }

    #[inline]
    fn reduce_lanes<F>(&self, mut f: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        let lanes = self.lanes();
        let mut acc = lanes[0];
        for &lane in &lanes[1..] {
            acc = f(acc, lane);
        }
        acc
    }
}

/// Whether any lane of `p` is truthy
#[inline]
pub fn any<T: Lane, const N: usize>(p: Pack<T, N>) -> bool
where
    LaneCount<N>: SupportedLaneCount,
{
    p.any()
}

/// Whether every lane of `p` is truthy
#[inline]
pub fn all<T: Lane, const N: usize>(p: Pack<T, N>) -> bool
where
    LaneCount<N>: SupportedLaneCount,
{
    p.all()
}

#[inline]
pub fn sum<T: Lane, const N: usize>(p: Pack<T, N>) -> T
where
    LaneCount<N>: SupportedLaneCount,
{
    p.sum()
}

#[inline]
pub fn prod<T: Lane, const N: usize>(p: Pack<T, N>) -> T
where
    LaneCount<N>: SupportedLaneCount,
{
    p.prod()
}

#[inline]
pub fn max<T: Lane, const N: usize>(p: Pack<T, N>) -> T
where
    LaneCount<N>: SupportedLaneCount,
{
    p.reduce_max()
}

#[inline]
pub fn min<T: Lane, const N: usize>(p: Pack<T, N>) -> T
where
    LaneCount<N>: SupportedLaneCount,
{
    p.reduce_min()
}

/// Apply a unary lane function to every lane, in lane order
#[inline]
pub fn map<T, R, F, const N: usize>(f: F, p: Pack<T, N>) -> Pack<R, N>
where
    T: Lane,
    R: Lane,
    F: FnMut(T) -> R,
    LaneCount<N>: SupportedLaneCount,
{
    p.map(f)
}

/// Apply a binary lane function lane by lane: lane `i` is `f(a[i], b[i])`
#[inline]
pub fn map2<A, B, R, F, const N: usize>(f: F, a: Pack<A, N>, b: Pack<B, N>) -> Pack<R, N>
where
    A: Lane,
    B: Lane,
    R: Lane,
    F: FnMut(A, B) -> R,
    LaneCount<N>: SupportedLaneCount,
{
    a.zip_map(b, f)
}

/// Sequential left fold of `p` seeded with `initial`
#[inline]
pub fn reduce<T, R, F, const N: usize>(f: F, p: Pack<T, N>, initial: R) -> R
where
    T: Lane,
    F: FnMut(R, T) -> R,
    LaneCount<N>: SupportedLaneCount,
{
    p.fold(initial, f)
}
