//! Index-driven lane permutation
//!
//! Indices are integer packs; every index is reduced with a Euclidean modulo
//! (by `N` for one source, by `2N` for two), so out-of-range and negative
//! indices wrap instead of faulting.

use crate::lane::{IntLane, Lane};
use crate::lane_count::{LaneCount, SupportedLaneCount};
use crate::pack::Pack;

impl<T: Lane, const N: usize> Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Gather lanes of `self`: result lane `i` is `self[indices[i] mod N]`
    ///
    /// The index pack may be narrower or wider than `self`; the result has
    /// its width.
    ///
    /// ```rust
    /// use lanepack_core::{pack, Pack};
    ///
    /// let p: Pack<f32, 4> = pack![1.0, 2.0, 3.0, 4.0];
    /// let r = p.shuffle_self(pack![3i32, 2, 1, 0]);
    /// assert_eq!(r.to_array(), [4.0, 3.0, 2.0, 1.0]);
    /// ```
    #[inline]
    pub fn shuffle_self<I, const M: usize>(self, indices: Pack<I, M>) -> Pack<T, M>
    where
        I: IntLane,
        LaneCount<M>: SupportedLaneCount,
    {
        indices.map(|index| self[index.wrap_index(N)])
    }

    /// Lanes in reverse order
    #[inline]
    pub fn reverse(self) -> Self {
        Self::from_fn(|i| self[N - 1 - i])
    }

    /// Result lane `i` is `self[(i + k) mod N]`
    #[inline]
    pub fn rotate_lanes_left(self, k: usize) -> Self {
        let k = k % N;
        Self::from_fn(|i| self[(i + k) % N])
    }

    /// Result lane `i` is `self[(i + N - k) mod N]`
    #[inline]
    pub fn rotate_lanes_right(self, k: usize) -> Self {
        let k = k % N;
        Self::from_fn(|i| self[(i + N - k) % N])
    }
}

impl<I: IntLane, const N: usize> Pack<I, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Two-source shuffle with `self` as the index pack; see [`shuffle`]
    #[inline]
    pub fn shuffle<V: Lane>(self, a: Pack<V, N>, b: Pack<V, N>) -> Pack<V, N> {
        shuffle(a, b, self)
    }
}

/// Two-source shuffle
///
/// Lane `i` is `a[k]` when `k = indices[i] mod 2N` is below `N`, and
/// `b[k - N]` otherwise.
#[inline]
pub fn shuffle<V, I, const N: usize>(a: Pack<V, N>, b: Pack<V, N>, indices: Pack<I, N>) -> Pack<V, N>
where
    V: Lane,
    I: IntLane,
    LaneCount<N>: SupportedLaneCount,
{
    indices.map(|index| {
        let k = index.wrap_index(2 * N);
        if k < N {
            a[k]
        } else {
            b[k - N]
        }
    })
}
