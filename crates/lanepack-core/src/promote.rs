//! Common-type resolution for mixed operands
//!
//! Every binary operator first resolves the lane type both sides are converted
//! to. The table follows the C usual arithmetic conversions:
//!
//! - identical lane types stay put
//! - integers narrower than 32 bits are promoted to `i32`
//! - between promoted integers the higher rank wins, unsigned wins at equal
//!   rank, and `i64` wins over `u32`
//! - any float operand makes the result a float (`f64` if either side is)
//!
//! Scalars enter through [`Operand`], which broadcasts them to `N` lanes.

use crate::lane::Lane;
use crate::lane_count::{LaneCount, SupportedLaneCount};
use crate::pack::Pack;

/// Lane type `Self` combined with lane type `Rhs`
pub trait Promote<Rhs: Lane>: Lane {
    /// Common lane type of `Self` and `Rhs`
    type Output: Lane;

    fn promote_lhs(self) -> Self::Output;
    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

/// Common lane type of `A` and `B`
pub type Promoted<A, B> = <A as Promote<B>>::Output;

/// Something usable as one side of an `N`-lane operation: a pack of `N` lanes
/// or a scalar lane value that is broadcast
pub trait Operand<const N: usize>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Lane: Lane;

    fn into_pack(self) -> Pack<Self::Lane, N>;
}

impl<T: Lane, const N: usize> Operand<N> for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Lane = T;

    #[inline(always)]
    fn into_pack(self) -> Pack<T, N> {
        self
    }
}

macro_rules! scalar_operand {
    ($($ty:ty),*) => {
        $(
            impl<const N: usize> Operand<N> for $ty
            where
                LaneCount<N>: SupportedLaneCount,
            {
                type Lane = $ty;

                #[inline(always)]
                fn into_pack(self) -> Pack<$ty, N> {
                    Pack::splat(self)
                }
            }
        )*
    };
}

scalar_operand!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Convert both packs to their common lane type
#[inline]
pub fn promote_pair<A, B, const N: usize>(
    lhs: Pack<A, N>,
    rhs: Pack<B, N>,
) -> (Pack<Promoted<A, B>, N>, Pack<Promoted<A, B>, N>)
where
    A: Promote<B>,
    B: Lane,
    LaneCount<N>: SupportedLaneCount,
{
    (
        lhs.map(<A as Promote<B>>::promote_lhs),
        rhs.map(<A as Promote<B>>::promote_rhs),
    )
}

macro_rules! promote_row {
    ($lhs:ty: $($rhs:ty => $out:ty),* $(,)?) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline(always)]
                fn promote_lhs(self) -> $out {
                    self as $out
                }

                #[inline(always)]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

promote_row!(i8: i8 => i8, i16 => i32, i32 => i32, i64 => i64, u8 => i32, u16 => i32, u32 => u32, u64 => u64, f32 => f32, f64 => f64);
promote_row!(i16: i8 => i32, i16 => i16, i32 => i32, i64 => i64, u8 => i32, u16 => i32, u32 => u32, u64 => u64, f32 => f32, f64 => f64);
promote_row!(i32: i8 => i32, i16 => i32, i32 => i32, i64 => i64, u8 => i32, u16 => i32, u32 => u32, u64 => u64, f32 => f32, f64 => f64);
promote_row!(i64: i8 => i64, i16 => i64, i32 => i64, i64 => i64, u8 => i64, u16 => i64, u32 => i64, u64 => u64, f32 => f32, f64 => f64);
promote_row!(u8: i8 => i32, i16 => i32, i32 => i32, i64 => i64, u8 => u8, u16 => i32, u32 => u32, u64 => u64, f32 => f32, f64 => f64);
promote_row!(u16: i8 => i32, i16 => i32, i32 => i32, i64 => i64, u8 => i32, u16 => u16, u32 => u32, u64 => u64, f32 => f32, f64 => f64);
promote_row!(u32: i8 => u32, i16 => u32, i32 => u32, i64 => i64, u8 => u32, u16 => u32, u32 => u32, u64 => u64, f32 => f32, f64 => f64);
promote_row!(u64: i8 => u64, i16 => u64, i32 => u64, i64 => u64, u8 => u64, u16 => u64, u32 => u64, u64 => u64, f32 => f32, f64 => f64);
promote_row!(f32: i8 => f32, i16 => f32, i32 => f32, i64 => f32, u8 => f32, u16 => f32, u32 => f32, u64 => f32, f32 => f32, f64 => f64);
promote_row!(f64: i8 => f64, i16 => f64, i32 => f64, i64 => f64, u8 => f64, u16 => f64, u32 => f64, u64 => f64, f32 => f64, f64 => f64);
