//! Lane type hierarchy
//!
//! This module provides the closed set of scalar types a pack can hold and the
//! per-lane arithmetic the operators are built from.
//!
//! # Design Philosophy
//!
//! - **Closed set**: `Lane` is sealed; it is implemented for `i8..i64`,
//!   `u8..u64`, `f32` and `f64` only
//! - **Hardware semantics**: integer lanes wrap on overflow like vector
//!   registers do; only division by a zero lane panics
//! - **Capability traits**: `IntLane` gates bitwise ops and shuffle indices,
//!   `MaskLane` names comparison results, `FloatLane` gates the math library

use bytemuck::Pod;
use num_traits::{AsPrimitive, Float};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::backends::{LanePrimitives, ScalarBackend};
use crate::lane_count::{ByteWidth, W1, W2, W4, W8};

mod sealed {
    pub trait Sealed {}
}

/// Scalar type that can occupy a pack lane
pub trait Lane:
    sealed::Sealed
    + Pod
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + FromStr
    + Send
    + Sync
    + 'static
{
    /// Signed integer of the same width, used for comparison masks
    type Mask: MaskLane;

    /// Byte width of the lane, used to derive pack alignment
    type Width: ByteWidth;

    /// Backend executing elementwise arithmetic for this lane type
    type Backend: LanePrimitives<Self>;

    const ZERO: Self;
    const ONE: Self;
    const IS_FLOAT: bool;

    /// Rust spelling of the type, used in messages
    const NAME: &'static str;

    /// Get an instance of the backend
    #[inline]
    fn backend() -> Self::Backend {
        Self::Backend::default()
    }

    /// Scalar-ternary truthiness: nonzero is true
    fn is_truthy(self) -> bool;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;

    /// Division; panics on an integer zero divisor
    fn lane_div(self, rhs: Self) -> Self;

    /// Remainder; panics on an integer zero divisor, IEEE fmod for floats
    fn lane_rem(self, rhs: Self) -> Self;

    fn lane_neg(self) -> Self;
}

/// Integer lanes: bitwise operations, shifts and shuffle indices
pub trait IntLane: Lane + Eq + Ord + Hash {
    const BITS: u32;

    fn lane_and(self, rhs: Self) -> Self;
    fn lane_or(self, rhs: Self) -> Self;
    fn lane_xor(self, rhs: Self) -> Self;
    fn lane_not(self) -> Self;

    /// Left shift by `rhs` modulo the lane width
    fn lane_shl(self, rhs: Self) -> Self;

    /// Right shift by `rhs` modulo the lane width (arithmetic for signed lanes)
    fn lane_shr(self, rhs: Self) -> Self;

    /// Euclidean `self mod len` as a lane position
    fn wrap_index(self, len: usize) -> usize;
}

/// Signed integer lanes used as comparison masks
///
/// A well-formed mask lane is either `FALSE` (all bits clear) or `TRUE`
/// (all bits set, i.e. `-1`).
pub trait MaskLane: IntLane {
    const TRUE: Self;
    const FALSE: Self;

    #[inline]
    fn from_bool(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    #[inline]
    fn is_mask_value(self) -> bool {
        self == Self::TRUE || self == Self::FALSE
    }
}

/// Floating-point lanes
pub trait FloatLane: Lane + Float + AsPrimitive<f64> {
    /// Round an `f64` result back into this lane type
    fn from_f64_lossy(value: f64) -> Self;
}

macro_rules! impl_int_lane {
    ($($ty:ty => $mask:ty, $width:ty);* $(;)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Lane for $ty {
                type Mask = $mask;
                type Width = $width;
                type Backend = ScalarBackend;

                const ZERO: Self = 0;
                const ONE: Self = 1;
                const IS_FLOAT: bool = false;
                const NAME: &'static str = stringify!($ty);

                #[inline(always)]
                fn is_truthy(self) -> bool {
                    self != 0
                }

                #[inline(always)]
                fn lane_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn lane_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline(always)]
                fn lane_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline(always)]
                fn lane_div(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                #[inline(always)]
                fn lane_rem(self, rhs: Self) -> Self {
                    self.wrapping_rem(rhs)
                }

                #[inline(always)]
                fn lane_neg(self) -> Self {
                    self.wrapping_neg()
                }
            }

            impl IntLane for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn lane_and(self, rhs: Self) -> Self {
                    self & rhs
                }

                #[inline(always)]
                fn lane_or(self, rhs: Self) -> Self {
                    self | rhs
                }

                #[inline(always)]
                fn lane_xor(self, rhs: Self) -> Self {
                    self ^ rhs
                }

                #[inline(always)]
                fn lane_not(self) -> Self {
                    !self
                }

                #[inline(always)]
                fn lane_shl(self, rhs: Self) -> Self {
                    self.wrapping_shl(rhs as u32)
                }

                #[inline(always)]
                fn lane_shr(self, rhs: Self) -> Self {
                    self.wrapping_shr(rhs as u32)
                }

                #[inline(always)]
                fn wrap_index(self, len: usize) -> usize {
                    (self as i128).rem_euclid(len as i128) as usize
                }
            }
        )*
    };
}

impl_int_lane! {
    i8 => i8, W1;
    i16 => i16, W2;
    i32 => i32, W4;
    i64 => i64, W8;
    u8 => i8, W1;
    u16 => i16, W2;
    u32 => i32, W4;
    u64 => i64, W8;
}

impl MaskLane for i8 {
    const TRUE: Self = -1;
    const FALSE: Self = 0;
}

impl MaskLane for i16 {
    const TRUE: Self = -1;
    const FALSE: Self = 0;
}

impl MaskLane for i32 {
    const TRUE: Self = -1;
    const FALSE: Self = 0;
}

impl MaskLane for i64 {
    const TRUE: Self = -1;
    const FALSE: Self = 0;
}

macro_rules! impl_float_lane {
    ($($ty:ident => $mask:ty, $width:ty);* $(;)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Lane for $ty {
                type Mask = $mask;
                type Width = $width;

                // f32/f64 use AVX2 when compiled in; availability is checked at runtime
                #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
                type Backend = crate::backends::Avx2Backend;

                #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
                type Backend = ScalarBackend;

                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const IS_FLOAT: bool = true;
                const NAME: &'static str = stringify!($ty);

                #[inline(always)]
                fn is_truthy(self) -> bool {
                    // NaN is truthy, both zeros are falsy
                    self != 0.0
                }

                #[inline(always)]
                fn lane_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn lane_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline(always)]
                fn lane_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline(always)]
                fn lane_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline(always)]
                fn lane_rem(self, rhs: Self) -> Self {
                    self % rhs
                }

                #[inline(always)]
                fn lane_neg(self) -> Self {
                    -self
                }
            }

            impl FloatLane for $ty {
                #[inline(always)]
                fn from_f64_lossy(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_float_lane! {
    f32 => i32, W4;
    f64 => i64, W8;
}
