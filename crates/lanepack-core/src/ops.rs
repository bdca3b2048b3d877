//! Operator overloads for packs
//!
//! Binary operators take a pack on the left and any [`Operand`] on the right
//! (a pack of the same width or a scalar lane), resolve the common lane type
//! through [`Promote`], and apply the operator lane by lane. Scalar-left forms
//! (`2.0f32 * p`) are generated for every lane type.
//!
//! `+ - * /` route through the lane type's backend. Comparisons and logical
//! operators are methods returning masks, since Rust's comparison traits must
//! return `bool`.

use num_traits::AsPrimitive;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::backends::LanePrimitives;
use crate::lane::{IntLane, Lane, MaskLane};
use crate::lane_count::{LaneCount, SupportedLaneCount};
use crate::pack::{Mask, Pack};
use crate::promote::{promote_pair, Operand, Promote, Promoted};

// Arithmetic through the backend: `+ - * /`
macro_rules! backend_binop {
    ($($trait:ident, $method:ident);* $(;)?) => {
        $(
            impl<T, R, const N: usize> $trait<R> for Pack<T, N>
            where
                LaneCount<N>: SupportedLaneCount,
                R: Operand<N>,
                T: Promote<R::Lane>,
            {
                type Output = Pack<Promoted<T, R::Lane>, N>;

                #[inline]
                fn $method(self, rhs: R) -> Self::Output {
                    let (a, b) = promote_pair(self, rhs.into_pack());
                    let mut out = Pack::zeroed();
                    let backend = <Promoted<T, R::Lane> as Lane>::backend();
                    LanePrimitives::<Promoted<T, R::Lane>>::$method(
                        &backend,
                        a.lanes(),
                        b.lanes(),
                        out.lanes_mut(),
                    );
                    out
                }
            }
        )*
    };
}

backend_binop! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
}

impl<T, R, const N: usize> Rem<R> for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
    R: Operand<N>,
    T: Promote<R::Lane>,
{
    type Output = Pack<Promoted<T, R::Lane>, N>;

    #[inline]
    fn rem(self, rhs: R) -> Self::Output {
        let (a, b) = promote_pair(self, rhs.into_pack());
        a.zip_map(b, Lane::lane_rem)
    }
}

// Integer-only operators: `& | ^ << >>`
macro_rules! int_binop {
    ($($trait:ident, $method:ident, $lane_op:ident);* $(;)?) => {
        $(
            impl<T, R, const N: usize> $trait<R> for Pack<T, N>
            where
                LaneCount<N>: SupportedLaneCount,
                R: Operand<N>,
                T: Promote<R::Lane>,
                Promoted<T, R::Lane>: IntLane,
            {
                type Output = Pack<Promoted<T, R::Lane>, N>;

                #[inline]
                fn $method(self, rhs: R) -> Self::Output {
                    let (a, b) = promote_pair(self, rhs.into_pack());
                    a.zip_map(b, IntLane::$lane_op)
                }
            }
        )*
    };
}

int_binop! {
    BitAnd, bitand, lane_and;
    BitOr, bitor, lane_or;
    BitXor, bitxor, lane_xor;
    Shl, shl, lane_shl;
    Shr, shr, lane_shr;
}

// Scalar on the left: `2.0f32 * p`, `1u8 << p`
macro_rules! scalar_lhs_ops {
    (@arith $scalar:ty; $($trait:ident, $method:ident);*) => {
        $(
            impl<T, const N: usize> $trait<Pack<T, N>> for $scalar
            where
                LaneCount<N>: SupportedLaneCount,
                T: Lane,
                $scalar: Promote<T>,
            {
                type Output = Pack<Promoted<$scalar, T>, N>;

                #[inline]
                fn $method(self, rhs: Pack<T, N>) -> Self::Output {
                    $trait::$method(Pack::<$scalar, N>::splat(self), rhs)
                }
            }
        )*
    };
    (@int $scalar:ty; $($trait:ident, $method:ident);*) => {
        $(
            impl<T, const N: usize> $trait<Pack<T, N>> for $scalar
            where
                LaneCount<N>: SupportedLaneCount,
                T: Lane,
                $scalar: Promote<T>,
                Promoted<$scalar, T>: IntLane,
            {
                type Output = Pack<Promoted<$scalar, T>, N>;

                #[inline]
                fn $method(self, rhs: Pack<T, N>) -> Self::Output {
                    $trait::$method(Pack::<$scalar, N>::splat(self), rhs)
                }
            }
        )*
    };
    (int: $($scalar:ty),*) => {
        $(
            scalar_lhs_ops!(@arith $scalar; Add, add; Sub, sub; Mul, mul; Div, div; Rem, rem);
            scalar_lhs_ops!(@int $scalar; BitAnd, bitand; BitOr, bitor; BitXor, bitxor; Shl, shl; Shr, shr);
        )*
    };
    (float: $($scalar:ty),*) => {
        $(
            scalar_lhs_ops!(@arith $scalar; Add, add; Sub, sub; Mul, mul; Div, div; Rem, rem);
        )*
    };
}

scalar_lhs_ops!(int: i8, i16, i32, i64, u8, u16, u32, u64);
scalar_lhs_ops!(float: f32, f64);

// Compound assignment: the right side is converted to the receiver's lane
// type first, then the operator runs in that type
macro_rules! assign_op {
    ($($trait:ident, $method:ident, $lane_op:path, $bound:ident);* $(;)?) => {
        $(
            impl<T, R, const N: usize> $trait<R> for Pack<T, N>
            where
                LaneCount<N>: SupportedLaneCount,
                T: $bound,
                R: Operand<N>,
                R::Lane: AsPrimitive<T>,
            {
                #[inline]
                fn $method(&mut self, rhs: R) {
                    let rhs = rhs.into_pack();
                    for (lane, value) in self.lanes_mut().iter_mut().zip(rhs) {
                        *lane = $lane_op(*lane, value.as_());
                    }
                }
            }
        )*
    };
}

assign_op! {
    AddAssign, add_assign, Lane::lane_add, Lane;
    SubAssign, sub_assign, Lane::lane_sub, Lane;
    MulAssign, mul_assign, Lane::lane_mul, Lane;
    DivAssign, div_assign, Lane::lane_div, Lane;
    RemAssign, rem_assign, Lane::lane_rem, Lane;
    BitAndAssign, bitand_assign, IntLane::lane_and, IntLane;
    BitOrAssign, bitor_assign, IntLane::lane_or, IntLane;
    BitXorAssign, bitxor_assign, IntLane::lane_xor, IntLane;
    ShlAssign, shl_assign, IntLane::lane_shl, IntLane;
    ShrAssign, shr_assign, IntLane::lane_shr, IntLane;
}

impl<T: Lane, const N: usize> Neg for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Lane::lane_neg)
    }
}

impl<T: IntLane, const N: usize> Not for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(IntLane::lane_not)
    }
}

macro_rules! comparisons {
    ($($(#[$doc:meta])* $name:ident => $op:tt;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<R>(self, rhs: R) -> Mask<Promoted<T, R::Lane>, N>
            where
                R: Operand<N>,
                T: Promote<R::Lane>,
            {
                let (a, b) = promote_pair(self, rhs.into_pack());
                a.zip_map(b, |x, y| MaskLane::from_bool(x $op y))
            }
        )*
    };
}

impl<T: Lane, const N: usize> Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    comparisons! {
        /// Lane-wise `==`; NaN lanes compare unequal
        simd_eq => ==;
        /// Lane-wise `!=`; NaN lanes compare unequal
        simd_ne => !=;
        simd_lt => <;
        simd_le => <=;
        simd_gt => >;
        simd_ge => >=;
    }

    /// Mask of lanes where both sides are truthy
    #[inline]
    pub fn logical_and<R>(self, rhs: R) -> Mask<Promoted<T, R::Lane>, N>
    where
        R: Operand<N>,
        T: Promote<R::Lane>,
    {
        let (a, b) = promote_pair(self, rhs.into_pack());
        a.zip_map(b, |x, y| MaskLane::from_bool(x.is_truthy() && y.is_truthy()))
    }

    /// Mask of lanes where either side is truthy
    #[inline]
    pub fn logical_or<R>(self, rhs: R) -> Mask<Promoted<T, R::Lane>, N>
    where
        R: Operand<N>,
        T: Promote<R::Lane>,
    {
        let (a, b) = promote_pair(self, rhs.into_pack());
        a.zip_map(b, |x, y| MaskLane::from_bool(x.is_truthy() || y.is_truthy()))
    }

    /// Mask of falsy lanes
    #[inline]
    pub fn logical_not(self) -> Mask<T, N> {
        self.map(|x| MaskLane::from_bool(!x.is_truthy()))
    }
}
