//! Lane-wise math for lanepack packs
//!
//! Every function here applies the scalar routine of the lane type to each
//! lane through [`lanepack_core::map`], so a lane of the result is exactly what
//! the scalar call returns for the same input lane (NaN included).
//!
//! - [`trig`]: circular and hyperbolic functions
//! - [`exp_log`]: exponentials and logarithms
//! - [`power`]: roots, powers, `hypot`, fused multiply-add
//! - [`rounding`]: rounding, `abs`, lane-wise min/max and clamp
//! - [`special`]: error and gamma functions, evaluated in `f64` via `statrs`
//!
//! # Example
//!
//! ```rust
//! use lanepack_core::{pack, Pack};
//! use lanepack_math::{sqrt, hypot};
//!
//! let a: Pack<f64, 2> = pack![3.0, 5.0];
//! let b: Pack<f64, 2> = pack![4.0, 12.0];
//! assert_eq!(hypot(a, b).to_array(), [5.0, 13.0]);
//! assert_eq!(sqrt(a * a).to_array(), [3.0, 5.0]);
//! ```

/// Generate `fn name(p) -> p.map(T::name)` for `num_traits::Float` methods
macro_rules! lanewise_unary {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<T, const N: usize>(p: Pack<T, N>) -> Pack<T, N>
            where
                T: FloatLane,
                LaneCount<N>: SupportedLaneCount,
            {
                map(<T as num_traits::Float>::$name, p)
            }
        )*
    };
}

/// Generate `fn name(a, b) -> lane i is a[i].name(b[i])`, with `b` a pack or
/// a broadcast scalar
macro_rules! lanewise_binary {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<T, B, const N: usize>(a: Pack<T, N>, b: B) -> Pack<T, N>
            where
                T: FloatLane,
                B: Operand<N, Lane = T>,
                LaneCount<N>: SupportedLaneCount,
            {
                map2(<T as num_traits::Float>::$name, a, b.into_pack())
            }
        )*
    };
}

pub mod exp_log;
pub mod power;
pub mod rounding;
pub mod special;
pub mod trig;

pub use exp_log::{exp, exp2, exp_m1, ln, ln_1p, log10, log2};
pub use power::{cbrt, hypot, mul_add, powf, powi, sqrt};
pub use rounding::{abs, ceil, clamp, floor, fract, max_lanes, min_lanes, round, trunc};
pub use special::{erf, erfc, gamma, ln_gamma};
pub use trig::{
    acos, acosh, asin, asinh, atan, atan2, atanh, cos, cosh, sin, sinh, tan, tanh,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
