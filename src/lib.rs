//! Portable fixed-width lane packs
//!
//! Umbrella crate re-exporting [`lanepack_core`] (the `Pack<T, N>` type, its
//! operators, shuffles, blends and folds) and [`lanepack_math`] (lane-wise
//! transcendental, rounding and special functions).
//!
//! # Example
//!
//! ```rust
//! use lanepack::prelude::*;
//!
//! let x: Pack<f32, 8> = pack![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let y = Pack::<f32, 8>::splat(4.0);
//!
//! let a = 3i32 * x + math::sqrt(x * x + y * y);
//! let b = a.simd_gt(9i32).blend(x, y);
//! assert_eq!(b[0], 4.0);
//! assert_eq!(b[7], 8.0);
//! ```

pub use lanepack_core::*;

/// Lane-wise math functions
pub mod math {
    pub use lanepack_math::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::math;
    pub use lanepack_core::prelude::*;
    pub use lanepack_core::{all, any, sum};
}
