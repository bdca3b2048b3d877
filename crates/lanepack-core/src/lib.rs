//! Fixed-width lane packs
//!
//! This crate provides `Pack<T, N>`, a value of `N` lanes of one scalar type
//! that behaves like a scalar under the usual operators while executing
//! elementwise.
//!
//! # Architecture Overview
//!
//! 1. **Lane container** - `Pack<T, N>`: construction, aligned and unaligned
//!    load/store, indexing, conversion
//! 2. **Promotion** - `Promote`/`Operand` resolve the common lane type of
//!    mixed pack and scalar operands at compile time
//! 3. **Operators** - arithmetic, bitwise, comparison and logical operators,
//!    with comparisons producing masks
//! 4. **Shuffle, blend, folds** - index-driven permutation, mask-driven
//!    selection, and strictly ordered horizontal reductions
//! 5. **Backends** - elementwise `+ - * /` execute through `LanePrimitives`,
//!    with an AVX2 implementation for float lanes behind the `avx2` feature
//!
//! # Design Philosophy
//!
//! - **Compile-time shapes**: lane counts come from `{1, 2, 4, 8, 16, 32, 64}`
//!   and mismatched widths, bitwise ops on floats and `N = 0` are type errors
//! - **Reproducible folds**: horizontal reductions run left to right from
//!   lane 0 whatever the backend
//! - **Plain values**: packs are `Copy`, zero-initialised, and own their lanes
//!
//! # Example
//!
//! ```rust
//! use lanepack_core::{blend, pack, Pack};
//!
//! let a: Pack<f32, 4> = pack![1.0, 2.0, 3.0, 4.0];
//! let b = a * 2.0f32 + 1.0f32;
//! assert_eq!(b.to_array(), [3.0, 5.0, 7.0, 9.0]);
//!
//! // Comparisons produce masks, masks drive blend
//! let clipped = blend(b.simd_gt(6.0f32), 6.0f32, b);
//! assert_eq!(clipped.to_array(), [3.0, 5.0, 6.0, 6.0]);
//! assert_eq!(clipped.sum(), 20.0);
//! ```

pub mod backends;
pub mod blend;
pub mod error;
pub mod format;
pub mod lane;
pub mod lane_count;
pub mod ops;
pub mod pack;
pub mod promote;
pub mod reduce;
pub mod serde_impl;
pub mod shuffle;

// Re-export core types
pub use error::{Error, Result};

pub use lane::{FloatLane, IntLane, Lane, MaskLane};
pub use lane_count::{LaneCount, SupportedLaneCount};
pub use pack::{Mask, Pack};
pub use promote::{promote_pair, Operand, Promote, Promoted};

pub use backends::{
    best_available_backend, best_backend_name, scalar_backend, LanePrimitives, ScalarBackend,
};
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use backends::Avx2Backend;

pub use blend::{blend, Blended};
pub use reduce::{all, any, map, map2, max, min, prod, reduce, sum};
pub use shuffle::shuffle;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        blend, map, map2, pack, reduce, shuffle, Error, FloatLane, IntLane, Lane, Mask, MaskLane,
        Operand, Pack, Promote, Promoted, Result,
    };
}
