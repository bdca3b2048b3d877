//! Unified lane primitives trait
//!
//! The operator layer hands every elementwise `+ - * /` to a backend through
//! this trait. Implementations may use wide registers but must produce the
//! same lanes as the scalar loop: each output lane depends only on the input
//! lanes at the same position.

use crate::lane::Lane;
use std::fmt::Debug;

/// Elementwise arithmetic over lane slices with compile-time dispatch
///
/// All three slices have the same length (the pack width). The default
/// implementations are plain scalar loops.
pub trait LanePrimitives<T: Lane>: Clone + Copy + Default + Debug + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of lanes processed per instruction)
    fn simd_width(&self) -> usize {
        1
    }

    /// `out[i] = a[i] + b[i]`
    fn add(&self, a: &[T], b: &[T], out: &mut [T]) {
        zip_lanes(a, b, out, T::lane_add);
    }

    /// `out[i] = a[i] - b[i]`
    fn sub(&self, a: &[T], b: &[T], out: &mut [T]) {
        zip_lanes(a, b, out, T::lane_sub);
    }

    /// `out[i] = a[i] * b[i]`
    fn mul(&self, a: &[T], b: &[T], out: &mut [T]) {
        zip_lanes(a, b, out, T::lane_mul);
    }

    /// `out[i] = a[i] / b[i]`
    fn div(&self, a: &[T], b: &[T], out: &mut [T]) {
        zip_lanes(a, b, out, T::lane_div);
    }
}

#[inline(always)]
pub(crate) fn zip_lanes<T: Copy>(a: &[T], b: &[T], out: &mut [T], op: impl Fn(T, T) -> T) {
    debug_assert_eq!(a.len(), b.len(), "Operands must have same length");
    debug_assert_eq!(a.len(), out.len(), "Output must match operand length");

    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = op(x, y);
    }
}
