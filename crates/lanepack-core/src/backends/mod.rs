//! Execution backends for elementwise lane arithmetic
//!
//! Concrete backend types with direct implementations. No Box, no dyn: each
//! lane type names its backend through `Lane::Backend`, so the choice is made
//! at compile time and inlined into the operators.
//!
//! - `ScalarBackend`: plain loops, every lane type, every target
//! - `Avx2Backend`: `f32`/`f64` on x86_64 with the `avx2` feature, runtime
//!   detected with a scalar fallback
//!
//! Horizontal folds never go through a backend; they always run in lane order.

pub mod scalar;
pub mod traits;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub mod avx2;

// Re-export the main backend types
pub use scalar::ScalarBackend;
pub use traits::LanePrimitives;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use avx2::Avx2Backend;

use crate::lane::Lane;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Get the backend the operators use for lane type `T`
pub fn best_available_backend<T: Lane>() -> T::Backend {
    T::backend()
}

/// Get the name of the backend the operators use for lane type `T`
pub fn best_backend_name<T: Lane>() -> &'static str {
    let name = T::backend().backend_name();
    log::debug!("lane backend for {}: {name}", T::NAME);
    name
}
