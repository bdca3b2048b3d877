//! AVX2 backend implementation
//!
//! Provides 256-bit implementations of the elementwise primitives for `f32`
//! and `f64` lanes. CPU support is detected once at runtime; when the CPU
//! lacks AVX2 every primitive falls back to the scalar loop, so selecting this
//! backend at compile time is always safe.
//!
//! Vertical IEEE add/sub/mul/div are correctly rounded per lane, so results
//! are bit-identical to the scalar backend.

mod ops;

use std::sync::OnceLock;

use crate::backends::{LanePrimitives, ScalarBackend};

/// AVX2 backend for x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend {
    enabled: bool,
}

impl Avx2Backend {
    /// Create a new AVX2 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support AVX2 instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        if !Self::is_available() {
            panic!("AVX2 backend requested but CPU doesn't support AVX2 instructions");
        }
        Self { enabled: true }
    }

    /// Create a backend that uses AVX2 when the CPU has it and the scalar
    /// loop otherwise
    pub fn detect() -> Self {
        Self {
            enabled: Self::is_available(),
        }
    }

    /// Create a backend that always takes the scalar path
    pub fn scalar_fallback() -> Self {
        Self { enabled: false }
    }

    /// Check if AVX2 is available on this CPU
    pub fn is_available() -> bool {
        static AVAILABLE: OnceLock<bool> = OnceLock::new();
        *AVAILABLE.get_or_init(|| {
            let available = is_x86_feature_detected!("avx2");
            log::debug!("AVX2 detection: available={available}");
            available
        })
    }

    /// Whether this instance executes AVX2 instructions
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for Avx2Backend {
    fn default() -> Self {
        Self::detect()
    }
}

macro_rules! impl_avx2_primitives {
    ($ty:ty, $module:ident, $width:literal) => {
        impl LanePrimitives<$ty> for Avx2Backend {
            fn backend_name(&self) -> &'static str {
                if self.enabled {
                    "avx2"
                } else {
                    "avx2 (scalar fallback)"
                }
            }

            fn simd_width(&self) -> usize {
                if self.enabled {
                    $width
                } else {
                    1
                }
            }

            fn add(&self, a: &[$ty], b: &[$ty], out: &mut [$ty]) {
                if self.enabled {
                    // Safety: AVX2 support was verified when `enabled` was set
                    unsafe { ops::$module::add(a, b, out) }
                } else {
                    LanePrimitives::<$ty>::add(&ScalarBackend, a, b, out)
                }
            }

            fn sub(&self, a: &[$ty], b: &[$ty], out: &mut [$ty]) {
                if self.enabled {
                    // Safety: AVX2 support was verified when `enabled` was set
                    unsafe { ops::$module::sub(a, b, out) }
                } else {
                    LanePrimitives::<$ty>::sub(&ScalarBackend, a, b, out)
                }
            }

            fn mul(&self, a: &[$ty], b: &[$ty], out: &mut [$ty]) {
                if self.enabled {
                    // Safety: AVX2 support was verified when `enabled` was set
                    unsafe { ops::$module::mul(a, b, out) }
                } else {
                    LanePrimitives::<$ty>::mul(&ScalarBackend, a, b, out)
                }
            }

            fn div(&self, a: &[$ty], b: &[$ty], out: &mut [$ty]) {
                if self.enabled {
                    // Safety: AVX2 support was verified when `enabled` was set
                    unsafe { ops::$module::div(a, b, out) }
                } else {
                    LanePrimitives::<$ty>::div(&ScalarBackend, a, b, out)
                }
            }
        }
    };
}

impl_avx2_primitives!(f32, f32, 8);
impl_avx2_primitives!(f64, f64, 4);
