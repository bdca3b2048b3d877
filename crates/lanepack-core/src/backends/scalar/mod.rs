//! Scalar backend implementation
//!
//! This backend provides generic implementations that work for all lane types
//! without using any SIMD instructions.

use crate::backends::LanePrimitives;
use crate::lane::Lane;

/// Scalar backend - works for all lane types
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

// Generic implementation for all types
impl<T: Lane> LanePrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All operations use the default implementations from the trait
}
