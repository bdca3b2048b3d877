//! Type-specific AVX2 kernels
//!
//! Each kernel walks the slices in 256-bit chunks with unaligned loads and
//! finishes the remainder with the scalar operator.

/// Generate a vertical binary kernel: full registers first, scalar tail after
macro_rules! vertical_kernel {
    ($name:ident, $ty:ty, $width:literal, $load:ident, $store:ident, $intrinsic:ident, $op:tt) => {
        #[target_feature(enable = "avx2")]
        pub unsafe fn $name(a: &[$ty], b: &[$ty], out: &mut [$ty]) {
            let n = out.len().min(a.len()).min(b.len());
            let chunks = n / $width;

            // Main loop - process a full register at a time
            for i in 0..chunks {
                let offset = i * $width;
                let va = $load(a.as_ptr().add(offset));
                let vb = $load(b.as_ptr().add(offset));
                $store(out.as_mut_ptr().add(offset), $intrinsic(va, vb));
            }

            // Handle remainder
            for i in chunks * $width..n {
                out[i] = a[i] $op b[i];
            }
        }
    };
}

pub(crate) use vertical_kernel;

pub mod f32;
pub mod f64;
