//! AVX2 kernels for f32 lanes (8 per register)

use std::arch::x86_64::*;

use super::vertical_kernel;

vertical_kernel!(add, f32, 8, _mm256_loadu_ps, _mm256_storeu_ps, _mm256_add_ps, +);
vertical_kernel!(sub, f32, 8, _mm256_loadu_ps, _mm256_storeu_ps, _mm256_sub_ps, -);
vertical_kernel!(mul, f32, 8, _mm256_loadu_ps, _mm256_storeu_ps, _mm256_mul_ps, *);
vertical_kernel!(div, f32, 8, _mm256_loadu_ps, _mm256_storeu_ps, _mm256_div_ps, /);
