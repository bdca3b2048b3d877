//! AVX2 kernels for f64 lanes (4 per register)

use std::arch::x86_64::*;

use super::vertical_kernel;

vertical_kernel!(add, f64, 4, _mm256_loadu_pd, _mm256_storeu_pd, _mm256_add_pd, +);
vertical_kernel!(sub, f64, 4, _mm256_loadu_pd, _mm256_storeu_pd, _mm256_sub_pd, -);
vertical_kernel!(mul, f64, 4, _mm256_loadu_pd, _mm256_storeu_pd, _mm256_mul_pd, *);
vertical_kernel!(div, f64, 4, _mm256_loadu_pd, _mm256_storeu_pd, _mm256_div_pd, /);
