//! End-to-end behaviour of packs through the public API

mod common;

use approx::assert_relative_eq;
use common::special_values;
use lanepack_core::prelude::*;
use lanepack_core::{all, any, max, min, prod, sum};

#[test]
fn test_elementwise_add() {
    let a: Pack<i32, 4> = pack![1, 2, 3, 4];
    let b: Pack<i32, 4> = pack![10, 20, 30, 40];
    assert_eq!(a + b, pack![11, 22, 33, 44]);
}

#[test]
fn test_reverse_shuffle() {
    let p: Pack<f32, 4> = pack![1.0, 2.0, 3.0, 4.0];
    let r = p.shuffle_self(pack![3i32, 2, 1, 0]);
    assert_eq!(r, pack![4.0, 3.0, 2.0, 1.0]);
}

#[test]
fn test_blend_by_mask() {
    let test: Pack<i32, 4> = pack![0, -1, 0, -1];
    let r = blend(test, Pack::<i32, 4>::splat(1), Pack::<i32, 4>::splat(2));
    assert_eq!(r, pack![2, 1, 2, 1]);
}

#[test]
fn test_blend_result_widens_to_test_type() {
    let test: Pack<f64, 4> = pack![0.25, 0.0, -3.0, -0.0];
    let r = blend(test, Pack::<f32, 4>::splat(1.5), Pack::<f32, 4>::splat(-2.5));
    let r: Pack<f64, 4> = r;
    assert_eq!(r, pack![1.5, -2.5, 1.5, -2.5]);

    let mask = Pack::<i64, 4>::mask_from_bools([true, false, false, true]);
    let r: Pack<i64, 4> = mask.blend(Pack::<i32, 4>::splat(i32::MIN), 7i32);
    assert_eq!(r, pack![i32::MIN as i64, 7, 7, i32::MIN as i64]);
}

#[test]
fn test_lane_accumulated_dot_matches_flat_dot() {
    let x: Vec<f64> = (0..256).map(|i| (i as f64 * 0.37).sin()).collect();
    let y: Vec<f64> = (0..256).map(|i| (i as f64 * 0.11).cos()).collect();

    let mut acc = Pack::<f64, 8>::zeroed();
    for (xs, ys) in x.chunks_exact(8).zip(y.chunks_exact(8)) {
        acc += Pack::<f64, 8>::from_slice(xs).unwrap() * Pack::<f64, 8>::from_slice(ys).unwrap();
    }
    let flat: f64 = x.iter().zip(&y).map(|(a, b)| a * b).sum();
    assert_relative_eq!(acc.sum(), flat, max_relative = 1e-12);

    let mean = acc / 256i32;
    assert_relative_eq!(mean.sum(), flat / 256.0, max_relative = 1e-12);
}

#[test]
fn test_fold_order_is_preserved() {
    let p: Pack<f64, 4> = pack![1e20, 1.0, -1e20, 0.0];
    let expected = ((1e20f64 + 1.0) + -1e20) + 0.0;
    assert_eq!(sum(p).to_bits(), expected.to_bits());
}

#[test]
fn test_any_all() {
    assert!(!any(Pack::<i32, 4>::from_array([0, 0, 0, 0])));
    assert!(all(Pack::<i32, 4>::from_array([1, 1, 1, 1])));
    assert!(any(Pack::<i32, 4>::from_array([0, 0, 1, 0])));
}

#[test]
fn test_comparison_masks_drive_blend() {
    let x: Pack<f64, 4> = pack![-2.0, -0.5, 0.5, 2.0];
    let clipped = x.simd_lt(-1.0f64).blend(-1.0f64, x.simd_gt(1.0f64).blend(1.0f64, x));
    assert_eq!(clipped, pack![-1.0, -0.5, 0.5, 1.0]);

    let abs = blend(x.simd_lt(0.0f64), -x, x);
    assert_eq!(abs, pack![2.0, 0.5, 0.5, 2.0]);
}

#[test]
fn test_scalar_operands_on_either_side() {
    let p: Pack<i16, 8> = Pack::from_fn(|i| i as i16);
    let left: Pack<i32, 8> = 100i32 - p;
    let right: Pack<i32, 8> = p - 100i32;
    assert_eq!(left, -right);

    let shifted: Pack<u32, 8> = 1u32 << Pack::<u32, 8>::from_fn(|i| i as u32);
    assert_eq!(shifted.to_array(), [1, 2, 4, 8, 16, 32, 64, 128]);
}

#[test]
fn test_promotion_table_examples() {
    let small: Pack<u8, 4> = pack![1, 2, 3, 4];
    let signed: Pack<i8, 4> = pack![-1, -1, -1, -1];

    let r: Pack<i32, 4> = small + signed;
    assert_eq!(r, pack![0, 1, 2, 3]);

    let r: Pack<u32, 4> = small.cast::<i32>() + 0u32;
    assert_eq!(r, pack![1, 2, 3, 4]);

    let r: Pack<i64, 4> = small.cast::<u32>() + 0i64;
    assert_eq!(r, pack![1, 2, 3, 4]);

    let r: Pack<f32, 4> = small.cast::<u64>() * 0.5f32;
    assert_eq!(r, pack![0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn test_masks_from_comparisons_are_exact() {
    let a: Pack<u64, 4> = pack![1, 5, u64::MAX, 0];
    let b: Pack<u64, 4> = pack![1, 4, 0, u64::MAX];
    let eq = a.simd_eq(b);
    let gt = a.simd_gt(b);
    assert_eq!(eq, pack![-1i64, 0, 0, 0]);
    assert_eq!(gt, pack![0i64, -1, -1, 0]);
    assert!(eq.is_mask() && gt.is_mask());
}

#[test]
fn test_special_values_survive_arithmetic() {
    let values = special_values();
    for chunk in values.chunks_exact(2) {
        let p = Pack::<f64, 2>::from_slice(chunk).unwrap();
        let doubled = p * 2.0f64;
        let negated = -p;
        for i in 0..2 {
            assert_eq!(doubled[i].to_bits(), (chunk[i] * 2.0).to_bits());
            assert_eq!(negated[i].to_bits(), (-chunk[i]).to_bits());
        }
    }
}

#[test]
fn test_reductions_on_wide_packs() {
    let p: Pack<i8, 64> = Pack::from_fn(|i| i as i8 - 32);
    assert_eq!(max(p), 31);
    assert_eq!(min(p), -32);
    assert_eq!(sum(p), -32);
    assert_eq!(prod(Pack::<u16, 2>::from_array([300, 300])), 24464);
}

#[test]
fn test_errors_are_reported() {
    assert_eq!(
        Pack::<f32, 8>::from_slice(&[1.0; 7]),
        Err(Error::LaneCount {
            expected: 8,
            actual: 7
        })
    );

    let mut p = Pack::<u8, 4>::zeroed();
    assert_eq!(
        p.set(4, 1),
        Err(Error::IndexOutOfRange { index: 4, lanes: 4 })
    );
    assert!(matches!(
        "(1,2,three,4)".parse::<Pack<i32, 4>>(),
        Err(Error::Parse(_))
    ));
}

#[test]
#[should_panic]
fn test_remainder_by_zero_lane_panics() {
    let a: Pack<u32, 4> = pack![1, 2, 3, 4];
    let _ = a % pack![1u32, 1, 0, 1];
}

#[test]
fn test_textual_round_trip() {
    let p: Pack<i64, 4> = pack![-1, 0, 1, i64::MAX];
    let text = p.to_string();
    assert_eq!(text, format!("(-1,0,1,{})", i64::MAX));
    assert_eq!(text.parse::<Pack<i64, 4>>(), Ok(p));
}

#[test]
fn test_serde_round_trip() {
    let p: Pack<f32, 4> = pack![0.5, -1.25, 3.0, 8.0];
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[0.5,-1.25,3.0,8.0]");
    assert_eq!(serde_json::from_str::<Pack<f32, 4>>(&json).unwrap(), p);
}
