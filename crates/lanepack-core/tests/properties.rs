//! Property-based tests for lane packs
//!
//! Every operator must agree lane by lane with the scalar operator on the
//! promoted lane type, and the folds must match a sequential left fold.

use lanepack_core::{blend, shuffle, Pack};
use proptest::prelude::*;

proptest! {
    // Property: integer operators are the wrapping scalar operators per lane
    #[test]
    fn prop_integer_ops_match_scalar(
        a in prop::array::uniform8(any::<i32>()),
        b in prop::array::uniform8(any::<i32>()),
    ) {
        let pa = Pack::<i32, 8>::from_array(a);
        let pb = Pack::<i32, 8>::from_array(b);

        let sum = pa + pb;
        let diff = pa - pb;
        let product = pa * pb;
        let and = pa & pb;
        let or = pa | pb;
        let xor = pa ^ pb;
        let shl = pa << pb;
        let shr = pa >> pb;

        for i in 0..8 {
            prop_assert_eq!(sum[i], a[i].wrapping_add(b[i]));
            prop_assert_eq!(diff[i], a[i].wrapping_sub(b[i]));
            prop_assert_eq!(product[i], a[i].wrapping_mul(b[i]));
            prop_assert_eq!(and[i], a[i] & b[i]);
            prop_assert_eq!(or[i], a[i] | b[i]);
            prop_assert_eq!(xor[i], a[i] ^ b[i]);
            prop_assert_eq!(shl[i], a[i].wrapping_shl(b[i] as u32));
            prop_assert_eq!(shr[i], a[i].wrapping_shr(b[i] as u32));
        }
    }

    // Property: division and remainder per lane for nonzero divisors
    #[test]
    fn prop_integer_division_matches_scalar(
        a in prop::array::uniform4(any::<i64>()),
        b in prop::array::uniform4(any::<i64>().prop_filter("nonzero", |v| *v != 0)),
    ) {
        let q = Pack::from_array(a) / Pack::from_array(b);
        let r = Pack::from_array(a) % Pack::from_array(b);
        for i in 0..4 {
            prop_assert_eq!(q[i], a[i].wrapping_div(b[i]));
            prop_assert_eq!(r[i], a[i].wrapping_rem(b[i]));
        }
    }

    // Property: float operators are the IEEE scalar operators per lane
    #[test]
    fn prop_float_ops_match_scalar(
        a in prop::array::uniform8(-1e6f32..1e6),
        b in prop::array::uniform8(-1e6f32..1e6),
    ) {
        let pa = Pack::<f32, 8>::from_array(a);
        let pb = Pack::<f32, 8>::from_array(b);
        let sum = pa + pb;
        let diff = pa - pb;
        let product = pa * pb;
        let quotient = pa / pb;
        let remainder = pa % pb;

        for i in 0..8 {
            prop_assert_eq!(sum[i].to_bits(), (a[i] + b[i]).to_bits());
            prop_assert_eq!(diff[i].to_bits(), (a[i] - b[i]).to_bits());
            prop_assert_eq!(product[i].to_bits(), (a[i] * b[i]).to_bits());
            prop_assert_eq!(quotient[i].to_bits(), (a[i] / b[i]).to_bits());
            prop_assert_eq!(remainder[i].to_bits(), (a[i] % b[i]).to_bits());
        }
    }

    // Property: mixed operands compute in the promoted type
    #[test]
    fn prop_mixed_promotion(
        a in prop::array::uniform4(any::<u8>()),
        b in prop::array::uniform4(any::<i16>()),
        s in -1000.0f64..1000.0,
    ) {
        let pa = Pack::<u8, 4>::from_array(a);
        let pb = Pack::<i16, 4>::from_array(b);
        let widened: Pack<i32, 4> = pa * pb;
        let scaled: Pack<f64, 4> = s * pa;
        for i in 0..4 {
            prop_assert_eq!(widened[i], a[i] as i32 * b[i] as i32);
            prop_assert_eq!(scaled[i], s * a[i] as f64);
        }
    }

    // Property: comparison masks hold exactly 0 or -1
    #[test]
    fn prop_masks_are_exact(
        a in prop::array::uniform16(any::<u8>()),
        b in prop::array::uniform16(any::<u8>()),
    ) {
        let pa = Pack::<u8, 16>::from_array(a);
        let pb = Pack::<u8, 16>::from_array(b);
        let masks = [
            pa.simd_eq(pb), pa.simd_ne(pb), pa.simd_lt(pb),
            pa.simd_le(pb), pa.simd_gt(pb), pa.simd_ge(pb),
        ];
        for mask in masks {
            prop_assert!(mask.is_mask());
        }
        for i in 0..16 {
            prop_assert_eq!(masks[0][i] == -1, a[i] == b[i]);
            prop_assert_eq!(masks[2][i] == -1, a[i] < b[i]);
            prop_assert_eq!(masks[5][i] == -1, a[i] >= b[i]);
        }
    }

    // Property: blend with constant masks returns one branch unchanged
    #[test]
    fn prop_blend_identities(
        yes in prop::array::uniform8(any::<i16>()),
        no in prop::array::uniform8(any::<i16>()),
        picks in prop::array::uniform8(any::<bool>()),
    ) {
        let yes = Pack::<i16, 8>::from_array(yes);
        let no = Pack::<i16, 8>::from_array(no);
        prop_assert_eq!(blend(Pack::<i16, 8>::all_true(), yes, no), yes);
        prop_assert_eq!(blend(Pack::<i16, 8>::all_false(), yes, no), no);

        let mask = Pack::<i16, 8>::mask_from_bools(picks);
        let mixed = mask.blend(yes, no);
        for i in 0..8 {
            prop_assert_eq!(mixed[i], if picks[i] { yes[i] } else { no[i] });
        }
    }

    // Property: shuffle by any index pack reads `src[idx mod N]`
    #[test]
    fn prop_shuffle_wraps(
        src in prop::array::uniform8(any::<i64>()),
        idx in prop::array::uniform8(any::<i32>()),
    ) {
        let p = Pack::<i64, 8>::from_array(src);
        let r = p.shuffle_self(Pack::<i32, 8>::from_array(idx));
        for i in 0..8 {
            prop_assert_eq!(r[i], src[idx[i].rem_euclid(8) as usize]);
        }

        let identity: Pack<u8, 8> = Pack::from_fn(|i| i as u8);
        prop_assert_eq!(p.shuffle_self(identity), p);
    }

    // Property: two-source shuffle reads the concatenation `a ++ b`
    #[test]
    fn prop_two_source_shuffle(
        a in prop::array::uniform4(any::<u32>()),
        b in prop::array::uniform4(any::<u32>()),
        idx in prop::array::uniform4(any::<i16>()),
    ) {
        let r = shuffle(
            Pack::<u32, 4>::from_array(a),
            Pack::<u32, 4>::from_array(b),
            Pack::<i16, 4>::from_array(idx),
        );
        let joined: Vec<u32> = a.iter().chain(b.iter()).copied().collect();
        for i in 0..4 {
            prop_assert_eq!(r[i], joined[idx[i].rem_euclid(8) as usize]);
        }
    }

    // Property: folds equal the sequential left fold from lane 0
    #[test]
    fn prop_folds_are_sequential(lanes in prop::array::uniform8(-1e30f64..1e30)) {
        let p = Pack::<f64, 8>::from_array(lanes);
        let mut expected = lanes[0];
        for &x in &lanes[1..] {
            expected += x;
        }
        prop_assert_eq!(p.sum().to_bits(), expected.to_bits());

        let max = lanes.iter().copied().fold(lanes[0], |acc, x| if x > acc { x } else { acc });
        prop_assert_eq!(p.reduce_max(), max);
    }

    // Property: aligned and unaligned loads read identical lanes
    #[test]
    fn prop_load_store_round_trip(lanes in prop::array::uniform4(any::<f64>())) {
        let p = Pack::<f64, 4>::from_array(lanes);
        let mut buffer = vec![0.0f64; 9];
        p.storeu_slice(&mut buffer[1..]).unwrap();
        let back = Pack::<f64, 4>::loadu_slice(&buffer[1..]).unwrap();
        for i in 0..4 {
            prop_assert_eq!(back[i].to_bits(), lanes[i].to_bits());
        }
    }
}
