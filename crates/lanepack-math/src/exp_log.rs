//! Exponentials and logarithms

use lanepack_core::{map, FloatLane, LaneCount, Pack, SupportedLaneCount};

lanewise_unary! {
    /// `e^x`
    exp,
    /// `2^x`
    exp2,
    /// `e^x - 1`, accurate near zero
    exp_m1,
    /// Natural logarithm; `-inf` at zero, NaN below zero
    ln,
    log2,
    log10,
    /// `ln(1 + x)`, accurate near zero
    ln_1p,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lanepack_core::pack;

    #[test]
    fn test_exp_ln_inverse() {
        let p: Pack<f64, 4> = pack![0.1, 1.0, 2.5, 10.0];
        let back = ln(exp(p));
        for i in 0..4 {
            assert_relative_eq!(back[i], p[i], max_relative = 1e-14);
        }
    }

    #[test]
    fn test_log_edge_cases() {
        let p: Pack<f32, 4> = pack![0.0, -1.0, 1.0, f32::INFINITY];
        let r = ln(p);
        assert_eq!(r[0], f32::NEG_INFINITY);
        assert!(r[1].is_nan());
        assert_eq!(r[2], 0.0);
        assert_eq!(r[3], f32::INFINITY);
    }

    #[test]
    fn test_base_two_and_ten() {
        let p: Pack<f64, 4> = pack![1.0, 8.0, 1024.0, 0.5];
        assert_eq!(log2(p).to_array(), [0.0, 3.0, 10.0, -1.0]);
        assert_eq!(exp2(log2(p)).to_array(), p.to_array());
        assert_eq!(log10(Pack::<f64, 2>::from_array([100.0, 1000.0])).to_array(), [2.0, 3.0]);
    }

    #[test]
    fn test_small_argument_forms() {
        let tiny = Pack::<f64, 2>::from_array([1e-18, -1e-18]);
        assert_eq!(exp_m1(tiny).to_array(), [1e-18, -1e-18]);
        assert_eq!(ln_1p(tiny).to_array(), [1e-18, -1e-18]);
    }
}
