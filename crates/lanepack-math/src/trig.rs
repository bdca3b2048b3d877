//! Circular and hyperbolic functions, in radians

use lanepack_core::{map, map2, FloatLane, LaneCount, Operand, Pack, SupportedLaneCount};

lanewise_unary! {
    sin,
    cos,
    tan,
    /// Arcsine in `[-pi/2, pi/2]`; NaN outside `[-1, 1]`
    asin,
    /// Arccosine in `[0, pi]`; NaN outside `[-1, 1]`
    acos,
    atan,
    sinh,
    cosh,
    tanh,
    asinh,
    /// NaN below 1
    acosh,
    /// NaN outside `[-1, 1]`, infinite at the endpoints
    atanh,
}

lanewise_binary! {
    /// Four-quadrant arctangent of `y / x` per lane, with `y` from the first
    /// argument
    atan2,
}
