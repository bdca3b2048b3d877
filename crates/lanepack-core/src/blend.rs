//! Per-lane selection between two operands

use crate::lane::Lane;
use crate::lane_count::{LaneCount, SupportedLaneCount};
use crate::pack::Pack;
use crate::promote::{promote_pair, Operand, Promote, Promoted};

/// Common lane type of a blend's test, `yes` and `no` lane types
pub type Blended<M, Y, No> = Promoted<M, Promoted<Y, No>>;

/// Lane `i` is `yes[i]` where `test[i]` is truthy, else `no[i]`
///
/// `test` may be a mask or any numeric pack: nonzero lanes select `yes`,
/// NaN counts as nonzero, both signed zeros select `no`. Scalars are
/// broadcast. The result lane type is the common type of all three operands,
/// so an `f64` test over `f32` branches yields `f64` lanes. Truthiness is read
/// from `test` before any conversion.
#[inline]
pub fn blend<M, Y, No, const N: usize>(
    test: Pack<M, N>,
    yes: Y,
    no: No,
) -> Pack<Blended<M, Y::Lane, No::Lane>, N>
where
    M: Promote<Promoted<Y::Lane, No::Lane>>,
    Y: Operand<N>,
    No: Operand<N>,
    Y::Lane: Promote<No::Lane>,
    LaneCount<N>: SupportedLaneCount,
{
    let (yes, no) = promote_pair(yes.into_pack(), no.into_pack());
    let widen = <M as Promote<Promoted<Y::Lane, No::Lane>>>::promote_rhs;
    Pack::from_fn(|i| {
        if test[i].is_truthy() {
            widen(yes[i])
        } else {
            widen(no[i])
        }
    })
}

impl<M: Lane, const N: usize> Pack<M, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Select from `yes` or `no` per lane of `self`; see [`blend`]
    #[inline]
    pub fn blend<Y, No>(self, yes: Y, no: No) -> Pack<Blended<M, Y::Lane, No::Lane>, N>
    where
        M: Promote<Promoted<Y::Lane, No::Lane>>,
        Y: Operand<N>,
        No: Operand<N>,
        Y::Lane: Promote<No::Lane>,
    {
        blend(self, yes, no)
    }
}
