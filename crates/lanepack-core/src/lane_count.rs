//! Supported lane counts and the alignment they imply
//!
//! A pack of `N` lanes of a `W`-byte scalar is aligned to `N * W` bytes. Stable
//! Rust cannot compute `#[repr(align(..))]` from generic parameters, so the
//! alignment is chosen at the type level: every lane type names its byte width
//! (`ByteWidth`), every supported lane count maps a byte width to a zero-sized
//! marker with the right alignment, and the pack carries a zero-length array
//! of that marker.
//!
//! Lane counts outside `{1, 2, 4, 8, 16, 32, 64}` (including zero) have no
//! `SupportedLaneCount` impl, so naming such a pack is a compile error.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Type-level carrier for a lane count
pub struct LaneCount<const N: usize>;

/// Zero-sized alignment marker
pub trait AlignMarker: Copy + Default + Debug + Send + Sync + 'static {}

macro_rules! align_markers {
    ($($name:ident = $bytes:literal),* $(,)?) => {
        $(
            #[doc = concat!("Zero-sized marker aligned to ", stringify!($bytes), " bytes")]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            #[repr(align($bytes))]
            pub struct $name;

            impl AlignMarker for $name {}
        )*
    };
}

align_markers!(
    Align1 = 1,
    Align2 = 2,
    Align4 = 4,
    Align8 = 8,
    Align16 = 16,
    Align32 = 32,
    Align64 = 64,
    Align128 = 128,
    Align256 = 256,
    Align512 = 512,
);

/// Byte width of a lane type, with the alignment of `k` such lanes for every
/// supported lane count `k`
pub trait ByteWidth: Sealed + 'static {
    const BYTES: usize;
    type X1: AlignMarker;
    type X2: AlignMarker;
    type X4: AlignMarker;
    type X8: AlignMarker;
    type X16: AlignMarker;
    type X32: AlignMarker;
    type X64: AlignMarker;
}

macro_rules! byte_widths {
    ($($name:ident = $bytes:literal => [$x1:ty, $x2:ty, $x4:ty, $x8:ty, $x16:ty, $x32:ty, $x64:ty]);* $(;)?) => {
        $(
            #[doc = concat!(stringify!($bytes), "-byte lanes")]
            #[derive(Clone, Copy, Debug)]
            pub struct $name;

            impl Sealed for $name {}

            impl ByteWidth for $name {
                const BYTES: usize = $bytes;
                type X1 = $x1;
                type X2 = $x2;
                type X4 = $x4;
                type X8 = $x8;
                type X16 = $x16;
                type X32 = $x32;
                type X64 = $x64;
            }
        )*
    };
}

byte_widths! {
    W1 = 1 => [Align1, Align2, Align4, Align8, Align16, Align32, Align64];
    W2 = 2 => [Align2, Align4, Align8, Align16, Align32, Align64, Align128];
    W4 = 4 => [Align4, Align8, Align16, Align32, Align64, Align128, Align256];
    W8 = 8 => [Align8, Align16, Align32, Align64, Align128, Align256, Align512];
}

/// Lane counts a pack may have
///
/// ```rust
/// use lanepack_core::Pack;
///
/// assert_eq!(Pack::<i32, 64>::LANES, 64);
/// ```
///
/// Zero lanes is rejected at compile time:
///
/// ```compile_fail
/// use lanepack_core::Pack;
///
/// let _ = Pack::<i32, 0>::zeroed();
/// ```
///
/// So is any count that is not a power of two up to 64:
///
/// ```compile_fail
/// use lanepack_core::Pack;
///
/// let _ = Pack::<i32, 3>::zeroed();
/// ```
///
/// ```compile_fail
/// use lanepack_core::Pack;
///
/// let _ = Pack::<u8, 128>::zeroed();
/// ```
pub trait SupportedLaneCount: Sealed {
    /// Marker aligned to `N * W::BYTES`
    type Align<W: ByteWidth>: AlignMarker;
}

impl<const N: usize> Sealed for LaneCount<N> {}

macro_rules! lane_counts {
    ($($n:literal => $x:ident),* $(,)?) => {
        $(
            impl SupportedLaneCount for LaneCount<$n> {
                type Align<W: ByteWidth> = W::$x;
            }
        )*
    };
}

lane_counts!(1 => X1, 2 => X2, 4 => X4, 8 => X8, 16 => X16, 32 => X32, 64 => X64);
