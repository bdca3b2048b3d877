//! The `Pack<T, N>` lane container
//!
//! A pack is `N` lanes of one scalar type stored contiguously with
//! alignment `N * size_of::<T>()`. It is a plain `Copy` value: no sharing, no
//! interior mutability, zero-initialised by default.

use num_traits::AsPrimitive;
use std::mem::{align_of, size_of};
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::lane::{Lane, MaskLane};
use crate::lane_count::{LaneCount, SupportedLaneCount};

/// Fixed-width vector of `N` lanes of type `T`
///
/// Compound assignment (`+=`, `<<=`, ...) returns `()` as it does for every
/// Rust type, so chained updates are written as separate statements:
///
/// ```rust
/// use lanepack_core::Pack;
///
/// let mut x = Pack::<i32, 4>::splat(3);
/// x += 1i32;
/// x *= 2i32;
/// assert_eq!(x.to_array(), [8; 4]);
/// ```
///
/// Both sides of a binary operator must have the same lane count:
///
/// ```compile_fail
/// use lanepack_core::Pack;
///
/// let _ = Pack::<f32, 4>::splat(1.0) + Pack::<f32, 8>::splat(1.0);
/// ```
///
/// Bitwise operators and `!` exist only for integer lanes:
///
/// ```compile_fail
/// use lanepack_core::Pack;
///
/// let _ = !Pack::<f32, 4>::splat(1.0);
/// ```
///
/// ```compile_fail
/// use lanepack_core::Pack;
///
/// let _ = Pack::<f32, 4>::splat(1.0) & Pack::<f32, 4>::splat(1.0);
/// ```
///
/// ```compile_fail
/// use lanepack_core::Pack;
///
/// let _ = Pack::<f64, 2>::splat(1.0) << 1i32;
/// ```
#[repr(C)]
pub struct Pack<T: Lane, const N: usize>
where
    LaneCount<N>: SupportedLaneCount,
{
    lanes: [T; N],
    _align: [<LaneCount<N> as SupportedLaneCount>::Align<T::Width>; 0],
}

/// Comparison result for lanes of type `T`: signed lanes of the same width
/// holding only `0` or `-1`
pub type Mask<T, const N: usize> = Pack<<T as Lane>::Mask, N>;

/// Build a pack from an exact lane list
///
/// ```rust
/// use lanepack_core::{pack, Pack};
///
/// let p: Pack<i32, 4> = pack![1, 2, 3, 4];
/// assert_eq!(p[2], 3);
/// ```
#[macro_export]
macro_rules! pack {
    ($($lane:expr),+ $(,)?) => {
        $crate::Pack::from_array([$($lane),+])
    };
}

impl<T: Lane, const N: usize> Clone for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Lane, const N: usize> Copy for Pack<T, N> where LaneCount<N>: SupportedLaneCount {}

impl<T: Lane, const N: usize> Default for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline]
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: Lane, const N: usize> PartialEq for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Whole-pack equality; use `simd_eq` for a per-lane mask
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lanes == other.lanes
    }
}

impl<T: Lane, const N: usize> Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Number of lanes
    pub const LANES: usize = N;

    /// Alignment of the aligned layout in bytes (`N * size_of::<T>()`)
    pub const ALIGN: usize = align_of::<Self>();

    /// Size of the pack in bytes
    pub const BYTES: usize = N * size_of::<T>();

    /// Build a pack from an exact lane list
    #[inline(always)]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self { lanes, _align: [] }
    }

    /// All lanes zero
    #[inline(always)]
    pub fn zeroed() -> Self {
        Self::from_array([T::ZERO; N])
    }

    /// All lanes set to `value`
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// All lanes set to `value` converted with `as` semantics
    #[inline]
    pub fn broadcast<V>(value: V) -> Self
    where
        V: AsPrimitive<T>,
    {
        Self::splat(value.as_())
    }

    /// Lane `i` is `f(i)`, evaluated in lane order
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        let mut lanes = [T::ZERO; N];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = f(i);
        }
        Self::from_array(lanes)
    }

    /// Build a pack from a slice holding exactly `N` lanes
    pub fn from_slice(lanes: &[T]) -> Result<Self> {
        if lanes.len() != N {
            return Err(Error::lane_count(N, lanes.len()));
        }
        Ok(Self::from_fn(|i| lanes[i]))
    }

    /// Read `N` lanes from `ptr` using the aligned layout
    ///
    /// # Safety
    /// `ptr` must be valid for reading `N` lanes and aligned to
    /// [`Self::ALIGN`] bytes. Use [`Pack::loadu`] when alignment is unknown.
    #[inline(always)]
    pub unsafe fn load(ptr: *const T) -> Self {
        debug_assert!(
            ptr as usize % Self::ALIGN == 0,
            "Pack::load requires {}-byte alignment",
            Self::ALIGN
        );
        ptr.cast::<Self>().read()
    }

    /// Read `N` lanes from `ptr` without any alignment requirement
    ///
    /// # Safety
    /// `ptr` must be valid for reading `N` lanes.
    #[inline(always)]
    pub unsafe fn loadu(ptr: *const T) -> Self {
        Self::from_array(ptr.cast::<[T; N]>().read_unaligned())
    }

    /// Checked aligned load from the first `N` lanes of `buffer`
    pub fn load_aligned(buffer: &[T]) -> Result<Self> {
        Self::check_len(buffer.len())?;
        Self::check_aligned(buffer.as_ptr())?;
        // Safety: length and alignment checked above
        Ok(unsafe { Self::load(buffer.as_ptr()) })
    }

    /// Checked unaligned load from the first `N` lanes of `buffer`
    pub fn loadu_slice(buffer: &[T]) -> Result<Self> {
        Self::check_len(buffer.len())?;
        // Safety: length checked above
        Ok(unsafe { Self::loadu(buffer.as_ptr()) })
    }

    /// Read `N` lanes from a byte buffer of any alignment
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let width = size_of::<T>();
        if bytes.len() < Self::BYTES {
            return Err(Error::lane_count(N, bytes.len() / width));
        }
        Ok(Self::from_fn(|i| {
            bytemuck::pod_read_unaligned(&bytes[i * width..(i + 1) * width])
        }))
    }

    /// Write the lanes to `ptr` using the aligned layout
    ///
    /// # Safety
    /// `ptr` must be valid for writing `N` lanes and aligned to
    /// [`Self::ALIGN`] bytes.
    #[inline(always)]
    pub unsafe fn store(self, ptr: *mut T) {
        debug_assert!(
            ptr as usize % Self::ALIGN == 0,
            "Pack::store requires {}-byte alignment",
            Self::ALIGN
        );
        ptr.cast::<Self>().write(self)
    }

    /// Write the lanes to `ptr` without any alignment requirement
    ///
    /// # Safety
    /// `ptr` must be valid for writing `N` lanes.
    #[inline(always)]
    pub unsafe fn storeu(self, ptr: *mut T) {
        ptr.cast::<[T; N]>().write_unaligned(self.lanes)
    }

    /// Checked aligned store into the first `N` lanes of `buffer`
    pub fn store_aligned(self, buffer: &mut [T]) -> Result<()> {
        Self::check_len(buffer.len())?;
        Self::check_aligned(buffer.as_ptr())?;
        // Safety: length and alignment checked above
        unsafe { self.store(buffer.as_mut_ptr()) };
        Ok(())
    }

    /// Checked unaligned store into the first `N` lanes of `buffer`
    pub fn storeu_slice(self, buffer: &mut [T]) -> Result<()> {
        Self::check_len(buffer.len())?;
        buffer[..N].copy_from_slice(&self.lanes);
        Ok(())
    }

    #[inline]
    fn check_len(len: usize) -> Result<()> {
        if len < N {
            return Err(Error::lane_count(N, len));
        }
        Ok(())
    }

    #[inline]
    fn check_aligned(ptr: *const T) -> Result<()> {
        if ptr as usize % Self::ALIGN != 0 {
            return Err(Error::misaligned(ptr, Self::ALIGN));
        }
        Ok(())
    }

    /// Lane bytes in memory order
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lanes[..])
    }

    /// Elementwise numeric conversion with `as` semantics
    ///
    /// Float to integer truncates toward zero (saturating, NaN becomes 0),
    /// integer widening sign- or zero-extends, narrowing wraps.
    #[inline]
    pub fn cast<V>(self) -> Pack<V, N>
    where
        V: Lane,
        T: AsPrimitive<V>,
    {
        self.map(AsPrimitive::as_)
    }

    /// Lane `i`, or `IndexOutOfRange`
    #[inline]
    pub fn get(&self, index: usize) -> Result<T> {
        self.lanes
            .get(index)
            .copied()
            .ok_or_else(|| Error::index_out_of_range(index, N))
    }

    /// Overwrite lane `i`, or `IndexOutOfRange`
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let lane = self
            .lanes
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, N))?;
        *lane = value;
        Ok(())
    }

    #[inline(always)]
    pub fn lanes(&self) -> &[T] {
        &self.lanes
    }

    #[inline(always)]
    pub fn lanes_mut(&mut self) -> &mut [T] {
        &mut self.lanes
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.lanes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.lanes.iter()
    }

    /// Apply `f` to every lane in lane order
    #[inline]
    pub fn map<R, F>(self, mut f: F) -> Pack<R, N>
    where
        R: Lane,
        F: FnMut(T) -> R,
    {
        Pack::from_fn(|i| f(self.lanes[i]))
    }

    /// Lane `i` is `f(self[i], other[i])`, in lane order
    #[inline]
    pub fn zip_map<U, R, F>(self, other: Pack<U, N>, mut f: F) -> Pack<R, N>
    where
        U: Lane,
        R: Lane,
        F: FnMut(T, U) -> R,
    {
        Pack::from_fn(|i| f(self.lanes[i], other.lanes[i]))
    }
}

impl<M: MaskLane, const N: usize> Pack<M, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Mask with every lane true
    #[inline]
    pub fn all_true() -> Self {
        Self::splat(M::TRUE)
    }

    /// Mask with every lane false
    #[inline]
    pub fn all_false() -> Self {
        Self::splat(M::FALSE)
    }

    /// Mask from per-lane booleans
    #[inline]
    pub fn mask_from_bools(bools: [bool; N]) -> Self {
        Self::from_fn(|i| M::from_bool(bools[i]))
    }

    /// Whether every lane is exactly `0` or `-1`
    #[inline]
    pub fn is_mask(&self) -> bool {
        self.lanes.iter().all(|lane| lane.is_mask_value())
    }

    /// Per-lane booleans of a mask (nonzero lanes are true)
    #[inline]
    pub fn to_bools(self) -> [bool; N] {
        let mut out = [false; N];
        for (flag, lane) in out.iter_mut().zip(self.lanes) {
            *flag = lane.is_truthy();
        }
        out
    }
}

impl<T: Lane, const N: usize> Index<usize> for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = T;

    /// # Panics
    /// Panics if `index >= N`
    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.lanes[index]
    }
}

impl<T: Lane, const N: usize> IndexMut<usize> for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.lanes[index]
    }
}

impl<T: Lane, const N: usize> From<[T; N]> for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn from(lanes: [T; N]) -> Self {
        Self::from_array(lanes)
    }
}

impl<T: Lane, const N: usize> From<Pack<T, N>> for [T; N]
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn from(pack: Pack<T, N>) -> Self {
        pack.lanes
    }
}

impl<T: Lane, const N: usize> IntoIterator for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.lanes.into_iter()
    }
}

impl<'a, T: Lane, const N: usize> IntoIterator for &'a Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.lanes.iter()
    }
}
