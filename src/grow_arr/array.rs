use core::alloc::Layout;
use core::fmt;
use core::iter;
use core::marker::PhantomData;
use core::mem;
use core::ops::Index;
use core::ops::IndexMut;
use core::ptr;
use core::slice;

use super::inner::Inner;
#[cfg(feature = "std_alloc")]
use crate::alloc::Global;
use crate::alloc::ArrayAllocator;
use crate::types::ErrorReason;
use crate::types::GrowArrErr;
use crate::types::GrowArrResult;
use crate::types::SizeType;

/// A contiguous growable array with an explicit split between size and capacity.
///
/// `S` is the signed integer type used for the size, the capacity and indices. `A` is the
/// allocator the buffer comes from.
///
/// Slots in `[len(), capacity())` are reserved but hold no value. Any operation that grows
/// the buffer may move the elements, which the borrow checker already enforces since all of
/// them take `&mut self`. Every Rust type can be moved by a plain copy of its bytes, so
/// reallocation never needs to run code for the elements.
///
/// The array has a single owner and is neither `Send` nor `Sync`.
#[cfg(feature = "std_alloc")]
pub struct GrowArr<T, A: ArrayAllocator = Global, S: SizeType = i32> {
    inner: Inner<A, S>,
    _ph:   PhantomData<T>,
}

/// A contiguous growable array with an explicit split between size and capacity.
///
/// `S` is the signed integer type used for the size, the capacity and indices. `A` is the
/// allocator the buffer comes from.
#[cfg(not(feature = "std_alloc"))]
pub struct GrowArr<T, A: ArrayAllocator, S: SizeType = i32> {
    inner: Inner<A, S>,
    _ph:   PhantomData<T>,
}

#[cold]
#[track_caller]
fn index_out_of_range<S: SizeType>(index: S, len: S) -> ! {
    panic!("index out of range: the len is {len} but the index is {index}");
}

const fn precondition() -> GrowArrErr {
    return GrowArrErr::new(ErrorReason::PreconditionViolation);
}

impl<T, A: ArrayAllocator, S: SizeType> GrowArr<T, A, S> {
    const LAYOUT: Layout = Layout::new::<T>();

    /// Creates an empty array without allocating.
    pub const fn new_in(alloc: A) -> Self {
        return Self {
            inner: Inner::new_in::<T>(alloc),
            _ph:   PhantomData,
        };
    }

    /// Creates an empty array with room for at least `capacity` elements.
    ///
    /// A negative capacity is the same as zero.
    pub fn with_capacity_in(alloc: A, capacity: S) -> GrowArrResult<Self> {
        let mut arr = Self::new_in(alloc);
        arr.inner.reserve(capacity, Self::LAYOUT, true)?;
        return Ok(arr);
    }

    /// Creates an array of `size` default values. The capacity is exactly `size`.
    pub fn with_size_in(alloc: A, size: S) -> GrowArrResult<Self>
    where
        T: Default,
    {
        let mut arr = Self::sized_for(alloc, size)?;
        unsafe { arr.fill_to(size, T::default) };
        return Ok(arr);
    }

    /// Creates an array of `size` clones of `pad`. The capacity is exactly `size`.
    pub fn with_size_padded_in(alloc: A, size: S, pad: &T) -> GrowArrResult<Self>
    where
        T: Clone,
    {
        let mut arr = Self::sized_for(alloc, size)?;
        unsafe { arr.fill_to(size, || pad.clone()) };
        return Ok(arr);
    }

    fn sized_for(alloc: A, size: S) -> GrowArrResult<Self> {
        Self::checked_size(size)?;
        return Self::with_capacity_in(alloc, size);
    }

    /// Validates a requested size, which must be non negative and addressable.
    fn checked_size(size: S) -> GrowArrResult<usize> {
        if size < S::ZERO_VALUE {
            return Err(precondition());
        }
        let Some(size) = size.to_usize() else {
            return Err(GrowArrErr::new(ErrorReason::UsizeOverflow));
        };
        return Ok(size);
    }

    #[inline]
    pub const fn len(&self) -> S {
        return self.inner.length;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.inner.length == S::ZERO_VALUE;
    }

    /// The number of reserved slots, always at least `len()`.
    #[inline]
    pub const fn capacity(&self) -> S {
        return self.inner.capacity();
    }

    pub const fn allocator(&self) -> &A {
        return self.inner.allocator();
    }

    /// Makes sure the array can hold at least `min_capacity` elements without reallocating.
    ///
    /// Growth is geometric, so the new capacity may be larger than asked for. Does nothing
    /// if the capacity already suffices.
    pub fn reserve(&mut self, min_capacity: S) -> GrowArrResult<()> {
        return self.inner.reserve(min_capacity, Self::LAYOUT, false);
    }

    /// Like `reserve`, but a reallocation makes the capacity exactly `min_capacity`.
    pub fn reserve_exact(&mut self, min_capacity: S) -> GrowArrResult<()> {
        return self.inner.reserve(min_capacity, Self::LAYOUT, true);
    }

    /// Grows the array to `size` elements, appending default values.
    ///
    /// Does nothing when the array already has `size` or more elements.
    pub fn grow_to(&mut self, size: S) -> GrowArrResult<()>
    where
        T: Default,
    {
        return self.grow_with(size, T::default);
    }

    /// Grows the array to `size` elements, appending clones of `pad`.
    ///
    /// Does nothing when the array already has `size` or more elements.
    pub fn grow_to_padded(&mut self, size: S, pad: &T) -> GrowArrResult<()>
    where
        T: Clone,
    {
        return self.grow_with(size, || pad.clone());
    }

    fn grow_with<F: FnMut() -> T>(&mut self, size: S, f: F) -> GrowArrResult<()> {
        if self.inner.length >= size {
            return Ok(());
        }
        Self::checked_size(size)?;
        self.inner.reserve(size, Self::LAYOUT, false)?;
        unsafe { self.fill_to(size, f) };
        return Ok(());
    }

    /// Drops the elements past `size`, keeping the capacity.
    ///
    /// Fails with `PreconditionViolation` if `size` is negative or larger than `len()`.
    pub fn shrink(&mut self, size: S) -> GrowArrResult<()> {
        if size < S::ZERO_VALUE || size > self.inner.length {
            return Err(precondition());
        }
        self.truncate_to(size);
        return Ok(());
    }

    /// Drops every element. The buffer is kept for reuse.
    pub fn clear(&mut self) {
        self.truncate_to(S::ZERO_VALUE);
    }

    /// Drops every element and gives the buffer back to the allocator.
    pub fn clear_and_release(&mut self) {
        self.clear();
        self.inner.release(Self::LAYOUT);
    }

    fn truncate_to(&mut self, size: S) {
        let old_len = self.len_usize();
        // Shorten first, so a panicking destructor can't lead to a double drop.
        self.inner.length = size;
        let new_len = self.len_usize();
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(new_len), old_len - new_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Appends `item`, growing the buffer when it is full.
    ///
    /// On failure `item` is dropped and the array is unchanged.
    pub fn push(&mut self, item: T) -> GrowArrResult<()> {
        let len = self.inner.length;
        let Some(new_len) = len.checked_add(S::ONE_VALUE) else {
            return Err(GrowArrErr::new(ErrorReason::CapacityOverflow));
        };
        if new_len.to_usize().is_none() {
            return Err(GrowArrErr::new(ErrorReason::UsizeOverflow));
        }

        if len >= self.capacity() {
            self.inner.reserve(new_len, Self::LAYOUT, false)?;
        }

        let loc = unsafe { self.as_mut_ptr().add(self.len_usize()) };
        unsafe { ptr::write(loc, item) };
        self.inner.length = new_len;
        return Ok(());
    }

    /// Appends `T::default()`.
    pub fn push_default(&mut self) -> GrowArrResult<()>
    where
        T: Default,
    {
        return self.push(T::default());
    }

    /// Removes the last element and returns it.
    ///
    /// Fails with `PreconditionViolation` on an empty array. The capacity is kept.
    pub fn pop(&mut self) -> GrowArrResult<T> {
        if self.is_empty() {
            return Err(precondition());
        }
        self.inner.length -= S::ONE_VALUE;
        let ret = unsafe { ptr::read(self.as_ptr().add(self.len_usize())) };
        return Ok(ret);
    }

    /// The last element. Fails with `PreconditionViolation` on an empty array.
    pub fn last(&self) -> GrowArrResult<&T> {
        return self.as_slice().last().ok_or(precondition());
    }

    pub fn last_mut(&mut self) -> GrowArrResult<&mut T> {
        return self.as_mut_slice().last_mut().ok_or(precondition());
    }

    /// The element at `index`, or `IndexOutOfRange` unless `0 <= index < len()`.
    pub fn at(&self, index: S) -> GrowArrResult<&T> {
        let out_of_range = GrowArrErr::new(ErrorReason::IndexOutOfRange);
        let Some(index) = index.to_usize() else {
            return Err(out_of_range);
        };
        return self.as_slice().get(index).ok_or(out_of_range);
    }

    pub fn at_mut(&mut self, index: S) -> GrowArrResult<&mut T> {
        let out_of_range = GrowArrErr::new(ErrorReason::IndexOutOfRange);
        let Some(index) = index.to_usize() else {
            return Err(out_of_range);
        };
        return self.as_mut_slice().get_mut(index).ok_or(out_of_range);
    }

    /// Replaces the contents of `other` with clones of the elements of this array.
    ///
    /// `other` keeps its own allocator and buffer. Room is reserved before its old elements are
    /// dropped, so on failure `other` is left untouched.
    pub fn copy_to<B: ArrayAllocator>(&self, other: &mut GrowArr<T, B, S>) -> GrowArrResult<()>
    where
        T: Clone,
    {
        other.reserve_exact(self.inner.length)?;
        other.clear();
        unsafe { other.extend_within_capacity(self.iter().cloned()) };
        return Ok(());
    }

    /// Makes an independent copy of this array with a clone of its allocator.
    ///
    /// The copy's capacity is exactly `len()`.
    pub fn try_clone(&self) -> GrowArrResult<Self>
    where
        T: Clone,
        A: Clone,
    {
        let mut copy = Self::with_capacity_in(self.allocator().clone(), self.inner.length)?;
        unsafe { copy.extend_within_capacity(self.iter().cloned()) };
        return Ok(copy);
    }

    /// Hands the buffer over to `other` without touching the elements.
    ///
    /// The previous contents of `other` are dropped and its buffer released. Afterwards this
    /// array is empty, has no buffer, and holds the allocator `other` had.
    pub fn move_to(&mut self, other: &mut Self) {
        mem::swap(self, other);
        self.clear_and_release();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len_usize()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len_usize()) }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        return self.as_slice().iter();
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        return self.as_mut_slice().iter_mut();
    }

    /// Raw pointer to the first slot, for FFI. Dangling when nothing is allocated.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.inner.get_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.inner.get_ptr();
    }

    /// The length is never negative and always fits a `usize`, both are checked on the way in.
    #[inline]
    fn len_usize(&self) -> usize {
        return self.inner.length.to_usize().unwrap_or(0);
    }

    /// # Safety
    ///
    /// The capacity must be at least `size`, and `size` must fit a `usize`.
    unsafe fn fill_to<F: FnMut() -> T>(&mut self, size: S, f: F) {
        let count = size.to_usize().unwrap_or(0).saturating_sub(self.len_usize());
        unsafe { self.extend_within_capacity(iter::repeat_with(f).take(count)) };
    }

    /// Writes the items after the last element, one at a time, so a panic in the iterator
    /// leaves every written item owned by the array.
    ///
    /// # Safety
    ///
    /// The spare capacity must hold every item the iterator yields.
    unsafe fn extend_within_capacity<I: Iterator<Item = T>>(&mut self, items: I) {
        let base = self.as_mut_ptr();
        for item in items {
            unsafe { base.add(self.len_usize()).write(item) };
            self.inner.length += S::ONE_VALUE;
        }
    }
}

#[cfg(feature = "std_alloc")]
impl<T, S: SizeType> GrowArr<T, Global, S> {
    /// Creates an empty array using the global allocator.
    pub const fn new() -> Self {
        return Self::new_in(Global);
    }

    pub fn with_capacity(capacity: S) -> GrowArrResult<Self> {
        return Self::with_capacity_in(Global, capacity);
    }

    pub fn with_size(size: S) -> GrowArrResult<Self>
    where
        T: Default,
    {
        return Self::with_size_in(Global, size);
    }

    pub fn with_size_padded(size: S, pad: &T) -> GrowArrResult<Self>
    where
        T: Clone,
    {
        return Self::with_size_padded_in(Global, size, pad);
    }
}

#[cfg(feature = "std_alloc")]
impl<T, S: SizeType> Default for GrowArr<T, Global, S> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T, A: ArrayAllocator, S: SizeType> Drop for GrowArr<T, A, S> {
    fn drop(&mut self) {
        self.clear_and_release();
    }
}

impl<T, A: ArrayAllocator, S: SizeType> Index<S> for GrowArr<T, A, S> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: S) -> &T {
        match self.at(index) {
            Ok(item) => item,
            Err(_) => index_out_of_range(index, self.len()),
        }
    }
}

impl<T, A: ArrayAllocator, S: SizeType> IndexMut<S> for GrowArr<T, A, S> {
    #[track_caller]
    fn index_mut(&mut self, index: S) -> &mut T {
        let len = self.len();
        match self.at_mut(index) {
            Ok(item) => item,
            Err(_) => index_out_of_range(index, len),
        }
    }
}

impl<T: fmt::Debug, A: ArrayAllocator, S: SizeType> fmt::Debug for GrowArr<T, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<T, A, B, S> PartialEq<GrowArr<T, B, S>> for GrowArr<T, A, S>
where
    T: PartialEq,
    A: ArrayAllocator,
    B: ArrayAllocator,
    S: SizeType,
{
    fn eq(&self, other: &GrowArr<T, B, S>) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq, A: ArrayAllocator, S: SizeType> Eq for GrowArr<T, A, S> {}

impl<T, A: ArrayAllocator, S: SizeType> AsRef<[T]> for GrowArr<T, A, S> {
    fn as_ref(&self) -> &[T] {
        return self.as_slice();
    }
}

impl<T, A: ArrayAllocator, S: SizeType> AsMut<[T]> for GrowArr<T, A, S> {
    fn as_mut(&mut self) -> &mut [T] {
        return self.as_mut_slice();
    }
}

impl<'a, T, A: ArrayAllocator, S: SizeType> IntoIterator for &'a GrowArr<T, A, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<'a, T, A: ArrayAllocator, S: SizeType> IntoIterator for &'a mut GrowArr<T, A, S> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter_mut();
    }
}
