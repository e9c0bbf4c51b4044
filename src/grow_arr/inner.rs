use core::alloc::Layout;
use core::cmp;
use core::ptr;
use core::ptr::NonNull;

use crate::alloc::ArrayAllocator;
use crate::types::ErrorReason;
use crate::types::GrowArrErr;
use crate::types::GrowArrResult;
use crate::types::SizeType;

fn layout_array(layout: Layout, length: usize) -> GrowArrResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(GrowArrErr::new(ErrorReason::UsizeOverflow));
    };
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(GrowArrErr::new(ErrorReason::LayoutFailure));
    };
    return Ok(lay);
}

/// The smallest capacity the geometric growth starts from.
const fn min_non_zero_cap(elem_size: usize) -> usize {
    if elem_size == 1 {
        return 8;
    }
    if elem_size <= 1024 {
        return 4;
    }
    return 1;
}

/// The untyped part of a `GrowArr`: the buffer, its bookkeeping and its allocator.
///
/// The element layout is passed in by the caller, so one copy of this code serves every
/// element type. `Inner` never drops elements and does not free the buffer on its own.
pub(crate) struct Inner<A: ArrayAllocator, S: SizeType = i32> {
    ptr:               NonNull<u8>,
    pub(crate) length: S,
    capacity:          S,
    alloc:             A,
}

impl<A: ArrayAllocator, S: SizeType> Inner<A, S> {
    pub(crate) const fn new_in<T>(alloc: A) -> Self {
        return Self {
            ptr:      NonNull::<T>::dangling().cast(),
            length:   S::ZERO_VALUE,
            capacity: S::ZERO_VALUE,
            alloc:    alloc,
        };
    }

    /// The logical capacity. For zero sized elements no memory backs it.
    #[inline]
    pub(crate) const fn capacity(&self) -> S {
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn get_ptr<T>(&self) -> *mut T {
        return self.ptr.as_ptr().cast();
    }

    #[inline]
    pub(crate) const fn allocator(&self) -> &A {
        return &self.alloc;
    }

    /// Makes room for at least `min_capacity` elements of `layout`.
    ///
    /// When `exact` is false the capacity grows geometrically, so a run of pushes only
    /// reallocates a logarithmic number of times. Nothing changes on failure.
    pub(crate) fn reserve(&mut self, min_capacity: S, layout: Layout, exact: bool) -> GrowArrResult<()> {
        if min_capacity <= self.capacity {
            return Ok(());
        }
        let new_capacity = if exact {
            min_capacity
        } else {
            self.grown_capacity(min_capacity, layout.size())
        };
        return self.realloc(new_capacity, layout);
    }

    fn grown_capacity(&self, min_capacity: S, elem_size: usize) -> S {
        let doubled = self.capacity.checked_add(self.capacity).unwrap_or(S::MAX_VALUE);
        let floor = S::from_usize(min_non_zero_cap(elem_size)).unwrap_or(S::MAX_VALUE);
        return cmp::max(min_capacity, cmp::max(doubled, floor));
    }

    fn realloc(&mut self, new_capacity: S, layout: Layout) -> GrowArrResult<()> {
        let Some(cap) = new_capacity.to_usize() else {
            return Err(GrowArrErr::new(ErrorReason::UsizeOverflow));
        };
        let new_layout = layout_array(layout, cap)?;

        // Zero sized elements only need the bookkeeping.
        if new_layout.size() == 0 {
            self.capacity = new_capacity;
            return Ok(());
        }

        let fresh = self.capacity == S::ZERO_VALUE;
        let ret = if fresh {
            self.alloc.allocate(new_layout)
        } else {
            let old_layout = self.current_layout(layout)?;
            unsafe { self.alloc.grow(self.ptr, old_layout, new_layout) }
        };
        let Ok(ptr) = ret else {
            #[cfg(feature = "log")]
            log::debug!(
                "allocator refused {} bytes for {} slots",
                new_layout.size(),
                new_capacity
            );
            return Err(GrowArrErr::new(ErrorReason::AllocFailure));
        };

        #[cfg(feature = "log")]
        {
            if fresh {
                log::trace!("buffer of {} slots allocated", new_capacity);
            } else {
                log::trace!("buffer grown from {} to {} slots", self.capacity, new_capacity);
            }
        }

        self.ptr = ptr.cast();
        self.capacity = new_capacity;
        return Ok(());
    }

    fn current_layout(&self, layout: Layout) -> GrowArrResult<Layout> {
        let Some(cap) = self.capacity.to_usize() else {
            return Err(GrowArrErr::new(ErrorReason::UsizeOverflow));
        };
        return layout_array(layout, cap);
    }

    /// Gives the buffer back to the allocator. Live elements must already be dropped.
    pub(crate) fn release(&mut self, layout: Layout) {
        debug_assert!(self.length == S::ZERO_VALUE);
        if self.capacity == S::ZERO_VALUE {
            return;
        }
        if layout.size() == 0 {
            self.capacity = S::ZERO_VALUE;
            return;
        }
        if let Ok(old_layout) = self.current_layout(layout) {
            unsafe { self.alloc.deallocate(self.ptr, old_layout) };
        }

        #[cfg(feature = "log")]
        log::trace!("buffer of {} slots released", self.capacity);

        let dangling = ptr::without_provenance_mut::<u8>(layout.align());
        self.ptr = NonNull::new(dangling).unwrap_or(NonNull::dangling());
        self.capacity = S::ZERO_VALUE;
    }
}
