pub use global::Global;

#[cfg(feature = "experimental_allocator")]
mod global {
    /// Re-export of the allocator API `Global`.
    pub use std::alloc::Global;
}

#[cfg(not(feature = "experimental_allocator"))]
mod global {
    use core::ptr::NonNull;
    use std::alloc;
    use std::alloc::Layout;

    use crate::alloc::AllocError;
    use crate::alloc::ArrayAllocator;

    /// The process wide allocator behind `std::alloc`.
    ///
    /// Named like the allocator API's `Global`, which replaces it when the
    /// `experimental_allocator` feature is enabled.
    #[derive(Debug, Default, Copy, Clone)]
    pub struct Global;

    unsafe impl ArrayAllocator for Global {
        fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
            // `alloc::alloc()` is undefined for zero sized layouts.
            if layout.size() == 0 {
                return Err(AllocError);
            };
            let ptr = unsafe { alloc::alloc(layout) };
            let Some(ptr) = NonNull::new(ptr) else {
                return Err(AllocError);
            };
            return Ok(NonNull::slice_from_raw_parts(ptr, layout.size()));
        }

        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
        }

        unsafe fn grow(
            &self,
            old_ptr: NonNull<u8>,
            old_layout: Layout,
            new_layout: Layout,
        ) -> Result<NonNull<[u8]>, AllocError> {
            if old_layout.size() == 0 {
                return self.allocate(new_layout);
            }
            // `realloc` keeps the old alignment.
            if new_layout.align() != old_layout.align() {
                return Err(AllocError);
            }

            let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
            let Some(new) = NonNull::new(new) else {
                return Err(AllocError);
            };
            return Ok(NonNull::slice_from_raw_parts(new, new_layout.size()));
        }
    }
}
