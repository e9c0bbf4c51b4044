use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator as Api2Allocator;

use super::AllocError;
use super::ArrayAllocator;

unsafe impl<A: Api2Allocator> ArrayAllocator for A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return <Self as Api2Allocator>::allocate(self, layout).map_err(|_| AllocError);
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { <Self as Api2Allocator>::deallocate(self, ptr, layout) };
    }

    #[inline]
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let grown = unsafe { <Self as Api2Allocator>::grow(self, old_ptr, old_layout, new_layout) };
        return grown.map_err(|_| AllocError);
    }
}
