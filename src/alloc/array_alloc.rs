use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// The source of the buffer behind a `GrowArr`.
///
/// This is the part of the (still unstable) `Allocator` API a growable array needs: getting a
/// block, giving it back, and growing it in place or by moving it. It works in `no_std`
/// environments and is implemented automatically for allocators of the allocator API or of
/// `allocator-api2` when the matching feature is on.
///
/// # Safety
///
/// The same contract as `Allocator`:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
///
/// A block returned by `allocate` or `grow` must stay valid until it is passed to
/// `deallocate` or `grow`, and must fit the requested layout.
pub unsafe trait ArrayAllocator {
    /// Allocates a block of memory fitting `layout`.
    ///
    /// `GrowArr` never asks for a zero sized block.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Returns the block at `ptr` to the allocator.
    ///
    /// # Safety
    ///
    /// `ptr` must come from this allocator, and `layout` must be the layout it was allocated
    /// or last grown with.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Grows the block at `old_ptr` to `new_layout`, keeping the first `old_layout.size()` bytes.
    ///
    /// On failure the old block is untouched and still owned by the caller. On success the old
    /// pointer must no longer be used.
    ///
    /// # Safety
    ///
    /// Same as `deallocate` for `old_ptr`/`old_layout`, and `new_layout` must not be smaller
    /// than `old_layout`.
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        let ptr = new.cast::<u8>();

        unsafe { ptr.copy_from_nonoverlapping(old_ptr, old_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }
}
