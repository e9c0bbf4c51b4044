//! Where a `GrowArr` gets its buffer from.
//!
//! The array only ever asks three things of an allocator: a fresh block for its first
//! reservation, a bigger block when it outgrows the current one, and to take the block back on
//! `clear_and_release` or drop. `ArrayAllocator` is exactly that surface, so it can be written by
//! hand for arena or counting allocators in `no_std` code.
//!
//! Backends, picked with Cargo features:
//! * `std_alloc` (default) provides `Global`, backed by `std::alloc`.
//! * `alloc_api2` accepts any `allocator_api2::alloc::Allocator`.
//! * `experimental_allocator` (nightly) accepts any `core::alloc::Allocator`, and `Global` and
//!   `AllocError` become the ones from the standard library.

#[cfg(all(feature = "alloc_api2", not(feature = "experimental_allocator")))]
mod alloc_api2;
#[cfg(not(feature = "experimental_allocator"))]
mod alloc_error;
#[cfg(feature = "experimental_allocator")]
mod alloc_unstable;
mod array_alloc;
#[cfg(feature = "std_alloc")]
mod std_alloc;

#[cfg(feature = "experimental_allocator")]
pub use core::alloc::AllocError;

#[cfg(not(feature = "experimental_allocator"))]
pub use alloc_error::AllocError;
pub use array_alloc::ArrayAllocator;
#[cfg(feature = "std_alloc")]
pub use std_alloc::Global;
