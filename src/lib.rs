//! # Growable Array
//!
//! The `grow_array` crate provides a `#[no_std]` growable array, `GrowArr`, meant as a low level
//! building block for things like SAT and constraint solvers where per instance overhead and
//! allocation behaviour matter.
//!
//! The type used for the size, the capacity and indexing is a generic signed integer (`i32` by
//! default). On a 64-bit system a `Vec` takes 24 bytes, while a `GrowArr<T>` takes 16, and a
//! `GrowArr<T, Global, i16>` even less.
//!
//! Size and capacity are kept apart on purpose. `reserve` and `reserve_exact` only touch the
//! capacity, `grow_to`, `shrink` and the stack operations only touch the size, and `clear` keeps
//! the buffer around unless `clear_and_release` is used.
//!
//! Every operation that can allocate is fallible and returns a `GrowArrErr` instead of aborting.
//! Misuse such as popping an empty array or indexing past the end is reported too, and nothing
//! is modified when an operation fails.
//!
//! # Feature Flags
//! * `std_alloc` (default) - Provides `Global`, an `ArrayAllocator` backed by the standard
//! allocator.
//!
//! * `alloc_api2` - Any allocator implementing the `allocator-api2` `Allocator` trait can be used.
//!
//! * `experimental_allocator` - Nightly only. Any `core::alloc::Allocator` can be used, and with
//! `std_alloc` the `Global` from `std` is re-exported instead of the wrapper from this crate.
//!
//! * `log` - Emits `trace` records through the `log` facade whenever the buffer is allocated,
//! reallocated or released.

#![no_std]
#![cfg_attr(feature = "experimental_allocator", feature(allocator_api))]

#[cfg(any(feature = "std_alloc", test))]
extern crate std;

pub mod alloc;
mod grow_arr;
pub mod types;

pub use grow_arr::GrowArr;
