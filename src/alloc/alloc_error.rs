use core::error::Error;
use core::fmt;

/// Returned by an `ArrayAllocator` that can't hand out the requested block.
///
/// `GrowArr` reports it to its caller as `ErrorReason::AllocFailure`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AllocError;

impl Error for AllocError {}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the allocator refused the request")
    }
}
