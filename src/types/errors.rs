use core::error::Error;
use core::fmt;

/// What went wrong during a `GrowArr` operation.
///
/// The first four variants mean a resource could not be provided, the last two mean the
/// operation was called outside of its domain, which is a bug in the calling code.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorReason {
    /// The requested size or capacity does not fit in the size type.
    CapacityOverflow = 1,
    /// The request does not fit in a `usize`, or its size in bytes overflowed.
    UsizeOverflow,
    /// No valid `Layout` exists for the buffer, usually because it would exceed `isize::MAX` bytes.
    LayoutFailure,
    /// The allocator refused the request.
    AllocFailure,
    /// `pop` or `last` on an empty array, `shrink` past the current size, or a negative size.
    PreconditionViolation,
    /// An index that is negative or not below the current size.
    IndexOutOfRange,
}

impl ErrorReason {
    /// True for allocation related failures.
    pub const fn is_resource_exhaustion(self) -> bool {
        return matches!(
            self,
            Self::CapacityOverflow | Self::UsizeOverflow | Self::LayoutFailure | Self::AllocFailure
        );
    }

    /// True for misuse of the array by the caller.
    pub const fn is_precondition(self) -> bool {
        return matches!(self, Self::PreconditionViolation | Self::IndexOutOfRange);
    }
}

/// A type alias for `Result<T, GrowArrErr>`
pub type GrowArrResult<T> = Result<T, GrowArrErr>;

/// The error returned by fallible `GrowArr` operations.
///
/// When an operation returns this error the array is left exactly as it was before the call.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GrowArrErr(ErrorReason);

impl GrowArrErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }

    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }
}

impl From<ErrorReason> for GrowArrErr {
    fn from(reason: ErrorReason) -> Self {
        return Self::new(reason);
    }
}

impl Error for GrowArrErr {}

impl fmt::Display for GrowArrErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorReason::CapacityOverflow => f.write_str("Size type overflowed."),
            ErrorReason::UsizeOverflow => f.write_str("usize overflowed."),
            ErrorReason::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorReason::AllocFailure => f.write_str("An allocation failure occurred."),
            ErrorReason::PreconditionViolation => f.write_str("Operation called outside of its domain."),
            ErrorReason::IndexOutOfRange => f.write_str("Index out of range."),
        }
    }
}
