use core::cmp;
use core::fmt;
use core::ops;

/// The type used for the size and capacity of a `GrowArr`, and for indexing it.
///
/// It is a signed integer so that it matches the index types used by solver code. Picking a
/// narrow type shrinks the array header and bounds the number of elements it can hold.
///
/// It's marked as unsafe since the array trusts the arithmetic below to behave like the
/// integers, and uses the results to compute buffer offsets.
pub unsafe trait SizeType
where
    Self: Copy,
    Self: cmp::Eq,
    Self: cmp::Ord,
    Self: fmt::Debug,
    Self: fmt::Display,
    Self: ops::Add<Output = Self>,
    Self: ops::AddAssign,
    Self: ops::Sub<Output = Self>,
    Self: ops::SubAssign,
    Self: Sized,
{
    const MAX_VALUE: Self;
    const ONE_VALUE: Self;
    const ZERO_VALUE: Self;

    /// Converts to `usize`, failing for negative values and values that don't fit.
    fn to_usize(self) -> Option<usize>;
    /// Converts from `usize`, failing for values that don't fit.
    fn from_usize(value: usize) -> Option<Self>;
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_size_type {
    ($($typ:ty),*) => {
        $(
            unsafe impl SizeType for $typ {
                const MAX_VALUE: Self = Self::MAX;
                const ONE_VALUE: Self = 1;
                const ZERO_VALUE: Self = 0;

                #[inline]
                fn to_usize(self) -> Option<usize> {
                    return usize::try_from(self).ok();
                }
                #[inline]
                fn from_usize(value: usize) -> Option<Self> {
                    return Self::try_from(value).ok();
                }
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    return self.checked_add(rhs);
                }
            }
        )*
    };
}

impl_size_type!(i8, i16, i32, i64, isize);
