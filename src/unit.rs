//! Code unit abstraction.
//!
//! The view delegates everything that actually looks at the buffer's
//! contents (terminator scanning, single-unit search, the nul constant) to
//! the sealed [`Unit`] trait, implemented for `u8`, `u16` and `u32`.

use core::fmt::Debug;
use core::hash::Hash;

use sealed::Sealed;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A string code unit.
///
/// This trait is sealed: the only implementors are `u8`, `u16` and `u32`.
pub trait Unit: Copy + Eq + Ord + Hash + Debug + Sealed + 'static {
    /// The nul (terminator) value.
    const NUL: Self;

    /// Counts the units before the first nul, i.e. `strlen`.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, well-aligned, and point into an allocation
    /// that contains a nul unit at or after `ptr`; every unit up to and
    /// including that nul must be readable.
    unsafe fn scan_len(ptr: *const Self) -> usize;

    /// Returns the position of the first occurrence of `unit`.
    fn find(haystack: &[Self], unit: Self) -> Option<usize>;

    /// Returns the position of the last occurrence of `unit`.
    fn rfind(haystack: &[Self], unit: Self) -> Option<usize>;
}

impl Sealed for u8 {}

impl Unit for u8 {
    const NUL: Self = 0;

    #[inline]
    unsafe fn scan_len(ptr: *const Self) -> usize {
        let mut n = 0;
        // SAFETY: the caller guarantees a nul before the allocation ends
        while unsafe { ptr.add(n).read() } != Self::NUL {
            n += 1;
        }
        n
    }

    #[inline]
    fn find(haystack: &[Self], unit: Self) -> Option<usize> {
        memchr::memchr(unit, haystack)
    }

    #[inline]
    fn rfind(haystack: &[Self], unit: Self) -> Option<usize> {
        memchr::memrchr(unit, haystack)
    }
}

macro_rules! wide_unit {
    ($($typ:ty)*) => {$(
        impl Sealed for $typ {}

        impl Unit for $typ {
            const NUL: Self = 0;

            #[inline]
            unsafe fn scan_len(ptr: *const Self) -> usize {
                let mut n = 0;
                // SAFETY: the caller guarantees a nul before the allocation ends
                while unsafe { ptr.add(n).read() } != Self::NUL {
                    n += 1;
                }
                n
            }

            #[inline]
            fn find(haystack: &[Self], unit: Self) -> Option<usize> {
                haystack.iter().position(|&u| u == unit)
            }

            #[inline]
            fn rfind(haystack: &[Self], unit: Self) -> Option<usize> {
                haystack.iter().rposition(|&u| u == unit)
            }
        }
    )*};
}

wide_unit!(u16 u32);
