//! Conversion trait implementations for `ZView`.

use core::ffi::CStr;

use super::ZView;
use crate::unit::Unit;

#[cfg(feature = "std")]
use std::ffi::CString;

impl<U: Unit> AsRef<[U]> for ZView<'_, U> {
    #[inline]
    fn as_ref(&self) -> &[U] {
        self.as_slice()
    }
}

// Infallible conversions
//
// Every conversion takes the source by reference with the view's lifetime,
// so a view of a temporary is rejected by the borrow checker. Terminated
// sources (`CStr`, `CString`) set the safe-dereference flag; plain slices
// and `str` do not, their buffers promise nothing past the last unit.

impl<'borrow, U: Unit> From<&'borrow [U]> for ZView<'borrow, U> {
    #[inline]
    fn from(value: &'borrow [U]) -> Self {
        Self::from_slice(value)
    }
}

impl<'borrow, U: Unit, const N: usize> From<&'borrow [U; N]> for ZView<'borrow, U> {
    #[inline]
    fn from(value: &'borrow [U; N]) -> Self {
        Self::from_slice(value)
    }
}

impl<'borrow> From<&'borrow str> for ZView<'borrow, u8> {
    #[inline]
    fn from(value: &'borrow str) -> Self {
        Self::from_slice(value.as_bytes())
    }
}

impl<'borrow> From<&'borrow CStr> for ZView<'borrow, u8> {
    #[inline]
    fn from(value: &'borrow CStr) -> Self {
        let with_nul = value.to_bytes_with_nul();
        // SAFETY: `with_nul` covers the terminator, so reading the unit at
        // `len` stays inside the borrowed slice
        unsafe { Self::from_raw_parts_tagged(with_nul.as_ptr(), with_nul.len() - 1) }
    }
}

#[cfg(feature = "std")]
impl<'borrow> From<&'borrow CString> for ZView<'borrow, u8> {
    #[inline]
    fn from(value: &'borrow CString) -> Self {
        Self::from(value.as_c_str())
    }
}

#[cfg(feature = "std")]
impl<'borrow> From<&'borrow String> for ZView<'borrow, u8> {
    #[inline]
    fn from(value: &'borrow String) -> Self {
        // a `String` promises nothing about the byte after its content
        Self::from_slice(value.as_bytes())
    }
}

#[cfg(feature = "std")]
impl<'borrow, U: Unit> From<&'borrow Vec<U>> for ZView<'borrow, U> {
    #[inline]
    fn from(value: &'borrow Vec<U>) -> Self {
        Self::from_slice(value)
    }
}

#[cfg(feature = "std")]
impl<U: Unit> From<ZView<'_, U>> for Vec<U> {
    #[inline]
    fn from(value: ZView<'_, U>) -> Self {
        value.as_slice().to_vec()
    }
}
