//! Comparison trait implementations for `ZView`.
//!
//! All comparisons are content-based: the safe-dereference flag never
//! participates, so two views with equal unit sequences compare equal even
//! when only one of them knows about a terminator.

use core::cmp::Ordering;
use core::ffi::CStr;

use super::ZView;
use crate::macros::{symmetric_eq, symmetric_ord};
use crate::unit::Unit;

#[cfg(feature = "std")]
use std::borrow::Cow;
#[cfg(feature = "std")]
use std::ffi::CString;

// Equality

impl<U: Unit> Eq for ZView<'_, U> {}

impl<U: Unit> PartialEq<ZView<'_, U>> for ZView<'_, U> {
    #[inline]
    fn eq(&self, other: &ZView<'_, U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[inline]
fn eq_units<U: Unit>(a: &[U], b: &ZView<'_, U>) -> bool {
    a == b.as_slice()
}

#[inline]
fn eq_units_ref<U: Unit>(a: &&[U], b: &ZView<'_, U>) -> bool {
    *a == b.as_slice()
}

#[inline]
fn eq_array<U: Unit, const N: usize>(a: &[U; N], b: &ZView<'_, U>) -> bool {
    a.as_slice() == b.as_slice()
}

#[inline]
fn eq_array_ref<U: Unit, const N: usize>(a: &&[U; N], b: &ZView<'_, U>) -> bool {
    a.as_slice() == b.as_slice()
}

#[inline]
fn eq_str(a: &str, b: &ZView<'_, u8>) -> bool {
    a.as_bytes() == b.as_slice()
}

#[inline]
fn eq_str_ref(a: &&str, b: &ZView<'_, u8>) -> bool {
    a.as_bytes() == b.as_slice()
}

#[inline]
fn eq_cstr(a: &CStr, b: &ZView<'_, u8>) -> bool {
    a.to_bytes() == b.as_slice()
}

#[inline]
fn eq_cstr_ref(a: &&CStr, b: &ZView<'_, u8>) -> bool {
    a.to_bytes() == b.as_slice()
}

symmetric_eq! {
    [U: Unit] ([U], ZView<'_, U>) = eq_units;
    ['a, U: Unit] (&'a [U], ZView<'_, U>) = eq_units_ref;
    [U: Unit, const N: usize] ([U; N], ZView<'_, U>) = eq_array;
    ['a, U: Unit, const N: usize] (&'a [U; N], ZView<'_, U>) = eq_array_ref;
    (str, ZView<'_, u8>) = eq_str;
    ['a] (&'a str, ZView<'_, u8>) = eq_str_ref;
    (CStr, ZView<'_, u8>) = eq_cstr;
    ['a] (&'a CStr, ZView<'_, u8>) = eq_cstr_ref;
}

#[cfg(feature = "std")]
#[inline]
fn eq_vec<U: Unit>(a: &Vec<U>, b: &ZView<'_, U>) -> bool {
    a.as_slice() == b.as_slice()
}

#[cfg(feature = "std")]
#[inline]
fn eq_cow<U: Unit>(a: &Cow<'_, [U]>, b: &ZView<'_, U>) -> bool {
    a.as_ref() == b.as_slice()
}

#[cfg(feature = "std")]
#[inline]
fn eq_string(a: &String, b: &ZView<'_, u8>) -> bool {
    a.as_bytes() == b.as_slice()
}

#[cfg(feature = "std")]
#[inline]
fn eq_cstring(a: &CString, b: &ZView<'_, u8>) -> bool {
    a.to_bytes() == b.as_slice()
}

#[cfg(feature = "std")]
symmetric_eq! {
    [U: Unit] (Vec<U>, ZView<'_, U>) = eq_vec;
    ['a, U: Unit] (Cow<'a, [U]>, ZView<'_, U>) = eq_cow;
    (String, ZView<'_, u8>) = eq_string;
    (CString, ZView<'_, u8>) = eq_cstring;
}

// Order

impl<U: Unit> Ord for ZView<'_, U> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<U: Unit> PartialOrd<ZView<'_, U>> for ZView<'_, U> {
    #[inline]
    fn partial_cmp(&self, other: &ZView<'_, U>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

#[inline]
fn cmp_units<U: Unit>(a: &[U], b: &ZView<'_, U>) -> Option<Ordering> {
    a.partial_cmp(b.as_slice())
}

#[inline]
fn cmp_units_ref<U: Unit>(a: &&[U], b: &ZView<'_, U>) -> Option<Ordering> {
    (*a).partial_cmp(b.as_slice())
}

#[inline]
fn cmp_array<U: Unit, const N: usize>(a: &[U; N], b: &ZView<'_, U>) -> Option<Ordering> {
    a.as_slice().partial_cmp(b.as_slice())
}

#[inline]
fn cmp_str(a: &str, b: &ZView<'_, u8>) -> Option<Ordering> {
    a.as_bytes().partial_cmp(b.as_slice())
}

#[inline]
fn cmp_str_ref(a: &&str, b: &ZView<'_, u8>) -> Option<Ordering> {
    a.as_bytes().partial_cmp(b.as_slice())
}

symmetric_ord! {
    [U: Unit] ([U], ZView<'_, U>) = cmp_units;
    ['a, U: Unit] (&'a [U], ZView<'_, U>) = cmp_units_ref;
    [U: Unit, const N: usize] ([U; N], ZView<'_, U>) = cmp_array;
    (str, ZView<'_, u8>) = cmp_str;
    ['a] (&'a str, ZView<'_, u8>) = cmp_str_ref;
}
