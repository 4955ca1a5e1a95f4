//! Views.
//!
//! This module provides the [`ZView`] type as well as the associated helper
//! and error types.

use core::cmp::{min, Ordering};
use core::error::Error;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::{offset_of, size_of};
use core::ops::Deref;
use core::ptr::NonNull;
use core::slice;

use crate::hash::{hash_bytes, DEFAULT_SEED};
use crate::unit::Unit;

mod cmp;
mod convert;

#[cfg(feature = "serde")]
pub mod serde;

#[cfg(test)]
mod tests;

/// Length word with the safe-dereference flag stuffed in its top bit.
///
/// Single choke point for the flag: every construction, query, and slicing
/// operation goes through these five operations, nothing else touches the
/// raw bit.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
struct TaggedLen(usize);

impl TaggedLen {
    const FLAG: usize = 1 << (usize::BITS - 1);

    /// Encodes a length with the flag cleared.
    #[inline]
    const fn new(len: usize) -> Self {
        debug_assert!(len & Self::FLAG == 0);
        Self(len)
    }

    /// Encodes a length with the flag set.
    #[inline]
    const fn new_tagged(len: usize) -> Self {
        debug_assert!(len & Self::FLAG == 0);
        Self(len | Self::FLAG)
    }

    /// Returns the length without the flag bit.
    #[inline]
    const fn get(self) -> usize {
        self.0 & !Self::FLAG
    }

    #[inline]
    const fn is_tagged(self) -> bool {
        self.0 & Self::FLAG != 0
    }
}

/// Non-owning view over a contiguous run of code units, augmented with the
/// *safe-dereference flag*.
///
/// A `ZView` is a plain `(pointer, length)` pair the size of a `&[U]`. The
/// top bit of the length word records whether the unit at `ptr[len]` — one
/// past the view's logical end — is known to lie inside a live allocation.
/// When it does, [`is_nul_terminated`](Self::is_nul_terminated) may inspect
/// it without any out-of-bounds risk and tell whether the viewed data can be
/// handed to a C API as-is, with no copy.
///
/// # Examples
///
/// You can create a `ZView` from any slice with [`From`] (flag cleared,
/// nothing is known about what follows the slice):
///
/// ```
/// # use zview::ZView;
/// let hello = ZView::from(b"hello".as_slice());
/// assert!(!hello.is_nul_terminated());
/// ```
///
/// or from a terminated source (flag set):
///
/// ```
/// # use zview::ZView;
/// let hello = ZView::from(c"hello");
/// assert!(hello.is_nul_terminated());
/// ```
///
/// # Flag propagation
///
/// Derived views keep the flag exactly when their end coincides with the end
/// the flag vouched for:
///
/// ```
/// # use zview::ZView;
/// let v = ZView::from(c"hello");
/// assert!(v.substr(1, 4).is_nul_terminated());  // tail slice: "ello"
/// assert!(!v.substr(0, 4).is_nul_terminated()); // proper prefix: "hell"
/// ```
///
/// # Lifetime
///
/// The view never owns its buffer; the `'borrow` lifetime ties it to the
/// borrowed data. Multiple views may alias the same buffer.
#[repr(C)]
pub struct ZView<'borrow, U = u8>
where
    U: Unit,
{
    ptr: *const U,
    len: TaggedLen,
    _marker: PhantomData<&'borrow [U]>,
}

// SAFETY: semantically a shared immutable slice; all unit types are
// `Send + Sync`.
unsafe impl<U: Unit> Send for ZView<'_, U> {}
unsafe impl<U: Unit> Sync for ZView<'_, U> {}

impl<U: Unit> Clone for ZView<'_, U> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit> Copy for ZView<'_, U> {}

impl<'borrow, U> ZView<'borrow, U>
where
    U: Unit,
{
    const ASSERTS: () = {
        // layout convention: bit-compatible with a raw (pointer, length) pair
        assert!(size_of::<Self>() == size_of::<*const U>() + size_of::<usize>());
        assert!(offset_of!(Self, ptr) == 0);
        assert!(offset_of!(Self, len) == size_of::<*const U>());
    };

    /// The maximal representable length.
    ///
    /// One bit of the length word is reserved for the safe-dereference flag,
    /// halving the range of a plain `usize` length.
    pub const MAX_LEN: usize = usize::MAX >> 1;

    /// Creates an empty `ZView`.
    ///
    /// The view points at no buffer at all and its flag is clear.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use zview::ZView;
    /// let v = ZView::<u8>::new();
    /// assert!(v.is_empty());
    /// assert!(!v.is_nul_terminated());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::ASSERTS; // HACK to actually do the check

        Self {
            ptr: NonNull::dangling().as_ptr(),
            len: TaggedLen::new(0),
            _marker: PhantomData,
        }
    }

    /// Creates a `ZView` over a whole slice.
    ///
    /// The flag is clear: an explicit pointer+length pair says nothing about
    /// what, if anything, follows the last element.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use zview::ZView;
    /// let v = ZView::from_slice(b"world");
    /// assert_eq!(v.len(), 5);
    /// assert!(!v.is_nul_terminated());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_slice(slice: &'borrow [U]) -> Self {
        Self {
            ptr: slice.as_ptr(),
            len: TaggedLen::new(slice.len()),
            _marker: PhantomData,
        }
    }

    /// Creates a `ZView` over the units of `slice` that precede its first
    /// nul, or `None` if the slice contains no nul.
    ///
    /// The flag is set: the terminator itself lies within the slice, so
    /// reading one past the view's end stays in bounds.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use zview::ZView;
    /// let v = ZView::from_slice_until_nul(b"hi\0there").unwrap();
    /// assert_eq!(v, b"hi");
    /// assert!(v.is_nul_terminated());
    ///
    /// assert!(ZView::from_slice_until_nul(b"no nul").is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn from_slice_until_nul(slice: &'borrow [U]) -> Option<Self> {
        let nul = U::find(slice, U::NUL)?;
        // SAFETY: `slice[nul]` is in bounds of the borrowed slice
        Some(unsafe { Self::from_raw_parts_tagged(slice.as_ptr(), nul) })
    }

    /// Creates a `ZView` by scanning a nul-terminated buffer for its
    /// terminator, like C's `strlen`.
    ///
    /// The flag is set: the terminator is known to sit at `ptr[len]` by
    /// construction.
    ///
    /// # Safety
    ///
    /// * `ptr` must be non-null, well-aligned, and point into an allocation
    ///   containing a nul unit at or after it; every unit up to and
    ///   including the nul must be readable.
    /// * The buffer must not be mutated or freed for the duration of
    ///   `'borrow`, except through interior-mutable or otherwise
    ///   synchronized aliases the caller accounts for.
    /// * The distance to the terminator must not exceed
    ///   [`MAX_LEN`](Self::MAX_LEN).
    ///
    /// # Examples
    ///
    /// ```
    /// # use zview::ZView;
    /// let buffer = b"hello\0 world";
    /// let v = unsafe { ZView::from_ptr(buffer.as_ptr()) };
    /// assert_eq!(v, b"hello");
    /// assert!(v.is_nul_terminated());
    /// ```
    #[inline]
    #[must_use]
    pub unsafe fn from_ptr(ptr: *const U) -> Self {
        // SAFETY: same contract as above
        let len = unsafe { U::scan_len(ptr) };
        // SAFETY: the terminator was just observed at `ptr[len]`
        unsafe { Self::from_raw_parts_tagged(ptr, len) }
    }

    /// Creates a `ZView` from a raw pointer and an explicit length.
    ///
    /// The flag is clear. This constructor never inspects memory.
    ///
    /// # Safety
    ///
    /// * `ptr` must be non-null, well-aligned, and valid for reads of `len`
    ///   units for the duration of `'borrow`.
    /// * `len` must not exceed [`MAX_LEN`](Self::MAX_LEN).
    #[inline]
    #[must_use]
    pub const unsafe fn from_raw_parts(ptr: *const U, len: usize) -> Self {
        Self {
            ptr,
            len: TaggedLen::new(len),
            _marker: PhantomData,
        }
    }

    /// Trusted construction path: pointer + length + the assertion that
    /// `ptr[len]` is readable.
    ///
    /// Only callable inside the crate, by code that has already proven the
    /// flag precondition (a scan found the terminator there, or the unit is
    /// covered by a live borrow).
    ///
    /// # Safety
    ///
    /// Same as [`from_raw_parts`](Self::from_raw_parts), plus: reading the
    /// unit at `ptr[len]` must be defined behavior for the duration of
    /// `'borrow`.
    #[inline]
    const unsafe fn from_raw_parts_tagged(ptr: *const U, len: usize) -> Self {
        Self {
            ptr,
            len: TaggedLen::new_tagged(len),
            _marker: PhantomData,
        }
    }

    /// Returns the length of this `ZView` in units.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use zview::ZView;
    /// let v = ZView::from_slice(b"\xDE\xAD\xBE\xEF");
    /// assert_eq!(v.len(), 4);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len.get()
    }

    /// Returns `true` if this `ZView` has a length of zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len.get() == 0
    }

    /// Returns a raw pointer to the first unit.
    ///
    /// No terminator is guaranteed to follow the viewed units; pair with
    /// [`is_nul_terminated`](Self::is_nul_terminated) before passing the
    /// pointer to an API that expects one.
    #[inline]
    #[must_use]
    pub const fn as_ptr(&self) -> *const U {
        self.ptr
    }

    /// Extracts a slice of the entire `ZView`.
    ///
    /// The slice borrows from the original buffer, not from the view.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'borrow [U] {
        // SAFETY: type invariant, `ptr` is valid for `len` units
        unsafe { slice::from_raw_parts(self.ptr, self.len.get()) }
    }

    /// Returns whether the unit just past the view's end is *currently* nul.
    ///
    /// If the safe-dereference flag is clear this returns `false` without
    /// touching memory. If it is set, exactly one read is performed at
    /// offset `len` — a read the flag invariant guarantees to be in bounds —
    /// and its value is compared against nul.
    ///
    /// The result is recomputed on every call rather than cached, so it
    /// reflects mutations of the underlying buffer made through other
    /// aliases after the view was created.
    ///
    /// Note that this query is conservative: it may return `false` for a
    /// buffer that happens to be nul-terminated, when the view has no proof
    /// that looking for the terminator is sound.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zview::ZView;
    /// // content "world", but byte 5 of the buffer is '!', not nul
    /// let buffer = b"world!";
    /// let v = ZView::from_slice(&buffer[..5]);
    /// assert!(!v.is_nul_terminated());
    /// ```
    #[doc(alias = "is_cstring")]
    #[inline]
    #[must_use]
    pub fn is_nul_terminated(&self) -> bool {
        if self.len.is_tagged() {
            // SAFETY: the flag invariant, `ptr[len]` is readable
            unsafe { self.ptr.add(self.len.get()).read() == U::NUL }
        } else {
            false
        }
    }

    /// Returns the unit at `pos`, or a [`RangeError`] if `pos` is out of
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `pos >= self.len()`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use zview::ZView;
    /// let v = ZView::from_slice(b"abc");
    /// assert_eq!(v.at(2), Ok(b'c'));
    /// assert!(v.at(3).is_err());
    /// ```
    #[inline]
    pub const fn at(&self, pos: usize) -> Result<U, RangeError> {
        if pos < self.len.get() {
            // SAFETY: `pos` is in bounds
            Ok(unsafe { self.ptr.add(pos).read() })
        } else {
            Err(RangeError::new(pos, self.len.get()))
        }
    }

    /// Returns the unit at `pos`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<U> {
        self.as_slice().get(pos).copied()
    }

    /// Returns the unit at `pos` without bounds checking.
    ///
    /// # Safety
    ///
    /// `pos` must be strictly less than `self.len()`.
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, pos: usize) -> U {
        debug_assert!(pos < self.len());
        // SAFETY: precondition
        unsafe { self.ptr.add(pos).read() }
    }

    /// Returns the first unit, or `None` if the view is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<U> {
        self.as_slice().first().copied()
    }

    /// Returns the last unit, or `None` if the view is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<U> {
        self.as_slice().last().copied()
    }

    /// Copies as many units as fit into `dest` and returns the number
    /// copied, `min(dest.len(), self.len())`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zview::ZView;
    /// let v = ZView::from_slice(b"abcdef");
    /// let mut buffer = [0u8; 4];
    /// assert_eq!(v.copy_to(&mut buffer), 4);
    /// assert_eq!(&buffer, b"abcd");
    /// ```
    #[inline]
    pub fn copy_to(&self, dest: &mut [U]) -> usize {
        let n = min(dest.len(), self.len());
        dest[..n].copy_from_slice(&self.as_slice()[..n]);
        n
    }

    /// Extracts a sub-view of at most `count` units starting at `start`.
    ///
    /// `count` is clamped to `self.len() - start`, like the C++
    /// `string_view::substr`.
    ///
    /// The safe-dereference flag is kept exactly when the clamped sub-view
    /// reaches this view's logical end (the unit following it is then the
    /// very unit the original flag vouched for); any slice stopping short
    /// ends on an interior unit and loses the flag.
    ///
    /// # Panics
    ///
    /// Panics if `start > self.len()`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use zview::ZView;
    /// let v = ZView::from_slice(b"abcdef");
    /// assert_eq!(v.substr(2, 3), b"cde");
    /// assert_eq!(v.substr(2, 100), b"cdef"); // clamped
    /// ```
    #[must_use]
    #[track_caller]
    pub fn substr(&self, start: usize, count: usize) -> Self {
        match self.try_substr(start, count) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    /// Extracts a sub-view of at most `count` units starting at `start`, if
    /// `start` is in bounds.
    ///
    /// See [`substr`](Self::substr) for the clamping and flag-propagation
    /// rules.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `start > self.len()`.
    #[inline]
    pub fn try_substr(&self, start: usize, count: usize) -> Result<Self, RangeError> {
        if start > self.len() {
            return Err(RangeError::new(start, self.len()));
        }
        // SAFETY: `start` is in bounds
        Ok(unsafe { self.substr_unchecked(start, count) })
    }

    /// Extracts a sub-view of at most `count` units starting at `start`,
    /// without bounds checking.
    ///
    /// # Safety
    ///
    /// `start` must be less than or equal to `self.len()`.
    ///
    /// Panics in debug mode. UB in release mode.
    #[must_use]
    pub unsafe fn substr_unchecked(&self, start: usize, count: usize) -> Self {
        debug_assert!(start <= self.len());
        let rlen = min(count, self.len() - start);
        // SAFETY: `start <= len`, stays within the allocation
        let ptr = unsafe { self.ptr.add(start) };
        if self.len.is_tagged() && start + rlen == self.len() {
            // the sub-view is a suffix: its one-past-the-end unit is the
            // original's, still covered by the flag invariant
            // SAFETY: see above
            unsafe { Self::from_raw_parts_tagged(ptr, rlen) }
        } else {
            // SAFETY: sub-range of a valid view
            unsafe { Self::from_raw_parts(ptr, rlen) }
        }
    }

    /// Shrinks the view in place by dropping its first `n` units.
    ///
    /// The view's end does not move, so the safe-dereference flag is
    /// preserved.
    ///
    /// # Panics
    ///
    /// Panics if `n > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zview::ZView;
    /// let mut v = ZView::from(c"hello");
    /// v.remove_prefix(2);
    /// assert_eq!(v, b"llo");
    /// assert!(v.is_nul_terminated());
    /// ```
    #[inline]
    #[track_caller]
    pub fn remove_prefix(&mut self, n: usize) {
        assert!(
            n <= self.len(),
            "cannot remove {n} units from a view of length {}",
            self.len()
        );
        // SAFETY: just checked
        unsafe { self.remove_prefix_unchecked(n) };
    }

    /// Shrinks the view in place by dropping its last `n` units.
    ///
    /// The new end lands on an interior unit with no termination guarantee:
    /// the safe-dereference flag is always cleared.
    ///
    /// # Panics
    ///
    /// Panics if `n > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zview::ZView;
    /// let mut v = ZView::from(c"hello");
    /// v.remove_suffix(2);
    /// assert_eq!(v, b"hel");
    /// assert!(!v.is_nul_terminated());
    /// ```
    #[inline]
    #[track_caller]
    pub fn remove_suffix(&mut self, n: usize) {
        assert!(
            n <= self.len(),
            "cannot remove {n} units from a view of length {}",
            self.len()
        );
        // SAFETY: just checked
        unsafe { self.remove_suffix_unchecked(n) };
    }

    /// Shrinks the view in place by dropping its first `n` units, without
    /// bounds checking. Preserves the safe-dereference flag.
    ///
    /// # Safety
    ///
    /// `n` must be less than or equal to `self.len()`.
    ///
    /// Panics in debug mode. UB in release mode.
    #[inline]
    pub unsafe fn remove_prefix_unchecked(&mut self, n: usize) {
        debug_assert!(n <= self.len());
        let rest = self.len.get() - n;
        // SAFETY: `n <= len`, stays within the allocation
        self.ptr = unsafe { self.ptr.add(n) };
        self.len = if self.len.is_tagged() {
            TaggedLen::new_tagged(rest)
        } else {
            TaggedLen::new(rest)
        };
    }

    /// Shrinks the view in place by dropping its last `n` units, without
    /// bounds checking. Always clears the safe-dereference flag.
    ///
    /// # Safety
    ///
    /// `n` must be less than or equal to `self.len()`.
    ///
    /// Panics in debug mode. UB in release mode.
    #[inline]
    pub unsafe fn remove_suffix_unchecked(&mut self, n: usize) {
        debug_assert!(n <= self.len());
        // the new end is an interior unit, never a vouched-for terminator
        self.len = TaggedLen::new(self.len.get() - n);
    }

    /// Lexicographically compares the viewed unit sequences.
    ///
    /// The overlapping prefix is compared unit by unit; ties are broken by
    /// length. The flag never participates.
    #[inline]
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }

    /// Returns `true` if the view starts with the given unit sequence.
    #[inline]
    #[must_use]
    pub fn starts_with(&self, prefix: &[U]) -> bool {
        self.as_slice().starts_with(prefix)
    }

    /// Returns `true` if the view ends with the given unit sequence.
    #[inline]
    #[must_use]
    pub fn ends_with(&self, suffix: &[U]) -> bool {
        self.as_slice().ends_with(suffix)
    }

    /// Returns the position of the first occurrence of `needle`, or `None`.
    ///
    /// An empty needle matches at position 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zview::ZView;
    /// let v = ZView::from_slice(b"abcabc");
    /// assert_eq!(v.find(b"bc"), Some(1));
    /// assert_eq!(v.find(b"cb"), None);
    /// ```
    #[must_use]
    pub fn find(&self, needle: &[U]) -> Option<usize> {
        let hay = self.as_slice();
        let Some((&first, rest)) = needle.split_first() else {
            return Some(0);
        };
        if needle.len() > hay.len() {
            return None;
        }
        let last_start = hay.len() - needle.len();
        let mut pos = 0;
        while pos <= last_start {
            pos += U::find(&hay[pos..=last_start], first)?;
            if hay[pos + 1..pos + needle.len()] == *rest {
                return Some(pos);
            }
            pos += 1;
        }
        None
    }

    /// Returns the position of the last occurrence of `needle`, or `None`.
    ///
    /// An empty needle matches at position `self.len()`.
    #[must_use]
    pub fn rfind(&self, needle: &[U]) -> Option<usize> {
        let hay = self.as_slice();
        if needle.len() > hay.len() {
            return None;
        }
        let mut pos = hay.len() - needle.len();
        loop {
            if hay[pos..pos + needle.len()] == *needle {
                return Some(pos);
            }
            if pos == 0 {
                return None;
            }
            pos -= 1;
        }
    }

    /// Returns the position of the first occurrence of `unit`, or `None`.
    #[inline]
    #[must_use]
    pub fn find_unit(&self, unit: U) -> Option<usize> {
        U::find(self.as_slice(), unit)
    }

    /// Returns the position of the last occurrence of `unit`, or `None`.
    #[inline]
    #[must_use]
    pub fn rfind_unit(&self, unit: U) -> Option<usize> {
        U::rfind(self.as_slice(), unit)
    }

    /// Returns the position of the first unit that occurs in `set`, or
    /// `None`.
    #[inline]
    #[must_use]
    pub fn find_first_of(&self, set: &[U]) -> Option<usize> {
        self.as_slice()
            .iter()
            .position(|&u| U::find(set, u).is_some())
    }

    /// Returns the position of the last unit that occurs in `set`, or
    /// `None`.
    #[inline]
    #[must_use]
    pub fn find_last_of(&self, set: &[U]) -> Option<usize> {
        self.as_slice()
            .iter()
            .rposition(|&u| U::find(set, u).is_some())
    }

    /// Returns the position of the first unit that does *not* occur in
    /// `set`, or `None`.
    #[inline]
    #[must_use]
    pub fn find_first_not_of(&self, set: &[U]) -> Option<usize> {
        self.as_slice()
            .iter()
            .position(|&u| U::find(set, u).is_none())
    }

    /// Returns the position of the last unit that does *not* occur in
    /// `set`, or `None`.
    #[inline]
    #[must_use]
    pub fn find_last_not_of(&self, set: &[U]) -> Option<usize> {
        self.as_slice()
            .iter()
            .rposition(|&u| U::find(set, u).is_none())
    }

    /// Hashes the viewed bytes with the crate's fixed multiply-xor-shift
    /// mix.
    ///
    /// Two views with equal content produce equal hashes, regardless of
    /// their flags or of the buffers they point into. Unlike [`Hash`], the
    /// result does not depend on a caller-supplied hasher, which makes it
    /// usable across processes built from the same crate version.
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        // SAFETY: the viewed range is readable; `u8` has no alignment
        // requirement
        let bytes =
            unsafe { slice::from_raw_parts(self.ptr.cast::<u8>(), self.len() * size_of::<U>()) };
        hash_bytes(bytes, DEFAULT_SEED)
    }
}

impl<'borrow> ZView<'borrow, u8> {
    /// Reinterprets the view as a [`CStr`](core::ffi::CStr) without copying,
    /// if possible.
    ///
    /// Succeeds exactly when the safe-dereference flag licenses the
    /// one-past-the-end read, that unit is currently nul, and the content
    /// has no interior nul (a `CStr` could not represent it otherwise).
    /// On `None`, bridging to a C API requires a terminated copy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zview::ZView;
    /// let v = ZView::from_slice_until_nul(b"hello\0trailing").unwrap();
    /// assert_eq!(v.as_cstr(), Some(c"hello"));
    ///
    /// let plain = ZView::from_slice(b"hello");
    /// assert_eq!(plain.as_cstr(), None); // no terminator in sight
    /// ```
    #[must_use]
    pub fn as_cstr(&self) -> Option<&'borrow core::ffi::CStr> {
        if !self.is_nul_terminated() {
            return None;
        }
        // SAFETY: the flag invariant extends the readable range to `len`
        // inclusive, and the unit there was just observed to be nul
        let with_nul = unsafe { slice::from_raw_parts(self.ptr, self.len.get() + 1) };
        core::ffi::CStr::from_bytes_with_nul(with_nul).ok()
    }
}

impl<U: Unit> Default for ZView<'_, U> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Unit> Deref for ZView<'_, U> {
    type Target = [U];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<U: Unit> Hash for ZView<'_, U> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<U: Unit> fmt::Debug for ZView<'_, U> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<'a, U: Unit> IntoIterator for &'a ZView<'_, U> {
    type Item = &'a U;
    type IntoIter = slice::Iter<'a, U>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// A possible error value when accessing a [`ZView`] out of bounds.
///
/// This type is the error type for [`ZView::at`] and [`ZView::try_substr`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    pos: usize,
    len: usize,
}

impl RangeError {
    #[inline]
    const fn new(pos: usize, len: usize) -> Self {
        Self { pos, len }
    }

    /// Returns the requested position.
    #[inline]
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the length of the accessed view.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Debug for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeError")
            .field("pos", &self.pos)
            .field("len", &self.len)
            .finish()
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for view of length {}",
            self.pos, self.len
        )
    }
}

impl Error for RangeError {}
