//! Non-owning **string views** that know whether they are nul-terminated 🪡
//!
//! * plain `(pointer, length)` views over `u8`, `u16`, or `u32` code units
//! * one extra bit of knowledge: is reading one past the end defined behavior?
//! * `is_nul_terminated()` lets you skip an allocation when handing the
//!   buffer to a C API that wants a nul-terminated string
//! * `no_std` compatible, **zero required dependency** besides `memchr`
//!
//! # Examples
//!
//! ```rust
//! use zview::ZView;
//!
//! let greeting = ZView::from(c"hello"); // terminator known to follow
//! assert!(greeting.is_nul_terminated());
//! assert_eq!(greeting, b"hello");
//!
//! let tail = greeting.substr(1, 4); // "ello", still reaches the terminator
//! assert!(tail.is_nul_terminated());
//!
//! let head = greeting.substr(0, 4); // "hell", stops on an interior byte
//! assert!(!head.is_nul_terminated());
//! assert!(head.as_cstr().is_none()); // a copy would be required here
//! ```
//!
//! # The safe-dereference flag
//!
//! A [`ZView`] is the size of a `&[u8]`: a pointer and a machine word. The
//! top bit of the length word is reserved as the *safe-dereference flag*: it
//! is set only when the element at `ptr[len]` is known to lie inside a live
//! allocation, so that reading it can never be out of bounds. The flag says
//! nothing about the *value* of that element; [`ZView::is_nul_terminated`]
//! still performs the (single, in-bounds) read on every call and therefore
//! reflects later mutations of the buffer through other aliases.
//!
//! Reserving the bit halves the maximal representable length, down to
//! [`ZView::MAX_LEN`] elements. In exchange the view stays pointer+word
//! sized and layout-compatible with an ordinary raw slice.
//!
//! How the flag travels:
//!
//! * terminator-scanned construction ([`ZView::from_ptr`],
//!   [`ZView::from_slice_until_nul`]) and construction from an
//!   already-terminated source ([`CStr`](core::ffi::CStr), `CString`)
//!   set it;
//! * explicit pointer+length construction ([`ZView::from_slice`],
//!   [`ZView::from_raw_parts`]) clears it — nothing is known about what
//!   follows the last element;
//! * a slice that reaches the logical end of a flagged view keeps it
//!   ([`ZView::substr`], [`ZView::remove_prefix`]); a slice that stops short
//!   loses it ([`ZView::remove_suffix`]).
//!
//! # Unit genericity
//!
//! The view is generic over its code unit through the sealed [`Unit`] trait,
//! implemented for `u8` (default), `u16`, and `u32`. The aliases [`ZView16`]
//! and [`ZView32`] cover the wide variants.
//!
//! # Platform support
//!
//! Like any raw-pointer-based view, this crate assumes pointers are
//! `usize`-sized and that allocations never exceed `isize::MAX` bytes. It
//! will not work on architectures with large tagged pointers (e.g. CHERI).

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(unsafe_op_in_unsafe_fn)]

mod hash;
mod macros;
mod unit;
pub mod view;

pub use unit::Unit;
pub use view::{RangeError, ZView};

/// View over 16-bit code units (UTF-16 or UCS-2 buffers).
pub type ZView16<'borrow> = ZView<'borrow, u16>;

/// View over 32-bit code units (UTF-32 buffers).
pub type ZView32<'borrow> = ZView<'borrow, u32>;
