use core::hash::{BuildHasher, Hash, Hasher};
use core::mem::size_of;

use fastrand::Rng;

use super::ZView;
use crate::{ZView16, ZView32};

type V<'a> = ZView<'a, u8>;

const EMPTY_SLICE: &[u8] = &[];
const ABC: &[u8] = b"abc";
const HELLO_NUL: &[u8] = b"hello\0";
const WORLD_BANG: &[u8] = b"world!";
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn std_hash(value: &impl Hash) -> u64 {
    let mut hasher = std::hash::RandomState::new().build_hasher();
    // not comparable across calls, only across values within one hasher
    value.hash(&mut hasher);
    hasher.finish()
}

fn hash_pair_eq(a: &V<'_>, b: &V<'_>) -> bool {
    let state = std::hash::RandomState::new();
    state.hash_one(a) == state.hash_one(b)
}

#[test]
fn test_layout() {
    assert_eq!(size_of::<V<'_>>(), size_of::<&[u8]>());
    assert_eq!(size_of::<ZView16<'_>>(), size_of::<&[u16]>());
    assert_eq!(V::MAX_LEN, usize::MAX >> 1);
}

#[test]
fn test_new_default() {
    let new = V::new();
    assert_eq!(new, EMPTY_SLICE);
    assert!(new.is_empty());
    assert_eq!(new.len(), 0);
    assert!(!new.is_nul_terminated());

    let new = V::default();
    assert_eq!(new, EMPTY_SLICE);
    assert!(new.is_empty());
}

#[test]
fn test_from_slice() {
    let v = V::from_slice(ABC);
    assert_eq!(v.len(), 3);
    assert_eq!(v, ABC);
    assert!(std::ptr::eq(v.as_ptr(), ABC.as_ptr()));
    assert!(!v.len.is_tagged());
    assert!(!v.is_nul_terminated());
}

#[test]
fn test_from_slice_until_nul() {
    let v = V::from_slice_until_nul(HELLO_NUL).unwrap();
    assert_eq!(v, b"hello");
    assert!(v.len.is_tagged());
    assert!(v.is_nul_terminated());

    // nul mid-slice, trailing garbage after it
    let v = V::from_slice_until_nul(b"hi\0garbage").unwrap();
    assert_eq!(v, b"hi");
    assert!(v.is_nul_terminated());

    // leading nul
    let v = V::from_slice_until_nul(b"\0abc").unwrap();
    assert!(v.is_empty());
    assert!(v.is_nul_terminated());

    assert!(V::from_slice_until_nul(ABC).is_none());
    assert!(V::from_slice_until_nul(EMPTY_SLICE).is_none());
}

#[test]
fn test_from_ptr() {
    let v = unsafe { V::from_ptr(HELLO_NUL.as_ptr()) };
    assert_eq!(v.len(), 5);
    assert_eq!(v, b"hello");
    assert!(v.len.is_tagged());
    assert!(v.is_nul_terminated());
}

#[test]
fn test_from_raw_parts() {
    // content "world", the next byte is '!', not nul
    let v = unsafe { V::from_raw_parts(WORLD_BANG.as_ptr(), 5) };
    assert_eq!(v, b"world");
    assert!(!v.len.is_tagged());
    // a naive dereference at offset 5 would not even crash here, but the
    // view has no license to try
    assert!(!v.is_nul_terminated());
}

#[test]
fn test_copy_preserves_flag_and_length() {
    let tagged = V::from_slice_until_nul(HELLO_NUL).unwrap();
    let copy = tagged;
    let clone = tagged.clone();
    assert_eq!(copy.len(), tagged.len());
    assert_eq!(copy.len.is_tagged(), tagged.len.is_tagged());
    assert_eq!(clone.is_nul_terminated(), tagged.is_nul_terminated());

    let plain = V::from_slice(ABC);
    let copy = plain;
    assert_eq!(copy.len(), plain.len());
    assert!(!copy.is_nul_terminated());
}

#[test]
fn test_is_nul_terminated_rechecks_memory() {
    let mut buffer = *b"hello\0\0";
    let ptr = buffer.as_mut_ptr();
    let v = unsafe { V::from_ptr(ptr) };
    assert!(v.is_nul_terminated());

    // overwrite the terminator through the same raw pointer; the query is
    // recomputed on every call and must see the new value
    unsafe { ptr.add(5).write(b'!') };
    assert!(!v.is_nul_terminated());

    unsafe { ptr.add(5).write(0) };
    assert!(v.is_nul_terminated());
}

#[test]
fn test_substr_flag_propagation() {
    let v = unsafe { V::from_ptr(HELLO_NUL.as_ptr()) };

    // suffix slices keep the flag
    let tail = v.substr(1, 4);
    assert_eq!(tail, b"ello");
    assert!(tail.len.is_tagged());
    assert!(tail.is_nul_terminated());

    // proper prefixes lose it
    let head = v.substr(0, 4);
    assert_eq!(head, b"hell");
    assert!(!head.len.is_tagged());
    assert!(!head.is_nul_terminated());

    // clamping: count overshoots, still a suffix
    let all = v.substr(0, 100);
    assert_eq!(all, b"hello");
    assert!(all.is_nul_terminated());

    // empty suffix at the very end still sees the terminator
    let end = v.substr(5, 0);
    assert!(end.is_empty());
    assert!(end.is_nul_terminated());

    // untagged source never produces a tagged slice
    let plain = V::from_slice(ABC);
    assert!(!plain.substr(1, 2).len.is_tagged());
}

#[test]
fn test_substr_all_splits() {
    let v = unsafe { V::from_ptr(HELLO_NUL.as_ptr()) };
    let len = v.len();
    for k in 0..=len {
        let tail = v.substr(k, len - k);
        assert_eq!(tail, &b"hello"[k..]);
        assert!(tail.is_nul_terminated());

        if k < len {
            let head = v.substr(0, k);
            assert_eq!(head, &b"hello"[..k]);
            assert!(!head.is_nul_terminated());
        }
    }
}

#[test]
fn test_try_substr() {
    let v = V::from_slice(ABC);
    assert_eq!(v.try_substr(1, 1).unwrap(), b"b");
    assert_eq!(v.try_substr(3, 0).unwrap(), EMPTY_SLICE);

    let err = v.try_substr(4, 0).unwrap_err();
    assert_eq!(err.pos(), 4);
    assert_eq!(err.len(), 3);
}

#[test]
#[should_panic(expected = "index 4 out of bounds for view of length 3")]
fn test_substr_panic() {
    let _ = V::from_slice(ABC).substr(4, 1);
}

#[test]
fn test_remove_prefix() {
    let mut v = unsafe { V::from_ptr(HELLO_NUL.as_ptr()) };
    v.remove_prefix(2);
    assert_eq!(v, b"llo");
    assert!(v.len.is_tagged());
    assert!(v.is_nul_terminated());

    // the flag state is preserved exactly, set or clear
    let mut plain = V::from_slice(ABC);
    plain.remove_prefix(1);
    assert_eq!(plain, b"bc");
    assert!(!plain.len.is_tagged());

    v.remove_prefix(3);
    assert!(v.is_empty());
    assert!(v.is_nul_terminated());
}

#[test]
fn test_remove_suffix() {
    let mut v = unsafe { V::from_ptr(HELLO_NUL.as_ptr()) };
    v.remove_suffix(2);
    assert_eq!(v, b"hel");
    assert!(!v.len.is_tagged());
    assert!(!v.is_nul_terminated());

    let mut plain = V::from_slice(ABC);
    plain.remove_suffix(0);
    assert!(!plain.len.is_tagged());

    // removing zero units still clears the flag: the operation promises
    // nothing about the new end
    let mut tagged = unsafe { V::from_ptr(HELLO_NUL.as_ptr()) };
    tagged.remove_suffix(0);
    assert!(!tagged.len.is_tagged());
}

#[test]
#[should_panic(expected = "cannot remove 4 units from a view of length 3")]
fn test_remove_prefix_panic() {
    let mut v = V::from_slice(ABC);
    v.remove_prefix(4);
}

#[test]
#[should_panic(expected = "cannot remove 4 units from a view of length 3")]
fn test_remove_suffix_panic() {
    let mut v = V::from_slice(ABC);
    v.remove_suffix(4);
}

#[test]
fn test_at() {
    let v = V::from_slice(ABC);
    assert_eq!(v.at(0), Ok(b'a'));
    assert_eq!(v.at(2), Ok(b'c'));

    let err = v.at(3).unwrap_err();
    assert_eq!(err.pos(), 3);
    assert_eq!(err.len(), 3);
    assert_eq!(
        err.to_string(),
        "index 3 out of bounds for view of length 3"
    );
}

#[test]
fn test_get() {
    let v = V::from_slice(ABC);
    assert_eq!(v.get(1), Some(b'b'));
    assert_eq!(v.get(3), None);
    assert_eq!(unsafe { v.get_unchecked(2) }, b'c');
    assert_eq!(v.first(), Some(b'a'));
    assert_eq!(v.last(), Some(b'c'));

    let empty = V::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[test]
fn test_deref_and_iter() {
    let v = V::from_slice(ABC);
    assert_eq!(v[1], b'b');
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), ABC);

    let mut units = Vec::new();
    for &u in &v {
        units.push(u);
    }
    assert_eq!(units, ABC);
}

#[test]
fn test_copy_to() {
    let v = V::from_slice(ALPHABET);
    let mut small = [0u8; 4];
    assert_eq!(v.copy_to(&mut small), 4);
    assert_eq!(&small, b"abcd");

    let mut large = [b'!'; 30];
    assert_eq!(v.copy_to(&mut large), 26);
    assert_eq!(&large[..26], ALPHABET);
    assert_eq!(&large[26..], b"!!!!");
}

#[test]
fn test_find() {
    let v = V::from_slice(b"abcabc");
    assert_eq!(v.find(b"abc"), Some(0));
    assert_eq!(v.find(b"bca"), Some(1));
    assert_eq!(v.find(b"cab"), Some(2));
    assert_eq!(v.find(b"abcabc"), Some(0));
    assert_eq!(v.find(b"abcabca"), None);
    assert_eq!(v.find(b"z"), None);
    assert_eq!(v.find(b""), Some(0));
    assert_eq!(v.find_unit(b'c'), Some(2));
    assert_eq!(v.find_unit(b'z'), None);

    // first unit matches repeatedly but the tail only at the end
    let v = V::from_slice(b"aaab");
    assert_eq!(v.find(b"ab"), Some(2));
}

#[test]
fn test_rfind() {
    let v = V::from_slice(b"abcabc");
    assert_eq!(v.rfind(b"abc"), Some(3));
    assert_eq!(v.rfind(b"bc"), Some(4));
    assert_eq!(v.rfind(b"abcabc"), Some(0));
    assert_eq!(v.rfind(b"z"), None);
    assert_eq!(v.rfind(b""), Some(6));
    assert_eq!(v.rfind_unit(b'a'), Some(3));
}

#[test]
fn test_find_sets() {
    let v = V::from_slice(b"abc def");
    assert_eq!(v.find_first_of(b"fd"), Some(4));
    assert_eq!(v.find_last_of(b"ab"), Some(1));
    assert_eq!(v.find_first_not_of(b"abc"), Some(3));
    assert_eq!(v.find_last_not_of(b"fed "), Some(2));
    assert_eq!(v.find_first_of(b"xyz"), None);
    assert_eq!(v.find_first_not_of(v.as_slice()), None);
}

#[test]
fn test_starts_ends_with() {
    let v = V::from_slice(b"abcdef");
    assert!(v.starts_with(b"abc"));
    assert!(v.starts_with(b""));
    assert!(!v.starts_with(b"bc"));
    assert!(v.ends_with(b"def"));
    assert!(v.ends_with(b""));
    assert!(!v.ends_with(b"de"));
}

#[test]
fn test_hash_flag_independent() {
    let terminated = V::from_slice_until_nul(b"content\0").unwrap();
    let plain = V::from_slice(b"content");
    assert!(terminated.is_nul_terminated());
    assert!(!plain.is_nul_terminated());

    assert_eq!(terminated, plain);
    assert!(hash_pair_eq(&terminated, &plain));
    assert_eq!(terminated.content_hash(), plain.content_hash());

    let other = V::from_slice(b"contenu");
    assert_ne!(plain.content_hash(), other.content_hash());
}

#[test]
fn test_hash_matches_slice() {
    // Hash goes through the content slice, so a view can stand in for its
    // slice in hashed collections
    let v = V::from_slice(ABC);
    let _ = std_hash(&v);

    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(V::from_slice(b"a"));
    set.insert(V::from_slice(b"b"));
    assert!(set.contains(&V::from_slice_until_nul(b"a\0").unwrap()));
    assert!(!set.contains(&V::from_slice(b"c")));
}

#[test]
fn test_as_cstr() {
    let v = V::from_slice_until_nul(b"hello\0world").unwrap();
    assert_eq!(v.as_cstr(), Some(c"hello"));

    // no flag, no license to look for the terminator
    let plain = V::from_slice(b"hello");
    assert_eq!(plain.as_cstr(), None);

    // interior nul: the terminator is reachable but a CStr cannot
    // represent the whole content
    let buffer = b"ab\0cd\0";
    let v = unsafe { V::from_raw_parts_tagged(buffer.as_ptr(), 5) };
    assert!(v.is_nul_terminated());
    assert_eq!(v.as_cstr(), None);
}

#[test]
fn test_fmt() {
    let v = V::from_slice(ABC);
    assert_eq!(format!("{v:?}"), format!("{ABC:?}"));

    let err = v.at(5).unwrap_err();
    assert_eq!(format!("{err:?}"), "RangeError { pos: 5, len: 3 }");
}

#[test]
fn test_wide_views() {
    let wide: &[u16] = &[104, 105, 0, 33];
    let v = ZView16::from_slice_until_nul(wide).unwrap();
    assert_eq!(v.len(), 2);
    assert!(v.is_nul_terminated());
    assert!(v.substr(1, 1).is_nul_terminated());
    assert!(!v.substr(0, 1).is_nul_terminated());

    let utf32: &[u32] = &[0x1F980, 0];
    let v = ZView32::from_slice_until_nul(utf32).unwrap();
    assert_eq!(v.len(), 1);
    assert!(v.is_nul_terminated());

    let plain = ZView16::from_slice(&wide[3..]);
    assert!(!plain.is_nul_terminated());
}

#[test]
fn test_wide_content_hash() {
    let a: &[u16] = &[1, 2, 3];
    let b: &[u16] = &[1, 2, 3];
    assert_eq!(
        ZView16::from_slice(a).content_hash(),
        ZView16::from_slice(b).content_hash()
    );
}

#[test]
fn test_random_slicing_keeps_invariant() {
    let mut rng = Rng::with_seed(0x2a);
    let mut buffer: Vec<u8> = (0..256).map(|_| rng.u8(1..=255)).collect();
    buffer.push(0);

    let v = V::from_slice_until_nul(&buffer).unwrap();
    assert_eq!(v.len(), 256);

    for _ in 0..1000 {
        let start = rng.usize(..=v.len());
        let count = rng.usize(..=v.len() + 8);
        let sub = v.substr(start, count);

        let reaches_end = start + sub.len() == v.len();
        assert_eq!(sub.len(), count.min(v.len() - start));
        assert_eq!(sub.is_nul_terminated(), reaches_end);
        assert_eq!(sub, &buffer[start..start + sub.len()]);
    }
}

#[test]
fn test_random_shrink_chains() {
    let mut rng = Rng::with_seed(7);
    let mut buffer: Vec<u8> = (0..64).map(|_| rng.u8(1..=255)).collect();
    buffer.push(0);

    for _ in 0..200 {
        let mut v = V::from_slice_until_nul(&buffer).unwrap();
        let mut dropped_suffix = false;
        while !v.is_empty() {
            if rng.bool() {
                v.remove_prefix(rng.usize(1..=v.len()));
            } else {
                v.remove_suffix(rng.usize(1..=v.len()));
                dropped_suffix = true;
            }
            assert_eq!(v.is_nul_terminated(), !dropped_suffix);
        }
    }
}
