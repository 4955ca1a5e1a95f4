//! Fixed content hash.
//!
//! A 64-bit Murmur-style multiply-xor-shift mix, word-at-a-time with the
//! tail bytes folded in individually. The output depends only on the hashed
//! bytes and the seed, never on the view's flag or provenance.

const MUL: u64 = (0xc6a4_a793 << 32) + 0x5bd1_e995;

pub(crate) const DEFAULT_SEED: u64 = 0xc70f_6907;

#[inline]
const fn shift_mix(v: u64) -> u64 {
    v ^ (v >> 47)
}

/// Loads `chunk.len()` bytes (1 to 7) into the low bytes of a word.
#[inline]
fn load_tail(chunk: &[u8]) -> u64 {
    let mut result = 0u64;
    for &byte in chunk.iter().rev() {
        result = (result << 8) + u64::from(byte);
    }
    result
}

pub(crate) fn hash_bytes(bytes: &[u8], seed: u64) -> u64 {
    let mut hash = seed ^ (bytes.len() as u64).wrapping_mul(MUL);

    let mut chunks = bytes.chunks_exact(8);
    for chunk in &mut chunks {
        let word = u64::from_ne_bytes(chunk.try_into().unwrap());
        let data = shift_mix(word.wrapping_mul(MUL)).wrapping_mul(MUL);
        hash ^= data;
        hash = hash.wrapping_mul(MUL);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        hash ^= load_tail(tail);
        hash = hash.wrapping_mul(MUL);
    }

    hash = shift_mix(hash).wrapping_mul(MUL);
    shift_mix(hash)
}
