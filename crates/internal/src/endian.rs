//! Endianness utility functions
//!
//! Field elements are stored as little-endian arrays of `u32` limbs. These
//! helpers move between that layout and external byte strings in either
//! order. The readers are `const fn` so curve moduli can be turned into limbs
//! at compile time.

/// Read `N` little-endian limbs from a little-endian byte string
///
/// Bytes beyond `4 * N` are ignored; missing bytes read as zero.
pub const fn limbs_from_le_bytes<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut limbs = [0u32; N];
    let mut i = 0;
    while i < bytes.len() && i < 4 * N {
        limbs[i / 4] |= (bytes[i] as u32) << (8 * (i % 4));
        i += 1;
    }
    limbs
}

/// Read `N` little-endian limbs from a big-endian byte string
///
/// The last byte of `bytes` is the least significant. Leading bytes beyond
/// `4 * N` are ignored.
pub const fn limbs_from_be_bytes<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut limbs = [0u32; N];
    let len = bytes.len();
    let mut i = 0;
    while i < len && i < 4 * N {
        limbs[i / 4] |= (bytes[len - 1 - i] as u32) << (8 * (i % 4));
        i += 1;
    }
    limbs
}

/// Write limbs to `out` as a little-endian byte string
///
/// `out` is filled up to `min(out.len(), 4 * N)` bytes.
pub fn limbs_to_le_bytes<const N: usize>(limbs: &[u32; N], out: &mut [u8]) {
    for (i, byte) in out.iter_mut().enumerate().take(4 * N) {
        *byte = (limbs[i / 4] >> (8 * (i % 4))) as u8;
    }
}

/// Write limbs to `out` as a big-endian byte string
pub fn limbs_to_be_bytes<const N: usize>(limbs: &[u32; N], out: &mut [u8]) {
    let len = out.len();
    for i in 0..len.min(4 * N) {
        out[len - 1 - i] = (limbs[i / 4] >> (8 * (i % 4))) as u8;
    }
}
