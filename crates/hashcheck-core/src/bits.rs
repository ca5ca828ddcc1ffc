//! Fixed-width word primitives shared by both engines
//!
//! Rotation amounts are a caller precondition: `rotr32` and `shr32` take
//! `n` in `0..32`, `rotl64` takes `n` in `0..64`. Out-of-range values are
//! only caught by debug assertions.

/// Right rotate within 32 bits
#[inline(always)]
pub fn rotr32(x: u32, n: u32) -> u32 {
    debug_assert!(n < 32);
    x.rotate_right(n)
}

/// Logical right shift within 32 bits (zero fill)
#[inline(always)]
pub fn shr32(x: u32, n: u32) -> u32 {
    debug_assert!(n < 32);
    x >> n
}

/// Left rotate within 64 bits
#[inline(always)]
pub fn rotl64(x: u64, n: u32) -> u64 {
    debug_assert!(n < 64);
    x.rotate_left(n)
}

/// Load a big-endian u32 from the first 4 bytes of `bytes`
#[inline(always)]
pub fn load_be32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Store `word` big-endian into the first 4 bytes of `out`
#[inline(always)]
pub fn store_be32(word: u32, out: &mut [u8]) {
    out[..4].copy_from_slice(&word.to_be_bytes());
}

/// Load a little-endian u64 from the first 8 bytes of `bytes`
#[inline(always)]
pub fn load_le64(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(word)
}

/// Store `word` little-endian into the first 8 bytes of `out`
#[inline(always)]
pub fn store_le64(word: u64, out: &mut [u8]) {
    out[..8].copy_from_slice(&word.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rotr32_wraps() {
        assert_eq!(rotr32(0x0000_0001, 1), 0x8000_0000);
        assert_eq!(rotr32(0x1234_5678, 0), 0x1234_5678);
        assert_eq!(rotr32(0x1234_5678, 8), 0x7812_3456);
    }

    #[test]
    fn test_rotr32_is_not_arithmetic() {
        // High bit set must not sign-extend
        assert_eq!(rotr32(0x8000_0000, 4), 0x0800_0000);
        assert_eq!(shr32(0x8000_0000, 4), 0x0800_0000);
    }

    #[test]
    fn test_rotl64_wraps() {
        assert_eq!(rotl64(0x8000_0000_0000_0000, 1), 1);
        assert_eq!(rotl64(1, 63), 0x8000_0000_0000_0000);
        assert_eq!(rotl64(0xdead_beef, 0), 0xdead_beef);
    }

    #[test]
    fn test_word_byte_order() {
        let mut buf = [0u8; 8];
        store_be32(0x0102_0304, &mut buf);
        assert_eq!(&buf[..4], &[1, 2, 3, 4]);
        assert_eq!(load_be32(&buf), 0x0102_0304);

        store_le64(0x0807_0605_0403_0201, &mut buf);
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(load_le64(&buf), 0x0807_0605_0403_0201);
    }

    #[test]
    fn test_wrapping_addition_mod_2_32() {
        assert_eq!(0xffff_ffffu32.wrapping_add(2), 1);
    }

    proptest! {
        #[test]
        fn rotr32_matches_shift_or(word: u32, n in 1u32..32) {
            prop_assert_eq!(rotr32(word, n), (word >> n) | (word << (32 - n)));
        }

        #[test]
        fn rotl64_inverts_with_complement(word: u64, n in 1u32..64) {
            prop_assert_eq!(rotl64(rotl64(word, n), 64 - n), word);
        }
    }
}
