//! SHA-256 (FIPS 180-4)
//!
//! One-shot engine: the whole message is padded up front and the 512-bit
//! blocks are folded into the running state strictly in message order.

use crate::bits::{load_be32, rotr32, shr32, store_be32};
use crate::types::{Algorithm, Digest, DIGEST_BYTES};

/// Block size in bytes
pub const BLOCK_BYTES: usize = Algorithm::Sha256.block_bytes();

/// Offset of the 64-bit length field inside the final block
const LENGTH_OFFSET: usize = BLOCK_BYTES - 8;

/// Initial hash value H(0)
const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants K
pub const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    rotr32(x, 7) ^ rotr32(x, 18) ^ shr32(x, 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    rotr32(x, 17) ^ rotr32(x, 19) ^ shr32(x, 10)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Pad a message to a whole number of 64-byte blocks
///
/// Appends `0x80`, zero-fills until the length is 56 mod 64, then appends the
/// original length in bits as a big-endian u64.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);
    let padded_len = (message.len() + 1 + 8).div_ceil(BLOCK_BYTES) * BLOCK_BYTES;

    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(message);
    padded.push(Algorithm::Sha256.padding_byte());
    padded.resize(padded_len - 8, 0);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_BYTES, 0);
    debug_assert_eq!((padded.len() - 8) % BLOCK_BYTES, LENGTH_OFFSET);
    padded
}

/// Expand a block into the 64-word message schedule
pub fn message_schedule(block: &[u8]) -> [u32; 64] {
    debug_assert_eq!(block.len(), BLOCK_BYTES);

    let mut w = [0u32; 64];
    for (i, word) in block.chunks_exact(4).enumerate() {
        w[i] = load_be32(word);
    }
    for i in 16..64 {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }
    w
}

/// Fold one 64-byte block into the running hash state
pub fn compress(state: &mut [u32; 8], block: &[u8]) {
    let w = message_schedule(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..64 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, working) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(working);
    }
}

/// Compute SHA-256 of `message`
pub fn sha256(message: &[u8]) -> Digest {
    let padded = pad(message);

    let mut state = H0;
    for block in padded.chunks_exact(BLOCK_BYTES) {
        compress(&mut state, block);
    }

    let mut out = [0u8; DIGEST_BYTES];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        store_be32(word, chunk);
    }
    Digest::from(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sha2::Digest as _;

    fn hex_of(message: &[u8]) -> String {
        sha256(message).to_hex()
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            hex_of(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc() {
        assert_eq!(
            hex_of(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_two_block_nist_vector() {
        assert_eq!(
            hex_of(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn test_padding_follows_algorithm() {
        assert_eq!(BLOCK_BYTES, 64);
        let padded = pad(b"abc");
        assert_eq!(padded.len(), Algorithm::Sha256.block_bytes());
        assert_eq!(padded[3], Algorithm::Sha256.padding_byte());
    }

    #[test]
    fn test_pad_empty_is_single_block() {
        let padded = pad(b"");
        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pad_block_split_boundary() {
        // 55 bytes: 0x80 and the length field still fit in one block
        let padded = pad(&[b'a'; 55]);
        assert_eq!(padded.len(), 64);
        assert_eq!(padded[55], 0x80);
        assert_eq!(&padded[56..], &(55u64 * 8).to_be_bytes());

        // 56 bytes: the length field spills into a second block
        let padded = pad(&[b'a'; 56]);
        assert_eq!(padded.len(), 128);
        assert_eq!(padded[56], 0x80);
        assert!(padded[57..120].iter().all(|&b| b == 0));
        assert_eq!(&padded[120..], &(56u64 * 8).to_be_bytes());

        // Exactly one block of data needs a whole padding block
        assert_eq!(pad(&[0u8; 64]).len(), 128);
    }

    #[test]
    fn test_sha256_boundary_lengths() {
        assert_eq!(
            hex_of(&[b'a'; 55]),
            "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"
        );
        assert_eq!(
            hex_of(&[b'a'; 56]),
            "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"
        );
        assert_eq!(
            hex_of(&[b'a'; 64]),
            "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"
        );
    }

    #[test]
    fn test_message_schedule_copies_block_words() {
        let padded = pad(b"abc");
        let w = message_schedule(&padded);
        assert_eq!(w[0], 0x61626380);
        assert_eq!(w[15], 24);
    }

    #[test]
    fn test_back_to_back_is_deterministic() {
        assert_eq!(sha256(b"abc"), sha256(b"abc"));
        assert_ne!(sha256(b"abc"), sha256(b"hello"));
    }

    proptest! {
        #[test]
        fn matches_reference_crate(message in prop::collection::vec(any::<u8>(), 0..300)) {
            let reference = sha2::Sha256::digest(&message);
            let computed = sha256(&message);
            prop_assert_eq!(computed.as_bytes().as_slice(), reference.as_slice());
        }

        #[test]
        fn padded_length_is_block_multiple(len in 0usize..512) {
            let padded = pad(&vec![0xA5; len]);
            prop_assert_eq!(padded.len() % BLOCK_BYTES, 0);
            prop_assert!(padded.len() >= len + 9);
            prop_assert!(padded.len() < len + 9 + BLOCK_BYTES);
        }
    }
}
