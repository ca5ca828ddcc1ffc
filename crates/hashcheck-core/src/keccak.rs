//! Keccak-f[1600] and the SHA3-256 sponge (FIPS 202)
//!
//! ## Layout
//!
//! The 1600-bit state is a 5x5 array of 64-bit lanes. Lane `(x, y)` lives at
//! index `x + 5 * y` and maps to state bytes `8 * (x + 5 * y)..+8`,
//! little-endian, so a rate-sized block XORs into lanes `0..RATE / 8`.
//!
//! ## Parameters
//!
//! SHA3-256 uses rate 136 bytes, capacity 64 bytes, domain byte `0x06` and a
//! 32-byte output. The output fits inside one rate block, so squeezing is a
//! single read of the state after the last permutation.

use crate::bits::{load_le64, rotl64, store_le64};
use crate::types::{Algorithm, Digest, DIGEST_BYTES};

/// Number of 64-bit lanes
pub const LANES: usize = 25;

/// State size in bytes
pub const STATE_BYTES: usize = 200;

/// Number of rounds of Keccak-f[1600]
pub const ROUNDS: usize = 24;

/// SHA3-256 rate in bytes (1088 bits)
pub const SHA3_256_RATE: usize = Algorithm::Sha3_256.block_bytes();

/// SHA3-256 capacity in bytes (512 bits)
pub const SHA3_256_CAPACITY: usize = STATE_BYTES - SHA3_256_RATE;

/// SHA-3 domain separation suffix
pub const SHA3_DOMAIN: u8 = Algorithm::Sha3_256.padding_byte();

/// Final bit of the multi-rate padding
const PAD_LAST: u8 = 0x80;

/// Round constants for ι
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a,
    0x8000000080008000, 0x000000000000808b, 0x0000000080000001,
    0x8000000080008081, 0x8000000000008009, 0x000000000000008a,
    0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089,
    0x8000000000008003, 0x8000000000008002, 0x8000000000000080,
    0x000000000000800a, 0x800000008000000a, 0x8000000080008081,
    0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// ρ rotation offsets, indexed `[x][y]`
pub const RHO_OFFSETS: [[u32; 5]; 5] = [
    [ 0, 36,  3, 41, 18],
    [ 1, 44, 10, 45,  2],
    [62,  6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39,  8, 14],
];

#[inline(always)]
const fn lane(x: usize, y: usize) -> usize {
    x + 5 * y
}

/// Keccak-f[1600] state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeccakState {
    pub lanes: [u64; LANES],
}

impl KeccakState {
    /// Zero state
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, x: usize, y: usize) -> u64 {
        self.lanes[lane(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: u64) {
        self.lanes[lane(x, y)] = value;
    }

    /// XOR a block of at most 200 bytes (a multiple of 8) into the leading lanes
    pub fn absorb_block(&mut self, block: &[u8]) {
        debug_assert!(block.len() <= STATE_BYTES && block.len() % 8 == 0);
        for (lane, bytes) in self.lanes.iter_mut().zip(block.chunks_exact(8)) {
            *lane ^= load_le64(bytes);
        }
    }

    /// Serialise the state as 200 little-endian bytes
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0u8; STATE_BYTES];
        for (chunk, lane) in out.chunks_exact_mut(8).zip(self.lanes) {
            store_le64(lane, chunk);
        }
        out
    }

    /// Read the first `out.len()` bytes of the state
    pub fn squeeze_into(&self, out: &mut [u8]) {
        debug_assert!(out.len() <= STATE_BYTES);
        let bytes = self.to_bytes();
        out.copy_from_slice(&bytes[..out.len()]);
    }

    /// Apply the full 24-round permutation
    pub fn permute(&mut self) {
        keccak_f1600(self);
    }
}

/// θ: XOR every lane with the parities of two neighbouring columns
pub fn theta(state: &mut KeccakState) {
    let mut c = [0u64; 5];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = (0..5).fold(0, |acc, y| acc ^ state.get(x, y));
    }

    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ rotl64(c[(x + 1) % 5], 1);
        for y in 0..5 {
            state.lanes[lane(x, y)] ^= d;
        }
    }
}

/// ρ and π: rotate each lane by its offset and move `(x, y)` to `(y, 2x + 3y)`
pub fn rho_pi(state: &mut KeccakState) {
    let mut moved = KeccakState::zero();
    for x in 0..5 {
        for y in 0..5 {
            let rotated = rotl64(state.get(x, y), RHO_OFFSETS[x][y]);
            moved.set(y, (2 * x + 3 * y) % 5, rotated);
        }
    }
    *state = moved;
}

/// χ: the only non-linear step, applied row by row
pub fn chi(state: &mut KeccakState) {
    for y in 0..5 {
        let row = [
            state.get(0, y),
            state.get(1, y),
            state.get(2, y),
            state.get(3, y),
            state.get(4, y),
        ];
        for x in 0..5 {
            state.set(x, y, row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]));
        }
    }
}

/// ι: XOR the round constant into lane (0, 0)
pub fn iota(state: &mut KeccakState, round: usize) {
    state.lanes[0] ^= ROUND_CONSTANTS[round];
}

/// One round of Keccak-f[1600]
pub fn keccak_round(state: &mut KeccakState, round: usize) {
    theta(state);
    rho_pi(state);
    chi(state);
    iota(state, round);
}

/// The Keccak-f[1600] permutation
pub fn keccak_f1600(state: &mut KeccakState) {
    for round in 0..ROUNDS {
        keccak_round(state, round);
    }
}

/// Apply SHA-3 padding for the given rate
///
/// Appends the domain byte, zero-fills to a multiple of `rate`, and sets the
/// top bit of the final byte. A message one byte short of a rate boundary
/// gets the single combined byte `0x86`.
pub fn pad(message: &[u8], rate: usize, domain: u8) -> Vec<u8> {
    let padded_len = (message.len() / rate + 1) * rate;

    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(message);
    padded.push(domain);
    padded.resize(padded_len, 0);
    // Same byte as the domain suffix when only one byte was free
    padded[padded_len - 1] |= PAD_LAST;
    padded
}

/// Absorb `message` into a fresh sponge and return the final state
fn sponge(message: &[u8], rate: usize, domain: u8) -> KeccakState {
    let mut state = KeccakState::zero();
    for block in pad(message, rate, domain).chunks_exact(rate) {
        state.absorb_block(block);
        state.permute();
    }
    state
}

/// Compute SHA3-256 of `message`
pub fn sha3_256(message: &[u8]) -> Digest {
    let algorithm = Algorithm::Sha3_256;
    // Capacity is twice the output size for every SHA-3 fixed-length variant
    debug_assert_eq!(algorithm.capacity_bytes(), Some(2 * algorithm.output_bytes()));

    let state = sponge(message, algorithm.block_bytes(), algorithm.padding_byte());
    let mut out = [0u8; DIGEST_BYTES];
    state.squeeze_into(&mut out);
    Digest::from(out)
}
