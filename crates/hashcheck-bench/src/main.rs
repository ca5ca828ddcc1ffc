//! Quick timing comparison of the from-scratch engines against RustCrypto
//!
//! Use `cargo bench` for statistically meaningful numbers; this binary is a
//! smoke check that also confirms both implementations agree.

use std::time::Instant;

use sha2::Digest as _;
use sha3::Digest as _;

const ITERATIONS: usize = 10_000;

fn time<F: FnMut()>(label: &str, mut f: F) {
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        f();
    }
    let elapsed = start.elapsed();
    println!("{label:<24} {:>10.3}µs/hash", elapsed.as_secs_f64() * 1e6 / ITERATIONS as f64);
}

fn main() {
    let input = b"hello world";

    println!("Hashing {} bytes, {ITERATIONS} iterations", input.len());

    time("SHA-256 engine", || {
        std::hint::black_box(hashcheck_core::sha256(std::hint::black_box(input)));
    });
    time("SHA-256 sha2 crate", || {
        std::hint::black_box(sha2::Sha256::digest(std::hint::black_box(input)));
    });
    time("SHA3-256 engine", || {
        std::hint::black_box(hashcheck_core::sha3_256(std::hint::black_box(input)));
    });
    time("SHA3-256 sha3 crate", || {
        std::hint::black_box(sha3::Sha3_256::digest(std::hint::black_box(input)));
    });

    let sha256_match = hashcheck_core::sha256(input).as_bytes()[..] == sha2::Sha256::digest(input)[..];
    let sha3_match = hashcheck_core::sha3_256(input).as_bytes()[..] == sha3::Sha3_256::digest(input)[..];
    println!("SHA-256 results match:  {sha256_match}");
    println!("SHA3-256 results match: {sha3_match}");
}
