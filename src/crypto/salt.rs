//! Salt generation
//!
//! Produces the random digit string mixed into each stored digest. The source
//! sits behind a trait so tests can inject a deterministic one.

use rand::Rng;

/// Source of fresh salts, one per registration.
pub trait SaltSource {
    fn generate_salt(&mut self) -> String;
}

/// Salt source backed by the thread-local RNG. Pedagogical-grade randomness,
/// not a cryptographic nonce.
pub struct RandomSaltSource {
    length: usize,
}

impl RandomSaltSource {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl SaltSource for RandomSaltSource {
    fn generate_salt(&mut self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}
