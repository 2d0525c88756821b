use crate::Generator;
use shortcut_core::{ShortCode, ALPHABET, CODE_LENGTH};
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of distinct codes of [`CODE_LENGTH`] symbols.
const KEYSPACE: u64 = (ALPHABET.len() as u64).pow(CODE_LENGTH as u32);

/// A deterministic short code generator backed by an atomic counter.
///
/// Each call encodes the next counter value in base62, left-padded with `0`
/// to [`CODE_LENGTH`] symbols: `00000000`, `00000001`, ..., `0000000Z`,
/// `00000010`. The counter wraps around after 62^8 codes.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator whose first code encodes `offset`.
    ///
    /// Useful for resuming after a known number of codes, or for
    /// reproducing a specific code in tests.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }

    /// Encodes `value` (modulo 62^8) as a fixed-width base62 code.
    pub fn encode(value: u64) -> ShortCode {
        let mut value = value % KEYSPACE;
        let mut buf = [ALPHABET[0]; CODE_LENGTH];
        for slot in buf.iter_mut().rev() {
            *slot = ALPHABET[(value % ALPHABET.len() as u64) as usize];
            value /= ALPHABET.len() as u64;
        }
        // every byte comes from the ASCII alphabet
        let code: String = buf.iter().map(|&b| b as char).collect();
        ShortCode::new_unchecked(code)
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Self::encode(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_generator_produces_sequential_codes() {
        let generator = SeqGenerator::new();

        assert_eq!(generator.generate().as_str(), "00000000");
        assert_eq!(generator.generate().as_str(), "00000001");
        assert_eq!(generator.generate().as_str(), "00000002");
    }

    #[test]
    fn seq_generator_with_offset() {
        let generator = SeqGenerator::with_offset(61);

        assert_eq!(generator.generate().as_str(), "0000000Z");
        assert_eq!(generator.generate().as_str(), "00000010");
    }

    #[test]
    fn encode_wraps_around_the_keyspace() {
        assert_eq!(SeqGenerator::encode(KEYSPACE - 1).as_str(), "ZZZZZZZZ");
        assert_eq!(SeqGenerator::encode(KEYSPACE).as_str(), "00000000");
        assert_eq!(SeqGenerator::encode(KEYSPACE + 10).as_str(), "0000000a");
    }

    #[test]
    fn encoded_codes_have_generated_form() {
        for value in [0, 1, 62, 3_844, 1 << 40, u64::MAX] {
            let code = SeqGenerator::encode(value);
            assert!(ShortCode::is_generated_form(code.as_str()), "{code}");
        }
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeqGenerator>();
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = SeqGenerator::new();
        generator.generate();
        generator.generate();

        let cloned = generator.clone();

        // Original continues from 2
        assert_eq!(generator.generate().as_str(), "00000002");

        // Clone also continues from 2 (same counter value)
        assert_eq!(cloned.generate().as_str(), "00000002");
    }
}
