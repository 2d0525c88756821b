use crate::Generator;
use shortcut_core::{ShortCode, ALPHABET, CODE_LENGTH};
use std::iter;

/// Draws every symbol independently and uniformly from [`ALPHABET`].
///
/// Randomness comes from `rand`'s thread-local generator, so concurrent
/// callers never share mutable generator state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let code: String =
            iter::repeat_with(|| ALPHABET[rand::random_range(0..ALPHABET.len())] as char)
                .take(CODE_LENGTH)
                .collect();
        ShortCode::new_unchecked(code)
    }
}
