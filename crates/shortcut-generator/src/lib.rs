pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use shortcut_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage,
/// and must be safe to call from any number of threads at once.
///
/// Generated codes are not guaranteed to be unique; the store decides what
/// happens when two codes collide.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Generates a type that can be converted into a short code.
    fn generate(&self) -> Self::Output;
}
