use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::Display;

/// The 62 symbols a generated short code is drawn from.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 8;

/// The key identifying a shortened URL.
///
/// Generated codes are always [`CODE_LENGTH`] symbols from [`ALPHABET`].
/// Codes loaded from a persisted mapping keep whatever shape they were
/// saved with, so the type itself does not enforce the generated form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Wraps `code` as is.
    ///
    /// Used for codes produced by a generator or read back from a persisted
    /// mapping; [`ShortCode::is_generated_form`] tells the two apart.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns `true` when `code` is exactly [`CODE_LENGTH`] symbols of [`ALPHABET`].
    pub fn is_generated_form(code: &str) -> bool {
        code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
    }

    /// The request path under which this code is served, e.g. `/aZ3kP9qx`.
    pub fn to_path(&self) -> String {
        format!("/{}", self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ShortCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}
