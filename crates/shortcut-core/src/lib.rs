//! Core types for the Shortcut URL shortener.
//!
//! This crate provides the short code type and the error taxonomy shared by
//! the generator, the store and the HTTP gateway.

pub mod error;
pub mod shortcode;

pub use error::StoreError;
pub use shortcode::{ShortCode, ALPHABET, CODE_LENGTH};
